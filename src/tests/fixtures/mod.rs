pub mod employees;
pub mod state;
pub mod time_entries;
