#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("time entries must not overlap")]
    Overlap { conflicting_time_entry_id: i64 },

    #[error("time entry {time_entry_id} is submitted and locked")]
    LockedEntry { time_entry_id: i64 },
}
