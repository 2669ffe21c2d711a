use crate::modules::time_entries::core::submission::DateRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTimeEntries {
    pub employee_id: i64,
    pub range: DateRange,
}
