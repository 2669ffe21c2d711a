#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTimeEntry {
    pub time_entry_id: i64,
    /// Allows deleting an entry that has already been submitted.
    pub override_lock: bool,
}
