// What the time-entry use cases need from persistence. Adapters implement this
// inside a unit of work; nothing here performs input or output.

use async_trait::async_trait;

use crate::modules::time_entries::core::time_entry::{NewTimeEntry, TimeEntry, TimeEntryFilter};
use crate::shared::infrastructure::unit_of_work::StoreError;

#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    async fn find_time_entry(&self, id: i64) -> Result<Option<TimeEntry>, StoreError>;

    /// Matching entries in no particular order.
    async fn list_time_entries(
        &self,
        filter: &TimeEntryFilter,
    ) -> Result<Vec<TimeEntry>, StoreError>;

    async fn insert_time_entry(&mut self, entry: NewTimeEntry) -> Result<TimeEntry, StoreError>;

    async fn update_time_entry(&mut self, entry: TimeEntry) -> Result<(), StoreError>;

    async fn delete_time_entry(&mut self, id: i64) -> Result<(), StoreError>;
}
