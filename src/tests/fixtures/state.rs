use std::sync::Arc;

use tempfile::TempDir;

use crate::modules::time_entries::core::policy::TimeEntryPolicy;
use crate::shared::infrastructure::filesystem::ProjectFiles;
use crate::shared::infrastructure::unit_of_work::in_memory::InMemoryStore;
use crate::shell::state::AppState;

/// State over a fresh store. Keep the `TempDir` alive for as long as the state.
pub fn make_test_state() -> (AppState, Arc<InMemoryStore>, TempDir) {
    make_state(InMemoryStore::new())
}

pub fn make_offline_store_state() -> (AppState, Arc<InMemoryStore>, TempDir) {
    let mut store = InMemoryStore::new();
    store.toggle_offline();
    make_state(store)
}

fn make_state(store: InMemoryStore) -> (AppState, Arc<InMemoryStore>, TempDir) {
    let store = Arc::new(store);
    let projects_root = tempfile::tempdir().expect("tempdir");
    let files = Arc::new(ProjectFiles::new(projects_root.path()));
    let state = AppState::new(store.clone(), files, TimeEntryPolicy::default());
    (state, store, projects_root)
}
