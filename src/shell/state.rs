use std::sync::Arc;

use crate::modules::customers::use_cases::manage_customers::handler::ManageCustomersHandler;
use crate::modules::employees::use_cases::manage_employees::handler::ManageEmployeesHandler;
use crate::modules::projects::use_cases::manage_projects::handler::ManageProjectsHandler;
use crate::modules::time_entries::core::policy::TimeEntryPolicy;
use crate::modules::time_entries::use_cases::create_time_entry::handler::CreateTimeEntryHandler;
use crate::modules::time_entries::use_cases::delete_time_entry::handler::DeleteTimeEntryHandler;
use crate::modules::time_entries::use_cases::list_time_entries::handler::TimeEntryQueriesHandler;
use crate::modules::time_entries::use_cases::submit_time_entries::handler::SubmitTimeEntriesHandler;
use crate::modules::time_entries::use_cases::update_time_entry::handler::UpdateTimeEntryHandler;
use crate::shared::infrastructure::filesystem::ProjectFiles;
use crate::shared::infrastructure::unit_of_work::in_memory::InMemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub time_entry_queries: Arc<TimeEntryQueriesHandler<InMemoryStore>>,
    pub create_time_entry_handler: Arc<CreateTimeEntryHandler<InMemoryStore>>,
    pub update_time_entry_handler: Arc<UpdateTimeEntryHandler<InMemoryStore>>,
    pub delete_time_entry_handler: Arc<DeleteTimeEntryHandler<InMemoryStore>>,
    pub submit_time_entries_handler: Arc<SubmitTimeEntriesHandler<InMemoryStore>>,
    pub employees: Arc<ManageEmployeesHandler<InMemoryStore>>,
    pub customers: Arc<ManageCustomersHandler<InMemoryStore>>,
    pub projects: Arc<ManageProjectsHandler<InMemoryStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryStore>, files: Arc<ProjectFiles>, policy: TimeEntryPolicy) -> Self {
        Self {
            time_entry_queries: Arc::new(TimeEntryQueriesHandler::new(store.clone(), policy)),
            create_time_entry_handler: Arc::new(CreateTimeEntryHandler::new(store.clone(), policy)),
            update_time_entry_handler: Arc::new(UpdateTimeEntryHandler::new(store.clone(), policy)),
            delete_time_entry_handler: Arc::new(DeleteTimeEntryHandler::new(
                store.clone(),
                files.clone(),
            )),
            submit_time_entries_handler: Arc::new(SubmitTimeEntriesHandler::new(store.clone())),
            employees: Arc::new(ManageEmployeesHandler::new(store.clone())),
            customers: Arc::new(ManageCustomersHandler::new(store.clone())),
            projects: Arc::new(ManageProjectsHandler::new(store, files)),
        }
    }
}
