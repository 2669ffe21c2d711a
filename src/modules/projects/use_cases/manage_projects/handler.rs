use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, Utc};
use tracing::{info, warn};

use crate::modules::customers::core::ports::CustomerRepository;
use crate::modules::projects::core::ports::ProjectRepository;
use crate::modules::projects::core::project::{NewProject, Project, ProjectStatus, ProjectView};
use crate::modules::projects::use_cases::manage_projects::command::CreateProject;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::TimeEntryFilter;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::filesystem::ProjectFiles;
use crate::shared::infrastructure::unit_of_work::{Store, StoreError, UnitOfWork};

pub struct ManageProjectsHandler<TStore>
where
    TStore: Store,
{
    store: Arc<TStore>,
    files: Arc<ProjectFiles>,
}

impl<TStore> ManageProjectsHandler<TStore>
where
    TStore: Store,
{
    pub fn new(store: Arc<TStore>, files: Arc<ProjectFiles>) -> Self {
        Self { store, files }
    }

    /// Commits the project first, then provisions its folder tree. A failing
    /// provisioning step leaves the project without `folder_path`.
    pub async fn create(&self, command: CreateProject) -> Result<Project, ApplicationError> {
        let mut uow = self.store.begin().await?;
        let customer = uow
            .find_customer(command.customer_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("customer", command.customer_id))?;
        let mut project = uow
            .insert_project(NewProject {
                customer_id: command.customer_id,
                title: command.title,
                description: command.description,
                is_quote: command.is_quote,
                hourly_rate: command.hourly_rate,
                status: ProjectStatus::Open,
            })
            .await?;
        uow.commit().await?;
        info!(project_id = project.id, customer_id = customer.id, "project created");

        let provisioned = self
            .files
            .provision_project_folders(&customer.firm, project.id, &project.title, Utc::now().year())
            .await;
        match provisioned {
            Ok(path) => {
                let folder_path = path.to_string_lossy().into_owned();
                match self.store_folder_path(project.id, &folder_path).await {
                    Ok(()) => {
                        info!(project_id = project.id, folder_path = %folder_path, "project folders provisioned");
                        project.folder_path = Some(folder_path);
                    }
                    Err(err) => warn!(
                        project_id = project.id,
                        error = %err,
                        "could not store the project folder path"
                    ),
                }
            }
            Err(err) => warn!(
                project_id = project.id,
                error = %err,
                "could not provision project folders"
            ),
        }
        Ok(project)
    }

    async fn store_folder_path(&self, project_id: i64, folder_path: &str) -> Result<(), StoreError> {
        let mut uow = self.store.begin().await?;
        let Some(mut project) = uow.find_project(project_id).await? else {
            return Ok(());
        };
        project.folder_path = Some(folder_path.to_string());
        uow.update_project(project).await?;
        uow.commit().await
    }

    /// Open projects with their customer's firm, ordered by id.
    pub async fn list_open(&self) -> Result<Vec<ProjectView>, ApplicationError> {
        let uow = self.store.begin().await?;
        let firms: HashMap<i64, String> = uow
            .list_customers()
            .await?
            .into_iter()
            .map(|customer| (customer.id, customer.firm))
            .collect();
        let mut projects: Vec<Project> = uow
            .list_projects()
            .await?
            .into_iter()
            .filter(|project| project.status == ProjectStatus::Open)
            .collect();
        projects.sort_by_key(|project| project.id);

        Ok(projects
            .into_iter()
            .map(|project| ProjectView {
                customer_firm: firms.get(&project.customer_id).cloned(),
                project,
            })
            .collect())
    }

    pub async fn delete(&self, project_id: i64) -> Result<(), ApplicationError> {
        let mut uow = self.store.begin().await?;
        let project = uow
            .find_project(project_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("project", project_id))?;

        let filter = TimeEntryFilter {
            project_id: Some(project_id),
            ..TimeEntryFilter::default()
        };
        if !uow.list_time_entries(&filter).await?.is_empty() {
            return Err(ApplicationError::InUse(format!(
                "project {project_id} still has time entries"
            )));
        }

        uow.delete_project(project_id).await?;
        uow.commit().await?;
        info!(project_id, "project deleted");

        if let Some(folder_path) = project.folder_path.as_deref() {
            match self.files.remove_project_folder(folder_path).await {
                Ok(true) => info!(project_id, folder_path, "project folder removed"),
                Ok(false) => {}
                Err(err) => warn!(
                    project_id,
                    folder_path,
                    error = %err,
                    "could not remove project folder"
                ),
            }
        }
        Ok(())
    }
}
