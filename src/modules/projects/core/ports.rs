use async_trait::async_trait;

use crate::modules::projects::core::project::{NewProject, Project};
use crate::shared::infrastructure::unit_of_work::StoreError;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn find_project(&self, id: i64) -> Result<Option<Project>, StoreError>;
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;
    async fn insert_project(&mut self, project: NewProject) -> Result<Project, StoreError>;
    async fn update_project(&mut self, project: Project) -> Result<(), StoreError>;
    async fn delete_project(&mut self, id: i64) -> Result<(), StoreError>;
}
