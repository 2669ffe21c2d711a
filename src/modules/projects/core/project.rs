use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub customer_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_quote: bool,
    pub hourly_rate: Option<f64>,
    pub status: ProjectStatus,
    pub folder_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub customer_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_quote: bool,
    pub hourly_rate: Option<f64>,
    pub status: ProjectStatus,
}

impl NewProject {
    pub fn into_project(self, id: i64) -> Project {
        Project {
            id,
            customer_id: self.customer_id,
            title: self.title,
            description: self.description,
            is_quote: self.is_quote,
            hourly_rate: self.hourly_rate,
            status: self.status,
            folder_path: None,
        }
    }
}

/// Read model returned to clients: the project plus its customer's firm name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    pub customer_firm: Option<String>,
}
