use thiserror::Error;

use crate::modules::time_entries::core::decision::DecideError;
use crate::shared::infrastructure::unit_of_work::StoreError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error("{0}")]
    InUse(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApplicationError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}
