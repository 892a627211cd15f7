use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

pub mod dashboard;
pub mod filter;
pub mod statistics;

/// Failures surfaced by the service layer to presentation collaborators.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("No order is selected")]
    NoSelection,

    #[error("Invalid dashboard state: {0}")]
    InvalidState(String),

    #[error("Type constraint violation: {0}")]
    TypeConstraint(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}
