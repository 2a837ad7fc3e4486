//! Services orchestrating the forum collaborators for the HTTP layer.

use pushkind_common::domain::auth::AuthenticatedUser;
use thiserror::Error;

use crate::domain::types::{TypeConstraintError, UserId};
use crate::repository::errors::RepositoryError;

pub mod helpers;
pub mod unread;

#[derive(Debug, Error)]
/// Errors surfaced by the service layer to the routes.
pub enum ServiceError {
    #[error("user is not authorized")]
    Unauthorized,

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

/// Forum account identifier carried by the authenticated session.
pub fn authenticated_user_id(user: &AuthenticatedUser) -> ServiceResult<UserId> {
    user.sub.parse::<UserId>().map_err(|err| {
        log::warn!("Rejecting session with unusable subject {:?}: {err}", user.sub);
        ServiceError::Unauthorized
    })
}
