//! Existence guard
//!
//! Single-entity operations load their target through
//! [`get_entity_or_fail`] so a missing entity always surfaces as
//! `NOT_FOUND`, whichever operation asked for it.

use async_trait::async_trait;
use uuid::Uuid;

use crate::api_error::ApiError;
use crate::Result;

/// Lookup by identifier that reports absence as `None` rather than an error
#[async_trait]
pub trait FindById: Send + Sync {
    type Entity: Send;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Self::Entity>>;
}

/// Loads the entity or fails with `NOT_FOUND` carrying `not_found_message`.
///
/// Repository errors other than absence propagate unchanged.
pub async fn get_entity_or_fail<R>(
    repository: &R,
    id: Uuid,
    not_found_message: &str,
) -> Result<R::Entity>
where
    R: FindById + ?Sized,
{
    match repository.find_by_id(id).await? {
        Some(entity) => Ok(entity),
        None => {
            tracing::debug!(%id, "{}", not_found_message);
            Err(ApiError::not_found(not_found_message).into())
        }
    }
}
