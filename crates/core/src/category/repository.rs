//! Category repository trait

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Category, CategoryPatch, NewCategory};
use crate::guard::FindById;
use crate::Result;

/// Storage operations for categories
#[async_trait]
pub trait CategoryRepository: FindById<Entity = Category> {
    async fn create(&self, data: NewCategory) -> Result<Category>;

    async fn update(&self, id: Uuid, data: CategoryPatch) -> Result<Category>;

    /// Delete a category, returning its last state
    async fn delete(&self, id: Uuid) -> Result<Category>;

    /// All categories, ordered by name
    async fn find_many(&self) -> Result<Vec<Category>>;
}
