//! Category operations

use serde_json::Value;
use std::sync::Arc;

use super::CATEGORY_NOT_FOUND;
use crate::category::{Category, CategoryRepository};
use crate::guard::get_entity_or_fail;
use crate::validation::{validate, validate_id, CategoryCreateSchema, CategoryUpdateSchema};
use crate::Result;

#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn get_category(&self, category_id: &str) -> Result<Category> {
        let id = validate_id(category_id)?;
        get_entity_or_fail(&*self.categories, id, CATEGORY_NOT_FOUND).await
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        self.categories.find_many().await
    }

    pub async fn create_category(&self, input: &Value) -> Result<Category> {
        let data = validate(&CategoryCreateSchema, input)?;
        let category = self.categories.create(data).await?;
        tracing::info!(category_id = %category.id, "Created category");
        Ok(category)
    }

    pub async fn update_category(&self, category_id: &str, input: &Value) -> Result<Category> {
        let id = validate_id(category_id)?;
        get_entity_or_fail(&*self.categories, id, CATEGORY_NOT_FOUND).await?;

        let patch = validate(&CategoryUpdateSchema, input)?;
        let category = self.categories.update(id, patch).await?;
        tracing::info!(category_id = %category.id, "Updated category");
        Ok(category)
    }

    /// Deletes a category; tasks that referenced it keep existing without one
    pub async fn delete_category(&self, category_id: &str) -> Result<Category> {
        let id = validate_id(category_id)?;
        get_entity_or_fail(&*self.categories, id, CATEGORY_NOT_FOUND).await?;

        let category = self.categories.delete(id).await?;
        tracing::info!(category_id = %category.id, "Deleted category");
        Ok(category)
    }
}
