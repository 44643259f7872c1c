//! Category repository over the file store

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::file_store::StoreInner;
use crate::api_error::ApiError;
use crate::category::{Category, CategoryPatch, CategoryRepository, NewCategory};
use crate::guard::FindById;
use crate::Result;

#[derive(Clone)]
pub struct FileCategoryStore {
    inner: Arc<StoreInner>,
}

impl FileCategoryStore {
    pub(super) fn new(inner: Arc<StoreInner>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl FindById for FileCategoryStore {
    type Entity = Category;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        let data = self.inner.data.read().await;
        Ok(data.categories.get(&id).cloned())
    }
}

#[async_trait]
impl CategoryRepository for FileCategoryStore {
    async fn create(&self, input: NewCategory) -> Result<Category> {
        let mut data = self.inner.data.write().await;
        let category = Category::new(input);
        let mut next = data.clone();
        next.categories.insert(category.id, category.clone());

        self.inner.commit(&mut data, next).await?;
        Ok(category)
    }

    async fn update(&self, id: Uuid, patch: CategoryPatch) -> Result<Category> {
        let mut data = self.inner.data.write().await;
        let mut next = data.clone();
        let category = next
            .categories
            .get_mut(&id)
            .ok_or_else(|| ApiError::not_found(format!("Category {} not found", id)))?;
        category.apply(patch);
        let category = category.clone();

        self.inner.commit(&mut data, next).await?;
        Ok(category)
    }

    /// Tasks filed under the category are kept and lose their reference
    async fn delete(&self, id: Uuid) -> Result<Category> {
        let mut data = self.inner.data.write().await;
        let mut next = data.clone();
        let category = next
            .categories
            .remove(&id)
            .ok_or_else(|| ApiError::not_found(format!("Category {} not found", id)))?;

        let mut detached = 0;
        for task in next.tasks.values_mut() {
            if task.category_id == Some(id) {
                task.category_id = None;
                detached += 1;
            }
        }

        self.inner.commit(&mut data, next).await?;
        if detached > 0 {
            tracing::info!(category_id = %id, detached, "Detached tasks from deleted category");
        }
        Ok(category)
    }

    async fn find_many(&self) -> Result<Vec<Category>> {
        let data = self.inner.data.read().await;
        let mut categories: Vec<Category> = data.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(categories)
    }
}
