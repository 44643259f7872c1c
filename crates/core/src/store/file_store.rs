//! Shared JSON document behind both repositories

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::categories::FileCategoryStore;
use super::tasks::FileTaskStore;
use crate::category::Category;
use crate::task::Task;
use crate::Result;

#[derive(Debug, Clone, Default)]
pub(super) struct StoreData {
    pub categories: HashMap<Uuid, Category>,
    pub tasks: HashMap<Uuid, Task>,
}

impl StoreData {
    /// Copy of `task` with its category attached
    pub fn hydrate(&self, task: &Task) -> Task {
        let mut task = task.clone();
        task.category = task
            .category_id
            .and_then(|id| self.categories.get(&id).cloned());
        task
    }
}

/// On-disk layout
#[derive(Serialize, Deserialize)]
struct Document<C, T> {
    categories: Vec<C>,
    tasks: Vec<T>,
}

pub(super) struct StoreInner {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory copy of the document
    pub data: RwLock<StoreData>,
}

impl StoreInner {
    /// Write `next` to disk, then make it the in-memory state. Callers hold
    /// the write lock, so writes to the file never interleave. On failure
    /// `current` is left as it was.
    pub async fn commit(&self, current: &mut StoreData, next: StoreData) -> Result<()> {
        self.persist(&next).await?;
        *current = next;
        Ok(())
    }

    async fn persist(&self, data: &StoreData) -> Result<()> {
        let mut categories: Vec<&Category> = data.categories.values().collect();
        categories.sort_by_key(|c| (c.created_at, c.id));
        let mut tasks: Vec<&Task> = data.tasks.values().collect();
        tasks.sort_by_key(|t| (t.created_at, t.id));

        let content = serde_json::to_string_pretty(&Document { categories, tasks })?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

/// JSON file store for categories and tasks
#[derive(Clone)]
pub struct FileStore {
    inner: Arc<StoreInner>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = if path.exists() {
            let content = tokio::fs::read_to_string(&path).await?;
            let document: Document<Category, Task> = serde_json::from_str(&content)?;
            StoreData {
                categories: document.categories.into_iter().map(|c| (c.id, c)).collect(),
                tasks: document
                    .tasks
                    .into_iter()
                    .map(|mut t| {
                        t.category = None;
                        (t.id, t)
                    })
                    .collect(),
            }
        } else {
            StoreData::default()
        };

        tracing::debug!(
            path = %path.display(),
            categories = data.categories.len(),
            tasks = data.tasks.len(),
            "Opened task store"
        );

        Ok(Self {
            inner: Arc::new(StoreInner {
                path,
                data: RwLock::new(data),
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Task repository over this store
    pub fn tasks(&self) -> FileTaskStore {
        FileTaskStore::new(Arc::clone(&self.inner))
    }

    /// Category repository over this store
    pub fn categories(&self) -> FileCategoryStore {
        FileCategoryStore::new(Arc::clone(&self.inner))
    }
}
