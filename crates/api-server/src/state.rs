//! Application state

use std::path::{Path, PathBuf};
use std::sync::Arc;

use taskboard_core::service::{CategoryService, TaskService};
use taskboard_core::store::FileStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store_path: PathBuf,
    tasks: TaskService,
    categories: CategoryService,
}

impl AppState {
    /// Create a new AppState with the given data directory
    pub async fn new(data_dir: PathBuf) -> taskboard_core::Result<Self> {
        let store = FileStore::new(data_dir.join("store.json")).await?;
        Ok(Self::with_store(&store))
    }

    /// Wire services to an already opened store
    pub fn with_store(store: &FileStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store_path: store.path().to_path_buf(),
                tasks: TaskService::new(Arc::new(store.tasks())),
                categories: CategoryService::new(Arc::new(store.categories())),
            }),
        }
    }

    pub fn task_service(&self) -> &TaskService {
        &self.inner.tasks
    }

    pub fn category_service(&self) -> &CategoryService {
        &self.inner.categories
    }

    pub fn store_path(&self) -> &Path {
        &self.inner.store_path
    }
}
