//! File-backed persistence
//!
//! [`FileStore`] keeps categories and tasks in one JSON document and hands
//! out a repository view for each collection.

mod categories;
mod file_store;
mod tasks;

pub use categories::FileCategoryStore;
pub use file_store::FileStore;
pub use tasks::FileTaskStore;
