//! Domain services
//!
//! Every single-entity operation runs the same steps in order: identifier
//! validation, existence guard, input validation, then one repository call.

mod category;
mod task;

pub use category::CategoryService;
pub use task::TaskService;

pub(crate) const TASK_NOT_FOUND: &str = "Task not found";
pub(crate) const CATEGORY_NOT_FOUND: &str = "Category not found";
