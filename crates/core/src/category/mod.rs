//! Category module
//!
//! Categories group tasks. A task refers to at most one category.

mod model;
mod repository;

pub use model::*;
pub use repository::CategoryRepository;
