//! Core library for the taskboard service
//!
//! This crate contains the domain service layer:
//! - Error taxonomy and boundary formatting
//! - Input validation
//! - Existence guard and query building
//! - Task and category services over pluggable repositories

pub mod api_error;
pub mod category;
pub mod error;
pub mod guard;
pub mod patch;
pub mod query;
pub mod service;
pub mod store;
pub mod task;
pub mod validation;

pub use api_error::{ApiError, ErrorCode};
pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
