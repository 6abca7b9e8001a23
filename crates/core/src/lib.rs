#![forbid(unsafe_code)]

//! Domain model for the Learning Hub: the immutable course catalog, the
//! per-user progress record, and the pure completion metrics derived from
//! both. No I/O lives here.

pub mod catalog;
pub mod error;
pub mod metrics;
pub mod model;

pub use catalog::{Catalog, CatalogError, CategoryFilter};
pub use error::Error;
pub use metrics::{course_completion, overall_completion};
