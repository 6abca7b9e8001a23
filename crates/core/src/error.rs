use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::CourseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
