use thiserror::Error;

/// Errors raised while assembling the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Built-in catalog is malformed: {0}")]
    Builtin(#[from] serde_json::Error),

    #[error("Built-in catalog has duplicate snippet name: {0}")]
    DuplicateBuiltin(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
