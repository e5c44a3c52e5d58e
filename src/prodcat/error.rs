use crate::model::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),

    #[error("Input rejected: {0} invalid field(s)")]
    Invalid(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
