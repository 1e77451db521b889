use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog item not found: {item_id}")]
    NotFound { item_id: String },

    #[error("Duplicate catalog item id: {item_id}")]
    DuplicateId { item_id: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
