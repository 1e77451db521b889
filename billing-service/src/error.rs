use thiserror::Error;

use catalog_service::CatalogError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BillingError {
    #[error("Invalid quantity: {quantity} (must be a positive integer)")]
    InvalidQuantity { quantity: u32 },

    #[error("Line item index out of range: {index} (ledger has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Catalog lookup failed: {0}")]
    Catalog(#[from] CatalogError),
}

pub type BillingResult<T> = Result<T, BillingError>;
