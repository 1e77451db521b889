use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Billable catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogEntry {
    /// Opaque unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Price per unit, non-negative
    pub unit_price: Decimal,
    /// Display unit label, e.g. "เม็ด" or "ถุง"
    pub unit: String,
}

impl CatalogEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Decimal,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            unit: unit.into(),
        }
    }
}
