use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use catalog_service::CatalogEntry;
use coverage_service::CoverageCategory;

use crate::error::{BillingError, BillingResult};

/// One billed line on a charge-entry ledger
///
/// Holds a copy of the catalog entry resolved at insertion time, so later
/// catalog changes never retroactively reprice stored lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LineItem {
    /// Id of the catalog entry this line was resolved from
    pub catalog_id: String,
    /// Display name, snapshotted
    pub name: String,
    /// Price per unit, snapshotted
    pub unit_price: Decimal,
    /// Display unit label, snapshotted
    pub unit: String,
    /// Units billed, always > 0
    pub quantity: u32,
}

impl LineItem {
    /// Snapshot a catalog entry into a billable line
    ///
    /// Rejects `quantity == 0` with `InvalidQuantity`; negative quantities
    /// are unrepresentable. Validation happens here, before the ledger is
    /// ever asked to store the line.
    pub fn new(entry: &CatalogEntry, quantity: u32) -> BillingResult<Self> {
        if quantity == 0 {
            return Err(BillingError::InvalidQuantity { quantity });
        }
        Ok(Self {
            catalog_id: entry.id.clone(),
            name: entry.name.clone(),
            unit_price: entry.unit_price,
            unit: entry.unit.clone(),
            quantity,
        })
    }

    /// Line total = unit price × quantity
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Derived bill summary
///
/// Never stored; recomputed from the ledger and the active coverage
/// category whenever either changes. Amounts are exact and unrounded —
/// 2-decimal formatting is a display concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BillingSummary {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    pub category: CoverageCategory,
    pub category_label: String,
}
