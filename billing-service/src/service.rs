use tracing::debug;

use catalog_service::{default_catalog, ItemCatalog};
use coverage_service::CoverageCategory;

use crate::error::BillingResult;
use crate::ledger::BillingLedger;
use crate::models::{BillingSummary, LineItem};
use crate::summary::compute_summary;

/// Billing service
///
/// Owns the catalog and orchestrates charge entry against caller-owned
/// ledgers. Holds no session state itself, so one instance can serve any
/// number of independent billing sessions.
pub struct BillingService {
    catalog: ItemCatalog,
}

impl BillingService {
    /// Create a billing service over a catalog
    pub fn new(catalog: ItemCatalog) -> Self {
        Self { catalog }
    }

    /// Create a billing service over the built-in item catalog
    pub fn with_default_catalog() -> Self {
        Self::new(default_catalog())
    }

    /// The catalog this service resolves items against
    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// Resolve an item and append it to the ledger
    ///
    /// Resolution and quantity validation both happen before the ledger is
    /// touched, so a failure leaves no partial state. Returns the stored
    /// snapshot.
    pub fn add_item(
        &self,
        ledger: &mut BillingLedger,
        item_id: &str,
        quantity: u32,
    ) -> BillingResult<LineItem> {
        let entry = self.catalog.resolve(item_id)?;
        let item = LineItem::new(entry, quantity)?;
        ledger.append(item.clone());

        debug!(
            item_id,
            quantity,
            line_total = %item.line_total(),
            "line item appended"
        );
        Ok(item)
    }

    /// Remove the line at `index` from the ledger
    pub fn remove_item(&self, ledger: &mut BillingLedger, index: usize) -> BillingResult<LineItem> {
        let removed = ledger.remove_at(index)?;

        debug!(index, item_id = %removed.catalog_id, "line item removed");
        Ok(removed)
    }

    /// Current bill summary for a ledger under a coverage category
    pub fn summarize(&self, ledger: &BillingLedger, category: CoverageCategory) -> BillingSummary {
        compute_summary(ledger, category)
    }
}

impl Default for BillingService {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BillingError;
    use catalog_service::CatalogError;
    use rust_decimal::Decimal;

    #[test]
    fn test_add_item_resolves_and_appends() {
        let service = BillingService::with_default_catalog();
        let mut ledger = BillingLedger::new();

        let item = service.add_item(&mut ledger, "item001", 2).unwrap();

        assert_eq!(item.name, "Paracetamol 500mg");
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.subtotal(), Decimal::new(3100, 2));
    }

    #[test]
    fn test_add_unknown_item_fails_without_mutation() {
        let service = BillingService::with_default_catalog();
        let mut ledger = BillingLedger::new();

        let err = service.add_item(&mut ledger, "item999", 1).unwrap_err();

        assert_eq!(
            err,
            BillingError::Catalog(CatalogError::NotFound {
                item_id: "item999".to_string()
            })
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_zero_quantity_fails_without_mutation() {
        let service = BillingService::with_default_catalog();
        let mut ledger = BillingLedger::new();

        let err = service.add_item(&mut ledger, "item001", 0).unwrap_err();

        assert_eq!(err, BillingError::InvalidQuantity { quantity: 0 });
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_remove_item_returns_removed_line() {
        let service = BillingService::with_default_catalog();
        let mut ledger = BillingLedger::new();
        service.add_item(&mut ledger, "item001", 1).unwrap();

        let removed = service.remove_item(&mut ledger, 0).unwrap();

        assert_eq!(removed.catalog_id, "item001");
        assert!(ledger.is_empty());
    }
}
