use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BillingError, BillingResult};
use crate::models::LineItem;

/// Ordered collection of line items for one billing session
///
/// Insertion order is preserved and duplicate catalog ids are allowed —
/// each add is an independent line, there is no merging. A line's identity
/// for removal is its current position, not a stable id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingLedger {
    items: Vec<LineItem>,
}

impl BillingLedger {
    /// New empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated line item
    ///
    /// The item was validated at construction; the ledger trusts it and
    /// does not re-check quantity.
    pub fn append(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Remove the line at `index`, shifting later lines down by one
    ///
    /// Fails with `IndexOutOfRange` when `index` is outside `[0, len)`;
    /// the ledger is left unchanged. Returns the removed line.
    pub fn remove_at(&mut self, index: usize) -> BillingResult<LineItem> {
        if index >= self.items.len() {
            return Err(BillingError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Lines in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals; zero for an empty ledger
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }
}
