use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::{CatalogError, CatalogResult};
use crate::models::CatalogEntry;

/// Read-only item catalog
///
/// Entries keep their load order for display; lookup goes through a hash
/// index, so no behavior depends on scan order.
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl ItemCatalog {
    /// Build a catalog from a fixed entry table
    ///
    /// Fails with `DuplicateId` when two entries share an id.
    pub fn new(entries: Vec<CatalogEntry>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    item_id: entry.id.clone(),
                });
            }
        }
        Ok(Self { entries, index })
    }

    /// Resolve an item id to its priced entry
    pub fn resolve(&self, item_id: &str) -> CatalogResult<&CatalogEntry> {
        self.index
            .get(item_id)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| CatalogError::NotFound {
                item_id: item_id.to_string(),
            })
    }

    /// Entries in display order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Built-in catalog of billable medical items
pub fn default_catalog() -> ItemCatalog {
    let entries = vec![
        CatalogEntry::new("item001", "Paracetamol 500mg", Decimal::new(1550, 2), "เม็ด"),
        CatalogEntry::new("item002", "Amoxicillin 250mg", Decimal::new(4500, 2), "แคปซูล"),
        CatalogEntry::new("item003", "Blood Test - CBC", Decimal::new(35000, 2), "ครั้ง"),
        CatalogEntry::new("item004", "X-Ray Chest", Decimal::new(45000, 2), "ครั้ง"),
        CatalogEntry::new("item005", "Doctor Consultation", Decimal::new(20000, 2), "ครั้ง"),
        CatalogEntry::new("item006", "IV Drip Normal Saline", Decimal::new(12000, 2), "ถุง"),
        CatalogEntry::new("item007", "Bandage 2 inch", Decimal::new(2500, 2), "ผืน"),
        CatalogEntry::new("item008", "Syrup Cough Medicine", Decimal::new(8500, 2), "ขวด"),
    ];

    // The built-in table has unique ids, so the index can be built directly.
    let index = entries
        .iter()
        .enumerate()
        .map(|(position, entry)| (entry.id.clone(), position))
        .collect();
    ItemCatalog { entries, index }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_id() {
        let catalog = default_catalog();

        let entry = catalog.resolve("item001").unwrap();
        assert_eq!(entry.name, "Paracetamol 500mg");
        assert_eq!(entry.unit_price, Decimal::new(1550, 2));
        assert_eq!(entry.unit, "เม็ด");
    }

    #[test]
    fn test_resolve_unknown_id_fails() {
        let catalog = default_catalog();

        let err = catalog.resolve("item999").unwrap_err();
        assert_eq!(
            err,
            CatalogError::NotFound {
                item_id: "item999".to_string()
            }
        );
    }

    #[test]
    fn test_entries_keep_display_order() {
        let catalog = default_catalog();

        let ids: Vec<&str> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "item001", "item002", "item003", "item004", "item005", "item006", "item007",
                "item008"
            ]
        );
    }

    #[test]
    fn test_duplicate_id_rejected_at_load() {
        let entries = vec![
            CatalogEntry::new("dup", "First", Decimal::new(100, 2), "ครั้ง"),
            CatalogEntry::new("dup", "Second", Decimal::new(200, 2), "ครั้ง"),
        ];

        let err = ItemCatalog::new(entries).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateId {
                item_id: "dup".to_string()
            }
        );
    }

    #[test]
    fn test_entry_serializes_price_as_decimal_string() {
        let catalog = default_catalog();
        let entry = catalog.resolve("item001").unwrap();

        let value = serde_json::to_value(entry).unwrap();
        assert_eq!(value["unit_price"], "15.50");
        assert_eq!(value["unit"], "เม็ด");
    }

    #[test]
    fn test_lookup_does_not_depend_on_position() {
        let catalog = default_catalog();

        // Last entry resolves just like the first one.
        let entry = catalog.resolve("item008").unwrap();
        assert_eq!(entry.name, "Syrup Cough Medicine");
        assert_eq!(entry.unit_price, Decimal::new(8500, 2));
    }
}
