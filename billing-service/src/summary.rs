use rust_decimal::Decimal;

use coverage_service::CoverageCategory;

use crate::ledger::BillingLedger;
use crate::models::BillingSummary;

/// Compute the bill summary for a ledger under a coverage category
///
/// Pure and stateless: identical inputs always produce identical output,
/// and nothing is cached between calls. The discount applies to the
/// subtotal as a whole, and the payable total is floored at zero — no
/// policy can make the patient owe a negative amount.
pub fn compute_summary(ledger: &BillingLedger, category: CoverageCategory) -> BillingSummary {
    let subtotal = ledger.subtotal();
    let discount = category.discount(subtotal);
    let total = (subtotal - discount).max(Decimal::ZERO);

    BillingSummary {
        subtotal,
        discount,
        total,
        category,
        category_label: category.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;
    use catalog_service::CatalogEntry;

    fn ledger_with(price_cents: i64, quantity: u32) -> BillingLedger {
        let entry = CatalogEntry::new("item", "Item", Decimal::new(price_cents, 2), "ครั้ง");
        let mut ledger = BillingLedger::new();
        ledger.append(LineItem::new(&entry, quantity).unwrap());
        ledger
    }

    #[test]
    fn test_empty_ledger_under_universal_is_all_zero() {
        let summary = compute_summary(&BillingLedger::new(), CoverageCategory::Universal);

        assert_eq!(summary.subtotal, Decimal::ZERO);
        assert_eq!(summary.discount, Decimal::ZERO);
        assert_eq!(summary.total, Decimal::ZERO);
    }

    #[test]
    fn test_universal_copay_on_31_baht_bill() {
        // 15.50 × 2 = 31.00; co-pay leaves 30.00 payable.
        let summary = compute_summary(&ledger_with(1550, 2), CoverageCategory::Universal);

        assert_eq!(summary.subtotal, Decimal::new(3100, 2));
        assert_eq!(summary.discount, Decimal::new(100, 2));
        assert_eq!(summary.total, Decimal::new(3000, 2));
    }

    #[test]
    fn test_civil_servant_ten_percent_on_350_baht_bill() {
        let summary = compute_summary(&ledger_with(35000, 1), CoverageCategory::CivilServant);

        assert_eq!(summary.discount, Decimal::new(3500, 2));
        assert_eq!(summary.total, Decimal::new(31500, 2));
    }

    #[test]
    fn test_social_security_pays_nothing_on_450_baht_bill() {
        let summary = compute_summary(&ledger_with(45000, 1), CoverageCategory::SocialSecurity);

        assert_eq!(summary.discount, Decimal::new(45000, 2));
        assert_eq!(summary.total, Decimal::ZERO);
    }

    #[test]
    fn test_social_security_total_is_zero_for_any_positive_subtotal() {
        for price_cents in [1, 2500, 45000, 9_999_999] {
            let summary =
                compute_summary(&ledger_with(price_cents, 3), CoverageCategory::SocialSecurity);
            assert_eq!(summary.total, Decimal::ZERO);
        }
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let ledger = ledger_with(1550, 2);

        let first = compute_summary(&ledger, CoverageCategory::Universal);
        let second = compute_summary(&ledger, CoverageCategory::Universal);

        assert_eq!(first, second);
    }

    #[test]
    fn test_total_is_never_negative() {
        for price_cents in [0, 1, 1550, 3000, 45000] {
            for category in CoverageCategory::ALL {
                let summary = compute_summary(&ledger_with(price_cents.max(1), 1), category);
                assert!(
                    summary.total >= Decimal::ZERO,
                    "negative total for {category:?} at {price_cents}"
                );
            }
        }
    }

    #[test]
    fn test_summary_carries_category_label() {
        let summary = compute_summary(&BillingLedger::new(), CoverageCategory::SocialSecurity);
        assert_eq!(summary.category, CoverageCategory::SocialSecurity);
        assert_eq!(summary.category_label, "ประกันสังคม");
    }

    #[test]
    fn test_summary_serializes_amounts_as_decimal_strings() {
        let summary = compute_summary(&ledger_with(1550, 2), CoverageCategory::Universal);

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["subtotal"], "31.00");
        assert_eq!(value["discount"], "1.00");
        assert_eq!(value["total"], "30.00");
        assert_eq!(value["category"], "universal");
    }

    #[test]
    fn test_unspecified_is_full_self_pay() {
        let summary = compute_summary(&ledger_with(45000, 1), CoverageCategory::Unspecified);

        assert_eq!(summary.discount, Decimal::ZERO);
        assert_eq!(summary.total, summary.subtotal);
        assert_eq!(summary.category_label, "ไม่ระบุ");
    }
}
