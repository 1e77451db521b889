use rust_decimal::Decimal;

use crate::models::CoverageCategory;

impl CoverageCategory {
    /// Discount granted on a bill subtotal under this category
    ///
    /// Applied to the subtotal, never to individual items. Total over the
    /// whole enumeration: every category yields a defined amount, so bill
    /// settlement never fails on the coverage side.
    pub fn discount(&self, subtotal: Decimal) -> Decimal {
        match self {
            // Patient pays a flat 30-baht co-pay; everything beyond it is
            // subsidized. Bills under the co-pay get no discount.
            CoverageCategory::Universal => {
                let copay = Decimal::new(30, 0);
                (subtotal - copay).max(Decimal::ZERO)
            }
            CoverageCategory::CivilServant => subtotal * Decimal::new(10, 2),
            CoverageCategory::SocialSecurity => subtotal,
            CoverageCategory::Private
            | CoverageCategory::Company
            | CoverageCategory::Unspecified => Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baht(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    #[test]
    fn test_universal_discount_beyond_copay() {
        let discount = CoverageCategory::Universal.discount(baht(3100, 2));
        assert_eq!(discount, baht(100, 2)); // 31.00 − 30 = 1.00
    }

    #[test]
    fn test_universal_discount_floors_at_zero_below_copay() {
        let discount = CoverageCategory::Universal.discount(baht(2000, 2));
        assert_eq!(discount, Decimal::ZERO);
    }

    #[test]
    fn test_civil_servant_discount_is_ten_percent() {
        let discount = CoverageCategory::CivilServant.discount(baht(35000, 2));
        assert_eq!(discount, baht(3500, 2));
    }

    #[test]
    fn test_social_security_discount_covers_everything() {
        let subtotal = baht(45000, 2);
        assert_eq!(CoverageCategory::SocialSecurity.discount(subtotal), subtotal);
    }

    #[test]
    fn test_self_pay_categories_get_no_discount() {
        let subtotal = baht(45000, 2);
        assert_eq!(CoverageCategory::Private.discount(subtotal), Decimal::ZERO);
        assert_eq!(CoverageCategory::Company.discount(subtotal), Decimal::ZERO);
        assert_eq!(
            CoverageCategory::Unspecified.discount(subtotal),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_discount_never_exceeds_subtotal() {
        let subtotal = baht(123456, 2);
        for category in CoverageCategory::ALL {
            let discount = category.discount(subtotal);
            assert!(discount >= Decimal::ZERO, "{category:?} went negative");
            assert!(discount <= subtotal, "{category:?} exceeded subtotal");
        }
    }
}
