use crate::model::{ItemCheck, LineItem, RecordCheck};
use rust_decimal::Decimal;

/// Recompute the expected total for one item and measure the discrepancy
/// against the printed total.
///
/// Exact decimal arithmetic throughout; a discrepancy is a diagnostic, not
/// an error, and the printed total is never corrected.
pub fn check_item(
    quantity: Decimal,
    price: Decimal,
    tax: Decimal,
    total: Decimal,
    tolerance: Decimal,
) -> ItemCheck {
    let total_expected = quantity * price + tax;
    let discrepancy_abs = (total - total_expected).abs();
    let discrepancy_rel = if total_expected.is_zero() {
        if total.is_zero() {
            Decimal::ZERO
        } else {
            Decimal::ONE
        }
    } else {
        discrepancy_abs / total_expected
    };

    ItemCheck {
        total_expected,
        discrepancy_abs,
        discrepancy_rel,
        flagged: discrepancy_rel > tolerance,
    }
}

/// Aggregate the per-item checks for one document and cross-check the sums
/// against the declared invoice totals, when present.
///
/// A record is flagged when any item is over tolerance or when the summed
/// items disagree with a declared total by more than the tolerance.
pub fn check_record(
    items: &[LineItem],
    total_excl: Option<Decimal>,
    total_incl: Option<Decimal>,
    tolerance: Decimal,
) -> RecordCheck {
    let items_total: Decimal = items.iter().map(|i| i.total).sum();
    let items_total_incl: Decimal = items.iter().map(|i| i.total + i.tax).sum();
    let flagged_items = items.iter().filter(|i| i.check.flagged).count();

    let excl_mismatch =
        total_excl.is_some_and(|declared| exceeds_tolerance(items_total, declared, tolerance));

    // The tax-free dialects have document-level VAT that never appears on
    // item lines, so the inclusive cross-check only means something when at
    // least one item carries tax.
    let has_item_tax = items.iter().any(|i| !i.tax.is_zero());
    let incl_mismatch = has_item_tax
        && total_incl.is_some_and(|declared| exceeds_tolerance(items_total_incl, declared, tolerance));

    RecordCheck {
        items_total,
        items_total_incl,
        flagged_items,
        flagged: flagged_items > 0 || excl_mismatch || incl_mismatch,
    }
}

fn exceeds_tolerance(actual: Decimal, declared: Decimal, tolerance: Decimal) -> bool {
    if declared.is_zero() {
        return !actual.is_zero();
    }
    (actual - declared).abs() / declared.abs() > tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tier;
    use rust_decimal_macros::dec;

    fn item(quantity: Decimal, price: Decimal, tax: Decimal, total: Decimal) -> LineItem {
        LineItem {
            item_code: None,
            description: None,
            quantity,
            unit: None,
            price,
            tax,
            total,
            tier: Tier::General,
            check: check_item(quantity, price, tax, total, dec!(0.05)),
        }
    }

    #[test]
    fn test_exact_match_has_zero_discrepancy() {
        let c = check_item(dec!(10), dec!(18.50), dec!(1.85), dec!(186.85), dec!(0.05));
        assert_eq!(c.total_expected, dec!(186.85));
        assert_eq!(c.discrepancy_abs, dec!(0));
        assert_eq!(c.discrepancy_rel, dec!(0));
        assert!(!c.flagged);
    }

    #[test]
    fn test_expected_is_exact_decimal_product() {
        // 0.1 * 0.2 style cases must not pick up float noise
        let c = check_item(dec!(0.1), dec!(0.2), dec!(0), dec!(0.02), dec!(0.05));
        assert_eq!(c.total_expected, dec!(0.02));
        assert_eq!(c.discrepancy_abs, dec!(0));
    }

    #[test]
    fn test_within_tolerance_not_flagged() {
        // expected 100, printed 104: 4% off
        let c = check_item(dec!(10), dec!(10), dec!(0), dec!(104), dec!(0.05));
        assert_eq!(c.discrepancy_abs, dec!(4));
        assert!(!c.flagged);
    }

    #[test]
    fn test_over_tolerance_flagged() {
        // expected 100, printed 110: 10% off
        let c = check_item(dec!(10), dec!(10), dec!(0), dec!(110), dec!(0.05));
        assert!(c.flagged);
        assert_eq!(c.discrepancy_rel, dec!(0.1));
    }

    #[test]
    fn test_zero_expected_zero_total() {
        let c = check_item(dec!(0), dec!(10), dec!(0), dec!(0), dec!(0.05));
        assert!(!c.flagged);
        assert_eq!(c.discrepancy_rel, dec!(0));
    }

    #[test]
    fn test_zero_expected_nonzero_total_flagged() {
        let c = check_item(dec!(0), dec!(10), dec!(0), dec!(50), dec!(0.05));
        assert!(c.flagged);
    }

    #[test]
    fn test_record_sums_and_clean() {
        let items = vec![
            item(dec!(10), dec!(10), dec!(15), dec!(100)),
            item(dec!(2), dec!(50), dec!(15), dec!(100)),
        ];
        let c = check_record(&items, Some(dec!(200)), Some(dec!(230)), dec!(0.05));
        assert_eq!(c.items_total, dec!(200));
        assert_eq!(c.items_total_incl, dec!(230));
        assert_eq!(c.flagged_items, 0);
        assert!(!c.flagged);
    }

    #[test]
    fn test_record_flagged_by_item() {
        let items = vec![item(dec!(10), dec!(10), dec!(0), dec!(150))];
        let c = check_record(&items, None, None, dec!(0.05));
        assert_eq!(c.flagged_items, 1);
        assert!(c.flagged);
    }

    #[test]
    fn test_record_flagged_by_declared_total_mismatch() {
        let items = vec![item(dec!(10), dec!(10), dec!(0), dec!(100))];
        let c = check_record(&items, Some(dec!(500)), None, dec!(0.05));
        assert_eq!(c.flagged_items, 0);
        assert!(c.flagged);
    }

    #[test]
    fn test_incl_check_skipped_for_tax_free_items() {
        // Document-level VAT only: items carry no tax, so the inclusive sum
        // cannot match Total (Incl) and must not flag on its own.
        let items = vec![item(dec!(10), dec!(10), dec!(0), dec!(100))];
        let c = check_record(&items, Some(dec!(100)), Some(dec!(115)), dec!(0.05));
        assert!(!c.flagged);
    }

    #[test]
    fn test_incl_check_applies_when_items_taxed() {
        let items = vec![item(dec!(10), dec!(10), dec!(15), dec!(115))];
        let c = check_record(&items, None, Some(dec!(400)), dec!(0.05));
        assert_eq!(c.flagged_items, 0);
        assert!(c.flagged);
    }

    #[test]
    fn test_record_without_declared_totals_not_flagged() {
        let items = vec![item(dec!(10), dec!(10), dec!(0), dec!(100))];
        let c = check_record(&items, None, None, dec!(0.05));
        assert!(!c.flagged);
    }

    #[test]
    fn test_empty_record_not_flagged() {
        let c = check_record(&[], None, None, dec!(0.05));
        assert_eq!(c.items_total, dec!(0));
        assert!(!c.flagged);
    }
}
