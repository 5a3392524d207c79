//! Derived cost computation for an order's edit session.

use crate::order::LineItem;

/// Sum of `quantity_used * final_price` over all line items.
///
/// Returns 0 for an empty list. Does not validate quantity or price sign;
/// negative inputs are a caller error and propagate arithmetically.
pub fn parts_total(line_items: &[LineItem]) -> f64 {
    line_items
        .iter()
        .map(|item| f64::from(item.quantity_used) * item.final_price)
        .sum()
}

/// Parts total plus labor.
pub fn grand_total(line_items: &[LineItem], labor_cost: f64) -> f64 {
    parts_total(line_items) + labor_cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoshop_core::EntityId;
    use autoshop_inventory::PartId;
    use proptest::prelude::*;

    fn item(name: &str, quantity_used: u32, final_price: f64) -> LineItem {
        LineItem {
            part_id: PartId::new(EntityId::new()),
            name: name.to_string(),
            quantity_used,
            final_price,
        }
    }

    #[test]
    fn empty_list_totals_zero() {
        assert_eq!(parts_total(&[]), 0.0);
        assert_eq!(grand_total(&[], 120.0), 120.0);
    }

    #[test]
    fn sums_quantity_times_frozen_price() {
        let items = vec![item("pads", 2, 10.00), item("filter", 1, 5.00)];
        assert_eq!(parts_total(&items), 25.00);
    }

    #[test]
    fn grand_total_adds_labor_on_top() {
        let items = vec![item("pads", 2, 10.00), item("filter", 1, 5.00)];
        assert_eq!(grand_total(&items, 80.0), 105.00);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the parts total does not depend on line-item order.
        /// Prices are generated in whole cents; the comparison allows for the
        /// last-ulp drift of reordered floating-point summation.
        #[test]
        fn parts_total_is_order_independent(
            lines in prop::collection::vec((1u32..50, 0u32..50_000), 0..12)
        ) {
            let items: Vec<LineItem> = lines
                .iter()
                .map(|&(quantity, cents)| item("part", quantity, f64::from(cents) / 100.0))
                .collect();
            let mut reversed = items.clone();
            reversed.reverse();

            let forward = parts_total(&items);
            let backward = parts_total(&reversed);
            prop_assert!((forward - backward).abs() < 1e-6);
        }

        /// Property: totals are non-negative for valid (non-negative) inputs.
        #[test]
        fn parts_total_is_non_negative_for_valid_inputs(
            lines in prop::collection::vec((1u32..50, 0u32..50_000), 0..12)
        ) {
            let items: Vec<LineItem> = lines
                .iter()
                .map(|&(quantity, cents)| item("part", quantity, f64::from(cents) / 100.0))
                .collect();
            prop_assert!(parts_total(&items) >= 0.0);
        }
    }
}
