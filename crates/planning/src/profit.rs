//! Expected revenue and margin for a single order.

use std::collections::HashMap;

use autoshop_inventory::{InventoryPart, PartId};
use autoshop_orders::PartQuantity;

/// Catalog lookup by part id, built once per planning run.
pub struct PartIndex<'a> {
    by_id: HashMap<PartId, &'a InventoryPart>,
}

impl<'a> PartIndex<'a> {
    pub fn new(catalog: &'a [InventoryPart]) -> Self {
        Self {
            by_id: catalog.iter().map(|part| (part.id, part)).collect(),
        }
    }

    pub fn get(&self, id: PartId) -> Option<&'a InventoryPart> {
        self.by_id.get(&id).copied()
    }
}

/// Customer-facing parts revenue: Σ current final_price × quantity.
///
/// Parts absent from the catalog contribute nothing.
pub fn parts_revenue(parts: &[PartQuantity], index: &PartIndex<'_>) -> f64 {
    parts
        .iter()
        .map(|line| {
            index
                .get(line.part_id)
                .map(|part| part.final_price * f64::from(line.quantity))
                .unwrap_or(0.0)
        })
        .sum()
}

/// Expected profit: Σ (final_price − cost) × quantity, plus labor.
///
/// Labor is treated as pure margin, matching how the shop bills it.
pub fn order_profit(labor_cost: f64, parts: &[PartQuantity], index: &PartIndex<'_>) -> f64 {
    let parts_margin: f64 = parts
        .iter()
        .map(|line| {
            index
                .get(line.part_id)
                .map(|part| part.unit_profit() * f64::from(line.quantity))
                .unwrap_or(0.0)
        })
        .sum();
    parts_margin + labor_cost
}
