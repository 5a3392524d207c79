//! Stock-level bookkeeping for plan construction.

use std::collections::HashMap;

use autoshop_inventory::{InventoryPart, PartId};
use autoshop_orders::PartQuantity;

/// Snapshot current stock per part id.
pub fn stock_levels(catalog: &[InventoryPart]) -> HashMap<PartId, i64> {
    catalog
        .iter()
        .map(|part| (part.id, part.stock_quantity))
        .collect()
}

/// Whether every requested quantity is covered by the remaining stock.
///
/// A part missing from the stock map counts as zero on hand.
pub fn is_fulfillable(parts: &[PartQuantity], stock: &HashMap<PartId, i64>) -> bool {
    parts.iter().all(|line| {
        stock.get(&line.part_id).copied().unwrap_or(0) >= i64::from(line.quantity)
    })
}

/// Subtract an order's requested quantities from the remaining stock.
///
/// Callers check [`is_fulfillable`] first; reserving an unchecked order may
/// drive levels negative.
pub fn reserve_stock(parts: &[PartQuantity], stock: &mut HashMap<PartId, i64>) {
    for line in parts {
        *stock.entry(line.part_id).or_insert(0) -= i64::from(line.quantity);
    }
}
