//! Edit-session operations over an order's line items, and reconciliation of
//! the session into a persistable payload.
//!
//! Every operation here is pure and total: collections are updated by
//! returning a new one, unknown part ids are no-ops, and nothing performs IO.

use serde::{Deserialize, Serialize};

use autoshop_core::ValueObject;
use autoshop_inventory::{InventoryPart, PartId};
use chrono::{DateTime, Utc};

use crate::order::{LineItem, OrderId, OrderStatus, RepairOrder};
use crate::totals::grand_total;

/// A line item reduced to what the service persists.
///
/// Display fields (name, frozen price) are dropped; the service recomputes
/// authoritative pricing from the part id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartQuantity {
    pub part_id: PartId,
    pub quantity: u32,
}

impl ValueObject for PartQuantity {}

/// Normalized order payload for the update endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub id: OrderId,
    pub status: OrderStatus,
    pub labor_cost: f64,
    pub date_expected_out: Option<DateTime<Utc>>,
    pub date_out: Option<DateTime<Utc>>,
    pub total_cost_repair: f64,
    pub parts: Vec<PartQuantity>,
}

/// Produce the normalized record to send to the persistence boundary.
///
/// Recomputes the grand total from the session's line items (the copy held in
/// `order.total_cost_repair` is stale by definition during an edit) and
/// normalizes `date_out`: it survives only while the status is terminal, so a
/// status regressing from `completed`/`cancelled` back to an open state
/// discards the previously set exit date.
pub fn reconcile_for_submission(order: &RepairOrder, line_items: &[LineItem]) -> OrderSubmission {
    let date_out = match order.status {
        OrderStatus::Completed | OrderStatus::Cancelled => order.date_out,
        OrderStatus::Pending | OrderStatus::InProgress => None,
    };

    OrderSubmission {
        id: order.id,
        status: order.status,
        labor_cost: order.labor_cost,
        date_expected_out: order.date_expected_out,
        date_out,
        total_cost_repair: grand_total(line_items, order.labor_cost),
        parts: line_items
            .iter()
            .map(|item| PartQuantity {
                part_id: item.part_id,
                quantity: item.quantity_used,
            })
            .collect(),
    }
}

/// Replace the quantity of the line matching `part_id`.
///
/// Unknown ids leave the collection unchanged. The new quantity is not
/// clamped; the form enforces the minimum of 1.
pub fn apply_quantity_change(
    line_items: &[LineItem],
    part_id: PartId,
    new_quantity: u32,
) -> Vec<LineItem> {
    line_items
        .iter()
        .map(|item| {
            if item.part_id == part_id {
                LineItem {
                    quantity_used: new_quantity,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Drop the line matching `part_id`; no-op if absent.
pub fn remove_line_item(line_items: &[LineItem], part_id: PartId) -> Vec<LineItem> {
    line_items
        .iter()
        .filter(|item| item.part_id != part_id)
        .cloned()
        .collect()
}

/// Append a line for a catalog part with quantity 1 and the part's current
/// price frozen in.
///
/// `None` means nothing was selected in the picker; the collection is
/// returned unchanged.
pub fn add_line_item(line_items: &[LineItem], catalog_part: Option<&InventoryPart>) -> Vec<LineItem> {
    let mut items = line_items.to_vec();
    if let Some(part) = catalog_part {
        items.push(LineItem {
            part_id: part.id,
            name: part.name.clone(),
            quantity_used: 1,
            final_price: part.final_price,
        });
    }
    items
}
