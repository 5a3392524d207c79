//! Greedy profit-ranked selection over the pending order backlog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use autoshop_core::round_to_cents;
use autoshop_customers::CustomerSummary;
use autoshop_inventory::InventoryPart;
use autoshop_orders::{OrderId, PartQuantity};
use autoshop_vehicles::VehicleSummary;

use crate::fulfillment::{is_fulfillable, reserve_stock, stock_levels};
use crate::profit::{order_profit, parts_revenue, PartIndex};

/// A pending order as the backlog feed provides it: header fields plus the
/// persisted `{part_id, quantity}` rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOrder {
    pub id: OrderId,
    pub customer: CustomerSummary,
    pub vehicle: VehicleSummary,
    pub labor_cost: f64,
    pub parts: Vec<PartQuantity>,
}

/// One planned order in the result, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedOrder {
    #[serde(rename = "repair_order_id")]
    pub order_id: OrderId,
    pub customer: CustomerSummary,
    pub vehicle: VehicleSummary,
    pub total_cost_repair: f64,
    pub expected_profit: f64,
}

/// Planning failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanningError {
    /// The backlog is empty; there is nothing to plan.
    #[error("no pending repair orders available")]
    NoPendingOrders,

    /// An order in the backlog carries data the planner cannot price.
    #[error("invalid repair order data for {order_id}: {reason}")]
    InvalidOrderData { order_id: OrderId, reason: String },
}

/// Select the fulfillable subset of the backlog and rank it by expected
/// profit, highest first.
///
/// Stock is reserved greedily in backlog order: once an order is taken, later
/// orders see the depleted levels. Unfulfillable orders are skipped, not
/// errors. Orders with negative labor cost or no parts at all are data
/// errors and abort the run.
pub fn select_orders_by_profit(
    orders: &[PendingOrder],
    catalog: &[InventoryPart],
) -> Result<Vec<PlannedOrder>, PlanningError> {
    if orders.is_empty() {
        return Err(PlanningError::NoPendingOrders);
    }

    let index = PartIndex::new(catalog);
    let mut stock = stock_levels(catalog);
    let mut planned = Vec::new();

    for order in orders {
        if order.labor_cost < 0.0 {
            return Err(PlanningError::InvalidOrderData {
                order_id: order.id,
                reason: "labor cost cannot be negative".to_string(),
            });
        }
        if order.parts.is_empty() {
            return Err(PlanningError::InvalidOrderData {
                order_id: order.id,
                reason: "order has no associated parts".to_string(),
            });
        }

        if !is_fulfillable(&order.parts, &stock) {
            continue;
        }

        let total = round_to_cents(order.labor_cost + parts_revenue(&order.parts, &index));
        let profit = round_to_cents(order_profit(order.labor_cost, &order.parts, &index));

        planned.push(PlannedOrder {
            order_id: order.id,
            customer: order.customer.clone(),
            vehicle: order.vehicle.clone(),
            total_cost_repair: total,
            expected_profit: profit,
        });

        reserve_stock(&order.parts, &mut stock);
    }

    planned.sort_by(|a, b| b.expected_profit.total_cmp(&a.expected_profit));
    Ok(planned)
}
