use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use autoshop_core::{DomainError, DomainResult, Entity, EntityId, ValueObject};
use autoshop_customers::CustomerSummary;
use autoshop_inventory::PartId;
use autoshop_vehicles::VehicleSummary;

/// Repair order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub EntityId);

impl OrderId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Repair order status.
///
/// A closed set of four tags; the service stores the same strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Terminal statuses: the order left the shop (or never will).
    /// `date_out` is meaningful only here.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Whether edit controls should be offered for an order in this status.
    pub fn is_editable(self) -> bool {
        !self.is_terminal()
    }
}

/// Repair order as served by the persistence boundary.
///
/// During an edit session the caller holds a transient copy of this record;
/// nothing is persisted until the reconciled payload is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairOrder {
    pub id: OrderId,
    pub status: OrderStatus,
    /// Set at intake, never changed afterwards.
    pub date_in: DateTime<Utc>,
    pub date_expected_out: Option<DateTime<Utc>>,
    /// Must be null unless `status` is terminal.
    pub date_out: Option<DateTime<Utc>>,
    pub labor_cost: f64,
    /// Derived total held by the service; recomputed on every submission.
    #[serde(default)]
    pub total_cost_repair: f64,
    pub customer: CustomerSummary,
    pub vehicle: VehicleSummary,
}

impl Entity for RepairOrder {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// One inventory part consumed by an order.
///
/// `final_price` is the price frozen at the time the part was put on the
/// order, deliberately decoupled from the part's current catalog price so
/// historical totals stay stable after catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Inventory part this line refers to (the service keys line rows by it).
    #[serde(rename = "id")]
    pub part_id: PartId,
    pub name: String,
    pub quantity_used: u32,
    pub final_price: f64,
}

impl ValueObject for LineItem {}

/// Fields for opening a new repair order.
///
/// The service assigns the id, stamps `date_in`, and forces the initial
/// status to `pending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer_id: autoshop_customers::CustomerId,
    pub vehicle_id: autoshop_vehicles::VehicleId,
    pub labor_cost: f64,
}

impl OrderDraft {
    pub fn validate(&self) -> DomainResult<()> {
        if self.labor_cost < 0.0 {
            return Err(DomainError::validation("labor_cost cannot be negative"));
        }
        Ok(())
    }
}

/// Partial payload for the dedicated status-only update endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_snake_case_tags() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::from_str::<OrderStatus>("\"cancelled\"").unwrap(),
            OrderStatus::Cancelled
        );
    }

    #[test]
    fn only_completed_and_cancelled_are_terminal() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::InProgress.is_terminal());
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
    }

    #[test]
    fn editable_is_the_complement_of_terminal() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::InProgress,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.is_editable(), !status.is_terminal());
        }
    }

    #[test]
    fn line_item_deserializes_from_parts_used_payload() {
        // The parts-used endpoint carries the part id under `id` plus catalog
        // fields this client does not keep.
        let item: LineItem = serde_json::from_str(
            r#"{
                "id": "018f7b7e-0000-7000-8000-000000000003",
                "name": "Brake pad set",
                "description": "front axle",
                "cost": 18.5,
                "final_price": 34.99,
                "quantity_used": 2
            }"#,
        )
        .unwrap();
        assert_eq!(item.quantity_used, 2);
        assert_eq!(item.final_price, 34.99);
    }

    #[test]
    fn negative_labor_cost_is_rejected_on_draft() {
        let draft = OrderDraft {
            customer_id: autoshop_customers::CustomerId::new(EntityId::new()),
            vehicle_id: autoshop_vehicles::VehicleId::new(EntityId::new()),
            labor_cost: -1.0,
        };
        assert!(matches!(
            draft.validate().unwrap_err(),
            DomainError::Validation(_)
        ));
    }
}
