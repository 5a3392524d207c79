//! Repair-order endpoints.

use autoshop_orders::{
    LineItem, OrderDraft, OrderId, OrderStatus, OrderSubmission, RepairOrder, StatusUpdate,
};
use autoshop_vehicles::VehicleId;

use crate::error::ClientResult;
use crate::http::ShopClient;

impl ShopClient {
    pub async fn list_orders(&self) -> ClientResult<Vec<RepairOrder>> {
        self.get("repair_orders/list").await
    }

    /// Fetch one order; `None` if the id is unknown.
    pub async fn get_order(&self, id: OrderId) -> ClientResult<Option<RepairOrder>> {
        self.get_optional(&format!("repair_orders/detail/{id}")).await
    }

    /// Service history for a vehicle.
    pub async fn orders_by_vehicle(&self, vehicle_id: VehicleId) -> ClientResult<Vec<RepairOrder>> {
        self.get(&format!("repair_orders/vehicle/{vehicle_id}")).await
    }

    /// Line items currently recorded against an order, in service order.
    pub async fn parts_used(&self, order_id: OrderId) -> ClientResult<Vec<LineItem>> {
        self.get(&format!("repair_orders/{order_id}/parts-used")).await
    }

    pub async fn create_order(&self, draft: &OrderDraft) -> ClientResult<RepairOrder> {
        self.post("repair_orders/create", draft).await
    }

    /// Persist a reconciled edit session.
    ///
    /// Build the payload with
    /// [`reconcile_for_submission`](autoshop_orders::reconcile_for_submission);
    /// on failure the caller keeps the session state and may resubmit.
    pub async fn submit_order(&self, submission: &OrderSubmission) -> ClientResult<RepairOrder> {
        self.put(&format!("repair_orders/update/{}", submission.id), submission)
            .await
    }

    /// Status-only update against the dedicated endpoint.
    pub async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> ClientResult<RepairOrder> {
        self.patch(
            &format!("repair_orders/update-status/{id}"),
            &StatusUpdate { status },
        )
        .await
    }
}
