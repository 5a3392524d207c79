//! Planning endpoints.

use autoshop_planning::PlannedOrder;

use crate::error::ClientResult;
use crate::http::ShopClient;

impl ShopClient {
    /// Server-side plan: pending orders ranked by expected profit.
    pub async fn optimized_orders(&self) -> ClientResult<Vec<PlannedOrder>> {
        self.get("repair_order_optimization/list").await
    }
}
