//! Vehicle endpoints.

use autoshop_customers::CustomerId;
use autoshop_vehicles::{Vehicle, VehicleDraft, VehicleId};

use crate::error::ClientResult;
use crate::http::ShopClient;

impl ShopClient {
    pub async fn list_vehicles(&self) -> ClientResult<Vec<Vehicle>> {
        self.get("vehicles/list").await
    }

    /// Fetch one vehicle; `None` if the id is unknown.
    pub async fn get_vehicle(&self, id: VehicleId) -> ClientResult<Option<Vehicle>> {
        self.get_optional(&format!("vehicles/detail/{id}")).await
    }

    /// All vehicles registered to a customer.
    pub async fn vehicles_by_customer(&self, customer_id: CustomerId) -> ClientResult<Vec<Vehicle>> {
        self.get(&format!("vehicles/customer/{customer_id}")).await
    }

    pub async fn create_vehicle(&self, draft: &VehicleDraft) -> ClientResult<Vehicle> {
        self.post("vehicles/create", draft).await
    }

    pub async fn update_vehicle(&self, id: VehicleId, draft: &VehicleDraft) -> ClientResult<Vehicle> {
        self.put(&format!("vehicles/update/{id}"), draft).await
    }

    pub async fn delete_vehicle(&self, id: VehicleId) -> ClientResult<()> {
        self.delete(&format!("vehicles/delete/{id}")).await
    }
}
