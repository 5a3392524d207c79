//! Customer endpoints.

use autoshop_customers::{Customer, CustomerDraft, CustomerId};

use crate::error::ClientResult;
use crate::http::ShopClient;

impl ShopClient {
    pub async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        self.get("customers/list").await
    }

    /// Fetch one customer; `None` if the id is unknown.
    pub async fn get_customer(&self, id: CustomerId) -> ClientResult<Option<Customer>> {
        self.get_optional(&format!("customers/detail/{id}")).await
    }

    pub async fn create_customer(&self, draft: &CustomerDraft) -> ClientResult<Customer> {
        self.post("customers/create", draft).await
    }

    pub async fn update_customer(
        &self,
        id: CustomerId,
        draft: &CustomerDraft,
    ) -> ClientResult<Customer> {
        self.put(&format!("customers/update/{id}"), draft).await
    }

    pub async fn delete_customer(&self, id: CustomerId) -> ClientResult<()> {
        self.delete(&format!("customers/delete/{id}")).await
    }
}
