//! Inventory catalog endpoints.

use autoshop_inventory::{InventoryPart, PartDraft, PartId};

use crate::error::ClientResult;
use crate::http::ShopClient;

impl ShopClient {
    pub async fn list_parts(&self) -> ClientResult<Vec<InventoryPart>> {
        self.get("inventory_parts/list").await
    }

    /// Fetch one catalog part; `None` if the id is unknown.
    pub async fn get_part(&self, id: PartId) -> ClientResult<Option<InventoryPart>> {
        self.get_optional(&format!("inventory_parts/detail/{id}")).await
    }

    pub async fn create_part(&self, draft: &PartDraft) -> ClientResult<InventoryPart> {
        self.post("inventory_parts/create", draft).await
    }

    pub async fn update_part(&self, id: PartId, draft: &PartDraft) -> ClientResult<InventoryPart> {
        self.put(&format!("inventory_parts/update/{id}"), draft).await
    }

    /// Soft-delete: the part is flagged inactive, historical orders keep
    /// resolving it.
    pub async fn disable_part(&self, id: PartId) -> ClientResult<()> {
        self.patch_empty(&format!("inventory_parts/disable/{id}")).await
    }
}
