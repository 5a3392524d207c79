use serde::{Deserialize, Serialize};

use autoshop_core::{DomainError, DomainResult, Entity, EntityId};

/// Customer identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub EntityId);

impl CustomerId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Customer record as served by the persistence boundary.
///
/// Customers are soft-deleted: `is_active` turns false, the record stays so
/// historical orders keep resolving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Reduced customer projection embedded in order payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub id: CustomerId,
    pub name: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Fields for creating or updating a customer.
///
/// Duplicate email/phone detection stays on the server; this only covers
/// what the form can check locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: String,
}

impl CustomerDraft {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.phone.trim().is_empty() {
            return Err(DomainError::validation("phone cannot be empty"));
        }
        if self.address.trim().is_empty() {
            return Err(DomainError::validation("address cannot be empty"));
        }
        Ok(())
    }
}

fn default_active() -> bool {
    true
}
