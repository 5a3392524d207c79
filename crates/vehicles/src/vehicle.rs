use serde::{Deserialize, Serialize};

use autoshop_core::{DomainError, DomainResult, Entity, EntityId};
use autoshop_customers::CustomerId;

/// Vehicle identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub EntityId);

impl VehicleId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Vehicle record as served by the persistence boundary.
///
/// Every vehicle belongs to exactly one customer; license plates are unique
/// service-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub customer_id: CustomerId,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub year: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Entity for Vehicle {
    type Id = VehicleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Reduced vehicle projection embedded in order payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSummary {
    pub id: VehicleId,
    pub license_plate: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Fields for creating or updating a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleDraft {
    pub customer_id: CustomerId,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub year: i32,
}

impl VehicleDraft {
    pub fn validate(&self) -> DomainResult<()> {
        if self.license_plate.trim().is_empty() {
            return Err(DomainError::validation("license_plate cannot be empty"));
        }
        if self.brand.trim().is_empty() {
            return Err(DomainError::validation("brand cannot be empty"));
        }
        if self.model.trim().is_empty() {
            return Err(DomainError::validation("model cannot be empty"));
        }
        if self.year <= 0 {
            return Err(DomainError::validation("year must be positive"));
        }
        Ok(())
    }
}

fn default_active() -> bool {
    true
}
