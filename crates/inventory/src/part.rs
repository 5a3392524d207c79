use serde::{Deserialize, Serialize};

use autoshop_core::{DomainError, DomainResult, Entity, EntityId};

/// Inventory part identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(pub EntityId);

impl PartId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for PartId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Catalog part as served by the persistence boundary.
///
/// `cost` is what the shop pays for the part, `final_price` what the customer
/// is charged. Orders snapshot `final_price` at time of use, so later catalog
/// price changes never rewrite historical totals.
///
/// Parts are disabled rather than deleted (`is_active` turns false) so line
/// items on old orders keep resolving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryPart {
    pub id: PartId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub stock_quantity: i64,
    pub cost: f64,
    pub final_price: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl InventoryPart {
    /// Expected margin per unit sold.
    pub fn unit_profit(&self) -> f64 {
        self.final_price - self.cost
    }
}

impl Entity for InventoryPart {
    type Id = PartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Fields for creating or updating a catalog part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub stock_quantity: i64,
    pub cost: f64,
    pub final_price: f64,
}

impl PartDraft {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.stock_quantity < 0 {
            return Err(DomainError::validation("stock_quantity cannot be negative"));
        }
        if self.cost < 0.0 {
            return Err(DomainError::validation("cost cannot be negative"));
        }
        if self.final_price < 0.0 {
            return Err(DomainError::validation("final_price cannot be negative"));
        }
        Ok(())
    }
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_draft() -> PartDraft {
        PartDraft {
            name: "Brake pad set".to_string(),
            description: None,
            stock_quantity: 12,
            cost: 18.50,
            final_price: 34.99,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(test_draft().validate().is_ok());
    }

    #[test]
    fn negative_stock_is_rejected() {
        let mut draft = test_draft();
        draft.stock_quantity = -1;
        assert!(matches!(
            draft.validate().unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn negative_prices_are_rejected() {
        let mut draft = test_draft();
        draft.final_price = -0.01;
        assert!(draft.validate().is_err());

        let mut draft = test_draft();
        draft.cost = -5.0;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn unit_profit_is_price_minus_cost() {
        let part = InventoryPart {
            id: PartId::new(EntityId::new()),
            name: "Oil filter".to_string(),
            description: Some("OEM".to_string()),
            stock_quantity: 4,
            cost: 6.00,
            final_price: 10.50,
            is_active: true,
        };
        assert_eq!(part.unit_profit(), 4.50);
    }

    #[test]
    fn missing_optional_fields_deserialize_with_defaults() {
        let part: InventoryPart = serde_json::from_str(
            r#"{
                "id": "018f7b7e-0000-7000-8000-000000000002",
                "name": "Spark plug",
                "stock_quantity": 40,
                "cost": 2.10,
                "final_price": 4.25
            }"#,
        )
        .unwrap();
        assert!(part.is_active);
        assert!(part.description.is_none());
    }
}
