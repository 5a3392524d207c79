//! Inventory domain module.
//!
//! This crate contains the parts-catalog record types and their validation
//! rules, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod part;

pub use part::{InventoryPart, PartDraft, PartId};
