//! Vehicles domain module.
//!
//! This crate contains the vehicle record types and their validation rules,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod vehicle;

pub use vehicle::{Vehicle, VehicleDraft, VehicleId, VehicleSummary};
