//! REST client for the shop-management service.
//!
//! The service owns all persistence; this crate only moves typed records
//! across the HTTP boundary. Detail lookups surface a missing record as
//! `Ok(None)`, never as an error. Nothing here retries: on failure the
//! caller keeps its in-session state and may resubmit.

pub mod config;
pub mod customers;
pub mod error;
pub mod http;
pub mod inventory;
pub mod orders;
pub mod planning;
pub mod vehicles;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::ShopClient;
