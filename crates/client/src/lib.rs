//! `merx-client`: inter-service HTTP clients.
//!
//! Each collaborator a service talks to is behind an `async` trait
//! (`PartnerApi`, `ProductApi`, `InventoryApi`) with a reqwest-backed
//! implementation here; tests substitute in-memory mocks. Base URLs come
//! from the [`registry::ServiceRegistry`], the stand-in for whatever
//! discovery mechanism the deployment provides.

pub mod error;
pub mod inventory;
pub mod partner;
pub mod product;
pub mod registry;

pub use error::ClientError;
pub use inventory::{HttpInventoryClient, InventoryApi, StockAdjustment};
pub use partner::{HttpPartnerClient, PartnerApi, PartnerSummary};
pub use product::{HttpProductClient, ProductApi, ProductSummary};
pub use registry::{ServiceName, ServiceRegistry};
