//! Boundary clients for the menu service.
//!
//! The catalog read endpoint and the order-creation endpoint are external
//! collaborators; these modules define the service traits the rest of the
//! application depends on, plus their reqwest-backed implementations.

use std::time::Duration;

pub mod catalog;
pub mod orders;

pub use catalog::{CatalogApi, CatalogApiError, HttpCatalogApi, MockCatalogApi};
pub use orders::{
    HttpOrdersApi, MockOrdersApi, OrderConfirmation, OrderStatus, OrdersApi, OrdersApiError,
};

/// Configuration shared by the HTTP clients.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the menu service, e.g. `"http://localhost:3000"`.
    pub base_url: String,

    /// Per-request timeout; a hung request fails instead of waiting forever.
    pub timeout: Duration,
}
