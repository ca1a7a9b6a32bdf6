//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    api::{CatalogApi, HttpCatalogApi, HttpOrdersApi},
    checkout::CheckoutService,
    config::AppConfig,
};

/// Errors that can occur while wiring the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The HTTP clients could not be built.
    #[error("failed to build http client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Shared services wired from the configuration.
pub struct AppContext {
    /// Read access to the product catalog.
    pub catalog: Arc<dyn CatalogApi>,

    /// The order submission gateway.
    pub checkout: CheckoutService,
}

impl AppContext {
    /// Build the application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when an HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        let api = config.api();

        Ok(Self {
            catalog: Arc::new(HttpCatalogApi::new(api.clone())?),
            checkout: CheckoutService::new(Arc::new(HttpOrdersApi::new(api)?)),
        })
    }
}
