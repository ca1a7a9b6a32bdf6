//! Application configuration.

use std::{path::PathBuf, time::Duration};

use clap::Args;

use crate::{api::ApiConfig, storage::CartStorage};

/// Connection and storage settings, shared by every CLI command.
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// Base URL of the menu service
    #[arg(long, env = "MESA_API_URL", default_value = "http://localhost:3000")]
    pub api_url: String,

    /// Path of the saved cart file
    #[arg(long, env = "MESA_CART_PATH", default_value = "restaurant_order.json")]
    pub cart_path: PathBuf,

    /// Request timeout in seconds; bounds the wait on a hung submission
    #[arg(long, env = "MESA_REQUEST_TIMEOUT", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl AppConfig {
    /// HTTP client configuration derived from these settings.
    #[must_use]
    pub fn api(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Cart storage over the configured file path.
    #[must_use]
    pub fn storage(&self) -> CartStorage {
        CartStorage::new(&self.cart_path)
    }
}
