//! Product catalog client.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use mesa::catalog::Product;

use crate::api::ApiConfig;

/// Errors that can occur when reading the catalog.
#[derive(Debug, Error)]
pub enum CatalogApiError {
    /// An HTTP transport or decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// No product exists with the requested id.
    #[error("no product with id {0}")]
    UnknownProduct(String),

    /// The service returned a non-2xx response.
    #[error("catalog request failed ({status}): {message}")]
    Rejected {
        /// HTTP status of the response.
        status: StatusCode,
        /// Error message from the response body, when one was given.
        message: String,
    },
}

/// Read access to the product catalog.
#[automock]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the full product list.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogApiError>;

    /// Fetch a single product by catalog id.
    async fn get_product(&self, id: String) -> Result<Product, CatalogApiError>;
}

/// HTTP client for the catalog read endpoints.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    config: ApiConfig,
    http: Client,
}

impl HttpCatalogApi {
    /// Create a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogApiError> {
        let url = format!("{}/api/products", self.config.base_url);

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(rejected(response).await);
        }

        Ok(response.json().await?)
    }

    async fn get_product(&self, id: String) -> Result<Product, CatalogApiError> {
        let url = format!("{}/api/products/{id}", self.config.base_url);

        let response = self.http.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogApiError::UnknownProduct(id));
        }

        if !response.status().is_success() {
            return Err(rejected(response).await);
        }

        Ok(response.json().await?)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

async fn rejected(response: reqwest::Response) -> CatalogApiError {
    let status = response.status();

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("request failed with status {status}"),
    };

    CatalogApiError::Rejected { status, message }
}
