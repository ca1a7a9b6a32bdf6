//! Order submission client.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use mesa::order::OrderRequest;

use crate::api::ApiConfig;

/// Errors that can occur when submitting an order.
#[derive(Debug, Error)]
pub enum OrdersApiError {
    /// An HTTP transport or decoding error occurred.
    #[error("http error: {0}")]
    Http(reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("order submission timed out")]
    TimedOut,

    /// The service rejected the order with a non-2xx response.
    #[error("order rejected ({status}): {message}")]
    Rejected {
        /// HTTP status of the response.
        status: StatusCode,
        /// Error message from the response body, when one was given.
        message: String,
    },
}

impl From<reqwest::Error> for OrdersApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::TimedOut
        } else {
            Self::Http(error)
        }
    }
}

/// Lifecycle states of an accepted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Accepted, not yet picked up by the kitchen.
    Pending,
    /// Being prepared.
    InProgress,
    /// Delivered to the table.
    Completed,
    /// Cancelled by staff.
    Cancelled,
}

/// The created order representation returned on acceptance.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderConfirmation {
    /// Server-assigned order id.
    #[serde(rename = "_id")]
    pub id: String,

    /// Lifecycle state assigned on creation.
    pub status: OrderStatus,

    /// Creation time assigned by the service.
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
}

/// Write access to the order-creation endpoint.
#[automock]
#[async_trait]
pub trait OrdersApi: Send + Sync {
    /// Submit a consolidated order. One request, no retry.
    async fn create_order(&self, order: OrderRequest) -> Result<OrderConfirmation, OrdersApiError>;
}

/// HTTP client for the order-creation endpoint.
#[derive(Debug, Clone)]
pub struct HttpOrdersApi {
    config: ApiConfig,
    http: Client,
}

impl HttpOrdersApi {
    /// Create a client from the given configuration.
    ///
    /// The configured timeout bounds the wait on a hung submission.
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
impl OrdersApi for HttpOrdersApi {
    async fn create_order(&self, order: OrderRequest) -> Result<OrderConfirmation, OrdersApiError> {
        let url = format!("{}/api/orders", self.config.base_url);

        let response = self.http.post(&url).json(&order).send().await?;

        if !response.status().is_success() {
            let status = response.status();

            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("request failed with status {status}"),
            };

            return Err(OrdersApiError::Rejected { status, message });
        }

        Ok(response.json().await?)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}
