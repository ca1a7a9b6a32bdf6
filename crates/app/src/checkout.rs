//! Checkout gateway.
//!
//! Transitions the cart from editable to submitted: validate, issue exactly
//! one order-creation request, then reconcile local state. On acceptance the
//! store is cleared (cart and persisted record); on any failure the cart is
//! left untouched so the customer can retry explicitly. No retry or backoff
//! here; a failed attempt is terminal.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use thiserror::Error;
use tracing::{info, warn};

use mesa::order::{CheckoutDetails, OrderValidationError, build_order};

use crate::{
    api::{OrderConfirmation, OrdersApi, OrdersApiError},
    storage::StorageError,
    store::CartStore,
};

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart or checkout details failed validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] OrderValidationError),

    /// A submission is already in flight for this cart.
    #[error("an order submission is already in progress")]
    SubmissionInFlight,

    /// The order service rejected the submission or was unreachable.
    #[error(transparent)]
    Api(#[from] OrdersApiError),

    /// The order was accepted but the local record could not be cleared.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The order submission gateway.
///
/// Holds the submitting flag, the only concurrency-relevant state in the
/// system: it guards against duplicate submissions from one cart instance
/// while a request is in flight.
pub struct CheckoutService {
    orders: Arc<dyn OrdersApi>,
    submitting: AtomicBool,
}

impl CheckoutService {
    /// Create a gateway over the given order client.
    #[must_use]
    pub fn new(orders: Arc<dyn OrdersApi>) -> Self {
        Self {
            orders,
            submitting: AtomicBool::new(false),
        }
    }

    /// Whether a submission is currently in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Submit the cart as a consolidated order.
    ///
    /// Validation runs before the flag is touched or any request is issued,
    /// so a rejected cart never enters the submitting state. On a 2xx the
    /// store is cleared and the confirmation returned; otherwise the cart is
    /// preserved intact. The flag resets on every outcome.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::Validation`]: empty cart or blank customer fields.
    /// - [`CheckoutError::SubmissionInFlight`]: another submission holds the flag.
    /// - [`CheckoutError::Api`]: the service rejected the order, timed out or was unreachable.
    /// - [`CheckoutError::Storage`]: the accepted order's local record could not be removed.
    pub async fn submit(
        &self,
        store: &mut CartStore,
        details: &CheckoutDetails,
    ) -> Result<OrderConfirmation, CheckoutError> {
        let order = build_order(store.cart(), details)?;

        if self.submitting.swap(true, Ordering::SeqCst) {
            return Err(CheckoutError::SubmissionInFlight);
        }

        info!(
            items = order.products.len(),
            total = order.total_price,
            "submitting order"
        );

        let result = self.orders.create_order(order).await;
        self.submitting.store(false, Ordering::SeqCst);

        let confirmation = result.inspect_err(|error| {
            warn!(%error, "order submission failed; cart preserved");
        })?;

        store.clear()?;

        info!(order = %confirmation.id, "order accepted");

        Ok(confirmation)
    }
}
