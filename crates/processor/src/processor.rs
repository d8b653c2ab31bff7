//! Order processor orchestrating validation, persistence, and notification.

use domain::{Money, Order};

use crate::error::{PipelineError, ProcessorError};
use crate::services::email::EmailService;
use crate::services::storage::OrderStore;

/// Order total above which a confirmation email is sent.
///
/// The comparison is strictly greater-than: an order of exactly $100.00
/// is persisted without notification.
pub const CONFIRMATION_THRESHOLD: Money = Money::from_dollars(100);

/// Orchestrates the processing of a single order.
///
/// The processor holds the two capabilities it depends on and exposes
/// one operation, [`process_order`](Self::process_order). It runs each
/// step to completion before the next; there is no retry, cancellation,
/// or timeout at this layer.
pub struct OrderProcessor<S, E>
where
    S: OrderStore,
    E: EmailService,
{
    store: S,
    email: E,
}

impl<S, E> OrderProcessor<S, E>
where
    S: OrderStore,
    E: EmailService,
{
    /// Creates a new processor wired with concrete capabilities.
    pub fn new(store: S, email: E) -> Self {
        Self { store, email }
    }

    /// Validates, persists, and conditionally notifies for one order.
    ///
    /// Returns `Ok(true)` when the order was saved, notified when its
    /// total exceeds [`CONFIRMATION_THRESHOLD`], and marked processed.
    /// Returns `Ok(false)` when the total is not strictly positive (no
    /// collaborator is touched) or when persistence or notification
    /// failed. Passing `None` fails with
    /// [`ProcessorError::MissingOrder`]; a connect failure also
    /// propagates, since connectivity is established outside the
    /// failure-absorbing region.
    ///
    /// Known inconsistency, preserved on purpose: save and notification
    /// failures are indistinguishable to the caller, so a save can
    /// succeed and the order still be reported unprocessed when the
    /// confirmation fails afterwards. Nothing is rolled back.
    #[tracing::instrument(skip(self, order))]
    pub async fn process_order(&self, order: Option<&mut Order>) -> Result<bool, ProcessorError> {
        let order = order.ok_or(ProcessorError::MissingOrder)?;

        if order.total_amount() <= Money::zero() {
            metrics::counter!("orders_rejected_total").increment(1);
            tracing::debug!(order_id = %order.id(), "order rejected: non-positive total");
            return Ok(false);
        }

        if !self.store.is_connected().await {
            self.store.connect().await?;
        }

        match self.persist_and_notify(order).await {
            Ok(()) => {
                metrics::counter!("orders_processed_total").increment(1);
                tracing::info!(order_id = %order.id(), "order processed");
                Ok(true)
            }
            // Absorbed uniformly; the caller sees only an unprocessed
            // order, whichever step failed.
            Err(_) => {
                metrics::counter!("orders_failed_total").increment(1);
                Ok(false)
            }
        }
    }

    /// The failure-absorbing region: persist, notify when above the
    /// threshold, then mark processed. Any error aborts the region and
    /// leaves the order unmarked, regardless of how far it got.
    async fn persist_and_notify(&self, order: &mut Order) -> Result<(), PipelineError> {
        self.store.save(order).await?;

        if order.total_amount() > CONFIRMATION_THRESHOLD {
            self.email
                .send_order_confirmation(order.customer_email(), order.id())
                .await?;
        }

        order.mark_processed();
        Ok(())
    }
}
