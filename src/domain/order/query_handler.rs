use std::sync::Arc;

use crate::domain::session::Session;
use crate::metrics::Metrics;

use super::errors::OrderError;
use super::presentation::{HistoryView, TrackerView};
use super::source::OrderSource;
use super::value_objects::OrderStatus;

// ============================================================================
// Order Query Handler
// ============================================================================
//
// Orchestrates: Session → OrderSource → snapshot → derived presentation
//
// ============================================================================

pub struct OrderQueryHandler<S> {
    source: Arc<S>,
    metrics: Option<Arc<Metrics>>,
}

impl<S: OrderSource> OrderQueryHandler<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source, metrics: None }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Tracker view for the customer's latest order.
    pub fn tracker(&self, session: &Session) -> Result<TrackerView, OrderError> {
        let latest = self.source.latest_order(session)?;
        let view = TrackerView::from_latest(latest.as_ref());

        if let TrackerView::Tracking(ref progress) = view {
            self.record(progress.status);
        } else {
            tracing::debug!(user_id = %session.user_id, "No order to track");
        }

        Ok(view)
    }

    pub fn history(&self, session: &Session) -> Result<HistoryView, OrderError> {
        let orders = self.source.order_history(session)?;
        let view = HistoryView::from_orders(&orders);

        if let HistoryView::Orders(ref entries) = view {
            for entry in entries {
                self.record(entry.progress.status);
            }
        }

        tracing::debug!(user_id = %session.user_id, orders = view.len(), "Built order history");
        Ok(view)
    }

    fn record(&self, status: OrderStatus) {
        if let Some(ref metrics) = self.metrics {
            metrics.record_derivation(status);
        }
    }
}
