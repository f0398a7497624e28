use serde::Serialize;
use chrono::{DateTime, Utc};

use super::progress::OrderProgress;
use super::value_objects::Order;

// ============================================================================
// Presentation States - what the tracker and history views draw
// ============================================================================

/// Single-order tracker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TrackerView {
    NoOrder,
    Tracking(OrderProgress),
}

impl TrackerView {
    pub fn from_latest(order: Option<&Order>) -> Self {
        match order {
            Some(order) => TrackerView::Tracking(OrderProgress::derive(order)),
            None => TrackerView::NoOrder,
        }
    }
}

/// One row in the order history list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub placed_at: DateTime<Utc>,
    pub total_amount: f64,
    pub total_item_count: u32,
    pub slot: String,
    pub payment_type: String,
    pub progress: OrderProgress,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum HistoryView {
    NoHistory,
    Orders(Vec<HistoryEntry>),
}

impl HistoryView {
    /// Newest order first. An empty history is its own state, not an error.
    pub fn from_orders(orders: &[Order]) -> Self {
        if orders.is_empty() {
            return HistoryView::NoHistory;
        }

        let mut entries: Vec<HistoryEntry> = orders
            .iter()
            .map(|order| HistoryEntry {
                placed_at: order.placed_at,
                total_amount: order.total_amount,
                total_item_count: order.total_item_count,
                slot: order.slot.clone(),
                payment_type: order.payment_type.clone(),
                progress: OrderProgress::derive(order),
            })
            .collect();

        entries.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        HistoryView::Orders(entries)
    }

    pub fn len(&self) -> usize {
        match self {
            HistoryView::NoHistory => 0,
            HistoryView::Orders(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
