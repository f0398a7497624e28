use serde::Serialize;
use chrono::{DateTime, Utc};

use super::value_objects::{FulfillmentStep, Order, OrderStatus, Stage, StepState};

// ============================================================================
// Order Progress Model
// ============================================================================
//
// Pure derivations over an order's flow. Shared by the single-order tracker
// and the order history list.
//
// The flow is assumed to have its completed steps as a contiguous prefix.
// This is not validated: a gap makes `current_step_index` report the first
// incomplete step, which may understate progress.
//
// ============================================================================

/// Aggregate status of a flow.
///
/// An empty flow is `Delivered`: every step of nothing is completed.
pub fn aggregate_status(flow: &[FulfillmentStep]) -> OrderStatus {
    let completed = flow.iter().filter(|step| step.completed).count();

    if completed == flow.len() {
        OrderStatus::Delivered
    } else if completed == 0 {
        OrderStatus::Placed
    } else {
        OrderStatus::InProgress
    }
}

/// Index of the first incomplete step, or `flow.len()` when the pipeline is
/// finished. Callers must not dereference the returned index in that case.
pub fn current_step_index(flow: &[FulfillmentStep]) -> usize {
    flow.iter()
        .position(|step| !step.completed)
        .unwrap_or(flow.len())
}

/// Display variant for the step at `index`. Out-of-range indices are `Upcoming`.
pub fn step_presentation_state(flow: &[FulfillmentStep], index: usize) -> StepState {
    match flow.get(index) {
        Some(step) if step.completed => StepState::Completed,
        Some(_) if index == current_step_index(flow) => StepState::Current,
        _ => StepState::Upcoming,
    }
}

// ============================================================================
// Derived Snapshot
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepProgress {
    pub label: String,
    pub stage: Stage,
    pub state: StepState,
    /// Only surfaced for completed steps, and only when the source had one.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Everything a view needs to draw one order's progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderProgress {
    pub order_id: String,
    pub status: OrderStatus,
    pub current_index: usize,
    pub completed_steps: usize,
    pub total_steps: usize,
    pub steps: Vec<StepProgress>,
}

impl OrderProgress {
    pub fn derive(order: &Order) -> Self {
        let flow = order.flow.as_slice();
        let current_index = current_step_index(flow);

        let steps: Vec<StepProgress> = flow
            .iter()
            .enumerate()
            .map(|(index, step)| StepProgress {
                label: step.label.clone(),
                stage: step.stage(),
                state: step_presentation_state(flow, index),
                completed_at: step.completed.then_some(step.completed_at).flatten(),
            })
            .collect();

        let progress = Self {
            order_id: order.id.clone(),
            status: aggregate_status(flow),
            current_index,
            completed_steps: flow.iter().filter(|step| step.completed).count(),
            total_steps: flow.len(),
            steps,
        };

        tracing::debug!(
            order_id = %progress.order_id,
            status = ?progress.status,
            current_index = progress.current_index,
            total_steps = progress.total_steps,
            "Derived order progress"
        );

        progress
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.total_steps
    }

    /// Label of the active step, `None` once the pipeline is finished.
    pub fn current_step_label(&self) -> Option<&str> {
        self.steps
            .get(self.current_index)
            .map(|step| step.label.as_str())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn flow_of(completed: &[bool]) -> Vec<FulfillmentStep> {
        completed
            .iter()
            .enumerate()
            .map(|(i, done)| FulfillmentStep {
                label: Stage::CATALOG[i % Stage::CATALOG.len()].canonical_label().to_string(),
                completed: *done,
                completed_at: done.then(Utc::now),
            })
            .collect()
    }

    #[test]
    fn test_all_completed_is_delivered() {
        let flow = flow_of(&[true; 6]);
        assert_eq!(aggregate_status(&flow), OrderStatus::Delivered);
        assert_eq!(current_step_index(&flow), 6);
    }

    #[test]
    fn test_none_completed_is_placed() {
        let flow = flow_of(&[false; 6]);
        assert_eq!(aggregate_status(&flow), OrderStatus::Placed);
        assert_eq!(current_step_index(&flow), 0);
    }

    #[test]
    fn test_empty_flow_is_delivered() {
        let flow: Vec<FulfillmentStep> = Vec::new();
        assert_eq!(aggregate_status(&flow), OrderStatus::Delivered);
        assert_eq!(current_step_index(&flow), 0);
    }

    #[test]
    fn test_partial_flow() {
        let flow = flow_of(&[true, true, false, false]);
        assert_eq!(aggregate_status(&flow), OrderStatus::InProgress);
        assert_eq!(current_step_index(&flow), 2);
        assert_eq!(step_presentation_state(&flow, 0), StepState::Completed);
        assert_eq!(step_presentation_state(&flow, 1), StepState::Completed);
        assert_eq!(step_presentation_state(&flow, 2), StepState::Current);
        assert_eq!(step_presentation_state(&flow, 3), StepState::Upcoming);
    }

    #[test]
    fn test_gap_in_prefix_reports_first_incomplete() {
        let flow = flow_of(&[true, false, true, false]);
        assert_eq!(current_step_index(&flow), 1);
        assert_eq!(aggregate_status(&flow), OrderStatus::InProgress);
        // The stray completed step still renders as completed.
        assert_eq!(step_presentation_state(&flow, 2), StepState::Completed);
        assert_eq!(step_presentation_state(&flow, 3), StepState::Upcoming);
    }

    #[test]
    fn test_presentation_state_past_end() {
        let flow = flow_of(&[true, true]);
        assert_eq!(step_presentation_state(&flow, 2), StepState::Upcoming);
    }

    #[test]
    fn test_derive_snapshot() {
        let mut order = Order::with_canonical_flow("ord-7", Utc::now(), "4pm - 6pm", "Card");
        order.flow[0] = FulfillmentStep::done("Order placed", Some(Utc::now()));
        order.flow[1] = FulfillmentStep::done("Agent arriving", None);

        let progress = OrderProgress::derive(&order);
        assert_eq!(progress.status, OrderStatus::InProgress);
        assert_eq!(progress.current_index, 2);
        assert_eq!(progress.completed_steps, 2);
        assert_eq!(progress.total_steps, 6);
        assert_eq!(progress.current_step_label(), Some("Collected clothes"));
        assert!(progress.steps[0].completed_at.is_some());
        assert!(progress.steps[1].completed_at.is_none());
        assert_eq!(progress.steps[2].state, StepState::Current);
        assert!(!progress.is_finished());
    }

    #[test]
    fn test_timestamp_hidden_on_incomplete_step() {
        let mut order = Order::with_canonical_flow("ord-8", Utc::now(), "", "");
        order.flow[0].completed_at = Some(Utc::now());

        let progress = OrderProgress::derive(&order);
        assert_eq!(progress.steps[0].state, StepState::Current);
        assert!(progress.steps[0].completed_at.is_none());
    }

    #[test]
    fn test_finished_pipeline_has_no_current_label() {
        let mut order = Order::with_canonical_flow("ord-9", Utc::now(), "", "");
        for step in order.flow.iter_mut() {
            step.completed = true;
        }

        let progress = OrderProgress::derive(&order);
        assert_eq!(progress.status, OrderStatus::Delivered);
        assert!(progress.is_finished());
        assert_eq!(progress.current_step_label(), None);
    }

    #[test]
    fn test_derive_does_not_touch_order() {
        let order = Order::with_canonical_flow("ord-10", Utc::now(), "", "");
        let before = order.clone();
        let _ = OrderProgress::derive(&order);
        assert_eq!(order, before);
    }
}
