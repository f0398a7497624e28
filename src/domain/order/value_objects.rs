use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Canonical fulfillment stages, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    OrderPlaced,
    AgentArriving,
    CollectedClothes,
    ReachedWarehouse,
    ArrivingToCustomer,
    Delivered,
    /// Any label outside the catalog. Rendered with a generic presentation.
    Unrecognized,
}

impl Stage {
    pub const CATALOG: [Stage; 6] = [
        Stage::OrderPlaced,
        Stage::AgentArriving,
        Stage::CollectedClothes,
        Stage::ReachedWarehouse,
        Stage::ArrivingToCustomer,
        Stage::Delivered,
    ];

    /// Map a step label onto the catalog. Never fails.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::CATALOG
            .into_iter()
            .find(|stage| stage.canonical_label().eq_ignore_ascii_case(label))
            .unwrap_or(Stage::Unrecognized)
    }

    pub fn canonical_label(&self) -> &'static str {
        match self {
            Stage::OrderPlaced => "Order placed",
            Stage::AgentArriving => "Agent arriving",
            Stage::CollectedClothes => "Collected clothes",
            Stage::ReachedWarehouse => "Clothes reached warehouse",
            Stage::ArrivingToCustomer => "Clothes arriving to customer",
            Stage::Delivered => "Clothes delivered",
            Stage::Unrecognized => "Update",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Stage::Unrecognized)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentStep {
    pub label: String,
    pub completed: bool,
    /// Expected only on completed steps; not enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl FulfillmentStep {
    pub fn pending(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            completed: false,
            completed_at: None,
        }
    }

    pub fn done(label: impl Into<String>, completed_at: Option<DateTime<Utc>>) -> Self {
        Self {
            label: label.into(),
            completed: true,
            completed_at,
        }
    }

    pub fn stage(&self) -> Stage {
        Stage::from_label(&self.label)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub placed_at: DateTime<Utc>,
    pub total_amount: f64,
    pub total_item_count: u32,
    pub slot: String,
    pub payment_type: String,
    /// Linear pipeline. Completed steps are expected to form a prefix.
    #[serde(default)]
    pub flow: Vec<FulfillmentStep>,
}

impl Order {
    /// A freshly placed order: the whole catalog, nothing completed yet.
    pub fn with_canonical_flow(
        id: impl Into<String>,
        placed_at: DateTime<Utc>,
        slot: impl Into<String>,
        payment_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            placed_at,
            total_amount: 0.0,
            total_item_count: 0,
            slot: slot.into(),
            payment_type: payment_type.into(),
            flow: Stage::CATALOG
                .iter()
                .map(|stage| FulfillmentStep::pending(stage.canonical_label()))
                .collect(),
        }
    }

    /// Parse an order snapshot as delivered by the query layer.
    pub fn from_json(payload: &str) -> Result<Self, OrderError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Aggregate status derived from a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Placed,
    InProgress,
    Delivered,
}

impl OrderStatus {
    pub fn display_label(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::InProgress => "In progress",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

/// Display variant chosen for a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepState {
    Completed,
    Current,
    Upcoming,
}

// ============================================================================
// Unit Tests
// ============================================================================
