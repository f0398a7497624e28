// ============================================================================
// Order Domain - Progress Derivation for the Tracker and History Views
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (Order, FulfillmentStep, Stage, OrderStatus, StepState)
// - Progress model (aggregate_status, current_step_index, ...)
// - Presentation states (TrackerView, HistoryView)
// - Order source (the query-layer seam)
// - Query handler (OrderQueryHandler)
// - Errors (OrderError enum)
//
// Orders are owned by the query layer. Nothing here mutates them.
//
// ============================================================================

pub mod value_objects;
pub mod progress;
pub mod presentation;
pub mod source;
pub mod errors;
pub mod query_handler;

// Re-export for convenience
pub use value_objects::*;
pub use progress::*;
pub use presentation::*;
pub use source::*;
pub use errors::*;
pub use query_handler::*;
