// ============================================================================
// Rotation - timed index rotation for slideshows, pagers and highlighters
// ============================================================================
//
// - controller/ - the state machine (tick, manual navigation, policies)
// - scheduler/  - injected timer capability and the single-timer slot
// - pagination/ - page count and slicing for paged rotations
// - config/     - per-view presets
//
// ============================================================================

pub mod controller;
pub mod scheduler;
pub mod pagination;
pub mod config;

pub use controller::{InteractionPolicy, RotationController, RotationState};
pub use scheduler::{AutoplayTimer, ManualScheduler, Scheduler};
pub use pagination::{page_count, page_slice, Paginator};
pub use config::{RotatingView, RotationConfig};
