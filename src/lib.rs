// ============================================================================
// Laundry Storefront - presentation core
// ============================================================================
//
// - domain/   - order progress derivation, presentation states, session
// - rotation/ - timed rotation controller, pagination, scheduling seam
// - actors/   - actix hosting for rotating views
// - metrics/  - prometheus counters
//
// ============================================================================

pub mod actors;
pub mod domain;
pub mod metrics;
pub mod rotation;
