// ============================================================================
// Domain Layer - Order Progress
// ============================================================================
//
// Passive order records supplied by the query layer, plus the pure
// derivations views draw from. The signed-in session is an explicit
// read-only value, never ambient state.
//
// ============================================================================

pub mod order;
pub mod session;

pub use session::Session;
