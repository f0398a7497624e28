// ============================================================================
// Actors Module
// ============================================================================
//
// Actor-based hosting for the rotating views. Each actor's mailbox is the
// single logical thread its controller runs on: ticks and user navigation
// are serialized, last write wins.
//
// Structure:
// - rotation    - RotationActor (one per mounted view, owns its timer)
// - coordinator - ViewCoordinator (mount / unmount / shutdown)
//
// Note: Order progress is pure and needs no actor.
//
// ============================================================================

mod coordinator;
mod rotation;

pub use coordinator::{GetView, MountView, Shutdown, UnmountView, ViewCoordinator};
pub use rotation::{
    GetSnapshot, GoNext, GoPrevious, GoTo, HoverEnter, RotationActor, RotationSnapshot,
    SetInterval, SetItemCount, Unmount,
};
