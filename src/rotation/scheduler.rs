use std::collections::HashSet;
use std::time::Duration;

use super::controller::RotationController;

// ============================================================================
// Scheduling Capability
// ============================================================================
//
// The host event loop provides "run every N ms" and "cancel" primitives.
// `AutoplayTimer` holds at most one armed handle per controller, so a
// controller never has two timers layered on top of each other.
//
// ============================================================================

pub trait Scheduler {
    type Handle;

    fn schedule_repeating(&mut self, interval: Duration) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Debug)]
pub struct AutoplayTimer<H> {
    handle: Option<H>,
    interval: Option<Duration>,
}

impl<H> Default for AutoplayTimer<H> {
    fn default() -> Self {
        Self {
            handle: None,
            interval: None,
        }
    }
}

impl<H> AutoplayTimer<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Arm when the controller should tick, release when it should not.
    /// An armed timer with a stale interval is replaced.
    pub fn sync<S>(&mut self, controller: &RotationController, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        if !controller.is_ticking() {
            self.release(scheduler);
            return;
        }

        if self.interval != Some(controller.interval()) {
            self.release(scheduler);
        }

        if self.handle.is_none() {
            tracing::debug!(interval_ms = controller.interval().as_millis() as u64, "Arming autoplay timer");
            self.handle = Some(scheduler.schedule_repeating(controller.interval()));
            self.interval = Some(controller.interval());
        }
    }

    /// Drop any armed timer and arm a fresh one if the controller still ticks.
    pub fn rearm<S>(&mut self, controller: &RotationController, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.release(scheduler);
        self.sync(controller, scheduler);
    }

    /// Idempotent.
    pub fn release<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.interval = None;
        if let Some(handle) = self.handle.take() {
            tracing::debug!("Releasing autoplay timer");
            scheduler.cancel(handle);
        }
    }
}

/// Scheduler with no clock behind it. Records what was armed and cancelled;
/// callers fire ticks themselves.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    active: HashSet<u64>,
    pub scheduled: u32,
    pub cancelled: u32,
    pub last_interval: Option<Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_timers(&self) -> usize {
        self.active.len()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule_repeating(&mut self, interval: Duration) -> u64 {
        self.next_id += 1;
        self.active.insert(self.next_id);
        self.scheduled += 1;
        self.last_interval = Some(interval);
        self.next_id
    }

    fn cancel(&mut self, handle: u64) {
        if self.active.remove(&handle) {
            self.cancelled += 1;
        }
    }
}
