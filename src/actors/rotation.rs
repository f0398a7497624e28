use actix::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::metrics::Metrics;
use crate::rotation::{
    AutoplayTimer, InteractionPolicy, RotatingView, RotationConfig, RotationController,
    RotationState, Scheduler,
};

// ============================================================================
// Rotation Actor - hosts one RotationController on the actor event loop
// ============================================================================
//
// Responsibilities:
// - Serializes timer ticks and user navigation for a single view
// - Arms the autoplay timer through the actor context (run_interval)
// - Rearms on item count / interval changes, never layering timers
// - Releases the timer when the view unmounts
//
// ============================================================================

pub struct RotationActor {
    view: RotatingView,
    controller: RotationController,
    timer: AutoplayTimer<SpawnHandle>,
    metrics: Option<Arc<Metrics>>,
}

impl RotationActor {
    pub fn new(view: RotatingView, config: &RotationConfig, item_count: usize) -> Self {
        Self {
            view,
            controller: RotationController::from_config(config, item_count),
            timer: AutoplayTimer::new(),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    fn on_tick(&mut self) {
        if self.controller.tick() {
            tracing::trace!(view = self.view.name(), index = self.controller.current_index(), "Autoplay tick");
            if let Some(ref metrics) = self.metrics {
                metrics.record_tick(self.view.name());
            }
        }
    }

    /// Bookkeeping after any user-driven navigation.
    fn after_navigation(&mut self, action: &str, was_autoplaying: bool, ctx: &mut Context<Self>) {
        if let Some(ref metrics) = self.metrics {
            metrics.record_navigation(self.view.name(), action);
            if was_autoplaying && self.controller.state() == RotationState::Paused {
                metrics.record_autoplay_paused(self.view.name());
            }
        }
        self.timer.sync(&self.controller, &mut ContextScheduler { ctx });
    }

    fn rearm(&mut self, ctx: &mut Context<Self>) {
        if let Some(ref metrics) = self.metrics {
            metrics.record_timer_rearm(self.view.name());
        }
        self.timer.rearm(&self.controller, &mut ContextScheduler { ctx });
    }

    fn snapshot(&self) -> RotationSnapshot {
        RotationSnapshot {
            view: self.view,
            current_index: self.controller.current_index(),
            item_count: self.controller.item_count(),
            state: self.controller.state(),
            timer_armed: self.timer.is_armed(),
        }
    }
}

/// The actor context is the scheduling capability for its controller.
struct ContextScheduler<'a> {
    ctx: &'a mut Context<RotationActor>,
}

impl Scheduler for ContextScheduler<'_> {
    type Handle = SpawnHandle;

    fn schedule_repeating(&mut self, interval: Duration) -> SpawnHandle {
        self.ctx.run_interval(interval, |act, _ctx| act.on_tick())
    }

    fn cancel(&mut self, handle: SpawnHandle) {
        self.ctx.cancel_future(handle);
    }
}

impl Actor for RotationActor {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        tracing::info!(
            view = self.view.name(),
            item_count = self.controller.item_count(),
            policy = ?self.controller.policy(),
            "RotationActor mounted"
        );
        self.timer.sync(&self.controller, &mut ContextScheduler { ctx });
    }

    fn stopping(&mut self, ctx: &mut Self::Context) -> Running {
        self.timer.release(&mut ContextScheduler { ctx });
        Running::Stop
    }

    fn stopped(&mut self, _: &mut Self::Context) {
        tracing::info!(view = self.view.name(), "RotationActor unmounted");
    }
}

// ============================================================================
// Messages
// ============================================================================

#[derive(Message)]
#[rtype(result = "usize")]
pub struct GoNext;

#[derive(Message)]
#[rtype(result = "usize")]
pub struct GoPrevious;

#[derive(Message)]
#[rtype(result = "usize")]
pub struct GoTo(pub usize);

#[derive(Message)]
#[rtype(result = "usize")]
pub struct HoverEnter(pub usize);

#[derive(Message)]
#[rtype(result = "()")]
pub struct SetItemCount(pub usize);

#[derive(Message)]
#[rtype(result = "()")]
pub struct SetInterval(pub Duration);

#[derive(Message)]
#[rtype(result = "RotationSnapshot")]
pub struct GetSnapshot;

/// Message to unmount the view and release its timer
#[derive(Message)]
#[rtype(result = "()")]
pub struct Unmount;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RotationSnapshot {
    pub view: RotatingView,
    pub current_index: usize,
    pub item_count: usize,
    pub state: RotationState,
    pub timer_armed: bool,
}

// ============================================================================
// Message Handlers
// ============================================================================

impl Handler<GoNext> for RotationActor {
    type Result = usize;

    fn handle(&mut self, _: GoNext, ctx: &mut Self::Context) -> Self::Result {
        let was_autoplaying = self.controller.autoplay_enabled();
        let index = self.controller.go_next();
        self.after_navigation("next", was_autoplaying, ctx);
        index
    }
}

impl Handler<GoPrevious> for RotationActor {
    type Result = usize;

    fn handle(&mut self, _: GoPrevious, ctx: &mut Self::Context) -> Self::Result {
        let was_autoplaying = self.controller.autoplay_enabled();
        let index = self.controller.go_previous();
        self.after_navigation("previous", was_autoplaying, ctx);
        index
    }
}

impl Handler<GoTo> for RotationActor {
    type Result = usize;

    fn handle(&mut self, msg: GoTo, ctx: &mut Self::Context) -> Self::Result {
        let was_autoplaying = self.controller.autoplay_enabled();
        let index = self.controller.go_to(msg.0);
        self.after_navigation("select", was_autoplaying, ctx);
        index
    }
}

impl Handler<HoverEnter> for RotationActor {
    type Result = usize;

    fn handle(&mut self, msg: HoverEnter, _ctx: &mut Self::Context) -> Self::Result {
        if self.controller.policy() == InteractionPolicy::HoverOverride {
            if let Some(ref metrics) = self.metrics {
                metrics.record_navigation(self.view.name(), "hover");
            }
        }
        self.controller.on_hover_enter(msg.0)
    }
}

impl Handler<SetItemCount> for RotationActor {
    type Result = ();

    fn handle(&mut self, msg: SetItemCount, ctx: &mut Self::Context) {
        if self.controller.set_item_count(msg.0) {
            self.rearm(ctx);
        }
    }
}

impl Handler<SetInterval> for RotationActor {
    type Result = ();

    fn handle(&mut self, msg: SetInterval, ctx: &mut Self::Context) {
        if self.controller.set_interval(msg.0) {
            self.rearm(ctx);
        }
    }
}

impl Handler<GetSnapshot> for RotationActor {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.snapshot())
    }
}

impl Handler<Unmount> for RotationActor {
    type Result = ();

    fn handle(&mut self, _: Unmount, ctx: &mut Self::Context) {
        tracing::debug!(view = self.view.name(), "Unmount requested");
        ctx.stop();
    }
}
