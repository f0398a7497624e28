use actix::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

use crate::metrics::Metrics;
use crate::rotation::{RotatingView, RotationConfig};
use super::rotation::{RotationActor, SetItemCount, Unmount};

// ============================================================================
// View Coordinator - mounts and unmounts the rotating views of a page
// ============================================================================
//
// Responsibilities:
// - Owns one RotationActor per mounted view (never shared between views)
// - Translates source item counts into rotation counts (pages for paged views)
// - Unmounting a view stops its actor, which releases its timer
// - Coordinates graceful shutdown
//
// Actor Hierarchy:
//   ViewCoordinator
//   ├── RotationActor (hero banner)
//   ├── RotationActor (testimonials)
//   └── RotationActor (step highlighter)
//
// ============================================================================

pub struct ViewCoordinator {
    configs: HashMap<RotatingView, RotationConfig>,
    mounted: HashMap<RotatingView, Addr<RotationActor>>,
    metrics: Option<Arc<Metrics>>,
}

impl ViewCoordinator {
    pub fn new() -> Self {
        Self {
            configs: RotatingView::ALL
                .into_iter()
                .map(|view| (view, view.default_config()))
                .collect(),
            mounted: HashMap::new(),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Override the preset for one view. Applies to future mounts.
    pub fn with_config(mut self, view: RotatingView, config: RotationConfig) -> Self {
        self.configs.insert(view, config);
        self
    }

    fn config_for(&self, view: RotatingView) -> RotationConfig {
        self.configs
            .get(&view)
            .cloned()
            .unwrap_or_else(|| view.default_config())
    }
}

impl Default for ViewCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for ViewCoordinator {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        tracing::info!("ViewCoordinator started");
    }

    fn stopping(&mut self, _: &mut Self::Context) -> Running {
        tracing::info!(mounted = self.mounted.len(), "ViewCoordinator stopping - unmounting views");
        for (_, addr) in self.mounted.drain() {
            addr.do_send(Unmount);
        }
        Running::Stop
    }
}

// ============================================================================
// Messages
// ============================================================================

/// Mount a view over `total_items` source items. Mounting an already
/// mounted view only updates its item count.
#[derive(Message)]
#[rtype(result = "Addr<RotationActor>")]
pub struct MountView {
    pub view: RotatingView,
    pub total_items: usize,
}

/// Returns whether the view was mounted.
#[derive(Message)]
#[rtype(result = "bool")]
pub struct UnmountView(pub RotatingView);

#[derive(Message)]
#[rtype(result = "Option<Addr<RotationActor>>")]
pub struct GetView(pub RotatingView);

#[derive(Message)]
#[rtype(result = "Result<(), String>")]
pub struct Shutdown;

impl Handler<MountView> for ViewCoordinator {
    type Result = MessageResult<MountView>;

    fn handle(&mut self, msg: MountView, _ctx: &mut Self::Context) -> Self::Result {
        let config = self.config_for(msg.view);
        let item_count = config.item_count_for(msg.total_items);

        if let Some(addr) = self.mounted.get(&msg.view) {
            if addr.connected() {
                tracing::debug!(view = msg.view.name(), item_count, "View already mounted, updating item count");
                addr.do_send(SetItemCount(item_count));
                return MessageResult(addr.clone());
            }
            // Stopped behind our back via a direct Unmount
            tracing::debug!(view = msg.view.name(), "Dropping stale view, mounting fresh");
            self.mounted.remove(&msg.view);
        }

        let mut actor = RotationActor::new(msg.view, &config, item_count);
        if let Some(ref metrics) = self.metrics {
            actor = actor.with_metrics(metrics.clone());
        }

        let addr = actor.start();
        self.mounted.insert(msg.view, addr.clone());
        MessageResult(addr)
    }
}

impl Handler<UnmountView> for ViewCoordinator {
    type Result = bool;

    fn handle(&mut self, msg: UnmountView, _ctx: &mut Self::Context) -> Self::Result {
        match self.mounted.remove(&msg.0) {
            Some(addr) => {
                addr.do_send(Unmount);
                true
            }
            None => false,
        }
    }
}

impl Handler<GetView> for ViewCoordinator {
    type Result = MessageResult<GetView>;

    fn handle(&mut self, msg: GetView, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.mounted.get(&msg.0).filter(|addr| addr.connected()).cloned())
    }
}

impl Handler<Shutdown> for ViewCoordinator {
    type Result = Result<(), String>;

    fn handle(&mut self, _msg: Shutdown, ctx: &mut Self::Context) -> Self::Result {
        tracing::info!("Received shutdown signal");
        ctx.stop();
        Ok(())
    }
}
