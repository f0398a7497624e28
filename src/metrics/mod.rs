use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::domain::order::OrderStatus;

// ============================================================================
// Metrics Module - Prometheus counters for the presentation core
// ============================================================================
//
// Provides metrics for:
// - Autoplay ticks and manual navigation per rotating view
// - Autoplay pauses and timer rearms
// - Order progress derivations by resulting status
//
// The core has no network surface; hosts export `encode_text()` themselves.
// ============================================================================

pub struct Metrics {
    registry: Registry,

    // Rotation Metrics
    pub rotation_ticks: IntCounterVec,
    pub rotation_navigations: IntCounterVec,
    pub rotation_autoplay_paused: IntCounterVec,
    pub rotation_timer_rearms: IntCounterVec,

    // Order Metrics
    pub order_progress_derivations: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let rotation_ticks = IntCounterVec::new(
            Opts::new("rotation_ticks_total", "Autoplay ticks that advanced a rotation"),
            &["view"],
        )?;
        registry.register(Box::new(rotation_ticks.clone()))?;

        let rotation_navigations = IntCounterVec::new(
            Opts::new("rotation_navigations_total", "User-driven rotation navigation"),
            &["view", "action"],
        )?;
        registry.register(Box::new(rotation_navigations.clone()))?;

        let rotation_autoplay_paused = IntCounterVec::new(
            Opts::new("rotation_autoplay_paused_total", "Rotations whose autoplay was stopped by the user"),
            &["view"],
        )?;
        registry.register(Box::new(rotation_autoplay_paused.clone()))?;

        let rotation_timer_rearms = IntCounterVec::new(
            Opts::new("rotation_timer_rearms_total", "Autoplay timers rearmed after a count or interval change"),
            &["view"],
        )?;
        registry.register(Box::new(rotation_timer_rearms.clone()))?;

        let order_progress_derivations = IntCounterVec::new(
            Opts::new("order_progress_derivations_total", "Order progress derivations by status"),
            &["status"],
        )?;
        registry.register(Box::new(order_progress_derivations.clone()))?;

        Ok(Self {
            registry,
            rotation_ticks,
            rotation_navigations,
            rotation_autoplay_paused,
            rotation_timer_rearms,
            order_progress_derivations,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_tick(&self, view: &str) {
        self.rotation_ticks.with_label_values(&[view]).inc();
    }

    pub fn record_navigation(&self, view: &str, action: &str) {
        self.rotation_navigations.with_label_values(&[view, action]).inc();
    }

    pub fn record_autoplay_paused(&self, view: &str) {
        self.rotation_autoplay_paused.with_label_values(&[view]).inc();
    }

    pub fn record_timer_rearm(&self, view: &str) {
        self.rotation_timer_rearms.with_label_values(&[view]).inc();
    }

    pub fn record_derivation(&self, status: OrderStatus) {
        let label = match status {
            OrderStatus::Placed => "placed",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Delivered => "delivered",
        };
        self.order_progress_derivations.with_label_values(&[label]).inc();
    }

    /// Prometheus text exposition of everything registered.
    pub fn encode_text(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tick() {
        let metrics = Metrics::new().unwrap();
        metrics.record_tick("hero_banner");
        metrics.record_tick("hero_banner");

        let gathered = metrics.registry.gather();
        let ticks = gathered.iter().find(|m| m.name() == "rotation_ticks_total").unwrap();
        assert_eq!(ticks.metric[0].counter.value, Some(2.0));
    }

    #[test]
    fn test_record_navigation_labels() {
        let metrics = Metrics::new().unwrap();
        metrics.record_navigation("testimonials", "next");
        metrics.record_navigation("testimonials", "previous");

        let gathered = metrics.registry.gather();
        let navigations = gathered.iter().find(|m| m.name() == "rotation_navigations_total").unwrap();
        assert_eq!(navigations.metric.len(), 2);
    }

    #[test]
    fn test_encode_text() {
        let metrics = Metrics::new().unwrap();
        metrics.record_derivation(OrderStatus::InProgress);
        metrics.record_autoplay_paused("testimonials");

        let text = metrics.encode_text().unwrap();
        assert!(text.contains("order_progress_derivations_total{status=\"in_progress\"} 1"));
        assert!(text.contains("rotation_autoplay_paused_total"));
    }
}
