use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::controller::InteractionPolicy;

// ============================================================================
// Rotation Configuration
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RotationConfig {
    /// Autoplay tick period in milliseconds
    pub interval_ms: u64,
    pub policy: InteractionPolicy,
    /// Start with autoplay on. `false` mounts the view already `Paused` under
    /// any policy; this is the only way outside `OneShotDisable` to reach that
    /// state, and like it there is no resume.
    pub autoplay: bool,
    /// Set when the rotation pages through a list
    pub items_per_page: Option<usize>,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            interval_ms: 5000,
            policy: InteractionPolicy::Sticky,
            autoplay: true,
            items_per_page: None,
        }
    }
}

impl RotationConfig {
    /// Hero banner slideshow: manual choice can be overwritten by the next tick.
    pub fn hero_banner() -> Self {
        Self::default()
    }

    /// Testimonial pager: any manual paging stops autoplay.
    pub fn testimonials() -> Self {
        Self {
            interval_ms: 4000,
            policy: InteractionPolicy::OneShotDisable,
            autoplay: true,
            items_per_page: Some(3),
        }
    }

    /// "How it works" step highlighter: hover selects, the timer keeps going.
    pub fn step_highlighter() -> Self {
        Self {
            interval_ms: 2500,
            policy: InteractionPolicy::HoverOverride,
            autoplay: true,
            items_per_page: None,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Rotation item count for `total_items` source items.
    pub fn item_count_for(&self, total_items: usize) -> usize {
        match self.items_per_page {
            Some(per_page) => super::pagination::page_count(total_items, per_page),
            None => total_items,
        }
    }

    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}

/// The rotating elements of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotatingView {
    HeroBanner,
    Testimonials,
    StepHighlighter,
}

impl RotatingView {
    pub const ALL: [RotatingView; 3] = [
        RotatingView::HeroBanner,
        RotatingView::Testimonials,
        RotatingView::StepHighlighter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RotatingView::HeroBanner => "hero_banner",
            RotatingView::Testimonials => "testimonials",
            RotatingView::StepHighlighter => "step_highlighter",
        }
    }

    pub fn default_config(&self) -> RotationConfig {
        match self {
            RotatingView::HeroBanner => RotationConfig::hero_banner(),
            RotatingView::Testimonials => RotationConfig::testimonials(),
            RotatingView::StepHighlighter => RotationConfig::step_highlighter(),
        }
    }
}
