use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::config::RotationConfig;

// ============================================================================
// Rotation Controller - auto-advancing index over a fixed set of items
// ============================================================================
//
// One controller per rotating view. Drives banner slides, testimonial pages
// and the highlighted step alike; the only difference between them is how
// manual navigation reconciles with the autoplay timer.
//
// States:
// - Autoplaying: tick() advances the index
// - Paused:      tick() has no effect (OneShotDisable, or `autoplay: false`)
//
// The controller never touches a clock. A host calls tick() on each timer
// fire; see `AutoplayTimer` for the timer side.
//
// ============================================================================

/// How manual navigation interacts with autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionPolicy {
    /// Manual navigation leaves the timer alone. The next tick may overwrite it.
    Sticky,
    /// The first manual navigation stops autoplay for good.
    OneShotDisable,
    /// Hovering selects an index; the timer keeps running.
    HoverOverride,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RotationState {
    Autoplaying,
    Paused,
}

#[derive(Debug, Clone)]
pub struct RotationController {
    item_count: usize,
    current_index: usize,
    interval: Duration,
    autoplay_enabled: bool,
    policy: InteractionPolicy,
}

impl RotationController {
    pub fn new(item_count: usize, interval: Duration, policy: InteractionPolicy) -> Self {
        Self {
            item_count,
            current_index: 0,
            interval,
            autoplay_enabled: true,
            policy,
        }
    }

    pub fn from_config(config: &RotationConfig, item_count: usize) -> Self {
        let mut controller = Self::new(item_count, config.interval(), config.policy);
        controller.autoplay_enabled = config.autoplay;
        controller
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn policy(&self) -> InteractionPolicy {
        self.policy
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    pub fn state(&self) -> RotationState {
        if self.autoplay_enabled {
            RotationState::Autoplaying
        } else {
            RotationState::Paused
        }
    }

    /// Whether a timer should currently be armed for this controller.
    pub fn is_ticking(&self) -> bool {
        self.autoplay_enabled && self.item_count > 1
    }

    /// Timer fire. Returns whether the index moved.
    pub fn tick(&mut self) -> bool {
        if !self.is_ticking() {
            return false;
        }
        self.current_index = (self.current_index + 1) % self.item_count;
        true
    }

    pub fn go_next(&mut self) -> usize {
        if self.item_count > 0 {
            self.current_index = (self.current_index + 1) % self.item_count;
        }
        self.after_manual_navigation("next");
        self.current_index
    }

    pub fn go_previous(&mut self) -> usize {
        if self.item_count > 0 {
            self.current_index = (self.current_index + self.item_count - 1) % self.item_count;
        }
        self.after_manual_navigation("previous");
        self.current_index
    }

    /// Jump to `index`, clamped into `[0, item_count)`.
    pub fn go_to(&mut self, index: usize) -> usize {
        self.current_index = self.clamp(index);
        self.after_manual_navigation("select");
        self.current_index
    }

    /// Hover selection. Ignored unless the policy is `HoverOverride`.
    pub fn on_hover_enter(&mut self, index: usize) -> usize {
        if self.policy == InteractionPolicy::HoverOverride {
            self.current_index = self.clamp(index);
        } else {
            tracing::debug!(policy = ?self.policy, index, "Ignoring hover outside hover policy");
        }
        self.current_index
    }

    /// Replace the item count. Resets the index when it falls out of range.
    /// Returns true when the count actually changed, meaning the timer must be rearmed.
    pub fn set_item_count(&mut self, item_count: usize) -> bool {
        if item_count == self.item_count {
            return false;
        }

        tracing::debug!(
            from = self.item_count,
            to = item_count,
            "Rotation item count changed"
        );

        self.item_count = item_count;
        if self.current_index >= item_count {
            self.current_index = 0;
        }
        true
    }

    /// Returns true when the interval changed, meaning the timer must be rearmed.
    pub fn set_interval(&mut self, interval: Duration) -> bool {
        if interval == self.interval {
            return false;
        }
        self.interval = interval;
        true
    }

    fn after_manual_navigation(&mut self, action: &str) {
        if self.policy == InteractionPolicy::OneShotDisable && self.autoplay_enabled {
            tracing::info!(action, index = self.current_index, "Manual navigation paused autoplay");
            self.autoplay_enabled = false;
        }
    }

    fn clamp(&self, index: usize) -> usize {
        if self.item_count == 0 {
            return 0;
        }
        if index >= self.item_count {
            tracing::warn!(index, item_count = self.item_count, "Rotation index out of range, clamping");
        }
        index.min(self.item_count - 1)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const POLICIES: [InteractionPolicy; 3] = [
        InteractionPolicy::Sticky,
        InteractionPolicy::OneShotDisable,
        InteractionPolicy::HoverOverride,
    ];

    fn controller(item_count: usize, policy: InteractionPolicy) -> RotationController {
        RotationController::new(item_count, Duration::from_millis(100), policy)
    }

    #[test]
    fn test_starts_autoplaying_at_zero() {
        for policy in POLICIES {
            let c = controller(5, policy);
            assert_eq!(c.current_index(), 0);
            assert_eq!(c.state(), RotationState::Autoplaying);
            assert!(c.is_ticking());
        }
    }

    #[test]
    fn test_one_shot_disable_pauses_on_manual_navigation() {
        let mut c = controller(5, InteractionPolicy::OneShotDisable);
        c.go_next();
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.state(), RotationState::Paused);

        for _ in 0..10 {
            assert!(!c.tick());
        }
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_one_shot_disable_pauses_on_previous_and_select() {
        let mut c = controller(5, InteractionPolicy::OneShotDisable);
        c.go_previous();
        assert_eq!(c.state(), RotationState::Paused);

        let mut c = controller(5, InteractionPolicy::OneShotDisable);
        c.go_to(3);
        assert_eq!(c.state(), RotationState::Paused);
        assert!(!c.is_ticking());
    }

    #[test]
    fn test_sticky_keeps_ticking_after_manual_navigation() {
        let mut c = controller(3, InteractionPolicy::Sticky);
        c.go_next();
        assert_eq!(c.current_index(), 1);
        assert!(c.tick());
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.state(), RotationState::Autoplaying);
    }

    #[test]
    fn test_wraparound_all_policies() {
        for policy in POLICIES {
            let mut c = controller(4, policy);
            c.go_to(3);
            c.go_next();
            assert_eq!(c.current_index(), 0);
            c.go_previous();
            assert_eq!(c.current_index(), 3);
        }

        for policy in POLICIES {
            let mut c = controller(4, policy);
            for _ in 0..3 {
                c.tick();
            }
            assert_eq!(c.current_index(), 3);
            c.tick();
            assert_eq!(c.current_index(), 0);
        }
    }

    #[test]
    fn test_single_item_never_ticks() {
        for policy in POLICIES {
            for count in [0, 1] {
                let mut c = controller(count, policy);
                assert!(!c.is_ticking());
                assert!(!c.tick());
                assert_eq!(c.current_index(), 0);
            }
        }
    }

    #[test]
    fn test_empty_controller_navigation_is_noop() {
        let mut c = controller(0, InteractionPolicy::Sticky);
        assert_eq!(c.go_next(), 0);
        assert_eq!(c.go_previous(), 0);
        assert_eq!(c.go_to(4), 0);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut c = controller(4, InteractionPolicy::Sticky);
        assert_eq!(c.go_to(9), 3);
    }

    #[test]
    fn test_hover_override_selects_and_tick_overwrites() {
        let mut c = controller(6, InteractionPolicy::HoverOverride);
        assert_eq!(c.on_hover_enter(4), 4);
        assert_eq!(c.state(), RotationState::Autoplaying);
        assert!(c.tick());
        assert_eq!(c.current_index(), 5);
    }

    #[test]
    fn test_hover_ignored_for_other_policies() {
        let mut c = controller(6, InteractionPolicy::Sticky);
        assert_eq!(c.on_hover_enter(4), 0);

        let mut c = controller(6, InteractionPolicy::OneShotDisable);
        assert_eq!(c.on_hover_enter(4), 0);
        assert_eq!(c.state(), RotationState::Autoplaying);
    }

    #[test]
    fn test_item_count_change_resets_out_of_range_index() {
        let mut c = controller(5, InteractionPolicy::Sticky);
        c.go_to(4);
        assert!(c.set_item_count(3));
        assert_eq!(c.current_index(), 0);

        c.go_to(2);
        assert!(c.set_item_count(8));
        assert_eq!(c.current_index(), 2);

        assert!(!c.set_item_count(8));
    }

    #[test]
    fn test_async_item_load_starts_ticking() {
        let mut c = controller(0, InteractionPolicy::Sticky);
        assert!(!c.is_ticking());
        c.set_item_count(4);
        assert!(c.is_ticking());
        c.set_item_count(1);
        assert!(!c.is_ticking());
    }

    #[test]
    fn test_set_interval() {
        let mut c = controller(3, InteractionPolicy::Sticky);
        assert!(!c.set_interval(Duration::from_millis(100)));
        assert!(c.set_interval(Duration::from_millis(250)));
        assert_eq!(c.interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_from_config_respects_autoplay_flag() {
        let config = RotationConfig {
            autoplay: false,
            ..RotationConfig::default()
        };
        let mut c = RotationController::from_config(&config, 3);
        assert_eq!(c.state(), RotationState::Paused);
        assert!(!c.tick());
    }

    #[test]
    fn test_autoplay_off_stays_paused_for_every_policy() {
        for policy in POLICIES {
            let config = RotationConfig {
                policy,
                autoplay: false,
                ..RotationConfig::default()
            };
            let mut c = RotationController::from_config(&config, 4);
            c.go_next();
            c.on_hover_enter(3);
            assert_eq!(c.state(), RotationState::Paused);
            assert!(!c.is_ticking());
            let before = c.current_index();
            assert!(!c.tick());
            assert_eq!(c.current_index(), before);
        }
    }
}
