//! Entrance ("reveal") animation capability
//!
//! Views hand a target and a [`RevealConfig`] to a [`RevealAnimator`]. The
//! animator is chosen once at construction; [`NoopRevealer`] stands in when
//! motion is disabled or nothing is rendering, and no other component changes
//! behavior because of that choice.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

/// Where the element slides in from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealOrigin {
    /// From below
    #[default]
    Bottom,
    /// From above
    Top,
    /// From the left
    Left,
    /// From the right
    Right,
}

/// Animation settings passed through to the animator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealConfig {
    /// Slide-in direction
    pub origin: RevealOrigin,
    /// Slide distance in pixels
    pub distance_px: u32,
    /// Animation length
    #[serde(rename = "duration_ms", serialize_with = "as_millis")]
    pub duration: Duration,
    /// Delay before starting
    #[serde(rename = "delay_ms", serialize_with = "as_millis")]
    pub delay: Duration,
    /// CSS easing function
    pub easing: String,
    /// Fraction of the element that must be visible before revealing
    pub view_factor: f32,
    /// Starting opacity
    pub opacity: f32,
    /// Starting scale
    pub scale: f32,
    /// Animate on mobile devices
    pub mobile: bool,
    /// Re-animate every time the element enters the viewport
    pub reset: bool,
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::with_delay(Duration::from_millis(200), 0.25)
    }
}

impl RevealConfig {
    /// Site defaults with a specific delay and view factor
    #[must_use]
    pub fn with_delay(delay: Duration, view_factor: f32) -> Self {
        Self {
            origin: RevealOrigin::Bottom,
            distance_px: 20,
            duration: Duration::from_millis(500),
            delay,
            easing: "cubic-bezier(0.645, 0.045, 0.355, 1)".to_string(),
            view_factor,
            opacity: 0.0,
            scale: 1.0,
            mobile: true,
            reset: false,
        }
    }
}

/// A reveal that was scheduled
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealRequest {
    /// View handle (element id or section name)
    pub target: String,
    /// Settings used
    pub config: RevealConfig,
}

/// Schedules one-shot entrance animations
pub trait RevealAnimator: Send + Sync {
    /// Animate `target` into view
    fn reveal(&self, target: &str, config: &RevealConfig);

    /// Forget any state kept for `target`
    fn clean(&self, _target: &str) {}

    /// Tear down the animator
    fn destroy(&self) {}
}

/// Animator that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRevealer;

impl RevealAnimator for NoopRevealer {
    fn reveal(&self, _target: &str, _config: &RevealConfig) {}
}

/// Animator that records every request, for headless presentation and tests
#[derive(Debug, Default)]
pub struct RecordingRevealer {
    requests: Mutex<Vec<RevealRequest>>,
}

impl RecordingRevealer {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests received so far, oldest first
    #[must_use]
    pub fn requests(&self) -> Vec<RevealRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl RevealAnimator for RecordingRevealer {
    fn reveal(&self, target: &str, config: &RevealConfig) {
        debug!(element = target, delay = ?config.delay, "reveal scheduled");
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RevealRequest {
                target: target.to_string(),
                config: config.clone(),
            });
    }

    fn clean(&self, target: &str) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|r| r.target != target);
    }

    fn destroy(&self) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Pick the animator for the current environment
#[must_use]
pub fn select_revealer(motion_enabled: bool) -> Box<dyn RevealAnimator> {
    if motion_enabled {
        Box::new(RecordingRevealer::new())
    } else {
        debug!("motion disabled, using no-op revealer");
        Box::new(NoopRevealer)
    }
}

/// Reveal `targets` in order, each `increment` later than the previous one
pub fn reveal_staggered(
    animator: &dyn RevealAnimator,
    targets: &[&str],
    increment: Duration,
    view_factor: f32,
) {
    for (i, target) in targets.iter().enumerate() {
        let delay = increment.saturating_mul(u32::try_from(i).unwrap_or(u32::MAX));
        animator.reveal(target, &RevealConfig::with_delay(delay, view_factor));
    }
}
