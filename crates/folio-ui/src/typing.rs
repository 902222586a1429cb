// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Hero banner typing animation
//!
//! [`TypingAnimation`] is a pure state machine: [`TypingAnimation::next_delay`]
//! says how long to wait before the next step and [`TypingAnimation::advance`]
//! performs it. [`TypingDriver`] runs the machine on one tokio task that holds
//! a single sleep at a time, so a string never has two live timers.
//!
//! ```text
//! Idle ──start──▶ Typing ──full──▶ PausedAfterTyping ──pause──▶ Deleting
//!                   ▲                                              │
//!                   └──── short pause ◀── PausedAfterDeleting ◀─empty
//! ```

use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::debug;

/// Animation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypingPhase {
    /// Waiting for the start delay
    Idle,
    /// Appending one character per tick
    Typing,
    /// Full text shown
    PausedAfterTyping,
    /// Removing one character per tick
    Deleting,
    /// Nothing shown
    PausedAfterDeleting,
}

/// Step timings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTiming {
    /// Delay before the first character
    pub start_delay: Duration,
    /// Interval between typed characters
    pub typing_interval: Duration,
    /// Interval between deleted characters
    pub delete_interval: Duration,
    /// Hold time with the full text shown
    pub pause_after_typing: Duration,
    /// Hold time with nothing shown
    pub pause_after_deleting: Duration,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            start_delay: Duration::ZERO,
            typing_interval: Duration::from_millis(80),
            delete_interval: Duration::from_millis(40),
            pause_after_typing: Duration::from_millis(2000),
            pause_after_deleting: Duration::from_millis(500),
        }
    }
}

impl TypingTiming {
    /// Timings used by the hero banner greeting
    #[must_use]
    pub fn hero() -> Self {
        Self {
            start_delay: Duration::from_millis(100),
            typing_interval: Duration::from_millis(70),
            ..Self::default()
        }
    }

    /// Total time of one type/pause/delete/pause cycle for `chars` characters
    #[must_use]
    pub fn cycle_duration(&self, chars: usize) -> Duration {
        let n = u32::try_from(chars).unwrap_or(u32::MAX);
        self.typing_interval.saturating_mul(n)
            + self.pause_after_typing
            + self.delete_interval.saturating_mul(n)
            + self.pause_after_deleting
    }
}

/// Typing animation over a fixed target string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingAnimation {
    target: String,
    target_chars: usize,
    shown: usize,
    phase: TypingPhase,
    timing: TypingTiming,
    completed_cycles: u64,
}

impl TypingAnimation {
    /// Create an idle animation for `target`
    #[must_use]
    pub fn new(target: impl Into<String>, timing: TypingTiming) -> Self {
        let target = target.into();
        let target_chars = target.chars().count();
        Self {
            target,
            target_chars,
            shown: 0,
            phase: TypingPhase::Idle,
            timing,
            completed_cycles: 0,
        }
    }

    /// Text being animated
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Currently visible prefix of the target
    #[must_use]
    pub fn displayed(&self) -> &str {
        let end = self
            .target
            .char_indices()
            .nth(self.shown)
            .map_or(self.target.len(), |(i, _)| i);
        &self.target[..end]
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    /// Step timings
    #[must_use]
    pub fn timing(&self) -> &TypingTiming {
        &self.timing
    }

    /// Number of full cycles finished (entries into `PausedAfterDeleting`)
    #[must_use]
    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    /// How long to wait before the next [`advance`](Self::advance)
    #[must_use]
    pub fn next_delay(&self) -> Duration {
        match self.phase {
            TypingPhase::Idle => self.timing.start_delay,
            TypingPhase::Typing => self.timing.typing_interval,
            TypingPhase::PausedAfterTyping => self.timing.pause_after_typing,
            TypingPhase::Deleting => self.timing.delete_interval,
            TypingPhase::PausedAfterDeleting => self.timing.pause_after_deleting,
        }
    }

    /// Perform one step and return the new phase
    pub fn advance(&mut self) -> TypingPhase {
        self.phase = match self.phase {
            TypingPhase::Idle => TypingPhase::Typing,
            TypingPhase::Typing => {
                self.shown = (self.shown + 1).min(self.target_chars);
                if self.shown == self.target_chars {
                    TypingPhase::PausedAfterTyping
                } else {
                    TypingPhase::Typing
                }
            }
            TypingPhase::PausedAfterTyping => TypingPhase::Deleting,
            TypingPhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.completed_cycles += 1;
                    TypingPhase::PausedAfterDeleting
                } else {
                    TypingPhase::Deleting
                }
            }
            TypingPhase::PausedAfterDeleting => TypingPhase::Typing,
        };
        self.phase
    }
}

/// Runs a [`TypingAnimation`] on the tokio runtime
#[derive(Debug, Clone)]
pub struct TypingDriver {
    animation: TypingAnimation,
    cycle_limit: Option<u64>,
}

impl TypingDriver {
    /// Drive `animation` until cancelled
    #[must_use]
    pub fn new(animation: TypingAnimation) -> Self {
        Self {
            animation,
            cycle_limit: None,
        }
    }

    /// Stop on its own after `cycles` full cycles
    #[must_use]
    pub fn with_cycle_limit(mut self, cycles: u64) -> Self {
        self.cycle_limit = Some(cycles);
        self
    }

    /// Start the animation, calling `on_frame` after every step
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(self, mut on_frame: F) -> TypingHandle
    where
        F: FnMut(&TypingAnimation) + Send + 'static,
    {
        let Self {
            mut animation,
            cycle_limit,
        } = self;
        let task = tokio::spawn(async move {
            loop {
                if cycle_limit.is_some_and(|limit| animation.completed_cycles() >= limit) {
                    debug!(cycles = animation.completed_cycles(), "typing animation finished");
                    break;
                }
                tokio::time::sleep(animation.next_delay()).await;
                animation.advance();
                on_frame(&animation);
            }
        });
        TypingHandle { task: Some(task) }
    }
}

/// Handle to a running typing animation
///
/// Dropping the handle aborts the task. Use [`TypingHandle::cancel`] to also
/// wait until the task is gone.
#[derive(Debug)]
pub struct TypingHandle {
    task: Option<JoinHandle<()>>,
}

impl TypingHandle {
    /// Stop the animation; no frame callback runs after this returns
    pub async fn cancel(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
            debug!("typing animation cancelled");
        }
    }

    /// Wait for a cycle-limited animation to finish on its own
    pub async fn join(mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    /// Whether the task has stopped
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl Drop for TypingHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use std::sync::{Arc, Mutex};

    fn started(target: &str) -> TypingAnimation {
        let mut animation = TypingAnimation::new(target, TypingTiming::default());
        assert_eq!(animation.advance(), TypingPhase::Typing);
        animation
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let animation = TypingAnimation::new("hi", TypingTiming::hero());
        assert_eq!(animation.phase(), TypingPhase::Idle);
        assert_eq!(animation.displayed(), "");
        assert_eq!(animation.next_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_full_cycle_for_hi() {
        let mut animation = started("hi");

        animation.advance();
        assert_eq!(animation.displayed(), "h");
        assert_eq!(animation.phase(), TypingPhase::Typing);
        animation.advance();
        assert_eq!(animation.displayed(), "hi");
        assert_eq!(animation.phase(), TypingPhase::PausedAfterTyping);
        assert_eq!(animation.next_delay(), Duration::from_millis(2000));

        assert_eq!(animation.advance(), TypingPhase::Deleting);
        assert_eq!(animation.displayed(), "hi");
        animation.advance();
        assert_eq!(animation.displayed(), "h");
        animation.advance();
        assert_eq!(animation.displayed(), "");
        assert_eq!(animation.phase(), TypingPhase::PausedAfterDeleting);
        assert_eq!(animation.completed_cycles(), 1);
        assert_eq!(animation.next_delay(), Duration::from_millis(500));

        assert_eq!(animation.advance(), TypingPhase::Typing);
        animation.advance();
        assert_eq!(animation.displayed(), "h");
    }

    #[test]
    fn test_unicode_target() {
        let mut animation = started("héllo ✓");
        for _ in 0..7 {
            animation.advance();
        }
        assert_eq!(animation.displayed(), "héllo ✓");
        assert_eq!(animation.phase(), TypingPhase::PausedAfterTyping);
    }

    #[test]
    fn test_empty_target_cycles_without_panicking() {
        let mut animation = started("");
        assert_eq!(animation.advance(), TypingPhase::PausedAfterTyping);
        assert_eq!(animation.advance(), TypingPhase::Deleting);
        assert_eq!(animation.advance(), TypingPhase::PausedAfterDeleting);
        assert_eq!(animation.displayed(), "");
    }

    #[test]
    fn test_cycle_duration() {
        let timing = TypingTiming::default();
        assert_eq!(timing.cycle_duration(2), Duration::from_millis(160 + 2000 + 80 + 500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_frames_for_one_cycle() {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let sink = frames.clone();
        let start = tokio::time::Instant::now();

        TypingDriver::new(TypingAnimation::new("hi", TypingTiming::default()))
            .with_cycle_limit(1)
            .spawn(move |a| sink.lock().expect("lock").push(a.displayed().to_string()))
            .join()
            .await;

        let frames = frames.lock().expect("lock").clone();
        let expected: Vec<String> = ["", "h", "hi", "hi", "h", ""].map(String::from).to_vec();
        assert_eq!(frames, expected);

        // start 0 + type 2 * 80 + pause 2000 + delete 2 * 40
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(2240), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(2260), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_callbacks() {
        let count = Arc::new(Mutex::new(0usize));
        let sink = count.clone();
        let handle = TypingDriver::new(TypingAnimation::new("hello", TypingTiming::default()))
            .spawn(move |_| *sink.lock().expect("lock") += 1);

        tokio::time::sleep(Duration::from_millis(250)).await;
        handle.cancel().await;
        let after_cancel = *count.lock().expect("lock");
        assert!(after_cancel > 0);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(*count.lock().expect("lock"), after_cancel);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts() {
        let count = Arc::new(Mutex::new(0usize));
        let sink = count.clone();
        let handle = TypingDriver::new(TypingAnimation::new("hello", TypingTiming::default()))
            .spawn(move |_| *sink.lock().expect("lock") += 1);
        drop(handle);
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(*count.lock().expect("lock"), 0);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: displayed is always a prefix of the target
        #[test]
        fn prop_displayed_is_prefix(target in ".{0,20}", steps in 0usize..200) {
            let mut animation = TypingAnimation::new(target.clone(), TypingTiming::default());
            for _ in 0..steps {
                animation.advance();
                prop_assert!(target.starts_with(animation.displayed()));
            }
        }

        /// Property: typing n characters takes exactly n ticks
        #[test]
        fn prop_typing_takes_len_ticks(target in "[a-z]{1,20}") {
            let mut animation = TypingAnimation::new(target.clone(), TypingTiming::default());
            animation.advance();
            for _ in 0..target.len() {
                animation.advance();
            }
            prop_assert_eq!(animation.displayed(), target.as_str());
            prop_assert_eq!(animation.phase(), TypingPhase::PausedAfterTyping);
        }
    }
}
