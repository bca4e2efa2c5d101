// SPDX-License-Identifier: MPL-2.0
//! The reset coordinator: a small state machine sequencing the
//! shrink → swap → restore transition around a settings reset.
//!
//! The shrink and restore phases are tick-driven animations of a whole-view
//! scale factor. The swap itself is *not* tied to the animation reaching
//! zero: the caller arms an independent timer of the same duration when the
//! transition is triggered, and the swap happens when that timer fires.
//! [`ResetCoordinator::swap_elapsed`] pins the scale to zero at that moment,
//! so the swap is never observable at a partially-shrunk scale even if the
//! timer beats the final animation tick.
//!
//! A trigger that arrives mid-cycle restarts the shrink from the current
//! scale and bumps a generation counter; the superseded cycle's pending
//! timer then reports a stale generation and is ignored, so each surviving
//! cycle swaps exactly once.

use std::time::{Duration, Instant};

/// Length of each transition phase, and of the swap timer armed alongside
/// the shrink.
pub const RESET_TRANSITION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Shrinking { started: Instant, from: f32 },
    Restoring { started: Instant },
}

/// Drives the view scale through a reset cycle and tells the caller when
/// the settings swap may happen.
#[derive(Debug)]
pub struct ResetCoordinator {
    phase: Phase,
    scale: f32,
    generation: u64,
}

impl Default for ResetCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResetCoordinator {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            scale: 1.0,
            generation: 0,
        }
    }

    /// Current whole-view scale in `[0, 1]`. Rest value is 1.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Whether a transition is in flight. The app only runs the tick
    /// subscription while this is true.
    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Starts (or restarts) a reset cycle at `now`. The shrink begins from
    /// the current scale, so a re-entrant trigger continues from wherever
    /// the view happens to be. Returns the generation the caller must pass
    /// back from its swap timer.
    pub fn trigger(&mut self, now: Instant) -> u64 {
        self.generation += 1;
        self.phase = Phase::Shrinking {
            started: now,
            from: self.scale,
        };
        self.generation
    }

    /// Advances the animation. Ticking only moves the scale; it never
    /// performs the swap, even once the shrink duration has fully elapsed.
    pub fn tick(&mut self, now: Instant) {
        match self.phase {
            Phase::Idle => {}
            Phase::Shrinking { started, from } => {
                let progress = phase_progress(started, now);
                self.scale = from * (1.0 - progress);
            }
            Phase::Restoring { started } => {
                let progress = phase_progress(started, now);
                self.scale = progress;
                if progress >= 1.0 {
                    self.phase = Phase::Idle;
                    self.scale = 1.0;
                }
            }
        }
    }

    /// Reports that a swap timer armed by [`trigger`](Self::trigger) has
    /// fired. A stale generation (the cycle was superseded by a newer
    /// trigger) changes nothing and returns `false`. For the current
    /// generation the scale is pinned to zero, the restore phase begins,
    /// and the caller must reset the settings store now — while the view
    /// is fully shrunk.
    pub fn swap_elapsed(&mut self, generation: u64, now: Instant) -> bool {
        if generation != self.generation {
            return false;
        }
        self.scale = 0.0;
        self.phase = Phase::Restoring { started: now };
        true
    }
}

/// Linear progress of a phase in `[0, 1]`.
fn phase_progress(started: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(started);
    (elapsed.as_secs_f32() / RESET_TRANSITION.as_secs_f32()).min(1.0)
}
