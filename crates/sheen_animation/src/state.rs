//! Per-control animation state
//!
//! ```text
//!   Idle(0) --activate--> Entering --reach 1--> Active(1)
//!      ^                    |  ^                   |
//!      |            deactivate  activate      deactivate
//!      |                    v  |                   v
//!      +----reach 0------- Leaving <---------------+
//! ```
//!
//! Progress is advanced on poll, never by a free-running clock: every call
//! brings `opacity` forward to the caller's frame sample.

use crate::subject::Motion;
use std::time::{Duration, Instant};

/// Phase of a transition, derived from the raw fields
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Entering,
    Active,
    Leaving,
}

/// Animation record for one (control, subject) pair
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    target_active: bool,
    /// Linear progress in `0.0..=1.0`
    opacity: f32,
    running: bool,
    last_tick: Instant,
}

impl AnimationState {
    /// State for a subject observed for the first time.
    ///
    /// Fades start at rest on their target so a control created under the
    /// cursor does not fade in. Cyclic states start running when active.
    pub fn new(active: bool, now: Instant, motion: Motion) -> Self {
        match motion {
            Motion::Transition => Self {
                target_active: active,
                opacity: if active { 1.0 } else { 0.0 },
                running: false,
                last_tick: now,
            },
            Motion::Cyclic => Self {
                target_active: active,
                opacity: 0.0,
                running: active,
                last_tick: now,
            },
        }
    }

    /// State that starts inactive and immediately fades toward `active`
    pub fn entering(active: bool, now: Instant, motion: Motion) -> Self {
        let mut state = Self::new(false, now, motion);
        state.set_target(active, now, Duration::ZERO, motion, true);
        state
    }

    pub fn target_active(&self) -> bool {
        self.target_active
    }

    /// Raw linear progress
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> Phase {
        match (self.running, self.target_active) {
            (true, true) => Phase::Entering,
            (true, false) => Phase::Leaving,
            (false, true) => Phase::Active,
            (false, false) => Phase::Idle,
        }
    }

    /// Bring progress forward to `now`
    pub fn advance(&mut self, now: Instant, duration: Duration, motion: Motion) {
        let elapsed = now.saturating_duration_since(self.last_tick);
        if now > self.last_tick {
            self.last_tick = now;
        }
        if !self.running || elapsed.is_zero() {
            return;
        }

        let step = if duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / duration.as_secs_f32()
        };

        match motion {
            Motion::Transition => {
                if self.target_active {
                    self.opacity = (self.opacity + step).min(1.0);
                    if self.opacity >= 1.0 {
                        self.running = false;
                    }
                } else {
                    self.opacity = (self.opacity - step).max(0.0);
                    if self.opacity <= 0.0 {
                        self.running = false;
                    }
                }
            }
            Motion::Cyclic => {
                self.opacity = (self.opacity + step).fract();
            }
        }
    }

    /// Change the target. Returns `true` if a transition started.
    ///
    /// Progress is first brought up to `now`, so a reversal continues from
    /// wherever the previous transition had got to.
    pub fn set_target(
        &mut self,
        active: bool,
        now: Instant,
        duration: Duration,
        motion: Motion,
        enabled: bool,
    ) -> bool {
        if active == self.target_active {
            return false;
        }

        self.advance(now, duration, motion);
        self.target_active = active;
        self.last_tick = self.last_tick.max(now);

        match motion {
            Motion::Transition if !enabled => {
                self.opacity = if active { 1.0 } else { 0.0 };
                self.running = false;
                false
            }
            Motion::Transition => {
                let at_target = if active {
                    self.opacity >= 1.0
                } else {
                    self.opacity <= 0.0
                };
                self.running = !at_target;
                self.running
            }
            Motion::Cyclic => {
                self.opacity = 0.0;
                self.running = active && enabled;
                self.running
            }
        }
    }

    /// Jump to the target without animating
    pub fn finish(&mut self) {
        if self.running {
            self.opacity = if self.target_active { 1.0 } else { 0.0 };
            self.running = false;
        }
    }
}
