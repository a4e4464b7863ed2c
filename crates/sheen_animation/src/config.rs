//! Animation timing configuration

use crate::easing::Easing;
use crate::subject::{AnimationMode, EngineKind, Subject};
use std::time::Duration;

/// Timing and enable switch for every engine in a registry
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    /// When false, every state snaps to its target
    pub enabled: bool,
    /// Hover, press and enable transitions, sub-controls, tabs, headers
    pub duration: Duration,
    /// Focus transitions of the widget-state engine
    pub focus_duration: Duration,
    /// Length of one busy indicator cycle
    pub busy_cycle: Duration,
    pub easing: Easing,
}

impl AnimationConfig {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(180);
    pub const DEFAULT_FOCUS_DURATION: Duration = Duration::from_millis(120);
    pub const DEFAULT_BUSY_CYCLE: Duration = Duration::from_millis(1200);

    /// Configuration with animations switched off
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Transition length for a subject tracked by the given engine
    pub fn duration_for(&self, kind: EngineKind, subject: Subject) -> Duration {
        match (kind, subject) {
            (EngineKind::BusyIndicator, _) => self.busy_cycle,
            (EngineKind::WidgetState, Subject::Mode(AnimationMode::Focus)) => self.focus_duration,
            _ => self.duration,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration: Self::DEFAULT_DURATION,
            focus_duration: Self::DEFAULT_FOCUS_DURATION,
            busy_cycle: Self::DEFAULT_BUSY_CYCLE,
            easing: Easing::Linear,
        }
    }
}
