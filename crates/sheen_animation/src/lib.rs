//! Sheen Animation System
//!
//! Poll-driven transitions between widget interaction states.
//!
//! # Features
//!
//! - **Per-control state**: one [`AnimationState`] per control and subject
//!   (hover, focus, a scrollbar arrow, a tab index, ...)
//! - **One engine, many families**: [`StateEngine`] is a keyed store reused
//!   for widgets, scrollbars, spin boxes, dials, tab bars, header views and
//!   busy indicators
//! - **Frame-consistent**: the [`EngineRegistry`] samples time once per
//!   repaint, so all reads in a frame agree
//! - **Leak-free**: explicit destroy notification plus a liveness sweep over
//!   generational control ids
//!
//! # Example
//!
//! ```rust
//! use sheen_animation::{AnimationConfig, AnimationMode, EngineRegistry};
//! use sheen_core::{ControlInfo, ControlTable};
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let mut registry = EngineRegistry::new(Rc::new(ControlTable::new()), AnimationConfig::default());
//! let button = registry.controls().create(ControlInfo::named("button"));
//! let start = registry.frame_time();
//!
//! registry.widget_state().update_state(button, AnimationMode::Hover, false);
//! registry.widget_state().update_state(button, AnimationMode::Hover, true);
//!
//! registry.begin_frame(start + Duration::from_millis(90));
//! let opacity = registry.widget_state().opacity(button, AnimationMode::Hover);
//! assert!(opacity > 0.0 && opacity < 1.0);
//! ```

pub mod config;
pub mod easing;
pub mod engine;
pub mod registry;
pub mod state;
pub mod subject;

pub use config::AnimationConfig;
pub use easing::Easing;
pub use engine::StateEngine;
pub use registry::{EngineHandle, EngineRegistry};
pub use state::{AnimationState, Phase};
pub use subject::{AnimationMode, EngineKind, Motion, SubControl, Subject};
