//! Sheen
//!
//! Theme colors and interaction-state animations for a widget style,
//! behind one [`Style`] instance.
//!
//! The host toolkit drives it from its event loop:
//!
//! 1. [`Style::create_control`] (or [`Style::register_control`]) when a
//!    widget appears, [`Style::destroy_control`] when it goes away
//! 2. [`Style::update_widget_state`] on mouse enter/leave, focus and press
//!    events
//! 3. [`Style::begin_frame`] once per repaint, then [`Style::color`] /
//!    [`Style::gradient`] for every layer painted
//!
//! # Example
//!
//! ```rust
//! use sheen::{InteractionState, Style, StyleConfig, WidgetRole};
//! use std::time::Duration;
//!
//! let mut style = Style::new(StyleConfig::default()).unwrap();
//! let button = style.create_control("button");
//! let start = style.animations().frame_time();
//!
//! let idle = InteractionState::default();
//! let hovered = InteractionState { hovered: true, ..idle };
//! style.update_widget_state(button, &idle);
//! style.update_widget_state(button, &hovered);
//!
//! style.begin_frame(start + Duration::from_millis(60));
//! let background = style.color(button, WidgetRole::ButtonBackground, hovered);
//! assert!(background.is_some());
//! ```

pub mod config;
pub mod style;

pub use config::{AnimationsConfig, ConfigError, StyleConfig, ThemeConfig};
pub use style::Style;

pub use sheen_animation::{AnimationConfig, AnimationMode, Easing, EngineKind, SubControl};
pub use sheen_core::{Color, ColorGradient, ControlId, ControlInfo, ControlTable};
pub use sheen_theme::{
    ColorGroup, ColorOptions, ColorResolver, ColorRole, InteractionState, SemanticColorId,
    ThemeColors, ThemeVariant, WidgetRole,
};
