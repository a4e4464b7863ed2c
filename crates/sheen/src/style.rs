//! Style instance
//!
//! A [`Style`] owns everything a widget style needs between repaints: the
//! parsed theme colors, the control handle table and the animation engines.
//! Nothing is process-global; two styles never share state unless the host
//! passes the same [`ControlTable`] to both.

use crate::config::{ConfigError, StyleConfig};
use sheen_animation::{AnimationMode, EngineHandle, EngineKind, EngineRegistry};
use sheen_core::{Color, ColorGradient, ControlId, ControlInfo, ControlTable};
use sheen_theme::{ColorOptions, ColorRole, InteractionState, ThemeColors, ThemeVariant};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

/// Modes checked for an in-flight transition, first match wins
const MODE_PRIORITY: [AnimationMode; 4] = [
    AnimationMode::Pressed,
    AnimationMode::Hover,
    AnimationMode::Focus,
    AnimationMode::Enable,
];

pub struct Style {
    config: StyleConfig,
    colors: Arc<ThemeColors>,
    animations: EngineRegistry,
}

impl Style {
    /// Create a style with its own control table
    pub fn new(config: StyleConfig) -> Result<Self, ConfigError> {
        Self::with_controls(config, Rc::new(ControlTable::new()))
    }

    /// Create a style over a control table shared with the host
    pub fn with_controls(
        config: StyleConfig,
        controls: Rc<ControlTable>,
    ) -> Result<Self, ConfigError> {
        let animation = config.animation_config()?;
        let colors = Arc::new(config.theme.load_colors());
        tracing::debug!(variant = %config.variant, animations = animation.enabled, "created style");
        Ok(Self {
            config,
            colors,
            animations: EngineRegistry::new(controls, animation),
        })
    }

    /// Replace the theme colors, e.g. to share one parse between styles
    pub fn with_colors(mut self, colors: Arc<ThemeColors>) -> Self {
        self.colors = colors;
        self
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    pub fn variant(&self) -> ThemeVariant {
        self.config.variant
    }

    pub fn colors(&self) -> &Arc<ThemeColors> {
        &self.colors
    }

    pub fn controls(&self) -> &Rc<ControlTable> {
        self.animations.controls()
    }

    pub fn animations(&self) -> &EngineRegistry {
        &self.animations
    }

    pub fn animations_mut(&mut self) -> &mut EngineRegistry {
        &mut self.animations
    }

    pub fn engine(&mut self, kind: EngineKind) -> EngineHandle<'_> {
        self.animations.engine(kind)
    }

    /// Apply a new configuration.
    ///
    /// Theme colors are rebuilt and engine timings replaced; in-flight
    /// transitions keep their progress. On error nothing changes.
    pub fn reconfigure(&mut self, config: StyleConfig) -> Result<(), ConfigError> {
        let animation = config.animation_config()?;
        if config.theme != self.config.theme {
            self.colors = Arc::new(config.theme.load_colors());
        }
        self.animations.set_config(animation);
        tracing::debug!(variant = %config.variant, "reconfigured style");
        self.config = config;
        Ok(())
    }

    /// Create a control handle and register it with the engines
    pub fn create_control(&mut self, name: impl Into<String>) -> ControlId {
        let control = self.controls().create(ControlInfo::named(name));
        self.animations.register_control(control);
        control
    }

    /// Register a control created by the host
    pub fn register_control(&mut self, control: ControlId) -> bool {
        self.animations.register_control(control)
    }

    /// Destroy notification. Releases every animation state of the control
    /// and retires its handle; returns the number of states released.
    pub fn destroy_control(&mut self, control: ControlId) -> usize {
        let released = self.animations.unregister_control(control);
        self.controls().destroy(control);
        released
    }

    /// Start a repaint at `now`
    pub fn begin_frame(&mut self, now: Instant) {
        self.animations.begin_frame(now);
    }

    /// Feed the current interaction state of a widget to the widget-state
    /// engine. Returns `true` if any transition started.
    pub fn update_widget_state(&mut self, control: ControlId, state: &InteractionState) -> bool {
        let mut engine = self.animations.widget_state();
        let mut started = false;
        started |= engine.update_mode(control, AnimationMode::Hover, state.hovered && state.enabled);
        started |= engine.update_mode(control, AnimationMode::Focus, state.has_focus && state.enabled);
        started |= engine.update_mode(control, AnimationMode::Pressed, state.sunken && state.enabled);
        started |= engine.update_mode(control, AnimationMode::Enable, state.enabled);
        started
    }

    /// Resolution options for `control`, with the in-flight transition (if
    /// any) and its opacity at the current frame
    pub fn options_for(
        &mut self,
        control: ControlId,
        role: impl Into<ColorRole>,
        state: InteractionState,
    ) -> ColorOptions {
        let options = ColorOptions::new(self.config.variant, state);
        let ColorRole::Widget(role) = role.into() else {
            return options;
        };

        let mut engine = self.animations.widget_state();
        for mode in MODE_PRIORITY {
            if role.reacts_to(mode) && engine.is_animated(control, mode) {
                let opacity = engine.opacity(control, mode);
                return options.with_animation(mode, opacity);
            }
        }
        options
    }

    /// Color of `role` for `control` at the current frame
    pub fn color(
        &mut self,
        control: ControlId,
        role: impl Into<ColorRole>,
        state: InteractionState,
    ) -> Option<Color> {
        let role = role.into();
        let options = self.options_for(control, role, state);
        self.colors.resolver().resolve(role, &options)
    }

    /// Gradient of `role` for `control` at the current frame
    pub fn gradient(
        &mut self,
        control: ControlId,
        role: impl Into<ColorRole>,
        state: InteractionState,
    ) -> Option<ColorGradient> {
        let role = role.into();
        let options = self.options_for(control, role, state);
        self.colors.resolver().resolve_gradient(role, &options)
    }
}
