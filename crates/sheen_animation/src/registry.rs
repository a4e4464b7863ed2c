//! Engine registry
//!
//! Owns one [`StateEngine`] per [`EngineKind`] and the frame clock they all
//! read. The host drives it from its event loop:
//!
//! 1. `begin_frame(now)` once per repaint, so every opacity read in that
//!    frame comes from the same time sample;
//! 2. `update_state` from event handling (hover, focus, press changes);
//! 3. `opacity` / `is_animated` from drawing code;
//! 4. `unregister_control` when the control is destroyed.
//!
//! The registry only reads liveness from the [`ControlTable`]; creating and
//! destroying handles is up to the host.

use crate::config::AnimationConfig;
use crate::engine::StateEngine;
use crate::subject::{AnimationMode, EngineKind, SubControl, Subject};
use rustc_hash::FxHashSet;
use sheen_core::{ControlId, ControlTable};
use std::rc::Rc;
use std::time::Instant;

/// All animation engines of one style instance
pub struct EngineRegistry {
    controls: Rc<ControlTable>,
    config: AnimationConfig,
    engines: [StateEngine; EngineKind::COUNT],
    registered: FxHashSet<ControlId>,
    frame: Instant,
}

impl EngineRegistry {
    pub fn new(controls: Rc<ControlTable>, config: AnimationConfig) -> Self {
        Self {
            controls,
            config,
            engines: EngineKind::ALL.map(StateEngine::new),
            registered: FxHashSet::default(),
            frame: Instant::now(),
        }
    }

    /// The handle table liveness is checked against
    pub fn controls(&self) -> &Rc<ControlTable> {
        &self.controls
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Apply new timings. Running transitions keep their progress; with
    /// animations disabled they jump to their targets.
    pub fn set_config(&mut self, config: AnimationConfig) {
        tracing::debug!(
            enabled = config.enabled,
            duration_ms = config.duration.as_millis() as u64,
            "animation config changed"
        );
        if !config.enabled {
            for engine in &mut self.engines {
                engine.finish_all();
            }
        }
        self.config = config;
    }

    /// Take the time sample for the next repaint. Samples never go backwards.
    pub fn begin_frame(&mut self, now: Instant) {
        if now > self.frame {
            self.frame = now;
        }
    }

    pub fn frame_time(&self) -> Instant {
        self.frame
    }

    /// Start tracking a control. Idempotent; dead controls are ignored.
    pub fn register_control(&mut self, control: ControlId) -> bool {
        if !self.controls.is_alive(control) {
            tracing::trace!(?control, "ignoring registration of a dead control");
            return false;
        }
        let inserted = self.registered.insert(control);
        if inserted {
            tracing::debug!(?control, "control registered");
        }
        inserted
    }

    pub fn is_registered(&self, control: ControlId) -> bool {
        self.registered.contains(&control)
    }

    /// Destroy notification: drop every state of `control` in every engine.
    /// Returns the number of states removed.
    pub fn unregister_control(&mut self, control: ControlId) -> usize {
        self.registered.remove(&control);
        let removed: usize = self
            .engines
            .iter_mut()
            .map(|engine| engine.remove_control(control))
            .sum();
        tracing::debug!(?control, removed, "control unregistered");
        removed
    }

    /// Liveness pass over every engine. Returns the number of states removed.
    pub fn sweep(&mut self) -> usize {
        let controls = &self.controls;
        self.registered.retain(|id| controls.is_alive(*id));
        let removed: usize = self
            .engines
            .iter_mut()
            .map(|engine| engine.sweep(controls))
            .sum();
        if removed > 0 {
            tracing::debug!(removed, "swept states of destroyed controls");
        }
        removed
    }

    /// Total number of animation states across all engines
    pub fn tracked_entries(&self) -> usize {
        self.engines.iter().map(StateEngine::len).sum()
    }

    /// Whether `control` has any state in any engine
    pub fn tracks(&self, control: ControlId) -> bool {
        self.engines.iter().any(|engine| engine.tracks(control))
    }

    /// Whether any transition is in flight (the host should keep repainting)
    pub fn is_animating(&self) -> bool {
        self.engines.iter().any(StateEngine::is_any_running)
    }

    /// Read-only access to an engine's store
    pub fn store(&self, kind: EngineKind) -> &StateEngine {
        &self.engines[kind.index()]
    }

    pub fn engine(&mut self, kind: EngineKind) -> EngineHandle<'_> {
        EngineHandle {
            engine: &mut self.engines[kind.index()],
            controls: &self.controls,
            registered: &mut self.registered,
            config: &self.config,
            now: self.frame,
        }
    }

    pub fn widget_state(&mut self) -> EngineHandle<'_> {
        self.engine(EngineKind::WidgetState)
    }

    pub fn scroll_bar(&mut self) -> EngineHandle<'_> {
        self.engine(EngineKind::ScrollBar)
    }

    pub fn spin_box(&mut self) -> EngineHandle<'_> {
        self.engine(EngineKind::SpinBox)
    }

    pub fn dial(&mut self) -> EngineHandle<'_> {
        self.engine(EngineKind::Dial)
    }

    pub fn tab_bar(&mut self) -> EngineHandle<'_> {
        self.engine(EngineKind::TabBar)
    }

    pub fn header_view(&mut self) -> EngineHandle<'_> {
        self.engine(EngineKind::HeaderView)
    }

    pub fn busy_indicator(&mut self) -> EngineHandle<'_> {
        self.engine(EngineKind::BusyIndicator)
    }
}

/// One engine, bound to the registry's frame sample and handle table
pub struct EngineHandle<'a> {
    engine: &'a mut StateEngine,
    controls: &'a ControlTable,
    registered: &'a mut FxHashSet<ControlId>,
    config: &'a AnimationConfig,
    now: Instant,
}

impl EngineHandle<'_> {
    pub fn kind(&self) -> EngineKind {
        self.engine.kind()
    }

    /// Report the current condition of `subject` on `control`.
    ///
    /// The first report creates the state at rest; later changes start (or
    /// reverse) a transition. Returns `true` if a transition started.
    pub fn update_state(
        &mut self,
        control: ControlId,
        subject: impl Into<Subject>,
        active: bool,
    ) -> bool {
        if !self.controls.is_alive(control) {
            self.registered.remove(&control);
        } else {
            self.registered.insert(control);
        }
        self.engine.update(
            self.controls,
            self.config,
            self.now,
            control,
            subject.into(),
            active,
        )
    }

    /// Report which exclusive subject (tab, section, arrow) is hovered now
    pub fn update_exclusive(&mut self, control: ControlId, subject: Option<Subject>) -> bool {
        if !self.controls.is_alive(control) {
            self.registered.remove(&control);
        } else {
            self.registered.insert(control);
        }
        self.engine
            .update_exclusive(self.controls, self.config, self.now, control, subject)
    }

    /// Current (eased) progress; advances the transition to this frame.
    /// Unknown or destroyed controls read as `0.0`.
    pub fn opacity(&mut self, control: ControlId, subject: impl Into<Subject>) -> f32 {
        self.engine.opacity(
            self.controls,
            self.config,
            self.now,
            control,
            subject.into(),
        )
    }

    /// Whether a transition is in flight at this frame
    pub fn is_animated(&mut self, control: ControlId, subject: impl Into<Subject>) -> bool {
        self.engine.is_animated(
            self.controls,
            self.config,
            self.now,
            control,
            subject.into(),
        )
    }

    pub fn exclusive_subject(&self, control: ControlId) -> Option<Subject> {
        self.engine.exclusive_subject(control)
    }

    // Family-specific conveniences

    /// Hover/focus/press/enable of a whole widget
    pub fn update_mode(&mut self, control: ControlId, mode: AnimationMode, active: bool) -> bool {
        self.update_state(control, mode, active)
    }

    /// Hovered sub-control of a scrollbar, spin box or dial
    pub fn update_hovered_sub_control(
        &mut self,
        control: ControlId,
        sub: Option<SubControl>,
    ) -> bool {
        self.update_exclusive(control, sub.map(Subject::SubControl))
    }

    /// Hovered tab or header section
    pub fn update_hovered_index(&mut self, control: ControlId, index: Option<u32>) -> bool {
        self.update_exclusive(control, index.map(Subject::Index))
    }

    /// Busy state of a progress indicator
    pub fn set_busy(&mut self, control: ControlId, busy: bool) -> bool {
        self.update_state(control, Subject::Busy, busy)
    }

    /// Phase of the busy cycle in `0.0..1.0`
    pub fn busy_value(&mut self, control: ControlId) -> f32 {
        self.opacity(control, Subject::Busy)
    }
}
