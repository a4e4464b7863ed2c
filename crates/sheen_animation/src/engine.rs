//! Keyed animation-state store, one per control family
//!
//! Every family (buttons, scrollbars, tab bars, ...) runs the same state
//! machine; the only differences are which subjects it tracks and how long
//! its transitions last. A [`StateEngine`] is that machine keyed by control,
//! then by subject, so dropping a control only touches its own states.

use crate::config::AnimationConfig;
use crate::state::AnimationState;
use crate::subject::{EngineKind, Motion, Subject};
use rustc_hash::FxHashMap;
use sheen_core::{ControlId, ControlTable};
use smallvec::SmallVec;
use std::time::Instant;

/// States of one control; a control tracks a handful of subjects at most
type ControlStates = SmallVec<[(Subject, AnimationState); 4]>;

/// Animation states of one control family
#[derive(Debug)]
pub struct StateEngine {
    kind: EngineKind,
    states: FxHashMap<ControlId, ControlStates>,
    len: usize,
    /// Currently hovered exclusive subject per control (tab index, arrow, ...)
    exclusive: FxHashMap<ControlId, Option<Subject>>,
}

impl StateEngine {
    pub fn new(kind: EngineKind) -> Self {
        Self {
            kind,
            states: FxHashMap::default(),
            len: 0,
            exclusive: FxHashMap::default(),
        }
    }

    pub fn kind(&self) -> EngineKind {
        self.kind
    }

    /// Number of tracked animation states
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether any state of `control` is tracked
    pub fn tracks(&self, control: ControlId) -> bool {
        self.exclusive.contains_key(&control) || self.states.contains_key(&control)
    }

    /// Read-only view of a state, without advancing it
    pub fn peek(&self, control: ControlId, subject: Subject) -> Option<&AnimationState> {
        self.states
            .get(&control)?
            .iter()
            .find(|(tracked, _)| *tracked == subject)
            .map(|(_, state)| state)
    }

    pub fn is_any_running(&self) -> bool {
        self.states
            .values()
            .flatten()
            .any(|(_, state)| state.is_running())
    }

    fn state_mut(&mut self, control: ControlId, subject: Subject) -> Option<&mut AnimationState> {
        self.states
            .get_mut(&control)?
            .iter_mut()
            .find(|(tracked, _)| *tracked == subject)
            .map(|(_, state)| state)
    }

    fn insert(&mut self, control: ControlId, subject: Subject, state: AnimationState) {
        self.states.entry(control).or_default().push((subject, state));
        self.len += 1;
    }

    pub(crate) fn update(
        &mut self,
        controls: &ControlTable,
        config: &AnimationConfig,
        now: Instant,
        control: ControlId,
        subject: Subject,
        active: bool,
    ) -> bool {
        if !controls.is_alive(control) {
            self.remove_control(control);
            return false;
        }

        let motion = self.kind.motion();
        let duration = config.duration_for(self.kind, subject);
        match self.state_mut(control, subject) {
            Some(state) => state.set_target(active, now, duration, motion, config.enabled),
            None => {
                let state = AnimationState::new(active, now, motion);
                let started = state.is_running();
                self.insert(control, subject, state);
                started
            }
        }
    }

    pub(crate) fn update_exclusive(
        &mut self,
        controls: &ControlTable,
        config: &AnimationConfig,
        now: Instant,
        control: ControlId,
        subject: Option<Subject>,
    ) -> bool {
        if !controls.is_alive(control) {
            self.remove_control(control);
            return false;
        }

        let seen_before = self.exclusive.contains_key(&control);
        let previous = self.exclusive.insert(control, subject).flatten();
        if previous == subject {
            return false;
        }

        let mut started = false;
        if let Some(previous) = previous {
            started |= self.update(controls, config, now, control, previous, false);
        }
        if let Some(subject) = subject {
            if seen_before && config.enabled && self.peek(control, subject).is_none() {
                // The control is already on screen: a newly hovered part fades in.
                let state = AnimationState::entering(true, now, self.kind.motion());
                self.insert(control, subject, state);
                started = true;
            } else {
                started |= self.update(controls, config, now, control, subject, true);
            }
        }
        started
    }

    /// Currently active exclusive subject of a control
    pub fn exclusive_subject(&self, control: ControlId) -> Option<Subject> {
        self.exclusive.get(&control).copied().flatten()
    }

    pub(crate) fn opacity(
        &mut self,
        controls: &ControlTable,
        config: &AnimationConfig,
        now: Instant,
        control: ControlId,
        subject: Subject,
    ) -> f32 {
        let motion = self.kind.motion();
        match self.poll(controls, config, now, control, subject) {
            Some(state) => match motion {
                Motion::Transition => config.easing.apply(state.opacity()),
                Motion::Cyclic => state.opacity(),
            },
            None => 0.0,
        }
    }

    pub(crate) fn is_animated(
        &mut self,
        controls: &ControlTable,
        config: &AnimationConfig,
        now: Instant,
        control: ControlId,
        subject: Subject,
    ) -> bool {
        self.poll(controls, config, now, control, subject)
            .is_some_and(|state| state.is_running())
    }

    /// Advance one state to `now`. Dead controls lose all their states.
    fn poll(
        &mut self,
        controls: &ControlTable,
        config: &AnimationConfig,
        now: Instant,
        control: ControlId,
        subject: Subject,
    ) -> Option<&AnimationState> {
        if !controls.is_alive(control) {
            self.remove_control(control);
            return None;
        }

        let duration = config.duration_for(self.kind, subject);
        let motion = self.kind.motion();
        let state = self.state_mut(control, subject)?;
        state.advance(now, duration, motion);
        if !config.enabled {
            state.finish();
        }
        Some(&*state)
    }

    /// Drop every state of `control`. Returns the number of states removed.
    pub(crate) fn remove_control(&mut self, control: ControlId) -> usize {
        self.exclusive.remove(&control);
        let removed = self.states.remove(&control).map_or(0, |states| states.len());
        self.len -= removed;
        removed
    }

    /// Drop states of every control that is no longer alive
    pub(crate) fn sweep(&mut self, controls: &ControlTable) -> usize {
        let before = self.len;
        self.states.retain(|id, _| controls.is_alive(*id));
        self.len = self.states.values().map(|states| states.len()).sum();
        self.exclusive.retain(|id, _| controls.is_alive(*id));
        before - self.len
    }

    /// Jump every running state to its target
    pub(crate) fn finish_all(&mut self) {
        for (_, state) in self.states.values_mut().flatten() {
            state.finish();
        }
    }
}
