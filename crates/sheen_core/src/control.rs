//! Control handle table
//!
//! The host toolkit owns its on-screen controls; the theme only ever sees a
//! [`ControlId`]. Ids are generational slotmap keys, so once a control is
//! destroyed its id stays dead forever, even after the slot is reused by a
//! newer control.
//!
//! The table is single-threaded and uses interior mutability so the host glue
//! and the animation registry can share it behind an `Rc`.

use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;

new_key_type! {
    /// Identity of one on-screen control instance
    pub struct ControlId;
}

/// What the host tells us about a control when it is created
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlInfo {
    /// Debug name (object name or class name on the toolkit side)
    pub name: String,
}

impl ControlInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Table of live controls
#[derive(Debug, Default)]
pub struct ControlTable {
    controls: RefCell<SlotMap<ControlId, ControlInfo>>,
}

impl ControlTable {
    pub fn new() -> Self {
        Self {
            controls: RefCell::new(SlotMap::with_key()),
        }
    }

    /// Register a freshly created control and hand out its id
    pub fn create(&self, info: ControlInfo) -> ControlId {
        let id = self.controls.borrow_mut().insert(info);
        tracing::trace!(?id, "control created");
        id
    }

    /// Mark a control as destroyed. Returns `false` if it was already gone.
    pub fn destroy(&self, id: ControlId) -> bool {
        let removed = self.controls.borrow_mut().remove(id).is_some();
        if removed {
            tracing::trace!(?id, "control destroyed");
        }
        removed
    }

    /// Liveness check, O(1)
    pub fn is_alive(&self, id: ControlId) -> bool {
        self.controls.borrow().contains_key(id)
    }

    /// Debug name of a live control
    pub fn name(&self, id: ControlId) -> Option<String> {
        self.controls.borrow().get(id).map(|info| info.name.clone())
    }

    pub fn len(&self) -> usize {
        self.controls.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.borrow().is_empty()
    }
}
