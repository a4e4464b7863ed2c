//! Integration tests for control lifecycle in the engine registry
//!
//! These tests verify that:
//! - Destroy notifications remove every trace of a control
//! - Stale ids never resurrect state, even when the slot is reused
//! - Opacity reads within one frame agree with each other
//! - The defensive sweep catches controls destroyed without notification

use sheen_animation::{
    AnimationConfig, AnimationMode, EngineKind, EngineRegistry, SubControl, Subject,
};
use sheen_core::{ControlInfo, ControlTable};
use std::rc::Rc;
use std::time::Duration;

fn registry() -> EngineRegistry {
    EngineRegistry::new(Rc::new(ControlTable::new()), AnimationConfig::default())
}

/// A control created in the slot of a destroyed one starts fresh
#[test]
fn test_reused_slot_does_not_resurrect_state() {
    let mut registry = registry();
    let start = registry.frame_time();
    let old = registry.controls().create(ControlInfo::named("item"));

    registry
        .widget_state()
        .update_state(old, AnimationMode::Hover, false);
    registry
        .widget_state()
        .update_state(old, AnimationMode::Hover, true);
    registry.begin_frame(start + Duration::from_millis(60));
    assert!(registry.widget_state().opacity(old, AnimationMode::Hover) > 0.0);

    registry.controls().destroy(old);
    registry.unregister_control(old);
    assert_eq!(registry.tracked_entries(), 0);

    let new = registry.controls().create(ControlInfo::named("item"));
    assert_ne!(old, new);
    assert_eq!(registry.widget_state().opacity(new, AnimationMode::Hover), 0.0);
    assert!(!registry
        .widget_state()
        .is_animated(new, AnimationMode::Hover));

    // First observation of the new control is at rest, never mid-transition.
    assert!(!registry
        .widget_state()
        .update_state(new, AnimationMode::Hover, true));
    assert_eq!(registry.widget_state().opacity(new, AnimationMode::Hover), 1.0);
}

/// Queries through a stale id neither advance nor recreate state
#[test]
fn test_stale_id_after_unregister_is_inert() {
    let mut registry = registry();
    let button = registry.controls().create(ControlInfo::named("button"));

    registry
        .widget_state()
        .update_state(button, AnimationMode::Pressed, false);
    registry
        .widget_state()
        .update_state(button, AnimationMode::Pressed, true);
    registry.controls().destroy(button);
    registry.unregister_control(button);

    assert!(!registry
        .widget_state()
        .update_state(button, AnimationMode::Pressed, false));
    assert!(!registry
        .scroll_bar()
        .update_hovered_sub_control(button, Some(SubControl::AddLine)));
    assert_eq!(
        registry.widget_state().opacity(button, AnimationMode::Pressed),
        0.0
    );
    assert_eq!(registry.tracked_entries(), 0);
    assert!(!registry.is_registered(button));
}

/// Unregistration removes the control from families the caller never named
#[test]
fn test_unregister_covers_every_family() {
    let mut registry = registry();
    let control = registry.controls().create(ControlInfo::named("composite"));
    registry.register_control(control);

    for kind in EngineKind::ALL {
        let subject = match kind {
            EngineKind::WidgetState => Subject::Mode(AnimationMode::Focus),
            EngineKind::ScrollBar => Subject::SubControl(SubControl::Groove),
            EngineKind::SpinBox => Subject::SubControl(SubControl::Up),
            EngineKind::Dial => Subject::SubControl(SubControl::Handle),
            EngineKind::TabBar | EngineKind::HeaderView => Subject::Index(4),
            EngineKind::BusyIndicator => Subject::Busy,
        };
        registry.engine(kind).update_state(control, subject, true);
    }
    assert_eq!(registry.tracked_entries(), EngineKind::COUNT);

    assert_eq!(registry.unregister_control(control), EngineKind::COUNT);
    for kind in EngineKind::ALL {
        assert!(registry.store(kind).is_empty(), "{kind} still tracks state");
    }
}

/// Many transient controls come and go without growing the registry
#[test]
fn test_high_churn_does_not_leak() {
    let mut registry = registry();

    for round in 0..1_000u32 {
        let item = registry
            .controls()
            .create(ControlInfo::named(format!("item-{round}")));
        registry
            .widget_state()
            .update_state(item, AnimationMode::Hover, round % 2 == 0);
        registry
            .header_view()
            .update_hovered_index(item, Some(round % 7));
        registry.controls().destroy(item);
        registry.unregister_control(item);
    }

    assert_eq!(registry.tracked_entries(), 0);
    assert!(registry.controls().is_empty());
}

/// Controls destroyed without a notification are caught by the sweep
#[test]
fn test_sweep_is_a_safety_net() {
    let mut registry = registry();
    let controls = Rc::clone(registry.controls());
    let item = controls.create(ControlInfo::named("item"));

    registry
        .widget_state()
        .update_state(item, AnimationMode::Hover, true);
    registry.dial().update_state(item, SubControl::Handle, true);

    controls.destroy(item);
    assert_eq!(registry.tracked_entries(), 2);
    assert_eq!(registry.sweep(), 2);
    assert_eq!(registry.tracked_entries(), 0);
}

/// Several roles read in the same frame see the same progress
#[test]
fn test_reads_within_a_frame_are_consistent() {
    let mut registry = registry();
    let start = registry.frame_time();
    let button = registry.controls().create(ControlInfo::named("button"));

    registry
        .widget_state()
        .update_state(button, AnimationMode::Hover, false);
    registry
        .widget_state()
        .update_state(button, AnimationMode::Hover, true);

    registry.begin_frame(start + Duration::from_millis(45));
    let background = registry.widget_state().opacity(button, AnimationMode::Hover);
    std::thread::sleep(Duration::from_millis(5));
    let outline = registry.widget_state().opacity(button, AnimationMode::Hover);
    assert_eq!(background, outline);
}

/// Hover sequence polled across repaint ticks rises monotonically to 1
#[test]
fn test_hover_sequence_is_monotonic() {
    let mut registry = registry();
    let start = registry.frame_time();
    let button = registry.controls().create(ControlInfo::named("button"));

    registry
        .widget_state()
        .update_state(button, AnimationMode::Hover, false);
    registry
        .widget_state()
        .update_state(button, AnimationMode::Hover, true);

    let mut previous = 0.0;
    for tick in 1..=12u64 {
        registry.begin_frame(start + Duration::from_millis(tick * 16));
        let opacity = registry.widget_state().opacity(button, AnimationMode::Hover);
        assert!(opacity >= previous, "tick {tick}: {opacity} < {previous}");
        assert!((0.0..=1.0).contains(&opacity));
        previous = opacity;
    }
    assert_eq!(previous, 1.0);
}
