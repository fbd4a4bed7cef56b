#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Idle
// =============================================================

#[test]
fn default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn idle_has_no_index_or_target() {
    let state = InputState::Idle;
    assert_eq!(state.dragging_index(), None);
    assert_eq!(state.target_for(Point::new(10.0, 10.0)), None);
}

// =============================================================
// Dragging
// =============================================================

#[test]
fn grab_records_offset_from_origin() {
    let state = InputState::grab(4, Point::new(30.0, 45.0), Point::new(20.0, 40.0));
    assert_eq!(state, InputState::Dragging { index: 4, grab_offset: Point::new(10.0, 5.0) });
    assert_eq!(state.dragging_index(), Some(4));
}

#[test]
fn target_keeps_grab_point_under_cursor() {
    let state = InputState::grab(0, Point::new(30.0, 45.0), Point::new(20.0, 40.0));
    assert_eq!(state.target_for(Point::new(100.0, 100.0)), Some(Point::new(90.0, 95.0)));
}

#[test]
fn target_at_grab_point_is_original_origin() {
    let origin = Point::new(12.5, 7.5);
    let pointer = Point::new(40.0, 33.0);
    let state = InputState::grab(1, pointer, origin);
    assert_eq!(state.target_for(pointer), Some(origin));
}

#[test]
fn debug_format_names_variant() {
    assert_eq!(format!("{:?}", InputState::Idle), "Idle");
    let dragging = format!("{:?}", InputState::grab(2, Point::default(), Point::default()));
    assert!(dragging.starts_with("Dragging"));
}

// =============================================================
// Resize
// =============================================================

#[test]
fn rescaled_scales_grab_offset() {
    let state = InputState::grab(1, Point::new(30.0, 40.0), Point::new(10.0, 10.0));
    let scaled = state.rescaled(Scale { x: 2.0, y: 0.5 });
    assert_eq!(scaled, InputState::Dragging { index: 1, grab_offset: Point::new(40.0, 15.0) });
}

#[test]
fn rescaled_idle_stays_idle() {
    assert_eq!(InputState::Idle.rescaled(Scale { x: 3.0, y: 3.0 }), InputState::Idle);
}

// =============================================================
// PointerLock
// =============================================================

#[test]
fn unowned_lock_admits_any_pointer() {
    let lock = PointerLock::default();
    assert_eq!(lock.owner(), None);
    assert!(lock.admits(1));
    assert!(lock.admits(7));
}

#[test]
fn owned_lock_rejects_other_pointers() {
    let mut lock = PointerLock::default();
    lock.acquire(1);
    assert!(lock.admits(1));
    assert!(!lock.admits(2));
}

#[test]
fn release_reopens_lock() {
    let mut lock = PointerLock::default();
    lock.acquire(1);
    lock.release();
    assert!(lock.admits(2));
}
