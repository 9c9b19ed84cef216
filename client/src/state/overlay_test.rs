use super::*;

#[test]
fn new_lock_is_unlocked() {
    let lock = ScrollLock::new();
    assert_eq!(lock.depth(), 0);
    assert_eq!(lock.depth(), 0);
}

#[test]
fn slot_hold_and_release_restore_depth() {
    let lock = ScrollLock::new();
    let mut slot = OverlaySlot::new(lock.clone());
    slot.hold();
    assert!(lock.depth() > 0);
    assert!(slot.is_held());
    slot.release();
    assert_eq!(lock.depth(), 0);
    assert!(!slot.is_held());
}

#[test]
fn slot_hold_is_idempotent() {
    let lock = ScrollLock::new();
    let mut slot = OverlaySlot::new(lock.clone());
    slot.hold();
    slot.hold();
    assert_eq!(lock.depth(), 1);
    slot.release();
    slot.release();
    assert_eq!(lock.depth(), 0);
}

#[test]
fn nested_slots_keep_lock_until_last_release() {
    let lock = ScrollLock::new();
    let mut outer = OverlaySlot::new(lock.clone());
    let mut inner = OverlaySlot::new(lock.clone());
    outer.hold();
    inner.hold();
    assert_eq!(lock.depth(), 2);
    outer.release();
    assert!(lock.depth() > 0);
    inner.release();
    assert_eq!(lock.depth(), 0);
}

#[test]
fn release_without_hold_never_underflows() {
    let lock = ScrollLock::new();
    let mut slot = OverlaySlot::new(lock.clone());
    slot.release();
    assert_eq!(lock.depth(), 0);
    lock.release();
    assert_eq!(lock.depth(), 0);
}
