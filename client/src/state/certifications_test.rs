use super::*;

#[test]
fn filter_iso_returns_three_in_catalog_order() {
    let out = filter(CERTIFICATIONS, CertificationCategory::Iso);
    assert_eq!(out.len(), 3);
    let ids = out.iter().map(|c| c.id).collect::<Vec<_>>();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert!(out.iter().all(|c| c.category == CertificationCategory::Iso));
}

#[test]
fn filter_partitions_catalog() {
    let total: usize = CertificationCategory::ALL
        .into_iter()
        .map(|c| filter(CERTIFICATIONS, c).len())
        .sum();
    assert_eq!(total, CERTIFICATIONS.len());
}

#[test]
fn category_keys_round_trip() {
    for c in CertificationCategory::ALL {
        assert_eq!(CertificationCategory::from_key(c.key()), Some(c));
    }
    assert_eq!(CertificationCategory::from_key("other"), None);
}

#[test]
fn gallery_defaults_to_iso_tab_without_preview() {
    let state = CertificationGalleryState::default();
    assert_eq!(state.active, CertificationCategory::Iso);
    assert!(!state.is_preview_open());
    assert!(state.previewed().is_none());
}

#[test]
fn select_category_changes_visible_items() {
    let mut state = CertificationGalleryState::default();
    state.select_category(CertificationCategory::Legal);
    assert!(!state.visible().is_empty());
    assert!(state.visible().iter().all(|c| c.category == CertificationCategory::Legal));
}

#[test]
fn preview_open_then_close_restores_scroll_lock() {
    let lock = ScrollLock::new();
    let mut state = CertificationGalleryState::new(lock.clone());
    let cert = state.visible()[0];

    state.select_for_preview(cert);
    assert!(state.is_preview_open());
    assert_eq!(state.previewed().map(|c| c.id), Some(cert.id));
    assert_eq!(lock.depth(), 1);

    state.close_preview();
    assert!(!state.is_preview_open());
    assert_eq!(lock.depth(), 0);
}

#[test]
fn switching_preview_items_keeps_single_lock() {
    let lock = ScrollLock::new();
    let mut state = CertificationGalleryState::new(lock.clone());
    let items = state.visible();
    state.select_for_preview(items[0]);
    state.select_for_preview(items[1]);
    assert_eq!(lock.depth(), 1);
    assert_eq!(state.previewed().map(|c| c.id), Some(items[1].id));
    state.close_preview();
    assert_eq!(lock.depth(), 0);
}

#[test]
fn close_preview_from_every_exit_path_is_idempotent() {
    let lock = ScrollLock::new();
    let mut state = CertificationGalleryState::new(lock.clone());
    state.select_for_preview(state.visible()[0]);
    // Backdrop click followed by a stray Escape.
    state.close_preview();
    state.close_preview();
    assert_eq!(lock.depth(), 0);
}

#[test]
fn catalog_ids_are_unique() {
    let mut ids = CERTIFICATIONS.iter().map(|c| c.id).collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), CERTIFICATIONS.len());
}
