// Page lifecycle decisions, host-side.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::*;

#[test]
fn hiding_the_page_unmounts_live_diagrams() {
    assert_eq!(action_for(PageEvent::Hide, 2), LifecycleAction::UnmountAll);
    assert_eq!(action_for(PageEvent::Hide, 0), LifecycleAction::Nothing);
}

#[test]
fn restore_from_cache_mounts_again() {
    let show = PageEvent::Show { persisted: true };
    assert_eq!(action_for(show, 0), LifecycleAction::MountAll);
    assert_eq!(action_for(show, 2), LifecycleAction::Nothing);
}

#[test]
fn first_load_pageshow_leaves_startup_mounts_alone() {
    let show = PageEvent::Show { persisted: false };
    assert_eq!(action_for(show, 2), LifecycleAction::Nothing);
    assert_eq!(action_for(show, 0), LifecycleAction::Nothing);
}

#[test]
fn hide_then_cached_show_round_trip() {
    let mut mounted = 2;
    if action_for(PageEvent::Hide, mounted) == LifecycleAction::UnmountAll {
        mounted = 0;
    }
    let restored = PageEvent::from_event(PAGESHOW_EVENT, true).unwrap();
    assert_eq!(action_for(restored, mounted), LifecycleAction::MountAll);
}

#[test]
fn event_names_map_to_page_events() {
    assert_eq!(PageEvent::from_event(PAGEHIDE_EVENT, true), Some(PageEvent::Hide));
    assert_eq!(
        PageEvent::from_event(PAGESHOW_EVENT, false),
        Some(PageEvent::Show { persisted: false })
    );
    assert_eq!(PageEvent::from_event("unload", false), None);
}
