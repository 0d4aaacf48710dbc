// Page lifecycle: which diagram work a `pagehide`/`pageshow` event calls for.
//
// Pure logic so it can be exercised off the browser.

pub const PAGEHIDE_EVENT: &str = "pagehide";
pub const PAGESHOW_EVENT: &str = "pageshow";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Hide,
    /// `persisted` is set when the page comes back from the back/forward cache.
    Show { persisted: bool },
}

impl PageEvent {
    pub fn from_event(name: &str, persisted: bool) -> Option<Self> {
        match name {
            PAGEHIDE_EVENT => Some(Self::Hide),
            PAGESHOW_EVENT => Some(Self::Show { persisted }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    UnmountAll,
    MountAll,
    Nothing,
}

/// Decide what to do given the event and how many diagrams are mounted now.
///
/// A fresh load fires a non-persisted `pageshow` after startup already
/// mounted everything, so only a restore from cache remounts.
pub fn action_for(event: PageEvent, mounted: usize) -> LifecycleAction {
    match event {
        PageEvent::Hide if mounted > 0 => LifecycleAction::UnmountAll,
        PageEvent::Show { persisted: true } if mounted == 0 => LifecycleAction::MountAll,
        _ => LifecycleAction::Nothing,
    }
}
