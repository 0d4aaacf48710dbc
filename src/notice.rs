use crate::constants::NOTICE_DISMISS_MS;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use web_sys as web;

thread_local! {
    static DISMISS: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice-success",
            NoticeKind::Error => "notice-error",
        }
    }
}

/// Show an inline message in element `id` and hide it again after
/// [`NOTICE_DISMISS_MS`]. A newer notice restarts the timer.
pub fn show(document: &web::Document, id: &'static str, kind: NoticeKind, text: &str) {
    let Some(el) = document.get_element_by_id(id) else {
        return;
    };
    el.set_text_content(Some(text));
    let cl = el.class_list();
    _ = cl.remove_3("hidden", NoticeKind::Success.class(), NoticeKind::Error.class());
    _ = cl.add_1(kind.class());
    _ = el.set_attribute("role", if kind == NoticeKind::Error { "alert" } else { "status" });
    // fallback for environments without CSS class
    _ = el.set_attribute("style", "");

    let doc = document.clone();
    let timeout = Timeout::new(NOTICE_DISMISS_MS, move || hide(&doc, id));
    // Replacing the previous timeout drops, and so cancels, it.
    DISMISS.with(|d| *d.borrow_mut() = Some(timeout));
}

pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}
