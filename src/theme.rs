use crate::constants::{DARK_CLASS, DARK_MEDIA_QUERY, THEME_STORAGE_KEY, THEME_TOGGLE_ID};
use crate::dom;
use beam_core::{SubscriptionId, Theme, ThemePublisher};
use std::cell::RefCell;
use web_sys as web;

thread_local! {
    static THEME: RefCell<ThemePublisher> = RefCell::new(ThemePublisher::default());
}

pub fn current() -> Theme {
    THEME.with(|t| t.borrow().current())
}

pub fn subscribe(f: impl FnMut(Theme) + 'static) -> Option<SubscriptionId> {
    THEME.with(|t| t.try_borrow_mut().ok().map(|mut t| t.subscribe(f)))
}

pub fn unsubscribe(id: SubscriptionId) {
    THEME.with(|t| {
        if let Ok(mut t) = t.try_borrow_mut() {
            t.unsubscribe(id);
        }
    });
}

/// Resolve the initial theme, keep the document class and storage in sync,
/// and hook up the toggle button.
pub fn wire(document: &web::Document) {
    let initial = stored_theme().or_else(system_theme).unwrap_or_default();
    apply_class(document, initial);
    THEME.with(|t| {
        let mut t = t.borrow_mut();
        t.set(initial);
        let doc = document.clone();
        t.subscribe(move |theme| {
            apply_class(&doc, theme);
            store_theme(theme);
        });
    });
    dom::add_click_listener(document, THEME_TOGGLE_ID, || {
        let theme = THEME.with(|t| t.borrow_mut().toggle());
        log::info!("[theme] switched to {}", theme.as_str());
    });
}

fn apply_class(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root
            .class_list()
            .toggle_with_force(DARK_CLASS, theme == Theme::Dark);
    }
}

fn stored_theme() -> Option<Theme> {
    let storage = web::window()?.local_storage().ok()??;
    let value = storage.get_item(THEME_STORAGE_KEY).ok()??;
    Theme::parse(&value)
}

fn store_theme(theme: Theme) {
    let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
    if let Some(storage) = storage {
        _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

fn system_theme() -> Option<Theme> {
    let query = web::window()?.match_media(DARK_MEDIA_QUERY).ok()??;
    Some(if query.matches() {
        Theme::Dark
    } else {
        Theme::Light
    })
}
