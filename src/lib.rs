#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod contact_form;
mod diagram;
mod dom;
mod frame;
mod layout;
mod lifecycle;
mod notice;
mod render;
mod theme;

thread_local! {
    static DIAGRAMS: RefCell<Vec<diagram::DiagramHandle>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("beam-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Theme first so diagrams mount with the right colours.
    theme::wire(&document);
    contact_form::wire(&document);

    let handles = diagram::mount_all(&document);
    log::info!("[diagram] {} diagrams mounted", handles.len());
    DIAGRAMS.with(|d| d.borrow_mut().extend(handles));

    // Tear everything down when the page goes away so no frame work leaks,
    // and mount again if the page is restored from the back/forward cache.
    for event in [lifecycle::PAGEHIDE_EVENT, lifecycle::PAGESHOW_EVENT] {
        let on_lifecycle = Closure::wrap(Box::new(move |ev: web::Event| {
            let persisted = ev
                .dyn_ref::<web::PageTransitionEvent>()
                .is_some_and(|e| e.persisted());
            if let Some(page_event) = lifecycle::PageEvent::from_event(&ev.type_(), persisted) {
                handle_page_event(page_event);
            }
        }) as Box<dyn FnMut(web::Event)>);
        window
            .add_event_listener_with_callback(event, on_lifecycle.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        on_lifecycle.forget();
    }

    Ok(())
}

fn handle_page_event(event: lifecycle::PageEvent) {
    let mounted = DIAGRAMS.with(|d| d.borrow().len());
    match lifecycle::action_for(event, mounted) {
        lifecycle::LifecycleAction::UnmountAll => {
            DIAGRAMS.with(|d| d.borrow_mut().clear());
            log::info!("[diagram] page hidden, {} diagrams unmounted", mounted);
        }
        lifecycle::LifecycleAction::MountAll => {
            log::info!("[diagram] page restored from cache");
            remount_diagrams();
        }
        lifecycle::LifecycleAction::Nothing => {}
    }
}

/// Unmount every diagram and mount them again, e.g. after the host page
/// swapped its content.
#[wasm_bindgen]
pub fn remount_diagrams() {
    let Some(document) = dom::window_document() else {
        return;
    };
    DIAGRAMS.with(|d| d.borrow_mut().clear());
    let handles = diagram::mount_all(&document);
    DIAGRAMS.with(|d| d.borrow_mut().extend(handles));
}

/// Number of diagrams whose frame loop is currently scheduled.
#[wasm_bindgen]
pub fn animating_diagrams() -> usize {
    DIAGRAMS.with(|d| d.borrow().iter().filter(|h| h.is_animating()).count())
}
