use crate::constants::{DIAGRAM_ATTR, DIAGRAM_SELECTOR};
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use crate::layout::DomLayout;
use crate::render::BeamRenderer;
use crate::theme;
use beam_core::constants::MEASURE_RETRY_DELAYS_MS;
use beam_core::{DiagramConfig, DiagramEngine, PositionSampler, SubscriptionId};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, JsValue)>;

struct DiagramState {
    name: &'static str,
    layout: DomLayout,
    sampler: PositionSampler,
    engine: DiagramEngine,
    renderer: BeamRenderer,
    resize_observer: Option<web::ResizeObserver>,
    mounted: bool,
}

/// A mounted diagram. Dropping the handle unmounts it.
pub struct DiagramHandle {
    state: Rc<RefCell<DiagramState>>,
    frame: FrameLoop,
    mutation_observer: Option<web::MutationObserver>,
    _observer_callbacks: Vec<ObserverCallback>,
    _listeners: Vec<Listener>,
    retries: Rc<RefCell<Vec<Timeout>>>,
    theme_subscription: Option<SubscriptionId>,
}

/// Mount every `[data-beam-diagram]` container in the page.
pub fn mount_all(document: &web::Document) -> Vec<DiagramHandle> {
    let Some(root) = document.document_element() else {
        return Vec::new();
    };
    dom::query_all(&root, DIAGRAM_SELECTOR)
        .into_iter()
        .filter_map(|container| {
            let name = container.get_attribute(DIAGRAM_ATTR).unwrap_or_default();
            let Some(config) = DiagramConfig::from_name(&name) else {
                log::warn!("[diagram] unknown diagram '{}'", name);
                return None;
            };
            match mount(document, container, config) {
                Ok(handle) => Some(handle),
                Err(e) => {
                    log::error!("[diagram] mount '{}' failed: {:?}", name, e);
                    None
                }
            }
        })
        .collect()
}

pub fn mount(
    document: &web::Document,
    container: web::Element,
    config: DiagramConfig,
) -> anyhow::Result<DiagramHandle> {
    let layout = DomLayout::discover(container, config.anchor)
        .ok_or_else(|| anyhow::anyhow!("'{}' has no origin element", config.name))?;
    let renderer = BeamRenderer::new(
        document,
        &layout.container,
        layout.targets.clone(),
        theme::current(),
    )?;
    log::info!(
        "[diagram] mounting '{}' with {} of {} targets",
        config.name,
        layout.targets.len(),
        config.target_count
    );
    let state = Rc::new(RefCell::new(DiagramState {
        name: config.name,
        sampler: PositionSampler::new(config.target_count, config.anchor),
        engine: DiagramEngine::new(config),
        layout,
        renderer,
        resize_observer: None,
        mounted: true,
    }));

    let frame = {
        let state = state.clone();
        FrameLoop::new(move |now| step(&state, now))
    };

    let resize_cb = observer_callback(&state, &frame, remeasure);
    let resize_observer = web::ResizeObserver::new(resize_cb.as_ref().unchecked_ref())
        .map_err(|e| log::warn!("[diagram] ResizeObserver unavailable: {:?}", e))
        .ok();
    {
        let mut s = state.borrow_mut();
        if let Some(obs) = &resize_observer {
            for el in s.layout.tracked() {
                obs.observe(el);
            }
        }
        s.resize_observer = resize_observer;
    }

    // Children added or removed anywhere in the container: targets may have
    // appeared, disappeared or been replaced.
    let mutation_cb = observer_callback(&state, &frame, rediscover);
    let mutation_observer = web::MutationObserver::new(mutation_cb.as_ref().unchecked_ref())
        .map_err(|e| log::warn!("[diagram] MutationObserver unavailable: {:?}", e))
        .ok();
    if let Some(obs) = &mutation_observer {
        let init = web::MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        _ = obs.observe_with_options(&state.borrow().layout.container, &init);
    }

    let listeners = image_load_listeners(&state, &frame);
    let retries = Rc::new(RefCell::new(Vec::new()));
    for delay in MEASURE_RETRY_DELAYS_MS {
        let state = state.clone();
        let frame = frame.clone();
        retries.borrow_mut().push(Timeout::new(delay, move || {
            remeasure(&state, &frame);
        }));
    }

    let theme_subscription = {
        let state = state.clone();
        theme::subscribe(move |t| {
            if let Ok(mut s) = state.try_borrow_mut() {
                s.renderer.set_theme(t);
            }
        })
    };

    remeasure(&state, &frame);

    Ok(DiagramHandle {
        state,
        frame,
        mutation_observer,
        _observer_callbacks: vec![resize_cb, mutation_cb],
        _listeners: listeners,
        retries,
        theme_subscription,
    })
}

impl DiagramHandle {
    pub fn is_animating(&self) -> bool {
        self.frame.is_running()
    }

    /// Stop the frame loop, disconnect observers, cancel pending retries and
    /// remove the overlay. Idempotent.
    pub fn unmount(&mut self) {
        if !self.state.borrow().mounted {
            return;
        }
        self.frame.dispose();
        if let Some(obs) = self.mutation_observer.take() {
            obs.disconnect();
        }
        // Dropping a gloo Timeout cancels it.
        self.retries.borrow_mut().clear();
        if let Some(id) = self.theme_subscription.take() {
            theme::unsubscribe(id);
        }
        let mut s = self.state.borrow_mut();
        if let Some(obs) = s.resize_observer.take() {
            obs.disconnect();
        }
        s.mounted = false;
        s.engine.clear();
        s.sampler.reset();
        s.renderer.detach();
        log::info!("[diagram] unmounted '{}'", s.name);
    }
}

impl Drop for DiagramHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn step(state: &Rc<RefCell<DiagramState>>, now: std::time::Duration) -> bool {
    let mut s = state.borrow_mut();
    if !s.mounted || !s.layout.is_connected() {
        return false;
    }
    let DiagramState {
        engine, renderer, ..
    } = &mut *s;
    match engine.frame(now) {
        Some(frame) => {
            renderer.draw_frame(&frame);
            true
        }
        None => false,
    }
}

fn remeasure(state: &Rc<RefCell<DiagramState>>, frame: &FrameLoop) {
    let Ok(mut s) = state.try_borrow_mut() else {
        return;
    };
    if !s.mounted {
        return;
    }
    let DiagramState {
        name,
        layout,
        sampler,
        engine,
        renderer,
        ..
    } = &mut *s;
    let observed = engine.observe(sampler.sample(layout));
    if observed.paths_changed {
        log::debug!("[diagram] '{}' measured {} paths", name, engine.paths().len());
        renderer.draw_paths(engine.paths());
    }
    drop(s);
    // Also covers a loop that stopped while the container was detached.
    if observed.animating {
        frame.ensure_running();
    }
}

/// Pick up targets inserted, removed or replaced after mount, then measure.
fn rediscover(state: &Rc<RefCell<DiagramState>>, frame: &FrameLoop) {
    {
        let Ok(mut s) = state.try_borrow_mut() else {
            return;
        };
        if !s.mounted {
            return;
        }
        let DiagramState {
            name,
            layout,
            sampler,
            renderer,
            resize_observer,
            ..
        } = &mut *s;
        if layout.rediscover() {
            log::info!("[diagram] '{}' now tracks {} targets", name, layout.targets.len());
            renderer.set_targets(layout.targets.clone());
            sampler.reset();
            if let Some(obs) = resize_observer {
                obs.disconnect();
                for el in layout.tracked() {
                    obs.observe(el);
                }
            }
        }
    }
    remeasure(state, frame);
}

fn observer_callback(
    state: &Rc<RefCell<DiagramState>>,
    frame: &FrameLoop,
    on_change: fn(&Rc<RefCell<DiagramState>>, &FrameLoop),
) -> ObserverCallback {
    let state = state.clone();
    let frame = frame.clone();
    Closure::wrap(Box::new(move |_entries: js_sys::Array, _observer: JsValue| {
        on_change(&state, &frame);
    }) as Box<dyn FnMut(js_sys::Array, JsValue)>)
}

/// Re-measure when images inside the origin or targets finish loading.
fn image_load_listeners(state: &Rc<RefCell<DiagramState>>, frame: &FrameLoop) -> Vec<Listener> {
    let images: Vec<web::HtmlImageElement> = {
        let s = state.borrow();
        std::iter::once(&s.layout.origin)
            .chain(s.layout.targets.iter())
            .flat_map(|el| dom::query_all(el, "img"))
            .filter_map(|el| el.dyn_into::<web::HtmlImageElement>().ok())
            .filter(|img| !img.complete())
            .collect()
    };
    images
        .iter()
        .filter_map(|img| {
            let state = state.clone();
            let frame = frame.clone();
            Listener::new(img, "load", move |_| remeasure(&state, &frame))
        })
        .collect()
}
