use crate::constants::{MARKER_SELECTOR, ORIGIN_SELECTOR, TARGET_SELECTOR};
use crate::dom;
use beam_core::{Anchor, LayoutSource};
use kurbo::Rect;
use web_sys as web;

/// Live DOM elements of one diagram, measured on demand.
pub struct DomLayout {
    pub container: web::Element,
    pub origin: web::Element,
    pub targets: Vec<web::Element>,
    anchor: Anchor,
}

impl DomLayout {
    /// Resolve origin and targets inside `container`.
    ///
    /// Returns `None` when the container has no origin element.
    pub fn discover(container: web::Element, anchor: Anchor) -> Option<Self> {
        let origin = container.query_selector(ORIGIN_SELECTOR).ok().flatten()?;
        let targets = dom::query_all(&container, TARGET_SELECTOR);
        Some(Self {
            container,
            origin,
            targets,
            anchor,
        })
    }

    /// Look for origin and targets again. Returns `true` when the element set
    /// differs from the one currently tracked.
    pub fn rediscover(&mut self) -> bool {
        let Some(fresh) = Self::discover(self.container.clone(), self.anchor) else {
            return false;
        };
        if fresh.origin == self.origin && fresh.targets == self.targets {
            return false;
        }
        *self = fresh;
        true
    }

    pub fn is_connected(&self) -> bool {
        self.container.is_connected()
    }

    /// Every element whose box affects the measurement.
    pub fn tracked(&self) -> impl Iterator<Item = &web::Element> {
        std::iter::once(&self.container)
            .chain(std::iter::once(&self.origin))
            .chain(self.targets.iter())
    }

    fn measured_element(&self, target: &web::Element) -> Option<web::Element> {
        match self.anchor {
            Anchor::Center => Some(target.clone()),
            Anchor::MarkerTop => target.query_selector(MARKER_SELECTOR).ok().flatten(),
        }
    }
}

impl LayoutSource for DomLayout {
    fn container_rect(&self) -> Option<Rect> {
        Some(dom::bounding_rect(&self.container))
    }

    fn origin_rect(&self) -> Option<Rect> {
        Some(dom::bounding_rect(&self.origin))
    }

    fn target_rects(&self) -> Vec<Option<Rect>> {
        self.targets
            .iter()
            .map(|t| self.measured_element(t).map(|el| dom::bounding_rect(&el)))
            .collect()
    }
}
