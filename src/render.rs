use crate::constants::*;
use crate::dom;
use beam_core::{Frame, PathDescription, Theme};
use web_sys as web;

/// Draws one diagram's paths and beams into an absolutely positioned SVG
/// overlay, and reflects activation as a class on the target elements.
pub struct BeamRenderer {
    document: web::Document,
    svg: web::Element,
    paths: Vec<web::Element>,
    beams: Vec<web::Element>,
    targets: Vec<web::Element>,
    theme: Theme,
}

impl BeamRenderer {
    pub fn new(
        document: &web::Document,
        container: &web::Element,
        targets: Vec<web::Element>,
        theme: Theme,
    ) -> anyhow::Result<Self> {
        let svg = dom::create_svg(document, "svg").ok_or_else(|| anyhow::anyhow!("no <svg>"))?;
        _ = svg.set_attribute(OVERLAY_ATTR, "");
        _ = svg.set_attribute("aria-hidden", "true");
        _ = svg.set_attribute("style", OVERLAY_STYLE);
        container
            .append_child(&svg)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            document: document.clone(),
            svg,
            paths: Vec::new(),
            beams: Vec::new(),
            targets,
            theme,
        })
    }

    /// Replace the static path lines. Beams are recreated hidden, one per path.
    pub fn draw_paths(&mut self, descriptions: &[PathDescription]) {
        for el in self.paths.drain(..).chain(self.beams.drain(..)) {
            el.remove();
        }
        let (path_color, beam_color) = colors(self.theme);
        for d in descriptions {
            if let Some(path) = dom::create_svg(&self.document, "path") {
                _ = path.set_attribute("d", d.as_str());
                _ = path.set_attribute("fill", "none");
                _ = path.set_attribute("stroke", path_color);
                _ = path.set_attribute("stroke-width", &PATH_STROKE_WIDTH.to_string());
                _ = self.svg.append_child(&path);
                self.paths.push(path);
            }
        }
        for _ in descriptions {
            if let Some(beam) = dom::create_svg(&self.document, "line") {
                _ = beam.set_attribute("stroke", beam_color);
                _ = beam.set_attribute("stroke-width", &BEAM_STROKE_WIDTH.to_string());
                _ = beam.set_attribute("stroke-linecap", "round");
                _ = beam.set_attribute("opacity", "0");
                _ = self.svg.append_child(&beam);
                self.beams.push(beam);
            }
        }
    }

    pub fn draw_frame(&self, frame: &Frame<'_>) {
        for b in frame.beams {
            let Some(line) = self.beams.get(b.index) else {
                continue;
            };
            _ = line.set_attribute("x1", &format!("{:.2}", b.tail.x));
            _ = line.set_attribute("y1", &format!("{:.2}", b.tail.y));
            _ = line.set_attribute("x2", &format!("{:.2}", b.lead.x));
            _ = line.set_attribute("y2", &format!("{:.2}", b.lead.y));
            _ = line.set_attribute("opacity", if b.visible() { "1" } else { "0" });
        }
        if frame.activation_changed {
            for (el, state) in self.targets.iter().zip(frame.activation) {
                _ = el.class_list().toggle_with_force(ACTIVE_CLASS, state.active);
            }
        }
    }

    /// Switch to a re-discovered target list, clearing highlights on the old one.
    pub fn set_targets(&mut self, targets: Vec<web::Element>) {
        for el in &self.targets {
            _ = el.class_list().remove_1(ACTIVE_CLASS);
        }
        self.targets = targets;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        let (path_color, beam_color) = colors(theme);
        for p in &self.paths {
            _ = p.set_attribute("stroke", path_color);
        }
        for b in &self.beams {
            _ = b.set_attribute("stroke", beam_color);
        }
    }

    /// Remove the overlay and any activation classes.
    pub fn detach(&mut self) {
        self.svg.remove();
        self.paths.clear();
        self.beams.clear();
        for el in &self.targets {
            _ = el.class_list().remove_1(ACTIVE_CLASS);
        }
    }
}

fn colors(theme: Theme) -> (&'static str, &'static str) {
    match theme {
        Theme::Light => LIGHT_COLORS,
        Theme::Dark => DARK_COLORS,
    }
}
