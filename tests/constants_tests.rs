// Host-side tests for page wiring constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

fn is_attribute_selector(s: &str) -> bool {
    s.starts_with("[data-") && s.ends_with(']') && !s.contains(' ')
}

#[test]
fn selectors_are_plain_data_attribute_selectors() {
    for sel in [
        DIAGRAM_SELECTOR,
        ORIGIN_SELECTOR,
        TARGET_SELECTOR,
        MARKER_SELECTOR,
    ] {
        assert!(is_attribute_selector(sel), "unexpected selector {sel}");
    }
    assert_eq!(DIAGRAM_SELECTOR, format!("[{DIAGRAM_ATTR}]"));
}

#[test]
fn contact_ids_are_distinct() {
    let ids = [
        CONTACT_FORM_ID,
        CONTACT_NAME_ID,
        CONTACT_EMAIL_ID,
        CONTACT_COMPANY_ID,
        CONTACT_MESSAGE_ID,
        CONTACT_SUBMIT_ID,
        CONTACT_NOTICE_ID,
        THEME_TOGGLE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn notice_dismisses_after_five_seconds() {
    assert_eq!(NOTICE_DISMISS_MS, 5_000);
    assert!(CONTACT_ENDPOINT.starts_with('/'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn beam_is_drawn_over_its_path() {
    assert!(BEAM_STROKE_WIDTH > PATH_STROKE_WIDTH);
    assert_ne!(LIGHT_COLORS.1, DARK_COLORS.1);
    assert!(OVERLAY_STYLE.contains("pointer-events:none"));
    assert!(SVG_NS.starts_with("http://www.w3.org/"));
}
