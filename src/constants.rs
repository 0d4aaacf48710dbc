/// Page wiring and rendering constants for the browser front-end.
///
/// Selectors and ids are the contract with the page markup; colours and
/// stroke widths are the renderer's defaults per theme.
// Diagram discovery
pub const DIAGRAM_SELECTOR: &str = "[data-beam-diagram]";
pub const DIAGRAM_ATTR: &str = "data-beam-diagram";
pub const ORIGIN_SELECTOR: &str = "[data-beam-origin]";
pub const TARGET_SELECTOR: &str = "[data-beam-target]";
pub const MARKER_SELECTOR: &str = "[data-beam-marker]";
pub const ACTIVE_CLASS: &str = "active";

// SVG overlay
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const OVERLAY_ATTR: &str = "data-beam-overlay";
pub const OVERLAY_STYLE: &str =
    "position:absolute;inset:0;width:100%;height:100%;pointer-events:none;overflow:visible";
pub const PATH_STROKE_WIDTH: f32 = 1.5;
pub const BEAM_STROKE_WIDTH: f32 = 3.0;

// Per-theme colours: (path, beam)
pub const LIGHT_COLORS: (&str, &str) = ("rgba(15, 23, 42, 0.12)", "#16a34a");
pub const DARK_COLORS: (&str, &str) = ("rgba(226, 232, 240, 0.14)", "#4ade80");

// Theme
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";
pub const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

// Contact form
pub const CONTACT_ENDPOINT: &str = "/api/send";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_NAME_ID: &str = "contact-name";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_COMPANY_ID: &str = "contact-company";
pub const CONTACT_MESSAGE_ID: &str = "contact-message";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CONTACT_NOTICE_ID: &str = "contact-notice";
pub const NOTICE_DISMISS_MS: u32 = 5_000;
pub const NOTICE_SENT_TEXT: &str = "Thanks! Your message has been sent.";
pub const NOTICE_FAILED_TEXT: &str = "Sorry, something went wrong. Please try again.";
