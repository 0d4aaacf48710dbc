// Theme publisher notifications and diagram presets.

use beam_core::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[test]
fn subscribers_hear_only_real_changes() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut publisher = ThemePublisher::new(Theme::Light);
    let sink = seen.clone();
    publisher.subscribe(move |t| sink.borrow_mut().push(t));

    assert!(!publisher.set(Theme::Light));
    assert!(publisher.set(Theme::Dark));
    assert_eq!(publisher.toggle(), Theme::Light);
    assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Light]);
}

#[test]
fn unsubscribed_listeners_are_not_called() {
    let count = Rc::new(RefCell::new(0));
    let mut publisher = ThemePublisher::default();
    let c = count.clone();
    let id = publisher.subscribe(move |_| *c.borrow_mut() += 1);
    let other = publisher.subscribe(|_| {});
    assert_eq!(publisher.subscriber_count(), 2);

    publisher.toggle();
    assert!(publisher.unsubscribe(id));
    assert!(!publisher.unsubscribe(id));
    publisher.toggle();
    assert_eq!(*count.borrow(), 1);
    assert_eq!(publisher.subscriber_count(), 1);
    assert!(publisher.unsubscribe(other));
}

#[test]
fn theme_names_parse_and_serialize() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse(" light "), Some(Theme::Light));
    assert_eq!(Theme::parse("sepia"), None);
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    assert_eq!(Theme::Dark.toggled().as_str(), "light");
}

#[test]
fn presets_match_their_diagrams() {
    let services = DiagramConfig::services();
    assert_eq!(services.target_count, 4);
    assert_eq!(services.policy, PathPolicy::OrthogonalRounded);
    assert_eq!(services.anchor, Anchor::MarkerTop);
    assert_eq!(services.active_duration, Duration::from_millis(800));

    let solvyn = DiagramConfig::solvyn();
    assert_eq!(solvyn.target_count, 13);
    assert_eq!(solvyn.policy, PathPolicy::Linear);
    assert_eq!(solvyn.active_duration, Duration::from_millis(600));

    assert_eq!(DiagramConfig::from_name("solvyn"), Some(solvyn));
    assert_eq!(DiagramConfig::from_name("globe"), None);
}

#[test]
fn start_delays_are_staggered_by_index() {
    let solvyn = DiagramConfig::solvyn();
    let delays = solvyn.start_delays();
    assert_eq!(delays.len(), 13);
    assert_eq!(delays[0], Duration::ZERO);
    assert_eq!(delays[1], SOLVYN_START_STAGGER);
    assert_eq!(delays[12], SOLVYN_START_STAGGER * 12);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_consistent() {
    assert!(BEAM_SPEED > 0.0 && BEAM_SPEED <= 1.0);
    assert!(COMET_HALF_LENGTH > 0.0);
    assert!(TOUCH_THRESHOLD > POSITION_TOLERANCE);
    assert!(MEASURE_RETRY_DELAYS_MS.windows(2).all(|w| w[0] < w[1]));
}
