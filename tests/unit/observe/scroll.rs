use super::*;

#[test]
fn navbar_threshold_scenario() {
    let mut obs = ScrollObserver::new();
    let id = obs.subscribe(50.0).unwrap();

    assert!(obs.update(0.0).is_empty());
    assert!(!obs.state(id).unwrap().scrolled_past_threshold);

    assert_eq!(
        obs.update(51.0),
        vec![ThresholdChange {
            subscription: id,
            scrolled: true
        }]
    );
    assert_eq!(
        obs.update(40.0),
        vec![ThresholdChange {
            subscription: id,
            scrolled: false
        }]
    );

    assert_eq!(obs.update(60.0).len(), 1);
    for _ in 0..5 {
        assert!(obs.update(60.0).is_empty());
    }
    assert!(obs.update(75.0).is_empty());
}

#[test]
fn threshold_comparison_is_strict() {
    let mut obs = ScrollObserver::new();
    let id = obs.subscribe(50.0).unwrap();
    assert!(obs.update(50.0).is_empty());
    assert_eq!(
        obs.state(id),
        Some(ScrollState {
            offset_y: 50.0,
            scrolled_past_threshold: false
        })
    );
}

#[test]
fn state_matches_offset_after_every_update() {
    let mut obs = ScrollObserver::new();
    let id = obs.subscribe(50.0).unwrap();
    for y in [0.0, 49.9, 50.0, 50.1, 400.0, 10.0, 51.0, 0.0] {
        obs.update(y);
        let state = obs.state(id).unwrap();
        assert_eq!(state, ScrollState::at(y, 50.0));
    }
}

#[test]
fn subscribers_have_independent_thresholds() {
    let mut obs = ScrollObserver::new();
    let low = obs.subscribe(10.0).unwrap();
    let high = obs.subscribe(100.0).unwrap();

    let changes = obs.update(50.0);
    assert_eq!(
        changes,
        vec![ThresholdChange {
            subscription: low,
            scrolled: true
        }]
    );
    assert!(!obs.state(high).unwrap().scrolled_past_threshold);
}

#[test]
fn late_subscriber_starts_from_current_offset() {
    let mut obs = ScrollObserver::new();
    obs.update(300.0);
    let id = obs.subscribe(50.0).unwrap();
    assert!(obs.state(id).unwrap().scrolled_past_threshold);
    assert!(obs.update(320.0).is_empty());
}

#[test]
fn unsubscribe_is_idempotent() {
    let mut obs = ScrollObserver::new();
    let id = obs.subscribe(50.0).unwrap();
    assert!(obs.unsubscribe(id));
    assert!(!obs.unsubscribe(id));
    assert!(obs.update(500.0).is_empty());
    assert!(obs.state(id).is_none());
}

#[test]
fn rejects_bad_thresholds_and_offsets() {
    let mut obs = ScrollObserver::new();
    assert!(obs.subscribe(-1.0).is_err());
    assert!(obs.subscribe(f64::INFINITY).is_err());

    let id = obs.subscribe(50.0).unwrap();
    assert!(obs.update(f64::NAN).is_empty());
    obs.update(-30.0);
    assert_eq!(obs.state(id).unwrap().offset_y, 0.0);
}
