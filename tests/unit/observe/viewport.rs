use super::*;

fn grid_bounds() -> Rect {
    Rect::new(0.0, 772.0, 1440.0, 1400.0)
}

#[test]
fn fires_when_top_reaches_85_percent_of_viewport() {
    let mut obs = ViewportObserver::new(Viewport::default());
    let id = obs.observe("grid".into(), grid_bounds(), 0.85).unwrap();

    // 772 - 0 > 765
    assert!(obs.evaluate().is_empty());

    obs.set_scroll(6.0);
    assert!(obs.evaluate().is_empty());

    obs.set_scroll(8.0);
    let fired = obs.evaluate();
    assert_eq!(
        fired,
        vec![ViewportEntry {
            id,
            element: "grid".into()
        }]
    );
    assert!(!obs.is_pending(id));
}

#[test]
fn fires_only_once_across_scroll_back() {
    let mut obs = ViewportObserver::new(Viewport::default());
    obs.observe("grid".into(), grid_bounds(), 0.85).unwrap();

    obs.set_scroll(200.0);
    assert_eq!(obs.evaluate().len(), 1);
    obs.set_scroll(0.0);
    assert!(obs.evaluate().is_empty());
    obs.set_scroll(300.0);
    assert!(obs.evaluate().is_empty());
}

#[test]
fn unobserved_elements_never_fire() {
    let mut obs = ViewportObserver::new(Viewport::default());
    let id = obs.observe("grid".into(), grid_bounds(), 0.85).unwrap();
    assert!(obs.unobserve(id));
    assert!(!obs.unobserve(id));
    obs.set_scroll(2000.0);
    assert!(obs.evaluate().is_empty());
}

#[test]
fn taller_viewport_can_reveal_without_scrolling() {
    let mut obs = ViewportObserver::new(Viewport::default());
    obs.observe("grid".into(), grid_bounds(), 0.85).unwrap();
    assert!(obs.evaluate().is_empty());

    obs.set_viewport(Viewport::new(1440.0, 1200.0).unwrap());
    assert_eq!(obs.evaluate().len(), 1);
}

#[test]
fn start_fraction_must_be_normalized() {
    let mut obs = ViewportObserver::new(Viewport::default());
    assert!(obs.observe("x".into(), grid_bounds(), 1.5).is_err());
    assert!(obs.observe("x".into(), grid_bounds(), -0.1).is_err());
}
