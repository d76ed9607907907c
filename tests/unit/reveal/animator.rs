use super::*;
use crate::animation::ease::Ease;

fn ids(names: &[&str]) -> Vec<ElementId> {
    names.iter().map(|n| ElementId::from(*n)).collect()
}

fn fade_up() -> RevealSpec {
    RevealSpec::fade_up(40.0, Millis(1000), Ease::Linear).with_stagger(Millis(150))
}

fn grid_trigger() -> RevealTrigger {
    RevealTrigger::OnIntersect {
        element: "grid".into(),
        bounds: Rect::new(0.0, 772.0, 1440.0, 1400.0),
        start_fraction: 0.85,
    }
}

fn count(out: &[MotionEvent], pred: impl Fn(&MotionEvent) -> bool) -> usize {
    out.iter().filter(|e| pred(e)).count()
}

#[test]
fn on_mount_respects_delay_then_plays_once() {
    let mut anim = RevealAnimator::new(Viewport::default());
    let mut out = Vec::new();
    let set = RevealSetId::from("hero-title");
    anim.register(
        set.clone(),
        ids(&["title"]),
        RevealTrigger::OnMount,
        fade_up().with_delay(Millis(300)),
        Millis(0),
        &mut out,
    )
    .unwrap();
    assert_eq!(anim.status(&set), Some(RevealStatus::Pending));

    anim.tick(Millis(299), &mut out);
    assert_eq!(anim.status(&set), Some(RevealStatus::Pending));
    anim.tick(Millis(300), &mut out);
    assert_eq!(anim.status(&set), Some(RevealStatus::Animating));
    anim.tick(Millis(1300), &mut out);
    assert_eq!(anim.status(&set), Some(RevealStatus::Done));

    for t in [2000, 5000, 9000] {
        anim.tick(Millis(t), &mut out);
    }
    assert_eq!(
        count(&out, |e| matches!(e, MotionEvent::RevealStarted { .. })),
        1
    );
    assert_eq!(
        count(&out, |e| matches!(e, MotionEvent::RevealCompleted { .. })),
        1
    );
    assert_eq!(
        anim.style_of(&"title".into()),
        Some(RevealStyle::VISIBLE)
    );
}

#[test]
fn stagger_follows_registration_order() {
    let mut anim = RevealAnimator::new(Viewport::default());
    let mut out = Vec::new();
    anim.register(
        "cards".into(),
        ids(&["third", "first", "second"]),
        RevealTrigger::OnMount,
        fade_up(),
        Millis(0),
        &mut out,
    )
    .unwrap();
    for t in (0..=400).step_by(50) {
        anim.tick(Millis(t), &mut out);
    }
    let started: Vec<&str> = out
        .iter()
        .filter_map(|e| match e {
            MotionEvent::ElementRevealStarted { element, .. } => Some(element.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(started, vec!["third", "first", "second"]);
}

#[test]
fn on_intersect_waits_for_the_viewport() {
    let mut anim = RevealAnimator::new(Viewport::default());
    let mut out = Vec::new();
    let set = RevealSetId::from("home.grid");
    anim.register(
        set.clone(),
        ids(&["a", "b", "c"]),
        grid_trigger(),
        fade_up(),
        Millis(0),
        &mut out,
    )
    .unwrap();

    anim.tick(Millis(5000), &mut out);
    assert_eq!(anim.status(&set), Some(RevealStatus::Pending));
    assert!(anim.is_watching(&set));
    assert_eq!(
        anim.style_of(&"a".into()),
        Some(RevealStyle::hidden_below(40.0))
    );

    anim.on_scroll(120.0, Millis(6000), &mut out);
    assert_eq!(anim.status(&set), Some(RevealStatus::Animating));
    assert!(!anim.is_watching(&set));

    anim.tick(Millis(7300), &mut out);
    assert_eq!(anim.status(&set), Some(RevealStatus::Done));

    anim.on_scroll(0.0, Millis(7400), &mut out);
    anim.on_scroll(500.0, Millis(7500), &mut out);
    assert_eq!(
        count(&out, |e| matches!(e, MotionEvent::ViewportEntered { .. })),
        1
    );
}

#[test]
fn reregistering_a_live_set_cancels_the_previous_instance() {
    let mut anim = RevealAnimator::new(Viewport::default());
    let mut out = Vec::new();
    let set = RevealSetId::from("booking");
    let first = anim
        .register(
            set.clone(),
            ids(&["copy", "form"]),
            RevealTrigger::OnMount,
            fade_up(),
            Millis(0),
            &mut out,
        )
        .unwrap();
    anim.tick(Millis(500), &mut out);
    assert_eq!(anim.status(&set), Some(RevealStatus::Animating));

    out.clear();
    let second = anim
        .register(
            set.clone(),
            ids(&["copy", "form"]),
            RevealTrigger::OnMount,
            fade_up(),
            Millis(500),
            &mut out,
        )
        .unwrap();
    assert_eq!(
        &out[..2],
        &[
            MotionEvent::RevealCancelled { set: set.clone() },
            MotionEvent::RevealArmed { set: set.clone() },
        ]
    );
    assert_eq!(anim.len(), 1);

    // The stale handle must not touch the fresh registration.
    assert!(!anim.dispose(&first, &mut out));
    assert_eq!(anim.status(&set), Some(RevealStatus::Animating));

    anim.tick(Millis(2000), &mut out);
    assert_eq!(anim.status(&set), Some(RevealStatus::Done));
    assert!(!anim.dispose(&second, &mut out));
}

#[test]
fn dispose_is_idempotent_and_freezes_styles() {
    let mut anim = RevealAnimator::new(Viewport::default());
    let mut out = Vec::new();
    let set = RevealSetId::from("about");
    let handle = anim
        .register(
            set.clone(),
            ids(&["a"]),
            RevealTrigger::OnMount,
            fade_up(),
            Millis(0),
            &mut out,
        )
        .unwrap();
    anim.tick(Millis(500), &mut out);
    let partial = anim.style_of(&"a".into()).unwrap();
    assert_eq!(partial, RevealStyle { y: 20.0, opacity: 0.5 });

    assert!(anim.dispose(&handle, &mut out));
    assert!(!anim.dispose(&handle, &mut out));
    assert_eq!(anim.status(&set), Some(RevealStatus::Cancelled));

    anim.tick(Millis(5000), &mut out);
    assert_eq!(anim.style_of(&"a".into()), Some(partial));
    assert_eq!(
        count(&out, |e| matches!(e, MotionEvent::RevealCancelled { .. })),
        1
    );
}

#[test]
fn detaching_a_watching_set_cancels_its_observation() {
    let mut anim = RevealAnimator::new(Viewport::default());
    let mut out = Vec::new();
    let handle = anim
        .register(
            "home.grid".into(),
            ids(&["a"]),
            grid_trigger(),
            fade_up(),
            Millis(0),
            &mut out,
        )
        .unwrap();
    anim.detach(&handle, &mut out);
    anim.detach(&handle, &mut out);
    assert!(anim.is_empty());

    out.clear();
    anim.on_scroll(2000.0, Millis(100), &mut out);
    assert!(out.is_empty());
}

#[test]
fn rejects_empty_and_duplicate_element_lists() {
    let mut anim = RevealAnimator::new(Viewport::default());
    let mut out = Vec::new();
    assert!(
        anim.register(
            "x".into(),
            vec![],
            RevealTrigger::OnMount,
            fade_up(),
            Millis(0),
            &mut out
        )
        .is_err()
    );
    assert!(
        anim.register(
            "x".into(),
            ids(&["a", "a"]),
            RevealTrigger::OnMount,
            fade_up(),
            Millis(0),
            &mut out
        )
        .is_err()
    );
    assert!(anim.is_empty());
    assert!(out.is_empty());
}
