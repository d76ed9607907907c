use super::*;

fn menu() -> MobileMenu {
    let links = ["vision", "about", "journey", "programs", "book"]
        .into_iter()
        .map(|l| ElementId::new(format!("menu-link-{l}")))
        .collect();
    MobileMenu::new(MenuTiming::default(), links)
}

fn run(menu: &mut MobileMenu, lock: &mut ScrollLock, from: u64, to: u64, out: &mut Vec<MotionEvent>) {
    for t in (from..=to).step_by(16) {
        menu.tick(Millis(t), lock, out);
    }
    menu.tick(Millis(to), lock, out);
}

#[test]
fn open_reveals_clip_then_staggers_links() {
    let mut m = menu();
    let mut lock = ScrollLock::new();
    let mut out = Vec::new();

    m.toggle(Millis(0), &mut lock, &mut out);
    assert_eq!(m.phase(), MenuPhase::Opening);
    assert!(lock.is_locked());

    run(&mut m, &mut lock, 0, 799, &mut out);
    assert_eq!(m.phase(), MenuPhase::Opening);
    m.tick(Millis(800), &mut lock, &mut out);
    assert_eq!(m.phase(), MenuPhase::Open);
    assert_eq!(m.clip_radius(), 150.0);
    assert_eq!(m.clip_path(), "circle(150.00% at 100% 0%)");

    // Links wait 300ms after the clip completes.
    m.tick(Millis(1099), &mut lock, &mut out);
    assert!(!out.contains(&MotionEvent::MenuLinksStarted));
    m.tick(Millis(1100), &mut lock, &mut out);
    assert!(out.contains(&MotionEvent::MenuLinksStarted));

    // Five links, 100ms apart, 500ms each.
    m.tick(Millis(1100 + 400 + 499), &mut lock, &mut out);
    assert!(!m.links_visible());
    m.tick(Millis(2000), &mut lock, &mut out);
    assert!(m.links_visible());
    assert_eq!(m.link_style(4), Some(RevealStyle::VISIBLE));
    assert_eq!(
        out.iter()
            .filter(|e| **e == MotionEvent::MenuLinksCompleted)
            .count(),
        1
    );
}

#[test]
fn close_collapses_clip_and_releases_lock() {
    let mut m = menu();
    let mut lock = ScrollLock::new();
    let mut out = Vec::new();
    m.toggle(Millis(0), &mut lock, &mut out);
    run(&mut m, &mut lock, 0, 2000, &mut out);

    m.toggle(Millis(3000), &mut lock, &mut out);
    assert_eq!(m.phase(), MenuPhase::Closing);
    assert!(lock.is_locked());
    m.tick(Millis(3599), &mut lock, &mut out);
    assert!(lock.is_locked());
    m.tick(Millis(3600), &mut lock, &mut out);
    assert_eq!(m.phase(), MenuPhase::Closed);
    assert_eq!(m.clip_radius(), 0.0);
    assert!(!lock.is_locked());
    assert_eq!(m.link_style(0), Some(RevealStyle::hidden_below(50.0)));
}

#[test]
fn immediate_reverse_ends_closed_and_unlocked() {
    let mut m = menu();
    let mut lock = ScrollLock::new();
    let mut out = Vec::new();
    m.toggle(Millis(0), &mut lock, &mut out);
    m.toggle(Millis(0), &mut lock, &mut out);
    assert_eq!(m.phase(), MenuPhase::Closed);
    assert!(!lock.is_locked());
    run(&mut m, &mut lock, 0, 2000, &mut out);
    assert_eq!(m.phase(), MenuPhase::Closed);
}

#[test]
fn reverse_mid_open_is_continuous_and_shorter() {
    let mut m = menu();
    let mut lock = ScrollLock::new();
    let mut out = Vec::new();
    m.toggle(Millis(0), &mut lock, &mut out);
    m.tick(Millis(400), &mut lock, &mut out);
    let mid = m.clip_radius();
    assert!(mid > 0.0 && mid < 150.0);

    m.toggle(Millis(400), &mut lock, &mut out);
    assert_eq!(m.phase(), MenuPhase::Closing);
    assert_eq!(m.clip_radius(), mid);

    let expected = MenuTiming::default().close.scale(mid / 150.0);
    m.tick(Millis(400) + expected, &mut lock, &mut out);
    assert_eq!(m.phase(), MenuPhase::Closed);
    assert!(!lock.is_locked());
    assert!(!out.contains(&MotionEvent::MenuLinksStarted));
}

#[test]
fn reverse_mid_close_reopens_without_dropping_lock() {
    let mut m = menu();
    let mut lock = ScrollLock::new();
    let mut out = Vec::new();
    m.toggle(Millis(0), &mut lock, &mut out);
    run(&mut m, &mut lock, 0, 2000, &mut out);

    m.toggle(Millis(2000), &mut lock, &mut out);
    m.tick(Millis(2300), &mut lock, &mut out);
    let mid = m.clip_radius();
    m.toggle(Millis(2300), &mut lock, &mut out);
    assert_eq!(m.phase(), MenuPhase::Opening);
    assert_eq!(m.clip_radius(), mid);
    assert!(lock.is_locked());

    run(&mut m, &mut lock, 2300, 3200, &mut out);
    assert_eq!(m.phase(), MenuPhase::Open);
    let unlocks = out
        .iter()
        .filter(|e| **e == MotionEvent::ScrollLockChanged { locked: false })
        .count();
    assert_eq!(unlocks, 0);
}

#[test]
fn force_close_snaps_from_any_phase() {
    let mut m = menu();
    let mut lock = ScrollLock::new();
    let mut out = Vec::new();
    m.toggle(Millis(0), &mut lock, &mut out);
    m.tick(Millis(300), &mut lock, &mut out);

    m.force_close(&mut lock, &mut out);
    assert_eq!(m.phase(), MenuPhase::Closed);
    assert_eq!(m.clip_radius(), 0.0);
    assert!(!lock.is_locked());

    out.clear();
    m.force_close(&mut lock, &mut out);
    assert!(out.is_empty());
}

#[test]
fn exactly_one_phase_through_rapid_toggles() {
    let mut m = menu();
    let mut lock = ScrollLock::new();
    let mut out = Vec::new();
    for t in (0..3000).step_by(70) {
        m.toggle(Millis(t), &mut lock, &mut out);
        m.tick(Millis(t + 35), &mut lock, &mut out);
        assert_eq!(lock.is_locked(), m.phase() != MenuPhase::Closed);
        assert!((0.0..=150.0).contains(&m.clip_radius()));
    }
}

#[test]
fn close_during_link_delay_keeps_links_hidden_until_reopened() {
    let mut m = menu();
    let mut lock = ScrollLock::new();
    let mut out = Vec::new();
    m.toggle(Millis(0), &mut lock, &mut out);
    m.tick(Millis(816), &mut lock, &mut out);
    assert_eq!(m.phase(), MenuPhase::Open);

    out.clear();
    m.toggle(Millis(816), &mut lock, &mut out);
    run(&mut m, &mut lock, 816, 1300, &mut out);
    assert_eq!(m.phase(), MenuPhase::Closing);
    assert!(!out.contains(&MotionEvent::MenuLinksStarted));
    assert_eq!(m.link_style(0), Some(RevealStyle::hidden_below(50.0)));

    m.toggle(Millis(1300), &mut lock, &mut out);
    run(&mut m, &mut lock, 1300, 3500, &mut out);
    assert_eq!(m.phase(), MenuPhase::Open);
    assert!(m.links_visible());
    assert_eq!(
        out.iter()
            .filter(|e| **e == MotionEvent::MenuLinksStarted)
            .count(),
        1
    );
}
