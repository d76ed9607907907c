use super::*;

fn ids(names: &[&str]) -> Vec<ElementId> {
    names.iter().map(|n| ElementId::from(*n)).collect()
}

fn spec() -> RevealSpec {
    RevealSpec::fade_up(40.0, Millis(1000), Ease::Linear).with_stagger(Millis(150))
}

#[test]
fn elements_start_in_registration_order() {
    let spec = spec();
    let mut group = StaggerGroup::armed(ids(&["c", "a", "b"]), spec.from);
    group.schedule(Millis(0), &spec);

    let mut out = Vec::new();
    group.tick(Millis(0), &mut out);
    assert_eq!(out, vec![StaggerStep::Started("c".into())]);

    out.clear();
    group.tick(Millis(150), &mut out);
    assert_eq!(out, vec![StaggerStep::Started("a".into())]);

    out.clear();
    group.tick(Millis(300), &mut out);
    assert_eq!(out, vec![StaggerStep::Started("b".into())]);
    assert_eq!(group.phase_of(&"b".into()), Some(ElementPhase::Animating));
}

#[test]
fn pending_elements_sit_at_from_style() {
    let spec = spec();
    let group = StaggerGroup::armed(ids(&["a"]), spec.from);
    assert_eq!(
        group.style_of(&"a".into()),
        Some(RevealStyle::hidden_below(40.0))
    );
    assert!(!group.is_done());
}

#[test]
fn group_completes_after_span() {
    let spec = spec();
    let mut group = StaggerGroup::armed(ids(&["a", "b", "c"]), spec.from);
    group.schedule(Millis(0), &spec);
    assert_eq!(spec.span(3), Millis(1300));

    let mut out = Vec::new();
    group.tick(Millis(1299), &mut out);
    assert!(!group.is_done());
    group.tick(Millis(1300), &mut out);
    assert!(group.is_done());
    assert_eq!(group.style_of(&"c".into()), Some(RevealStyle::VISIBLE));

    let finished = out
        .iter()
        .filter(|s| matches!(s, StaggerStep::Finished(_)))
        .count();
    assert_eq!(finished, 3);
}

#[test]
fn a_late_tick_reports_start_and_finish_together() {
    let spec = spec();
    let mut group = StaggerGroup::armed(ids(&["a"]), spec.from);
    group.schedule(Millis(0), &spec);
    let mut out = Vec::new();
    group.tick(Millis(5000), &mut out);
    assert_eq!(
        out,
        vec![
            StaggerStep::Started("a".into()),
            StaggerStep::Finished("a".into())
        ]
    );
}

#[test]
fn halt_freezes_partial_styles() {
    let spec = spec();
    let mut group = StaggerGroup::armed(ids(&["a"]), spec.from);
    group.schedule(Millis(0), &spec);
    let mut out = Vec::new();
    group.tick(Millis(500), &mut out);
    let partial = group.style_of(&"a".into()).unwrap();
    assert_eq!(partial, RevealStyle { y: 20.0, opacity: 0.5 });

    group.halt();
    group.tick(Millis(2000), &mut out);
    assert_eq!(group.style_of(&"a".into()), Some(partial));
    assert_eq!(group.phase_of(&"a".into()), Some(ElementPhase::Animating));
}

#[test]
fn rearm_resets_to_pending() {
    let spec = spec();
    let mut group = StaggerGroup::armed(ids(&["a"]), spec.from);
    group.schedule(Millis(0), &spec);
    let mut out = Vec::new();
    group.tick(Millis(2000), &mut out);
    assert!(group.is_done());

    group.rearm(spec.from);
    assert_eq!(group.phase_of(&"a".into()), Some(ElementPhase::Pending));
    assert_eq!(group.style_of(&"a".into()), Some(spec.from));
}

#[test]
fn validate_rejects_out_of_range_opacity() {
    let mut bad = spec();
    bad.from.opacity = 1.5;
    assert!(bad.validate().is_err());
    assert!(spec().validate().is_ok());
}
