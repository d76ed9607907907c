use super::*;

const MONOTONIC: [Ease; 13] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InQuart,
    Ease::OutQuart,
    Ease::InOutQuart,
    Ease::InQuint,
    Ease::OutQuint,
    Ease::InOutQuint,
];

#[test]
fn endpoints_are_stable() {
    for ease in MONOTONIC
        .into_iter()
        .chain([Ease::BackOut { overshoot: 1.7 }])
    {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease} at 0");
        assert_eq!(ease.apply(1.0), 1.0, "{ease} at 1");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in MONOTONIC {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease}");
        assert!(b < c, "{ease}");
    }
}

#[test]
fn back_out_overshoots_before_settling() {
    let ease = Ease::BackOut { overshoot: 1.7 };
    let peak = (1..100)
        .map(|i| ease.apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-3.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(7.0), 1.0);
}

#[test]
fn parses_tween_names() {
    assert_eq!("power2.out".parse::<Ease>().unwrap(), Ease::OutCubic);
    assert_eq!("power3.out".parse::<Ease>().unwrap(), Ease::OutQuart);
    assert_eq!("power4.inOut".parse::<Ease>().unwrap(), Ease::InOutQuint);
    assert_eq!("power4".parse::<Ease>().unwrap(), Ease::OutQuint);
    assert_eq!("none".parse::<Ease>().unwrap(), Ease::Linear);
    assert_eq!(
        "back.out(1.7)".parse::<Ease>().unwrap(),
        Ease::BackOut { overshoot: 1.7 }
    );
    assert_eq!(
        "back.out".parse::<Ease>().unwrap(),
        Ease::BackOut {
            overshoot: DEFAULT_BACK_OVERSHOOT
        }
    );
}

#[test]
fn rejects_unknown_names() {
    assert!("elastic.out".parse::<Ease>().is_err());
    assert!("back.out(x)".parse::<Ease>().is_err());
    assert!("".parse::<Ease>().is_err());
}

#[test]
fn serde_uses_tween_names() {
    let json = serde_json::to_string(&Ease::InOutQuint).unwrap();
    assert_eq!(json, "\"power4.inOut\"");
    let back: Ease = serde_json::from_str("\"back.out(1.7)\"").unwrap();
    assert_eq!(back, Ease::BackOut { overshoot: 1.7 });
    assert!(serde_json::from_str::<Ease>("\"bounce\"").is_err());
}
