use super::*;

fn filled() -> BookingFlow {
    let mut flow = BookingFlow::new();
    flow.fill(BookingField::Name, "Ada Lovelace").unwrap();
    flow.fill(BookingField::Email, "ada@example.com").unwrap();
    flow.fill(BookingField::Focus, "Purpose Discovery").unwrap();
    flow.fill(BookingField::Description, "Stuck between roles.")
        .unwrap();
    flow
}

#[test]
fn submit_then_return_gives_fresh_form() {
    let mut flow = filled();
    let req = flow.submit().unwrap().clone();
    assert_eq!(req.focus, FocusArea::PurposeDiscovery);
    assert_eq!(req.name, "Ada Lovelace");
    assert_eq!(flow.view(), BookingView::Confirmation);

    assert!(flow.return_to_form());
    assert_eq!(flow.view(), BookingView::Form);
    assert_eq!(flow.draft(), &BookingDraft::default());
    assert!(!flow.return_to_form());
    assert_eq!(flow.last_submitted(), Some(&req));
}

#[test]
fn required_fields_block_submission() {
    let mut flow = BookingFlow::new();
    let err = flow.submit().unwrap_err();
    assert!(matches!(err, ElevateError::Form { field: "name", .. }));
    assert_eq!(flow.view(), BookingView::Form);

    let mut flow = filled();
    flow.fill(BookingField::Description, "   ").unwrap();
    let err = flow.submit().unwrap_err();
    assert!(matches!(err, ElevateError::Form { field: "description", .. }));

    let mut flow = filled();
    flow.fill(BookingField::Focus, "").unwrap();
    let err = flow.submit().unwrap_err();
    assert!(matches!(err, ElevateError::Form { field: "focus", .. }));
}

#[test]
fn email_shape_is_checked() {
    for bad in ["ada", "ada@", "@example.com", "ada@example", "ada@example.", "a b@x.io", "a@b@c.io"] {
        let mut flow = filled();
        flow.fill(BookingField::Email, bad).unwrap();
        let err = flow.submit().unwrap_err();
        assert!(
            matches!(err, ElevateError::Form { field: "email", .. }),
            "{bad} accepted"
        );
    }
    let mut flow = filled();
    flow.fill(BookingField::Email, "  ada@mail.example.co ").unwrap();
    assert_eq!(flow.submit().unwrap().email, "ada@mail.example.co");
}

#[test]
fn focus_area_parses_labels_only() {
    assert_eq!(
        "mindset re-patterning".parse::<FocusArea>().unwrap(),
        FocusArea::MindsetRepatterning
    );
    assert!("Wellness".parse::<FocusArea>().is_err());
    let mut flow = BookingFlow::new();
    assert!(flow.fill(BookingField::Focus, "Wellness").is_err());
}

#[test]
fn confirmation_view_refuses_edits() {
    let mut flow = filled();
    flow.submit().unwrap();
    assert!(flow.fill(BookingField::Name, "Other").is_err());
    assert!(flow.submit().is_err());
}
