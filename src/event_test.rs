use super::*;

#[test]
fn field_indices_follow_validation_order() {
    let indices: Vec<_> = FormField::ALL.iter().map(|f| f.index()).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[test]
fn form_values_get_returns_raw_value() {
    let values = FormValues {
        name: " Jo ".into(),
        email: "jo@example.com".into(),
        subject: "Hi".into(),
        message: "Test".into(),
    };
    assert_eq!(values.get(FormField::Name), " Jo ");
    assert_eq!(values.get(FormField::Message), "Test");
}

#[test]
fn crossing_follows_intersecting_flag_only() {
    assert!(Visibility::new(0, 0.5, true).crosses());
    assert!(Visibility::new(0, 0.4999, true).crosses());
    assert!(Visibility::new(0, 0.05, true).crosses());
    assert!(!Visibility::new(0, 0.5, false).crosses());
}
