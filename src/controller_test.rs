use super::*;

#[test]
fn stored_preference_wins_over_system() {
    assert_eq!(
        resolve_initial(Some(Theme::Light), Some(Theme::Dark)),
        Theme::Light
    );
    assert_eq!(
        resolve_initial(Some(Theme::Dark), Some(Theme::Light)),
        Theme::Dark
    );
}

#[test]
fn system_preference_used_without_a_stored_choice() {
    assert_eq!(resolve_initial(None, Some(Theme::Dark)), Theme::Dark);
    assert_eq!(resolve_initial(None, Some(Theme::Light)), Theme::Light);
}

#[test]
fn resolution_falls_back_to_light() {
    assert_eq!(resolve_initial(None, None), Theme::Light);
}

#[test]
fn system_change_applies_only_without_a_stored_preference() {
    assert_eq!(system_change_target(None, Theme::Dark), Some(Theme::Dark));
    assert_eq!(system_change_target(None, Theme::Light), Some(Theme::Light));
    assert_eq!(system_change_target(Some(Theme::Light), Theme::Dark), None);
    assert_eq!(system_change_target(Some(Theme::Dark), Theme::Light), None);
}

#[test]
fn with_active_without_a_controller_is_a_no_op() {
    with_active(|_| unreachable!("no controller has been installed"));
}
