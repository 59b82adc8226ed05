use super::*;

#[test]
fn dark_theme_offers_the_way_back_to_light() {
    assert!(icon_markup(Theme::Dark, ToggleSize::Standard).contains("bi-sun-fill"));
    assert_eq!(action_label(Theme::Dark), "Switch to light mode");
}

#[test]
fn light_theme_offers_dark() {
    assert!(icon_markup(Theme::Light, ToggleSize::Standard).contains("bi-moon-fill"));
    assert_eq!(action_label(Theme::Light), "Switch to dark mode");
}

#[test]
fn standard_markup_uses_the_navbar_icon_size() {
    assert_eq!(
        icon_markup(Theme::Light, ToggleSize::Standard),
        "<i class=\"bi bi-moon-fill fs-5\"></i>"
    );
}

#[test]
fn compact_markup_shrinks_the_icon_inline() {
    let markup = icon_markup(Theme::Light, ToggleSize::Compact);
    assert!(markup.contains("font-size: 0.9rem"));
    assert!(!markup.contains("fs-5"));
}

#[test]
fn toggle_size_defaults_to_standard() {
    assert_eq!(ToggleSize::default(), ToggleSize::Standard);
}
