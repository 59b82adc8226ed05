use super::*;

#[test]
fn theme_defaults_to_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn string_forms_round_trip() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn parse_rejects_anything_else() {
    for junk in ["", "Dark", "LIGHT", "auto", "solarized", " dark"] {
        assert!(junk.parse::<Theme>().is_err(), "{junk:?} should not parse");
    }
}

#[test]
fn parse_error_names_the_value() {
    let err = "sepia".parse::<Theme>().unwrap_err();
    assert_eq!(err.to_string(), "unknown theme \"sepia\"");
}

#[test]
fn flip_is_an_involution() {
    assert_eq!(Theme::Light.flip(), Theme::Dark);
    assert_eq!(Theme::Dark.flip(), Theme::Light);
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.flip().flip(), theme);
    }
}

#[test]
fn meta_color_matches_theme_background() {
    assert_eq!(Theme::Dark.meta_color(), "#1a1a1d");
    assert_eq!(Theme::Light.meta_color(), "#f8fafc");
}

#[test]
fn from_system_maps_the_dark_query() {
    assert_eq!(Theme::from_system(true), Theme::Dark);
    assert_eq!(Theme::from_system(false), Theme::Light);
}
