use super::*;

#[test]
fn shortcut_requires_all_three_parts() {
    assert!(is_toggle_shortcut(true, true, "D"));
    assert!(!is_toggle_shortcut(false, true, "D"));
    assert!(!is_toggle_shortcut(true, false, "D"));
    assert!(!is_toggle_shortcut(true, true, "d"));
    assert!(!is_toggle_shortcut(true, true, "K"));
}

#[test]
fn enter_and_space_clear_focus() {
    assert!(clears_focus("Enter"));
    assert!(clears_focus(" "));
}

#[test]
fn tab_keeps_its_focus_ring() {
    assert!(!clears_focus("Tab"));
    assert!(!clears_focus("Escape"));
    assert!(!clears_focus("a"));
}

#[test]
fn blur_delays_match_the_activation_kind() {
    assert_eq!(CLICK_BLUR_DELAY_MS, 50);
    assert_eq!(KEY_BLUR_DELAY_MS, 100);
}

#[test]
fn clickable_selectors_target_structural_categories() {
    for fragment in [
        ".clickable-card",
        ".card[data-clickable=\"true\"]",
        ".dashboard-stat.clickable",
        "a[href]",
        ".btn",
    ] {
        assert!(
            CLICKABLE_SELECTOR.contains(fragment),
            "{fragment} missing from click selector"
        );
    }
    // Links and buttons handle their own focus on key activation.
    assert!(!KEY_CLICKABLE_SELECTOR.contains("a[href]"));
    assert!(!KEY_CLICKABLE_SELECTOR.contains(".btn"));
}
