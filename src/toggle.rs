//! The toggle affordance: the button users click to flip the theme.
//!
//! Host pages may pre-place the button (login screens do, to control its
//! position); otherwise one is synthesized into the navigation bar. With
//! neither in the page, the theme stays controllable through the keyboard
//! shortcut and `setTheme`.

use web_sys::{Document, Element};

use crate::error::{ThemeError, js_error};
use crate::theme::Theme;

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

/// Reserved id of the toggle element.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Navigation container the toggle is synthesized into.
const NAVBAR_SELECTOR: &str = ".navbar-nav";

/// User menu inside the navbar; the toggle goes right before it.
const USER_MENU_SELECTOR: &str = ".dropdown";

/// Rendering variant for the toggle affordance, chosen at initialization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleSize {
    /// Navbar rendering with an `fs-5` icon.
    #[default]
    Standard,
    /// Smaller rendering for pages that pre-place the toggle.
    Compact,
}

/// Icon markup for the current theme. The button always shows the mode
/// activating it would switch *to*: a sun while dark, a moon while light.
#[must_use]
pub fn icon_markup(theme: Theme, size: ToggleSize) -> String {
    let icon = match theme {
        Theme::Dark => "bi-sun-fill",
        Theme::Light => "bi-moon-fill",
    };
    match size {
        ToggleSize::Standard => format!("<i class=\"bi {icon} fs-5\"></i>"),
        ToggleSize::Compact => {
            format!("<i class=\"bi {icon}\" style=\"font-size: 0.9rem;\"></i>")
        }
    }
}

/// Accessible label describing what activating the toggle does.
#[must_use]
pub const fn action_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "Switch to light mode",
        Theme::Light => "Switch to dark mode",
    }
}

/// Rewrite an existing toggle element's icon and labels for `theme`.
pub(crate) fn refresh(button: &Element, theme: Theme, size: ToggleSize) -> Result<(), ThemeError> {
    button.set_inner_html(&icon_markup(theme, size));
    let label = action_label(theme);
    button
        .set_attribute("aria-label", label)
        .map_err(|err| ThemeError::Dom(js_error(&err)))?;
    button
        .set_attribute("title", label)
        .map_err(|err| ThemeError::Dom(js_error(&err)))
}

/// Adopt a pre-placed toggle, or synthesize one into the navigation bar.
///
/// Idempotent: an existing `#theme-toggle` is refreshed, never
/// duplicated. Returns `Ok(false)` when the page offers nowhere to put a
/// new one.
pub(crate) fn ensure(document: &Document, theme: Theme, size: ToggleSize) -> Result<bool, ThemeError> {
    if let Some(existing) = document.get_element_by_id(TOGGLE_ID) {
        refresh(&existing, theme, size)?;
        return Ok(true);
    }

    let Some(navbar) = document
        .query_selector(NAVBAR_SELECTOR)
        .map_err(|err| ThemeError::Dom(js_error(&err)))?
    else {
        return Ok(false);
    };

    let item = create(document, "li")?;
    item.set_class_name("nav-item");

    let button = create(document, "button")?;
    button.set_id(TOGGLE_ID);
    button.set_class_name("theme-toggle me-2");
    refresh(&button, theme, size)?;
    item.append_child(&button)
        .map_err(|err| ThemeError::Dom(js_error(&err)))?;

    let user_menu = navbar
        .query_selector(USER_MENU_SELECTOR)
        .map_err(|err| ThemeError::Dom(js_error(&err)))?;
    match user_menu {
        Some(menu) => {
            navbar
                .insert_before(&item, Some(menu.as_ref()))
                .map_err(|err| ThemeError::Dom(js_error(&err)))?;
        }
        None => {
            navbar
                .append_child(&item)
                .map_err(|err| ThemeError::Dom(js_error(&err)))?;
        }
    }
    Ok(true)
}

fn create(document: &Document, tag: &str) -> Result<Element, ThemeError> {
    document
        .create_element(tag)
        .map_err(|err| ThemeError::Dom(js_error(&err)))
}
