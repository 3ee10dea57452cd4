use super::*;

#[test]
fn icon_reflects_preference() {
    assert_eq!(toggle_icon(ThemePreference::Light), "☀");
    assert_eq!(toggle_icon(ThemePreference::Dark), "☾");
    assert_eq!(toggle_icon(ThemePreference::System), "◐");
}

#[test]
fn title_names_current_and_next_preference() {
    assert_eq!(toggle_title(ThemePreference::Dark), "Theme: dark (switch to system)");
    assert_eq!(toggle_title(ThemePreference::System), "Theme: system (switch to light)");
}
