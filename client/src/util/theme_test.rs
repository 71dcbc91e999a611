use super::*;

#[test]
fn theme_names_map_the_flag() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[test]
fn toggle_flips_the_flag() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn read_preference_defaults_off_outside_a_browser() {
    assert!(!read_preference());
}
