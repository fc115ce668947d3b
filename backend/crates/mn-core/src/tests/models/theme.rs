use crate::Theme;

use std::str::FromStr;

#[test]
fn test_theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn test_theme_toggled_round_trips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn test_theme_root_class() {
    assert_eq!(Theme::Dark.root_class(), Some("dark"));
    assert_eq!(Theme::Light.root_class(), None);
}

#[test]
fn test_theme_from_str() {
    assert_eq!(Theme::from_str("dark").unwrap(), Theme::Dark);
    assert_eq!(Theme::from_str("light").unwrap(), Theme::Light);
    assert!(Theme::from_str("Dark").is_err());
}
