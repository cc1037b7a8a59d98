use super::*;
use tempfile::tempdir;

#[test]
fn test_ensure_settings_writes_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    ensure_settings_at(&path).unwrap();
    assert!(path.exists());
    assert_eq!(load_settings_from(&path), Settings::default());
}

#[test]
fn test_ensure_settings_keeps_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "tab_size": 2 }"#).unwrap();

    ensure_settings_at(&path).unwrap();
    assert_eq!(load_settings_from(&path).tab_size, 2);
}

#[test]
fn test_missing_fields_take_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "search_ignore_case": true, "keybindings": [{ "key": "ctrl+k", "command": "cut" }] }"#,
    )
    .unwrap();

    let settings = load_settings_from(&path);
    assert!(settings.search_ignore_case);
    assert_eq!(settings.tab_size, 4);
    assert_eq!(settings.undo_limit, DEFAULT_UNDO_LIMIT);
    assert!(settings.show_status_bar);
    assert_eq!(settings.keybindings.len(), 1);
    assert_eq!(settings.keybindings[0].command, "cut");
}

#[test]
fn test_malformed_settings_fall_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert_eq!(load_settings_from(&path), Settings::default());
    assert_eq!(
        load_settings_from(&dir.path().join("absent.json")),
        Settings::default()
    );
}

#[test]
fn test_tab_width_never_zero() {
    let settings = Settings {
        tab_size: 0,
        ..Settings::default()
    };
    assert_eq!(settings.tab_width(), 1);
}

#[test]
fn test_parse_keybinding() {
    assert_eq!(
        parse_keybinding("ctrl+s"),
        Some(Key::ctrl(KeyCode::Char('s')))
    );
    assert_eq!(
        parse_keybinding("Ctrl + Shift + F5"),
        Some(Key::new(
            KeyCode::F(5),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        ))
    );
    assert_eq!(
        parse_keybinding("alt+X"),
        Some(Key::new(
            KeyCode::Char('x'),
            KeyModifiers::ALT | KeyModifiers::SHIFT
        ))
    );
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("ctrl+nope"), None);
}
