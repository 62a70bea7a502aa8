use std::ffi::CString;

use colored::Color;

use hud_console_runtime_desktop::bridge::{
    current_color, current_lines, init_console, init_console_with_style, is_initialized, set_console_color,
    set_console_markup, set_console_text, shutdown_console,
};

fn lines(v: &[&str]) -> Option<Vec<String>> {
    Some(v.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_calls_before_init_are_ignored() {
    let text = CString::new("too early").unwrap();
    set_console_text(text.as_ptr());
    assert!(!is_initialized());
    assert_eq!(current_lines(), None);
}

#[test]
fn test_status_scenario() {
    init_console();
    init_console();
    assert!(is_initialized());

    let text = CString::new("Loading 3/10").unwrap();
    set_console_text(text.as_ptr());
    assert_eq!(current_lines(), lines(&["Loading 3/10"]));

    let empty = CString::new("").unwrap();
    set_console_text(empty.as_ptr());
    assert_eq!(current_lines(), lines(&[""]));

    let markup = CString::new("<h3>Stats</h3><div>frame time: 16.7ms</div><br/>").unwrap();
    set_console_markup(markup.as_ptr());
    assert_eq!(current_lines(), lines(&["Stats", "frame time: 16.7ms"]));

    set_console_text(std::ptr::null());
    assert_eq!(current_lines(), lines(&["Stats", "frame time: 16.7ms"]));

    let bad = CString::new("rgb(1, 2, 3)").unwrap();
    set_console_color(bad.as_ptr());
    assert!(is_initialized());

    shutdown_console();
    assert!(!is_initialized());
}

#[test]
fn test_init_with_invalid_style_falls_back() {
    let json = CString::new(r#"{"position": "sideways"}"#).unwrap();
    init_console_with_style(json.as_ptr());
    assert!(is_initialized());
    shutdown_console();
}

#[test]
fn test_init_with_style_applies_color() {
    let json = CString::new(r##"{"color": "#222"}"##).unwrap();
    init_console_with_style(json.as_ptr());
    assert_eq!(current_color(), Some(Color::TrueColor { r: 0x22, g: 0x22, b: 0x22 }));

    let text = CString::new("ready").unwrap();
    set_console_text(text.as_ptr());
    assert_eq!(current_lines(), lines(&["ready"]));
    shutdown_console();
    assert_eq!(current_color(), None);
}
