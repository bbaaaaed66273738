//! Integration tests for the application state and key handling
//!
//! Drives the app through its public key handler the way the event loop
//! would, without a real terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use snmptester::app::{App, AppMode};
use snmptester::form::{FormField, FormState};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_full_interactive_flow() {
    let mut app = App::new(None);

    type_str(&mut app, "snmp4ise");
    app.handle_key_event(key(KeyCode::Tab));
    type_str(&mut app, "Auth-PW");
    app.handle_key_event(key(KeyCode::Tab));
    type_str(&mut app, "Priv-PW");
    app.handle_key_event(key(KeyCode::Tab));
    type_str(&mut app, "XXX");
    app.handle_key_event(key(KeyCode::Tab));
    type_str(&mut app, "100.100.100.100");

    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.state().mode, AppMode::Results);
    let pair = app.state().commands.as_ref().expect("commands generated");
    assert_eq!(
        pair.test_command,
        "test_snmp --snmpv3user snmp4ise --snmpv3pwd 'Auth-PW' --snmpv3privauth 'Priv-PW' --zone XXX --iprange 100.100.100.100"
    );
}

#[test]
fn test_failed_generate_stays_on_form_with_all_errors() {
    let mut app = App::new(None);
    type_str(&mut app, "snmp4ise");
    // Leave everything else empty
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.state().mode, AppMode::Form);
    assert_eq!(app.state().errors.len(), 4);
    assert!(app.state().commands.is_none());
    assert!(app.state().status_message.contains("4 error(s)"));
}

#[test]
fn test_fixing_the_form_clears_old_errors() {
    let mut app = App::new(None);
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.state().errors.len(), 5);

    app.handle_key_event(ctrl('e'));
    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.state().errors.is_empty());
    assert_eq!(app.state().mode, AppMode::Results);
}

#[test]
fn test_prefilled_form_generates_immediately() {
    let mut form = FormState::new();
    form.load_example();
    let mut app = App::with_form(form, None);

    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.state().mode, AppMode::Results);
}

#[test]
fn test_focus_wraps_past_last_field() {
    let mut app = App::new(None);
    for _ in 0..5 {
        app.handle_key_event(key(KeyCode::Down));
    }
    assert_eq!(app.state().form.current(), FormField::Username);
}

#[test]
fn test_backspace_edits_focused_field_only() {
    let mut app = App::new(None);
    type_str(&mut app, "abc");
    app.handle_key_event(key(KeyCode::Tab));
    type_str(&mut app, "xy");
    app.handle_key_event(key(KeyCode::Backspace));

    assert_eq!(app.state().form.fields.username, "abc");
    assert_eq!(app.state().form.fields.auth_password, "x");
}

#[test]
fn test_results_screen_back_then_regenerate() {
    let mut app = App::new(None);
    app.handle_key_event(ctrl('e'));
    app.handle_key_event(key(KeyCode::Enter));
    app.handle_key_event(key(KeyCode::Char('b')));
    assert_eq!(app.state().mode, AppMode::Form);

    // Break one field and regenerate
    app.handle_key_event(key(KeyCode::Down)); // focus auth password
    app.handle_key_event(key(KeyCode::Char('+')));
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.state().mode, AppMode::Form);
    assert_eq!(app.state().errors.len(), 1);
    assert_eq!(
        app.state().errors[0].to_string(),
        "Auth Password contains forbidden character: '+'"
    );
}

#[test]
fn test_save_config_written_on_generate() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("saved.json");

    let mut form = FormState::new();
    form.load_example();
    let mut app = App::with_form(form, Some(path.clone()));

    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.state().mode, AppMode::Results);

    let saved = snmptester::config_file::TesterConfig::load_from_file(&path)
        .expect("config file written on generate");
    assert_eq!(saved.snmpv3_username, "snmp4ise");
}

#[test]
fn test_no_config_written_on_validation_failure() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("saved.json");

    let mut app = App::with_form(FormState::new(), Some(path.clone()));
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.state().mode, AppMode::Form);
    assert!(!path.exists());
}
