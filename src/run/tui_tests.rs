#![allow(clippy::unwrap_used)]

use crossterm::event::KeyEvent;
use rust_decimal_macros::dec;

use super::*;
use crate::models::Category;

fn press(app: &mut App, code: KeyCode) {
    handle_key(KeyEvent::new(code, KeyModifiers::NONE), app).unwrap();
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn app() -> App {
    App::with_month("October 2026".into())
}

#[test]
fn test_entry_form_adds_income_and_expense() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.input_mode, InputMode::Entry);
    type_text(&mut app, "Salary");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "1000");
    press(&mut app, KeyCode::Enter);

    // Back on the description after a successful add; switch to expense
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.entry.category, Category::Expense);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Rent");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "300");
    press(&mut app, KeyCode::Enter);

    let summary = app.controller.summary();
    assert_eq!(summary.budget, dec!(700));
    assert_eq!(summary.budget_percentage, Some(30));
}

#[test]
fn test_entry_form_validation_error_in_status() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.status_message, "Description cannot be empty");
    assert!(app.controller.ledger().is_empty());
}

#[test]
fn test_entry_backspace_and_escape() {
    let mut app = app();
    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, "Gifts");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.entry.description, "Gift");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_category_field_accepts_sign_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::Char('-'));
    assert_eq!(app.entry.category, Category::Expense);
    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.entry.category, Category::Income);
    assert!(app.entry.description.is_empty());
}

#[test]
fn test_navigate_and_delete() {
    let mut app = app();
    for cmd in ["add exp Rent 300", "add exp Food 100", "add exp Fuel 50"] {
        commands::handle_command(cmd, &mut app).unwrap();
    }
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.expense_cursor.index, 2);
    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Char('d'));
    let names: Vec<&str> = app
        .controller
        .ledger()
        .expenses()
        .iter()
        .map(|i| i.description.as_str())
        .collect();
    assert_eq!(names, vec!["Rent", "Fuel"]);
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.expense_cursor.index, 1);
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.expense_cursor.index, 0);
}

#[test]
fn test_command_mode() {
    let mut app = app();
    press(&mut app, KeyCode::Char(':'));
    type_text(&mut app, "add inc Salary 1000");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.controller.summary().total_income, dec!(1000));
}

#[test]
fn test_help_closes_on_any_key() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.show_help);
    assert!(app.running);
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.running);
}

#[test]
fn test_ctrl_c_quits_from_entry() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    handle_key(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &mut app,
    )
    .unwrap();
    assert!(!app.running);
}
