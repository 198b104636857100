#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::app::{App, InputMode};
use super::commands::*;
use crate::models::Category;

fn app() -> App {
    App::with_month("October 2026".into())
}

#[test]
fn test_add_command() {
    let mut app = app();
    handle_command("add inc Monthly salary 2,500", &mut app).unwrap();
    handle_command("a exp Rent 900", &mut app).unwrap();
    let ledger = app.controller.ledger();
    assert_eq!(ledger.incomes()[0].description, "Monthly salary");
    assert_eq!(ledger.incomes()[0].value, dec!(2500));
    assert_eq!(ledger.expenses()[0].value, dec!(900));
    assert_eq!(app.controller.summary().budget, dec!(1600));
    assert_eq!(app.status_message, "Added exp-0 'Rent'");
}

#[test]
fn test_add_command_rejects_bad_input() {
    let mut app = app();
    handle_command("add inc", &mut app).unwrap();
    assert!(app.status_message.starts_with("Usage"));
    handle_command("add savings Piggy 10", &mut app).unwrap();
    assert!(app.status_message.starts_with("Unknown category"));
    handle_command("add exp Coffee abc", &mut app).unwrap();
    assert!(app.status_message.contains("Invalid value"));
    handle_command("add exp Coffee 0", &mut app).unwrap();
    assert!(app.status_message.contains("zero"));
    assert!(app.controller.ledger().is_empty());
}

#[test]
fn test_delete_command() {
    let mut app = app();
    handle_command("add exp Rent 900", &mut app).unwrap();
    handle_command("add exp Food 100", &mut app).unwrap();
    handle_command("delete exp-0", &mut app).unwrap();
    let expenses = app.controller.ledger().expenses();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].description, "Food");
    assert_eq!(app.controller.summary().total_expense, dec!(100));
}

#[test]
fn test_delete_command_bad_key() {
    let mut app = app();
    handle_command("del nonsense", &mut app).unwrap();
    assert!(app.status_message.contains("Invalid item key"));
    handle_command("del", &mut app).unwrap();
    assert!(app.status_message.starts_with("Usage"));
}

#[test]
fn test_focus_and_mode_commands() {
    let mut app = app();
    handle_command("expenses", &mut app).unwrap();
    assert_eq!(app.focus, Category::Expense);
    handle_command("income", &mut app).unwrap();
    assert_eq!(app.focus, Category::Income);
    handle_command("entry", &mut app).unwrap();
    assert_eq!(app.input_mode, InputMode::Entry);
}

#[test]
fn test_quit_and_help() {
    let mut app = app();
    handle_command("help", &mut app).unwrap();
    assert!(app.show_help);
    handle_command("q", &mut app).unwrap();
    assert!(!app.running);
}

#[test]
fn test_unknown_command_suggests() {
    let mut app = app();
    handle_command("delet exp-0", &mut app).unwrap();
    assert_eq!(
        app.status_message,
        "Unknown command: :delet. Did you mean :delete?"
    );
}
