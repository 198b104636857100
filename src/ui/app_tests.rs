#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn app() -> App {
    App::with_month("October 2026".into())
}

fn fill(app: &mut App, category: Category, description: &str, value: &str) {
    app.entry.category = category;
    app.entry.description = description.into();
    app.entry.value = value.into();
}

#[test]
fn test_submit_entry_adds_and_clears_form() {
    let mut app = app();
    fill(&mut app, Category::Expense, "Rent", "300");
    app.entry.field = EntryField::Value;
    let item = app.submit_entry().unwrap();
    assert_eq!(item.key(), ItemKey::new(Category::Expense, 0));
    assert!(app.entry.description.is_empty());
    assert!(app.entry.value.is_empty());
    assert_eq!(app.entry.field, EntryField::Description);
    assert_eq!(app.entry.category, Category::Expense);
    assert_eq!(app.controller.summary().total_expense, dec!(300));
}

#[test]
fn test_invalid_entry_keeps_form() {
    let mut app = app();
    fill(&mut app, Category::Income, "Salary", "0");
    assert!(app.submit_entry().is_err());
    assert_eq!(app.entry.description, "Salary");
    assert_eq!(app.entry.value, "0");
    assert!(app.controller.ledger().is_empty());
}

#[test]
fn test_delete_selected_follows_focus() {
    let mut app = app();
    fill(&mut app, Category::Income, "Salary", "1000");
    app.submit_entry().unwrap();
    fill(&mut app, Category::Expense, "Rent", "300");
    app.submit_entry().unwrap();
    fill(&mut app, Category::Expense, "Food", "100");
    app.submit_entry().unwrap();

    app.focus = Category::Expense;
    app.expense_cursor.index = 1;
    let removed = app.delete_selected().unwrap();
    assert_eq!(removed.description, "Food");
    assert_eq!(app.expense_cursor.index, 0);
    assert_eq!(app.controller.summary().budget, dec!(700));
    assert_eq!(app.controller.percentages(), &[Some(30)]);
}

#[test]
fn test_delete_selected_on_empty_list() {
    let mut app = app();
    assert!(app.delete_selected().is_none());
    assert_eq!(app.status_message, "No income to delete");
}

#[test]
fn test_delete_unknown_key_reports() {
    let mut app = app();
    assert!(app.delete(ItemKey::new(Category::Expense, 9)).is_none());
    assert_eq!(app.status_message, "No such item: exp-9");
}

#[test]
fn test_entry_field_cycle() {
    assert_eq!(EntryField::Category.next(), EntryField::Description);
    assert_eq!(EntryField::Value.next(), EntryField::Category);
    assert_eq!(EntryField::Category.prev(), EntryField::Value);
    assert_eq!(EntryField::Value.prev(), EntryField::Description);
}
