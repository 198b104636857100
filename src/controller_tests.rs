#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::Category;

fn input(category: Category, description: &str, value: &str) -> ItemInput {
    ItemInput::parse(category, description, value).unwrap()
}

#[test]
fn test_initial_state_is_zeroed() {
    let controller = Controller::new();
    let summary = controller.summary();
    assert_eq!(summary.budget, Decimal::ZERO);
    assert_eq!(summary.budget_percentage, None);
    assert!(controller.percentages().is_empty());
    assert!(controller.ledger().is_empty());
}

#[test]
fn test_add_updates_figures() {
    let mut controller = Controller::new();
    controller.add(input(Category::Income, "Salary", "1000"));
    let rent = controller.add(input(Category::Expense, "Rent", "300"));
    assert_eq!(rent.key().to_string(), "exp-0");
    let summary = controller.summary();
    assert_eq!(summary.budget, dec!(700));
    assert_eq!(summary.budget_percentage, Some(30));
    assert_eq!(controller.percentages(), &[Some(30)]);
}

#[test]
fn test_delete_updates_figures() {
    let mut controller = Controller::new();
    let salary = controller.add(input(Category::Income, "Salary", "1000"));
    controller.add(input(Category::Expense, "Rent", "300"));
    let removed = controller.delete(salary.key()).unwrap();
    assert_eq!(removed.description, "Salary");
    assert_eq!(controller.summary().total_income, Decimal::ZERO);
    assert_eq!(controller.summary().budget, dec!(-300));
    assert_eq!(controller.percentages(), &[None]);
}

#[test]
fn test_delete_missing_key() {
    let mut controller = Controller::new();
    controller.add(input(Category::Income, "Salary", "1000"));
    assert!(controller
        .delete(ItemKey::new(Category::Expense, 3))
        .is_none());
    assert_eq!(controller.summary().total_income, dec!(1000));
}
