use anyhow::{bail, Context, Result};
use chrono::Local;
use std::fmt::Write;

use crate::controller::Controller;
use crate::models::{Category, ItemInput};
use crate::ui::util::{format_amount, format_budget, format_percentage, month_label};

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budgetracker {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("budgetracker - income, expenses and what is left of the budget");
    println!();
    println!("Usage: budgetracker [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary <entry>...            Print the budget for the given entries");
    println!("    entry: inc:<description>=<value> or exp:<description>=<value>");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Set RUST_LOG=budgetracker=debug to trace ledger updates on stderr.");
}

fn cli_summary(args: &[String]) -> Result<()> {
    let mut controller = Controller::new();
    for arg in args {
        let input = parse_entry(arg).with_context(|| format!("Invalid entry '{arg}'"))?;
        controller.add(input);
    }
    tracing::info!(items = controller.ledger().len(), "computed summary");

    let month = month_label(Local::now().date_naive());
    print!("{}", summary_report(&controller, &month));
    Ok(())
}

/// Parse `inc:<description>=<value>` / `exp:<description>=<value>`.
fn parse_entry(arg: &str) -> Result<ItemInput> {
    let Some((kind, rest)) = arg.split_once(':') else {
        bail!("Expected <inc|exp>:<description>=<value>");
    };
    let Some(category) = Category::parse(kind) else {
        bail!("Unknown category '{kind}'");
    };
    let Some((description, value)) = rest.rsplit_once('=') else {
        bail!("Expected <inc|exp>:<description>=<value>");
    };
    ItemInput::parse(category, description, value).inspect_err(|e| {
        tracing::warn!(entry = arg, error = %e, "rejected entry");
    })
}

fn summary_report(controller: &Controller, month: &str) -> String {
    let summary = controller.summary();
    let ledger = controller.ledger();
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Available budget in {month}");
    let _ = writeln!(out, "{}", "─".repeat(40));
    let _ = writeln!(out, "  Budget:    {}", format_budget(summary.budget));
    let _ = writeln!(
        out,
        "  Income:    {}",
        format_amount(summary.total_income, Category::Income)
    );
    let _ = writeln!(
        out,
        "  Expenses:  {}  {}",
        format_amount(summary.total_expense, Category::Expense),
        format_percentage(summary.budget_percentage)
    );

    if !ledger.incomes().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Income:");
        for item in ledger.incomes() {
            let _ = writeln!(
                out,
                "  {:<6} {:<24} {:>16}",
                item.key().to_string(),
                item.description,
                format_amount(item.value, Category::Income)
            );
        }
    }

    if !ledger.expenses().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Expenses:");
        for (item, percentage) in ledger.expenses().iter().zip(controller.percentages()) {
            let _ = writeln!(
                out,
                "  {:<6} {:<24} {:>16} {:>5}",
                item.key().to_string(),
                item.description,
                format_amount(item.value, Category::Expense),
                format_percentage(*percentage)
            );
        }
    }

    out
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
