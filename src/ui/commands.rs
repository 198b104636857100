use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, InputMode};
use crate::models::{Category, ItemInput, ItemKey};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit", cmd_quit, r);
    register_command!("quit", "Quit", cmd_quit, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add an item (e.g. :add exp Groceries 54.20)",
        cmd_add,
        r
    );
    register_command!(
        "a",
        "Add an item (e.g. :a inc Salary 2500)",
        cmd_add,
        r
    );
    register_command!(
        "delete",
        "Delete an item by key (e.g. :delete exp-3)",
        cmd_delete,
        r
    );
    register_command!(
        "del",
        "Delete an item by key (e.g. :del inc-0)",
        cmd_delete,
        r
    );
    register_command!("income", "Focus the income list", cmd_income, r);
    register_command!("expenses", "Focus the expense list", cmd_expenses, r);
    register_command!("entry", "Open the entry form", cmd_entry, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    const USAGE: &str = "Usage: :add <inc|exp> <description> <value>";

    let Some((kind, rest)) = args.split_once(' ') else {
        app.set_status(USAGE);
        return Ok(());
    };
    let Some(category) = Category::parse(kind) else {
        app.set_status(format!("Unknown category '{kind}'. {USAGE}"));
        return Ok(());
    };
    // The last token is the value, everything before it the description
    let Some((description, value)) = rest.trim().rsplit_once(' ') else {
        app.set_status(USAGE);
        return Ok(());
    };

    match ItemInput::parse(category, description, value) {
        Ok(input) => {
            app.add(input);
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_delete(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :delete <inc-N|exp-N>");
        return Ok(());
    }
    match ItemKey::parse(args) {
        Ok(key) => {
            app.delete(key);
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_income(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.focus = Category::Income;
    Ok(())
}

fn cmd_expenses(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.focus = Category::Expense;
    Ok(())
}

fn cmd_entry(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.input_mode = InputMode::Entry;
    Ok(())
}
