use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Category;

/// Format an amount the way item rows show it: category sign, a space, then
/// the absolute value rounded to 2 decimal places with thousand separators.
/// e.g. `23210` as an expense → `"- 23,210.00"`
pub(crate) fn format_amount(val: Decimal, category: Category) -> String {
    let abs = val
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    format!("{} {with_commas}.{dec_part}", category.sign())
}

/// The budget takes the income sign when nothing is overspent.
pub(crate) fn format_budget(budget: Decimal) -> String {
    let category = if budget >= Decimal::ZERO {
        Category::Income
    } else {
        Category::Expense
    };
    format_amount(budget, category)
}

/// `"30%"` for known positive percentages, `"---"` otherwise.
pub(crate) fn format_percentage(percentage: Option<i64>) -> String {
    match percentage {
        Some(p) if p > 0 => format!("{p}%"),
        _ => "---".to_string(),
    }
}

/// e.g. `"October 2026"`
pub(crate) fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Move a list cursor down by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if *index + 1 < len {
        *index += 1;
        if *index >= *scroll + page {
            *scroll = index.saturating_sub(page.saturating_sub(1));
        }
    }
}

/// Move a list cursor up by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    if *index < *scroll {
        *scroll = *index;
    }
}

/// Jump cursor to the top of a list.
pub(crate) fn scroll_to_top(index: &mut usize, scroll: &mut usize) {
    *index = 0;
    *scroll = 0;
}

/// Jump cursor to the bottom of a list.
pub(crate) fn scroll_to_bottom(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if len > 0 {
        *index = len - 1;
        *scroll = index.saturating_sub(page.saturating_sub(1));
    }
}

/// Pull the cursor back inside a list that just shrank.
pub(crate) fn clamp_cursor(index: &mut usize, scroll: &mut usize, len: usize) {
    if *index >= len {
        *index = len.saturating_sub(1);
    }
    if *scroll > *index {
        *scroll = *index;
    }
}
