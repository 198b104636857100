use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Category, Item};

/// Cached aggregate figures, as last computed by [`Ledger::recompute_totals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct BudgetSummary {
    pub(crate) budget: Decimal,
    pub(crate) total_income: Decimal,
    pub(crate) total_expense: Decimal,
    /// Share of income consumed by expenses, `None` while income is zero.
    pub(crate) budget_percentage: Option<i64>,
}

/// In-memory book of incomes and expenses.
///
/// Mutations do not touch the cached totals or expense percentages: callers
/// run [`recompute_totals`](Self::recompute_totals) and then
/// [`recompute_percentages`](Self::recompute_percentages) after every change
/// and before reading figures back.
#[derive(Debug, Default)]
pub(crate) struct Ledger {
    incomes: Vec<Item>,
    expenses: Vec<Item>,
    summary: BudgetSummary,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a new item to its category and return a copy of it.
    ///
    /// The id is one past the id of the last item in that category, or 0 if
    /// the category is empty. No validation happens here.
    pub(crate) fn add_item(
        &mut self,
        category: Category,
        description: impl Into<String>,
        value: Decimal,
    ) -> Item {
        let items = self.items_mut(category);
        let id = items.last().map_or(0, |last| last.id + 1);
        let item = Item::new(id, category, description.into(), value);
        items.push(item.clone());
        tracing::debug!(key = %item.key(), value = %item.value, "added item");
        item
    }

    /// Remove the item with `id` from `category`, keeping the order of the
    /// rest. Unknown ids are ignored.
    pub(crate) fn delete_item(&mut self, category: Category, id: u64) -> Option<Item> {
        let items = self.items_mut(category);
        let index = items.iter().position(|item| item.id == id)?;
        let removed = items.remove(index);
        tracing::debug!(key = %removed.key(), "deleted item");
        Some(removed)
    }

    pub(crate) fn recompute_totals(&mut self) {
        let total_income = sum_values(&self.incomes);
        let total_expense = sum_values(&self.expenses);
        self.summary = BudgetSummary {
            budget: total_income.saturating_sub(total_expense),
            total_income,
            total_expense,
            budget_percentage: percent_of(total_expense, total_income),
        };
        tracing::debug!(
            income = %total_income,
            expense = %total_expense,
            budget = %self.summary.budget,
            "recomputed totals"
        );
    }

    /// Refresh each expense's share of the cached total income.
    pub(crate) fn recompute_percentages(&mut self) {
        let total_income = self.summary.total_income;
        for expense in &mut self.expenses {
            expense.percentage = percent_of(expense.value, total_income);
        }
    }

    /// Expense percentages, parallel to [`expenses`](Self::expenses).
    pub(crate) fn percentages(&self) -> Vec<Option<i64>> {
        self.expenses.iter().map(|e| e.percentage).collect()
    }

    pub(crate) fn summary(&self) -> BudgetSummary {
        self.summary
    }

    pub(crate) fn incomes(&self) -> &[Item] {
        &self.incomes
    }

    pub(crate) fn expenses(&self) -> &[Item] {
        &self.expenses
    }

    pub(crate) fn items(&self, category: Category) -> &[Item] {
        match category {
            Category::Income => &self.incomes,
            Category::Expense => &self.expenses,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.incomes.len() + self.expenses.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty()
    }

    fn items_mut(&mut self, category: Category) -> &mut Vec<Item> {
        match category {
            Category::Income => &mut self.incomes,
            Category::Expense => &mut self.expenses,
        }
    }
}

fn sum_values(items: &[Item]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.value))
}

/// `part` as a whole-number percentage of `whole`, rounded half away from
/// zero. `None` when `whole` is not positive or the result does not fit.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Option<i64> {
    if whole <= Decimal::ZERO {
        return None;
    }
    part.checked_mul(Decimal::ONE_HUNDRED)?
        .checked_div(whole)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}
