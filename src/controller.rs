use crate::ledger::{BudgetSummary, Ledger};
use crate::models::{Item, ItemInput, ItemKey};

/// Glue between user actions and the ledger.
///
/// Every mutation is followed by a budget and percentage update so the
/// figures held here always match the ledger's items.
#[derive(Debug)]
pub(crate) struct Controller {
    ledger: Ledger,
    summary: BudgetSummary,
    percentages: Vec<Option<i64>>,
}

impl Controller {
    pub(crate) fn new() -> Self {
        Self {
            ledger: Ledger::new(),
            summary: BudgetSummary::default(),
            percentages: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, input: ItemInput) -> Item {
        let item = self
            .ledger
            .add_item(input.category, input.description, input.value);
        self.update_budget();
        self.update_percentages();
        item
    }

    /// Returns the removed item, or `None` if nothing matched `key`.
    pub(crate) fn delete(&mut self, key: ItemKey) -> Option<Item> {
        let removed = self.ledger.delete_item(key.category, key.id);
        self.update_budget();
        self.update_percentages();
        removed
    }

    fn update_budget(&mut self) {
        self.ledger.recompute_totals();
        self.summary = self.ledger.summary();
    }

    fn update_percentages(&mut self) {
        self.ledger.recompute_percentages();
        self.percentages = self.ledger.percentages();
    }

    pub(crate) fn summary(&self) -> BudgetSummary {
        self.summary
    }

    pub(crate) fn percentages(&self) -> &[Option<i64>] {
        &self.percentages
    }

    pub(crate) fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
