use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;

use super::Category;

/// One income or expense entry held by the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u64,
    pub category: Category,
    pub description: String,
    pub value: Decimal,
    /// Share of total income this expense represents, in whole percent.
    /// `None` until computed, or while total income is zero. Always `None`
    /// for incomes.
    pub percentage: Option<i64>,
}

impl Item {
    pub fn new(id: u64, category: Category, description: String, value: Decimal) -> Self {
        Self {
            id,
            category,
            description,
            value,
            percentage: None,
        }
    }

    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.category, self.id)
    }
}

/// Address of a single item: its category plus its per-category id.
/// Written as `inc-<id>` or `exp-<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub category: Category,
    pub id: u64,
}

impl ItemKey {
    pub fn new(category: Category, id: u64) -> Self {
        Self { category, id }
    }

    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let Some((code, id)) = s.split_once('-') else {
            bail!("Invalid item key '{s}' (expected inc-<id> or exp-<id>)");
        };
        let category = match code {
            "inc" => Category::Income,
            "exp" => Category::Expense,
            _ => bail!("Invalid item key '{s}' (expected inc-<id> or exp-<id>)"),
        };
        let id = id
            .parse::<u64>()
            .with_context(|| format!("Invalid item id in '{s}'"))?;
        Ok(Self { category, id })
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.category.code(), self.id)
    }
}
