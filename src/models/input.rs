use anyhow::{bail, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

use super::Category;

/// User input that passed validation and may be handed to the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemInput {
    pub category: Category,
    pub description: String,
    pub value: Decimal,
}

impl ItemInput {
    /// Validate raw form input: the description must not be blank and the
    /// value must be a non-zero number. Thousands separators are accepted.
    pub fn parse(category: Category, description: &str, value: &str) -> Result<Self> {
        let description = description.trim();
        if description.is_empty() {
            bail!("Description cannot be empty");
        }
        let value = parse_value(value)?;
        Ok(Self {
            category,
            description: description.to_string(),
            value,
        })
    }
}

fn parse_value(s: &str) -> Result<Decimal> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        bail!("Value cannot be empty");
    }
    let value = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| anyhow::anyhow!("Invalid value: '{}'", s.trim()))?;
    if value.is_zero() {
        bail!("Value cannot be zero");
    }
    Ok(value)
}
