//! Savings rate table.
//!
//! Each category maps to the fraction of its spend treated as avoidable.
//! Categories missing from the table fall back to `baseline_rate`.

use std::collections::BTreeMap;
use std::path::Path;

use log::info;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::transactions::Category;

fn default_baseline_rate() -> Decimal {
    dec!(0.10)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsRates {
    #[serde(default = "default_baseline_rate")]
    pub baseline_rate: Decimal,
    #[serde(default)]
    pub rates: BTreeMap<Category, Decimal>,
}

impl Default for SavingsRates {
    fn default() -> Self {
        let rates = BTreeMap::from([
            (Category::Groceries, dec!(0.10)),
            (Category::Transport, dec!(0.10)),
            (Category::EatingOut, dec!(0.30)),
            (Category::Entertainment, dec!(0.25)),
            (Category::Utilities, dec!(0.05)),
            (Category::Healthcare, dec!(0.05)),
            (Category::Education, dec!(0.05)),
            (Category::Miscellaneous, dec!(0.15)),
        ]);
        SavingsRates {
            baseline_rate: default_baseline_rate(),
            rates,
        }
    }
}

impl SavingsRates {
    /// Builds a validated table.
    pub fn new(baseline_rate: Decimal, rates: BTreeMap<Category, Decimal>) -> Result<Self> {
        let table = SavingsRates {
            baseline_rate,
            rates,
        };
        table.validate()?;
        Ok(table)
    }

    /// A table with no per-category entries; every category uses `baseline_rate`.
    pub fn baseline_only(baseline_rate: Decimal) -> Result<Self> {
        Self::new(baseline_rate, BTreeMap::new())
    }

    pub fn with_rate(mut self, category: Category, rate: Decimal) -> Result<Self> {
        self.rates.insert(category, rate);
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        check_rate("baseline_rate", self.baseline_rate)?;
        for (category, rate) in &self.rates {
            check_rate(category.as_str(), *rate)?;
        }
        Ok(())
    }

    pub fn rate_for(&self, category: Category) -> Decimal {
        self.rates
            .get(&category)
            .copied()
            .unwrap_or(self.baseline_rate)
    }

    /// Number of categories with an explicit rate.
    pub fn configured_categories(&self) -> usize {
        self.rates.len()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let table: SavingsRates = serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfigValue(format!("Invalid savings rate table: {}", e)))?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        let table = Self::from_json_str(&contents)?;
        info!(
            "Loaded savings rates for {} categories from {}",
            table.configured_categories(),
            path.display()
        );
        Ok(table)
    }
}

fn check_rate(name: &str, rate: Decimal) -> Result<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(Error::InvalidConfigValue(format!(
            "Savings rate for {} must be within [0, 1], got {}",
            name, rate
        )));
    }
    Ok(())
}
