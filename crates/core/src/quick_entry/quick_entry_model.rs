use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::{Category, NewTransaction};

/// Fields recovered from a quick-entry string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTransaction {
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
}

impl ParsedTransaction {
    pub fn into_new_transaction(self, user_id: &str, date: Option<NaiveDate>) -> NewTransaction {
        NewTransaction {
            user_id: user_id.to_string(),
            category: self.category,
            amount: self.amount,
            description: self.description,
            date,
        }
    }
}
