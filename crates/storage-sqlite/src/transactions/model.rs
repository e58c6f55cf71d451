//! Database models for transactions.

use std::str::FromStr;

use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal::Decimal;

use savings_predictor_core::errors::{Error, Result, ValidationError};
use savings_predictor_core::transactions::{Category, NewTransaction, Transaction};

use crate::errors::StorageError;

/// Database model for transactions. Amounts are stored as decimal text.
#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub amount: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Insert model; `id` is assigned by the repository.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
pub struct NewTransactionDB {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub amount: String,
    pub description: String,
    pub date: NaiveDate,
}

impl NewTransactionDB {
    pub fn from_domain(id: String, domain: NewTransaction) -> Result<Self> {
        let date = domain
            .date
            .ok_or_else(|| Error::from(ValidationError::MissingField("date".to_string())))?;
        Ok(Self {
            id,
            user_id: domain.user_id,
            category: domain.category.as_str().to_string(),
            amount: domain.amount.to_string(),
            description: domain.description,
            date,
        })
    }
}

impl TryFrom<TransactionDB> for Transaction {
    type Error = Error;

    fn try_from(db: TransactionDB) -> Result<Self> {
        let category = Category::from_str(&db.category).map_err(|e| {
            Error::from(StorageError::Corrupt(format!("transaction {}: {}", db.id, e)))
        })?;
        let amount = Decimal::from_str(&db.amount).map_err(|e| {
            Error::from(StorageError::Corrupt(format!(
                "transaction {} amount '{}': {}",
                db.id, db.amount, e
            )))
        })?;
        Ok(Transaction {
            id: db.id,
            user_id: db.user_id,
            category,
            amount,
            description: db.description,
            date: db.date,
        })
    }
}
