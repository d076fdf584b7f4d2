// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(anyhow::anyhow!(
                "Invalid transaction type '{}', expected income|expense",
                other
            )),
        }
    }
}

/// Upper bound for a single transaction amount, in whole units.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub amount: Decimal, // always positive, sign comes from type
    pub date: NaiveDate,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Every field of a transaction except its id; used for create and edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewTransaction {
    pub fn with_id(self, id: impl Into<String>) -> Transaction {
        Transaction {
            id: id.into(),
            r#type: self.r#type,
            amount: self.amount,
            date: self.date,
            category: self.category,
            description: self.description.filter(|d| !d.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub color: String,
}

impl Category {
    fn seed(id: &str, name: &str, r#type: TransactionType, color: &str) -> Self {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            r#type,
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub color: String,
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<TransactionType>,
    pub color: Option<String>,
}

/// Categories present before the user has created any.
pub fn default_categories() -> Vec<Category> {
    use TransactionType::{Expense, Income};
    vec![
        Category::seed("1", "Продукты", Expense, "#FF5252"),
        Category::seed("2", "Транспорт", Expense, "#FF7043"),
        Category::seed("3", "Развлечения", Expense, "#FFCA28"),
        Category::seed("4", "Коммунальные услуги", Expense, "#66BB6A"),
        Category::seed("5", "Зарплата", Income, "#42A5F5"),
        Category::seed("6", "Фриланс", Income, "#5C6BC0"),
        Category::seed("7", "Подарки", Income, "#AB47BC"),
        Category::seed("8", "Инвестиции", Income, "#26A69A"),
    ]
}
