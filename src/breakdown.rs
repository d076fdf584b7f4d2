// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-category sums and shares feeding the dashboard bars.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calc::percent_of;
use crate::models::{Category, Transaction, TransactionType};

/// Color used for category names with no matching category record.
pub const FALLBACK_COLOR: &str = "#CBD5E0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub name: String,
    pub amount: Decimal,
    pub percentage: u32,
    pub color: String,
}

/// Sums amounts of `kind` per category name, in first-seen order.
pub fn sum_by_category(txs: &[Transaction], kind: TransactionType) -> Vec<(String, Decimal)> {
    let mut sums: Vec<(String, Decimal)> = Vec::new();
    for t in txs.iter().filter(|t| t.r#type == kind) {
        match sums.iter_mut().find(|(name, _)| *name == t.category) {
            Some((_, total)) => *total = total.saturating_add(t.amount),
            None => sums.push((t.category.clone(), t.amount)),
        }
    }
    sums
}

/// Looks a color up by category name; the first category with that name wins.
pub fn color_for<'a>(categories: &'a [Category], name: &str) -> &'a str {
    categories
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.color.as_str())
        .unwrap_or(FALLBACK_COLOR)
}

/// Breakdown of `kind` by category, largest first.
///
/// Empty when there is nothing of `kind` to divide.
pub fn category_breakdown(
    txs: &[Transaction],
    kind: TransactionType,
    categories: &[Category],
) -> Vec<CategoryShare> {
    let sums = sum_by_category(txs, kind);
    let total = sums
        .iter()
        .fold(Decimal::ZERO, |acc, (_, amount)| acc.saturating_add(*amount));
    if total.is_zero() {
        return Vec::new();
    }
    let mut shares: Vec<CategoryShare> = sums
        .into_iter()
        .map(|(name, amount)| CategoryShare {
            percentage: percent_of(amount, total),
            color: color_for(categories, &name).to_string(),
            name,
            amount,
        })
        .collect();
    shares.sort_by(|a, b| b.amount.cmp(&a.amount));
    shares
}

/// Number of transactions per category name, most used first.
pub fn category_usage(txs: &[Transaction]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for t in txs {
        match counts.iter_mut().find(|(name, _)| *name == t.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((t.category.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Distinct category names in first-seen order.
pub fn categories_used(txs: &[Transaction]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for t in txs {
        if !names.contains(&t.category) {
            names.push(t.category.clone());
        }
    }
    names
}
