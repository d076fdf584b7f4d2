// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Narrowing and ordering of transaction snapshots.
//!
//! Everything here borrows its input and returns a fresh vector, so the
//! caller's snapshot stays in stored order.

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::{Transaction, TransactionType};
use crate::utils::parse_date;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(TransactionType),
}

impl TypeFilter {
    pub fn matches(&self, kind: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(k) => *k == kind,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(TypeFilter::All);
        }
        Ok(TypeFilter::Only(s.parse()?))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// `"all"` and the empty string select every category.
    pub fn parse(s: &str) -> Self {
        if s.is_empty() || s == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(s.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub kind: TypeFilter,
    pub category: CategoryFilter,
}

impl TransactionFilter {
    pub fn matches(&self, t: &Transaction) -> bool {
        if self.start_date.is_some_and(|start| t.date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| t.date > end) {
            return false;
        }
        self.kind.matches(t.r#type) && self.category.matches(&t.category)
    }

    /// Builds a filter from the `--from/--to/--type/--category` arguments.
    /// Arguments a subcommand does not define are treated as unset.
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let arg = |id: &str| m.try_get_one::<String>(id).ok().flatten();
        let start_date = arg("from").map(|s| parse_date(s)).transpose()?;
        let end_date = arg("to").map(|s| parse_date(s)).transpose()?;
        let kind = match arg("type") {
            Some(s) => s.parse()?,
            None => TypeFilter::All,
        };
        let category = arg("category")
            .map(|s| CategoryFilter::parse(s.trim()))
            .unwrap_or_default();
        Ok(TransactionFilter {
            start_date,
            end_date,
            kind,
            category,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    DateDesc,
    DateAsc,
    AmountDesc,
    AmountAsc,
    CategoryAsc,
    CategoryDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 6] = [
        SortOrder::DateDesc,
        SortOrder::DateAsc,
        SortOrder::AmountDesc,
        SortOrder::AmountAsc,
        SortOrder::CategoryAsc,
        SortOrder::CategoryDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::DateDesc => "date-desc",
            SortOrder::DateAsc => "date-asc",
            SortOrder::AmountDesc => "amount-desc",
            SortOrder::AmountAsc => "amount-asc",
            SortOrder::CategoryAsc => "category-asc",
            SortOrder::CategoryDesc => "category-desc",
        }
    }

    pub fn compare(&self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            SortOrder::DateDesc => b.date.cmp(&a.date),
            SortOrder::DateAsc => a.date.cmp(&b.date),
            SortOrder::AmountDesc => b.amount.cmp(&a.amount),
            SortOrder::AmountAsc => a.amount.cmp(&b.amount),
            SortOrder::CategoryAsc => compare_locale(&a.category, &b.category),
            SortOrder::CategoryDesc => compare_locale(&b.category, &a.category),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        SortOrder::ALL
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid sort '{}', expected one of date-desc|date-asc|amount-desc|amount-asc|category-asc|category-desc",
                    s
                )
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub offset: usize,
    pub limit: Option<usize>,
}

/// Case-insensitive Russian ordering that treats `ё` as a variant of `е`.
///
/// Base letters decide first, then `е` sorts before `ё`, then lowercase
/// before uppercase. Punctuation and spaces come before digits, digits
/// before letters, and Cyrillic before every other script.
pub fn compare_locale(a: &str, b: &str) -> Ordering {
    fn script_rank(c: char) -> u8 {
        if c.is_alphabetic() {
            if ('\u{0400}'..='\u{04FF}').contains(&c) { 2 } else { 3 }
        } else if c.is_numeric() {
            1
        } else {
            0
        }
    }
    fn primary(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
        s.chars()
            .flat_map(char::to_lowercase)
            .map(|c| if c == 'ё' { 'е' } else { c })
            .map(|c| (script_rank(c), c))
    }
    fn secondary(s: &str) -> impl Iterator<Item = u8> + '_ {
        s.chars().map(|c| u8::from(c == 'ё' || c == 'Ё'))
    }
    fn tertiary(s: &str) -> impl Iterator<Item = u8> + '_ {
        s.chars().map(|c| u8::from(c.is_uppercase()))
    }
    primary(a)
        .cmp(primary(b))
        .then_with(|| secondary(a).cmp(secondary(b)))
        .then_with(|| tertiary(a).cmp(tertiary(b)))
}

pub fn filter_transactions(txs: &[Transaction], filter: &TransactionFilter) -> Vec<Transaction> {
    txs.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Stable sort: elements with equal keys keep their input order.
pub fn sort_transactions(txs: &[Transaction], order: SortOrder) -> Vec<Transaction> {
    let mut out = txs.to_vec();
    out.sort_by(|a, b| order.compare(a, b));
    out
}

pub fn paginate(txs: Vec<Transaction>, page: Page) -> Vec<Transaction> {
    let it = txs.into_iter().skip(page.offset);
    match page.limit {
        Some(limit) => it.take(limit).collect(),
        None => it.collect(),
    }
}

pub fn apply(txs: &[Transaction], filter: &TransactionFilter, order: SortOrder) -> Vec<Transaction> {
    let filtered = filter_transactions(txs, filter);
    tracing::debug!(
        total = txs.len(),
        matched = filtered.len(),
        order = %order,
        "filtered transactions"
    );
    sort_transactions(&filtered, order)
}
