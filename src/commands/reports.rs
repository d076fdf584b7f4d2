// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::breakdown::{category_breakdown, CategoryShare};
use crate::calc::{income_expense_shares, totals, Totals};
use crate::commands::{categories, transactions};
use crate::filters::{filter_transactions, TransactionFilter};
use crate::format::format_currency;
use crate::models::TransactionType;
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("by-category", sub)) => by_category(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    #[serde(flatten)]
    pub totals: Totals,
    pub income_share: u32,
    pub expense_share: u32,
}

pub fn build_summary(store: &Store, filter: &TransactionFilter) -> Summary {
    let txs = filter_transactions(&transactions::load(store), filter);
    let (income_share, expense_share) = income_expense_shares(&txs);
    Summary {
        totals: totals(&txs),
        income_share,
        expense_share,
    }
}

pub fn build_breakdown(
    store: &Store,
    filter: &TransactionFilter,
    kind: TransactionType,
) -> Vec<CategoryShare> {
    let txs = filter_transactions(&transactions::load(store), filter);
    category_breakdown(&txs, kind, &categories::load(store))
}

fn summary(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let filter = TransactionFilter::from_matches(sub)?;
    let s = build_summary(store, &filter);
    if !maybe_print_json(sub.get_flag("json"), false, &s)? {
        let rows = vec![
            vec![
                "Income".to_string(),
                format_currency(s.totals.income),
                format!("{}%", s.income_share),
            ],
            vec![
                "Expense".to_string(),
                format_currency(s.totals.expense),
                format!("{}%", s.expense_share),
            ],
            vec![
                "Balance".to_string(),
                format_currency(s.totals.balance),
                String::new(),
            ],
        ];
        println!("{}", pretty_table(&["", "Amount", "Share"], rows));
    }
    Ok(())
}

fn by_category(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let kind: TransactionType = sub.get_one::<String>("kind").unwrap().parse()?;
    let filter = TransactionFilter::from_matches(sub)?;
    let data = build_breakdown(store, &filter, kind);
    if !maybe_print_json(sub.get_flag("json"), false, &data)? {
        let rows = data
            .into_iter()
            .map(|s| {
                vec![
                    s.name,
                    format_currency(s.amount),
                    format!("{}%", s.percentage),
                    s.color,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Amount", "Share", "Color"], rows)
        );
    }
    Ok(())
}
