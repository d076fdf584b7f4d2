// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::breakdown::categories_used;
use crate::calc::{totals, Totals};
use crate::config;
use crate::error::{self, PocketbookError};
use crate::filters::{self, Page, SortOrder, TransactionFilter};
use crate::format::{format_currency, format_naive_date, format_signed};
use crate::models::{NewTransaction, Transaction, MAX_AMOUNT};
use crate::store::{Store, TRANSACTIONS_KEY};
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap().trim();
            delete(store, id)?;
            println!("Removed transaction {}", id);
        }
        Some(("clear", _)) => {
            clear(store)?;
            println!("All transactions removed");
        }
        Some(("list", sub)) => list(store, sub)?,
        Some(("stats", sub)) => print_stats(store, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn load(store: &Store) -> Vec<Transaction> {
    store.read(TRANSACTIONS_KEY, Vec::new())
}

fn save(store: &Store, txs: &[Transaction]) -> error::Result<()> {
    store.try_write(TRANSACTIONS_KEY, txs)?;
    Ok(())
}

fn validate(new: &NewTransaction) -> error::Result<()> {
    if new.amount <= Decimal::ZERO || new.amount > Decimal::from(MAX_AMOUNT) {
        return Err(PocketbookError::InvalidAmount(new.amount));
    }
    if new.category.trim().is_empty() {
        return Err(PocketbookError::EmptyCategory);
    }
    Ok(())
}

fn not_found(id: &str) -> PocketbookError {
    PocketbookError::NotFound {
        kind: "Transaction",
        id: id.to_string(),
    }
}

pub fn list_filtered(
    store: &Store,
    filter: &TransactionFilter,
    order: SortOrder,
    page: Page,
) -> Vec<Transaction> {
    filters::paginate(filters::apply(&load(store), filter, order), page)
}

pub fn create(store: &Store, new: NewTransaction) -> error::Result<Transaction> {
    validate(&new)?;
    let mut txs = load(store);
    let tx = new.with_id(Uuid::new_v4().to_string());
    txs.push(tx.clone());
    save(store, &txs)?;
    tracing::info!(id = %tx.id, kind = %tx.r#type, amount = %tx.amount, "transaction created");
    Ok(tx)
}

/// Replaces every field of transaction `id` except the id itself.
pub fn update(store: &Store, id: &str, new: NewTransaction) -> error::Result<Transaction> {
    validate(&new)?;
    let mut txs = load(store);
    let slot = txs
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| not_found(id))?;
    *slot = new.with_id(id);
    let updated = slot.clone();
    save(store, &txs)?;
    tracing::info!(id, "transaction updated");
    Ok(updated)
}

pub fn delete(store: &Store, id: &str) -> error::Result<()> {
    let txs = load(store);
    let before = txs.len();
    let kept: Vec<Transaction> = txs.into_iter().filter(|t| t.id != id).collect();
    if kept.len() == before {
        return Err(not_found(id));
    }
    save(store, &kept)?;
    tracing::info!(id, "transaction deleted");
    Ok(())
}

pub fn clear(store: &Store) -> error::Result<()> {
    save(store, &[])?;
    tracing::info!("transactions cleared");
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionStats {
    #[serde(flatten)]
    pub totals: Totals,
    pub categories_used: Vec<String>,
}

pub fn stats(store: &Store) -> TransactionStats {
    let txs = load(store);
    TransactionStats {
        totals: totals(&txs),
        categories_used: categories_used(&txs),
    }
}

fn new_from_matches(sub: &clap::ArgMatches) -> Result<NewTransaction> {
    Ok(NewTransaction {
        r#type: sub.get_one::<String>("type").unwrap().parse()?,
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
        date: parse_date(sub.get_one::<String>("date").unwrap())?,
        category: sub.get_one::<String>("category").unwrap().trim().to_string(),
        description: sub.get_one::<String>("description").map(|s| s.trim().to_string()),
    })
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let tx = create(store, new_from_matches(sub)?)?;
    println!(
        "Recorded {} {} on {} in '{}' (id: {})",
        tx.r#type,
        tx.amount,
        tx.date,
        tx.category,
        tx.id
    );
    Ok(())
}

fn edit(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    let tx = update(store, id, new_from_matches(sub)?)?;
    println!("Updated transaction {} ({} {})", tx.id, tx.r#type, tx.amount);
    Ok(())
}

/// Runs a `tx list` query: filter flags, then `--sort`, then `--offset/--limit`.
///
/// Without `--sort`/`--limit` the stored settings apply.
pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let settings = config::load(store);
    let filter = TransactionFilter::from_matches(sub)?;
    let order = match sub.get_one::<String>("sort") {
        Some(s) => s.parse()?,
        None => settings.default_sort,
    };
    let page = Page {
        offset: sub.get_one::<usize>("offset").copied().unwrap_or(0),
        limit: sub.get_one::<usize>("limit").copied().or(settings.list_limit),
    };
    Ok(list_filtered(store, &filter, order, page))
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    format_naive_date(t.date),
                    t.r#type.to_string(),
                    t.category.clone(),
                    format_signed(t.r#type, t.amount),
                    t.description.clone().unwrap_or_default(),
                    t.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Category", "Amount", "Description", "ID"],
                rows,
            )
        );
    }
    Ok(())
}

fn print_stats(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let s = stats(store);
    if !maybe_print_json(sub.get_flag("json"), false, &s)? {
        let rows = vec![
            vec!["Income".into(), format_currency(s.totals.income)],
            vec!["Expense".into(), format_currency(s.totals.expense)],
            vec!["Balance".into(), format_currency(s.totals.balance)],
            vec!["Transactions".into(), s.totals.count.to_string()],
            vec!["Categories used".into(), s.categories_used.join(", ")],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}
