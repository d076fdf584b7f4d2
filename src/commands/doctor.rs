// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::commands::{categories, transactions};
use crate::models::MAX_AMOUNT;
use crate::store::Store;
use crate::utils::{is_hex_color, pretty_table};

/// Consistency findings as `(issue, detail)` pairs.
pub fn check(store: &Store) -> Vec<(String, String)> {
    let txs = transactions::load(store);
    let cats = categories::load(store);
    let mut rows = Vec::new();

    // 1) Transactions whose category name has no (name, type) match
    let mut seen: Vec<(&str, &str)> = Vec::new();
    for t in &txs {
        let known = cats
            .iter()
            .any(|c| c.name == t.category && c.r#type == t.r#type);
        let key = (t.category.as_str(), t.r#type.as_str());
        if !known && !seen.contains(&key) {
            seen.push(key);
            rows.push((
                "orphaned_category".to_string(),
                format!("{} ({})", t.category, t.r#type),
            ));
        }
    }

    // 2) Duplicate (name, type) pairs in the category list
    for (i, a) in cats.iter().enumerate() {
        if cats[..i]
            .iter()
            .any(|b| b.name == a.name && b.r#type == a.r#type)
        {
            rows.push((
                "duplicate_category".to_string(),
                format!("{} ({})", a.name, a.r#type),
            ));
        }
    }

    // 3) Colors that will not render
    for c in &cats {
        if !is_hex_color(&c.color) {
            rows.push(("invalid_color".to_string(), format!("{} {}", c.name, c.color)));
        }
    }

    // 4) Amounts outside (0, MAX_AMOUNT]
    for t in &txs {
        if t.amount <= Decimal::ZERO {
            rows.push(("non_positive_amount".to_string(), format!("{} {}", t.id, t.amount)));
        } else if t.amount > Decimal::from(MAX_AMOUNT) {
            rows.push(("amount_too_large".to_string(), format!("{} {}", t.id, t.amount)));
        }
    }
    rows
}

pub fn handle(store: &Store) -> Result<()> {
    let rows = check(store);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        let rows = rows.into_iter().map(|(a, b)| vec![a, b]).collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
