// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Context, Result};

use crate::commands::transactions;
use crate::filters::{sort_transactions, SortOrder};
use crate::store::Store;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let rows = sort_transactions(&transactions::load(store), SortOrder::DateAsc);

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Failed to create {}", out))?;
            wtr.write_record(["id", "date", "type", "amount", "category", "description"])?;
            for t in &rows {
                let date = t.date.to_string();
                let amount = t.amount.to_string();
                wtr.write_record([
                    t.id.as_str(),
                    date.as_str(),
                    t.r#type.as_str(),
                    amount.as_str(),
                    t.category.as_str(),
                    t.description.as_deref().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)
                .with_context(|| format!("Failed to write {}", out))?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    tracing::info!(count = rows.len(), path = %out, format = %fmt, "export finished");
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}
