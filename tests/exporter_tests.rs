// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketbook::models::{NewTransaction, TransactionType};
use pocketbook::{cli, commands::exporter, commands::transactions, store::Store};
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::tempdir;

fn seeded_store() -> Store {
    let store = Store::open_in_memory().unwrap();
    for (kind, amount, date, category, description) in [
        (TransactionType::Expense, "12.34", "2025-01-02", "Продукты", Some("Weekly run")),
        (TransactionType::Income, "5000", "2025-01-01", "Зарплата", None),
    ] {
        transactions::create(
            &store,
            NewTransaction {
                r#type: kind,
                amount: amount.parse::<Decimal>().unwrap(),
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                category: category.into(),
                description: description.map(String::from),
            },
        )
        .unwrap();
    }
    store
}

fn run_export(store: &Store, format: &str, out: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from([
        "pocketbook",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(store, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_transactions_writes_pretty_json_oldest_first() {
    let store = seeded_store();
    let ids: Vec<String> = transactions::load(&store)
        .into_iter()
        .map(|t| t.id)
        .collect();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    run_export(&store, "json", &out_path.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "id": ids[1],
                "type": "income",
                "amount": "5000",
                "date": "2025-01-01",
                "category": "Зарплата"
            },
            {
                "id": ids[0],
                "type": "expense",
                "amount": "12.34",
                "date": "2025-01-02",
                "category": "Продукты",
                "description": "Weekly run"
            }
        ])
    );
}

#[test]
fn export_transactions_writes_csv() {
    let store = seeded_store();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    run_export(&store, "CSV", &out_path.to_string_lossy()).unwrap();

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["id", "date", "type", "amount", "category", "description"]
    );
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][1], "2025-01-01");
    assert_eq!(&records[0][5], "");
    assert_eq!(&records[1][3], "12.34");
    assert_eq!(&records[1][4], "Продукты");
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let store = seeded_store();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    assert!(run_export(&store, "xml", &out_path.to_string_lossy()).is_err());
    assert!(!out_path.exists());
}
