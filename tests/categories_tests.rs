// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketbook::commands::{self, categories, transactions};
use pocketbook::error::PocketbookError;
use pocketbook::filters::TypeFilter;
use pocketbook::models::{CategoryUpdate, NewCategory, NewTransaction, TransactionType};
use pocketbook::{cli, store::Store};
use rust_decimal::Decimal;

fn new_cat(name: &str, kind: TransactionType, color: &str) -> NewCategory {
    NewCategory {
        name: name.into(),
        r#type: kind,
        color: color.into(),
    }
}

fn spend(store: &Store, category: &str, amount: i64) {
    transactions::create(
        store,
        NewTransaction {
            r#type: TransactionType::Expense,
            amount: Decimal::from(amount),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            category: category.into(),
            description: None,
        },
    )
    .unwrap();
}

#[test]
fn defaults_are_served_until_something_is_saved() {
    let store = Store::open_in_memory().unwrap();
    let cats = categories::load(&store);
    assert_eq!(cats.len(), 8);
    assert_eq!(cats[4].name, "Зарплата");
    assert!(!store.contains(pocketbook::store::CATEGORIES_KEY));
}

#[test]
fn create_enforces_unique_name_per_type() {
    let store = Store::open_in_memory().unwrap();
    let err = categories::create(
        &store,
        new_cat("Продукты", TransactionType::Expense, "#123456"),
    )
    .unwrap_err();
    assert!(matches!(err, PocketbookError::DuplicateCategory { .. }));

    // Same name under the other type is allowed
    let cat = categories::create(
        &store,
        new_cat("Продукты", TransactionType::Income, "#123456"),
    )
    .unwrap();
    assert_eq!(categories::load(&store).len(), 9);
    assert!(categories::load(&store).contains(&cat));
}

#[test]
fn create_validates_color_and_name() {
    let store = Store::open_in_memory().unwrap();
    assert!(matches!(
        categories::create(&store, new_cat("Кафе", TransactionType::Expense, "red")).unwrap_err(),
        PocketbookError::InvalidColor(_)
    ));
    assert!(matches!(
        categories::create(&store, new_cat("  ", TransactionType::Expense, "#FFFFFF")).unwrap_err(),
        PocketbookError::EmptyCategory
    ));
}

#[test]
fn update_checks_duplicates_against_resulting_pair() {
    let store = Store::open_in_memory().unwrap();
    // "Транспорт" is expense id 2; renaming "Продукты" (id 1) onto it must fail
    let err = categories::update(
        &store,
        "1",
        CategoryUpdate {
            name: Some("Транспорт".into()),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, PocketbookError::DuplicateCategory { .. }));

    // ...but moving it to income at the same time is fine
    let cat = categories::update(
        &store,
        "1",
        CategoryUpdate {
            name: Some("Транспорт".into()),
            r#type: Some(TransactionType::Income),
            color: None,
        },
    )
    .unwrap();
    assert_eq!(cat.id, "1");
    assert_eq!(cat.color, "#FF5252");

    // Keeping its own name is not a clash
    categories::update(
        &store,
        "2",
        CategoryUpdate {
            color: Some("#000000".into()),
            ..Default::default()
        },
    )
    .unwrap();

    assert!(matches!(
        categories::update(&store, "nope", CategoryUpdate::default()).unwrap_err(),
        PocketbookError::NotFound { .. }
    ));
}

#[test]
fn delete_leaves_transactions_alone() {
    let store = Store::open_in_memory().unwrap();
    spend(&store, "Продукты", 100);
    categories::delete(&store, "1").unwrap();
    assert_eq!(categories::load(&store).len(), 7);
    assert_eq!(transactions::load(&store)[0].category, "Продукты");
    assert!(matches!(
        categories::delete(&store, "1").unwrap_err(),
        PocketbookError::NotFound { .. }
    ));
}

#[test]
fn reset_restores_defaults() {
    let store = Store::open_in_memory().unwrap();
    categories::delete(&store, "3").unwrap();
    categories::create(&store, new_cat("Кафе", TransactionType::Expense, "#EC407A")).unwrap();
    let cats = categories::reset(&store).unwrap();
    assert_eq!(cats, pocketbook::models::default_categories());
    assert_eq!(categories::load(&store), cats);
}

#[test]
fn filtered_listing_by_type_and_search() {
    let store = Store::open_in_memory().unwrap();
    let income = categories::list_filtered(
        &store,
        TypeFilter::Only(TransactionType::Income),
        None,
    );
    assert_eq!(income.len(), 4);
    assert!(income.iter().all(|c| c.r#type == TransactionType::Income));

    let found = categories::list_filtered(&store, TypeFilter::All, Some("ТРАНС"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Транспорт");

    assert_eq!(
        categories::list_filtered(&store, TypeFilter::All, Some("  ")).len(),
        8
    );
}

#[test]
fn stats_report_most_used() {
    let store = Store::open_in_memory().unwrap();
    spend(&store, "Транспорт", 1);
    spend(&store, "Продукты", 1);
    spend(&store, "Продукты", 1);
    let s = categories::stats(&store);
    assert_eq!(s.total, 8);
    assert_eq!(s.income, 4);
    assert_eq!(s.expense, 4);
    assert_eq!(s.most_used.len(), 2);
    assert_eq!(s.most_used[0].name, "Продукты");
    assert_eq!(s.most_used[0].count, 2);
}

#[test]
fn add_without_color_picks_palette_color() {
    let store = Store::open_in_memory().unwrap();
    let matches = cli::build_cli().get_matches_from([
        "pocketbook",
        "category",
        "add",
        "--name",
        " Кафе ",
        "--type",
        "expense",
    ]);
    if let Some(("category", cat_m)) = matches.subcommand() {
        categories::handle(&store, cat_m).unwrap();
    } else {
        panic!("no category subcommand");
    }
    let cat = categories::load(&store)
        .into_iter()
        .find(|c| c.name == "Кафе")
        .unwrap();
    assert!(categories::PALETTE.contains(&cat.color.as_str()));
}

#[test]
fn clear_all_empties_history_and_restores_categories() {
    let store = Store::open_in_memory().unwrap();
    spend(&store, "Продукты", 10);
    categories::delete(&store, "1").unwrap();
    commands::clear_all(&store).unwrap();
    assert!(transactions::load(&store).is_empty());
    assert_eq!(categories::load(&store).len(), 8);
}
