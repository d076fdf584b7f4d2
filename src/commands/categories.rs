// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;
use uuid::Uuid;

use crate::breakdown::category_usage;
use crate::commands::transactions;
use crate::error::{self, PocketbookError};
use crate::filters::TypeFilter;
use crate::models::{default_categories, Category, CategoryUpdate, NewCategory, TransactionType};
use crate::store::{Store, CATEGORIES_KEY};
use crate::utils::{is_hex_color, maybe_print_json, pretty_table};

/// Preset colors offered for new categories.
pub const PALETTE: [&str; 16] = [
    "#FF5252", "#FF7043", "#FFCA28", "#66BB6A", "#42A5F5", "#5C6BC0", "#AB47BC", "#26A69A",
    "#EC407A", "#7E57C2", "#29B6F6", "#26C6DA", "#9CCC65", "#FFA726", "#8D6E63", "#78909C",
];

const MOST_USED_LIMIT: usize = 5;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let color = match sub.get_one::<String>("color") {
                Some(c) => c.trim().to_string(),
                None => random_palette_color().to_string(),
            };
            let cat = create(
                store,
                NewCategory {
                    name: sub.get_one::<String>("name").unwrap().trim().to_string(),
                    r#type: sub.get_one::<String>("type").unwrap().parse()?,
                    color,
                },
            )?;
            println!(
                "Added category '{}' ({}, {}) id {}",
                cat.name, cat.r#type, cat.color, cat.id
            );
        }
        Some(("edit", sub)) => {
            let id = sub.get_one::<String>("id").unwrap().trim();
            let updates = CategoryUpdate {
                name: sub.get_one::<String>("name").map(|s| s.trim().to_string()),
                r#type: sub
                    .get_one::<String>("type")
                    .map(|s| s.parse::<TransactionType>())
                    .transpose()?,
                color: sub.get_one::<String>("color").map(|s| s.trim().to_string()),
            };
            let cat = update(store, id, updates)?;
            println!("Updated category '{}' ({}, {})", cat.name, cat.r#type, cat.color);
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap().trim();
            delete(store, id)?;
            println!("Removed category {}", id);
        }
        Some(("reset", _)) => {
            let cats = reset(store)?;
            println!("Restored {} default categories", cats.len());
        }
        Some(("list", sub)) => {
            let kind = match sub.get_one::<String>("type") {
                Some(s) => s.parse()?,
                None => TypeFilter::All,
            };
            let search = sub.get_one::<String>("search").map(|s| s.as_str());
            let data = list_filtered(store, kind, search);
            if !maybe_print_json(sub.get_flag("json"), false, &data)? {
                let rows = data
                    .into_iter()
                    .map(|c| vec![c.id, c.name, c.r#type.to_string(), c.color])
                    .collect();
                println!("{}", pretty_table(&["ID", "Category", "Type", "Color"], rows));
            }
        }
        Some(("stats", sub)) => {
            let s = stats(store);
            if !maybe_print_json(sub.get_flag("json"), false, &s)? {
                let mut rows = vec![
                    vec!["Total".to_string(), s.total.to_string()],
                    vec!["Income".to_string(), s.income.to_string()],
                    vec!["Expense".to_string(), s.expense.to_string()],
                ];
                for u in &s.most_used {
                    rows.push(vec![format!("Used: {}", u.name), u.count.to_string()]);
                }
                println!("{}", pretty_table(&["Metric", "Value"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}

/// Stored categories, or the defaults when none were ever saved.
pub fn load(store: &Store) -> Vec<Category> {
    store.read(CATEGORIES_KEY, default_categories())
}

fn save(store: &Store, cats: &[Category]) -> error::Result<()> {
    store.try_write(CATEGORIES_KEY, cats)?;
    Ok(())
}

fn not_found(id: &str) -> PocketbookError {
    PocketbookError::NotFound {
        kind: "Category",
        id: id.to_string(),
    }
}

pub fn random_palette_color() -> &'static str {
    let idx = Uuid::new_v4().as_bytes()[0] as usize % PALETTE.len();
    PALETTE[idx]
}

/// Type filter plus case-insensitive substring search on the name.
pub fn list_filtered(store: &Store, kind: TypeFilter, search: Option<&str>) -> Vec<Category> {
    let needle = search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());
    load(store)
        .into_iter()
        .filter(|c| kind.matches(c.r#type))
        .filter(|c| match &needle {
            Some(n) => c.name.to_lowercase().contains(n.as_str()),
            None => true,
        })
        .collect()
}

fn ensure_unique(
    cats: &[Category],
    name: &str,
    kind: TransactionType,
    except_id: Option<&str>,
) -> error::Result<()> {
    let clash = cats
        .iter()
        .any(|c| Some(c.id.as_str()) != except_id && c.name == name && c.r#type == kind);
    if clash {
        return Err(PocketbookError::DuplicateCategory {
            name: name.to_string(),
            kind,
        });
    }
    Ok(())
}

fn validate_fields(name: &str, color: &str) -> error::Result<()> {
    if name.trim().is_empty() {
        return Err(PocketbookError::EmptyCategory);
    }
    if !is_hex_color(color) {
        return Err(PocketbookError::InvalidColor(color.to_string()));
    }
    Ok(())
}

pub fn create(store: &Store, new: NewCategory) -> error::Result<Category> {
    validate_fields(&new.name, &new.color)?;
    let mut cats = load(store);
    ensure_unique(&cats, &new.name, new.r#type, None)?;
    let cat = Category {
        id: Uuid::new_v4().to_string(),
        name: new.name,
        r#type: new.r#type,
        color: new.color,
    };
    cats.push(cat.clone());
    save(store, &cats)?;
    tracing::info!(id = %cat.id, name = %cat.name, "category created");
    Ok(cat)
}

/// Applies a partial update. Renaming does not touch transactions that
/// still carry the old name.
pub fn update(store: &Store, id: &str, updates: CategoryUpdate) -> error::Result<Category> {
    let mut cats = load(store);
    let idx = cats
        .iter()
        .position(|c| c.id == id)
        .ok_or_else(|| not_found(id))?;
    let mut next = cats[idx].clone();
    if let Some(name) = updates.name {
        next.name = name;
    }
    if let Some(kind) = updates.r#type {
        next.r#type = kind;
    }
    if let Some(color) = updates.color {
        next.color = color;
    }
    validate_fields(&next.name, &next.color)?;
    ensure_unique(&cats, &next.name, next.r#type, Some(id))?;
    cats[idx] = next.clone();
    save(store, &cats)?;
    tracing::info!(id, name = %next.name, "category updated");
    Ok(next)
}

/// Removes the category; transactions that reference its name are kept.
pub fn delete(store: &Store, id: &str) -> error::Result<()> {
    let cats = load(store);
    let before = cats.len();
    let kept: Vec<Category> = cats.into_iter().filter(|c| c.id != id).collect();
    if kept.len() == before {
        return Err(not_found(id));
    }
    save(store, &kept)?;
    tracing::info!(id, "category deleted");
    Ok(())
}

pub fn reset(store: &Store) -> error::Result<Vec<Category>> {
    let cats = default_categories();
    save(store, &cats)?;
    tracing::info!("categories reset to defaults");
    Ok(cats)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryUsage {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub total: usize,
    pub income: usize,
    pub expense: usize,
    pub most_used: Vec<CategoryUsage>,
}

pub fn stats(store: &Store) -> CategoryStats {
    let cats = load(store);
    let income = cats
        .iter()
        .filter(|c| c.r#type == TransactionType::Income)
        .count();
    let most_used = category_usage(&transactions::load(store))
        .into_iter()
        .take(MOST_USED_LIMIT)
        .map(|(name, count)| CategoryUsage { name, count })
        .collect();
    CategoryStats {
        total: cats.len(),
        income,
        expense: cats.len() - income,
        most_used,
    }
}
