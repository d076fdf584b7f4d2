// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::filters::SortOrder;
use crate::store::{Store, SETTINGS_KEY};
use crate::utils::pretty_table;

/// User preferences persisted alongside the data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_sort: SortOrder,
    pub list_limit: Option<usize>,
}

pub fn load(store: &Store) -> Settings {
    store.read(SETTINGS_KEY, Settings::default())
}

pub fn save(store: &Store, settings: &Settings) -> Result<()> {
    store
        .try_write(SETTINGS_KEY, settings)
        .context("Failed to save settings")?;
    Ok(())
}

/// Applies `key=value` to the settings; an empty value resets the key.
pub fn set(settings: &mut Settings, key: &str, value: &str) -> Result<()> {
    let value = value.trim();
    match key.trim() {
        "default_sort" => {
            settings.default_sort = if value.is_empty() {
                SortOrder::default()
            } else {
                value.parse()?
            };
        }
        "list_limit" => {
            settings.list_limit = if value.is_empty() || value == "none" {
                None
            } else {
                Some(
                    value
                        .parse::<usize>()
                        .with_context(|| format!("Invalid list_limit '{}'", value))?,
                )
            };
        }
        other => bail!("Unknown setting '{}' (use default_sort|list_limit)", other),
    }
    Ok(())
}

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let s = load(store);
            let rows = vec![
                vec!["default_sort".to_string(), s.default_sort.to_string()],
                vec![
                    "list_limit".to_string(),
                    s.list_limit.map(|n| n.to_string()).unwrap_or("none".into()),
                ],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        Some(("set", sub)) => {
            let key = sub.get_one::<String>("key").unwrap();
            let value = sub.get_one::<String>("value").unwrap();
            let mut s = load(store);
            set(&mut s, key, value)?;
            save(store, &s)?;
            tracing::info!(key = %key, value = %value, "setting updated");
            println!("Set {} = {}", key, value);
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_stored() {
        let store = Store::open_in_memory().unwrap();
        assert_eq!(load(&store), Settings::default());
        assert_eq!(load(&store).default_sort, SortOrder::DateDesc);
    }

    #[test]
    fn set_and_persist() {
        let store = Store::open_in_memory().unwrap();
        let mut s = load(&store);
        set(&mut s, "default_sort", "amount-asc").unwrap();
        set(&mut s, "list_limit", "20").unwrap();
        save(&store, &s).unwrap();
        let back = load(&store);
        assert_eq!(back.default_sort, SortOrder::AmountAsc);
        assert_eq!(back.list_limit, Some(20));

        let mut s = back;
        set(&mut s, "list_limit", "none").unwrap();
        assert_eq!(s.list_limit, None);
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        let mut s = Settings::default();
        assert!(set(&mut s, "theme", "dark").is_err());
        assert!(set(&mut s, "list_limit", "-1").is_err());
        assert!(set(&mut s, "default_sort", "sideways").is_err());
    }

    #[test]
    fn partial_settings_fill_defaults() {
        let store = Store::open_in_memory().unwrap();
        store
            .connection()
            .execute(
                "INSERT INTO kv(key, value) VALUES ('settings', '{\"list_limit\":5}')",
                [],
            )
            .unwrap();
        let s = load(&store);
        assert_eq!(s.list_limit, Some(5));
        assert_eq!(s.default_sort, SortOrder::DateDesc);
    }
}
