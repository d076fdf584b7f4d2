// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! String-keyed JSON store on top of the `kv` table.
//!
//! Reads never fail: a missing key, a SQL error or a value that no longer
//! decodes all yield the caller's default. Writes report success as a flag;
//! [`Store::try_write`] keeps the underlying error for the CRUD layer.

use rusqlite::{params, Connection, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::StoreError;

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const CATEGORIES_KEY: &str = "categories";
pub const SETTINGS_KEY: &str = "settings";

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn new(conn: Connection) -> Self {
        Store { conn }
    }

    pub fn open_in_memory() -> anyhow::Result<Self> {
        Ok(Store::new(crate::db::open_in_memory()?))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn read_raw(&self, key: &str) -> rusqlite::Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()
    }

    pub fn contains(&self, key: &str) -> bool {
        matches!(self.read_raw(key), Ok(Some(_)))
    }

    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.read_raw(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                tracing::warn!(key, error = %e, "store read failed, using default");
                return default;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(key, error = %e, "stored value does not decode, using default");
                default
            }
        }
    }

    pub fn try_write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|e| StoreError::Encode {
            key: key.to_string(),
            source: e,
        })?;
        self.conn
            .execute(
                "INSERT INTO kv(key, value, updated_at) VALUES (?1, ?2, datetime('now'))
                 ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=excluded.updated_at",
                params![key, json],
            )
            .map_err(|e| StoreError::WriteFailed {
                key: key.to_string(),
                source: e,
            })?;
        tracing::debug!(key, bytes = json.len(), "store write");
        Ok(())
    }

    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.try_write(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key, error = %e, "store write failed");
                false
            }
        }
    }

    pub fn remove(&self, key: &str) -> bool {
        match self.conn.execute("DELETE FROM kv WHERE key=?1", params![key]) {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(key, error = %e, "store delete failed");
                false
            }
        }
    }
}
