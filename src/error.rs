// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

use crate::models::TransactionType;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write '{key}': {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: rusqlite::Error,
    },
}

/// Failures reported by the transaction and category operations.
#[derive(Debug, Error)]
pub enum PocketbookError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },
    #[error("Category '{name}' ({kind}) already exists")]
    DuplicateCategory { name: String, kind: TransactionType },
    #[error("Amount must be greater than zero and at most {max}, got {0}", max = crate::models::MAX_AMOUNT)]
    InvalidAmount(rust_decimal::Decimal),
    #[error("Invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),
    #[error("Category name must not be empty")]
    EmptyCategory,
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, PocketbookError>;
