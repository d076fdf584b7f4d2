// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod transactions;
pub mod reports;
pub mod exporter;
pub mod doctor;

use anyhow::Result;

use crate::store::Store;

/// Empties the transaction history and restores the default categories.
pub fn clear_all(store: &Store) -> Result<()> {
    transactions::clear(store)?;
    categories::reset(store)?;
    Ok(())
}
