// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use pocketbook::{cli, commands, config, db, logging, store::Store};

fn main() -> Result<()> {
    logging::init_tracing();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = Store::new(db::open_or_init()?);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&store, sub)?,
        Some(("category", sub)) => commands::categories::handle(&store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("config", sub)) => config::handle(&store, sub)?,
        Some(("clear-all", _)) => {
            commands::clear_all(&store)?;
            println!("Transactions cleared, categories restored to defaults");
        }
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
