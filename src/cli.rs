// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{arg, value_parser, Arg, ArgAction, Command};

fn type_arg(required: bool) -> Arg {
    Arg::new("type")
        .long("type")
        .value_name("TYPE")
        .help("income | expense")
        .required(required)
}

fn filter_args() -> Vec<Arg> {
    vec![
        arg!(--from <DATE> "Only transactions on or after this date (YYYY-MM-DD)"),
        arg!(--to <DATE> "Only transactions on or before this date (YYYY-MM-DD)"),
        Arg::new("type")
            .long("type")
            .value_name("TYPE")
            .help("all | income | expense"),
        arg!(--category <NAME> "Exact category name, or 'all'"),
    ]
}

fn json_flag() -> Arg {
    arg!(--json "Print JSON").action(ArgAction::SetTrue)
}

fn transaction_fields() -> Vec<Arg> {
    vec![
        type_arg(true),
        arg!(--amount <AMOUNT> "Positive amount").required(true),
        arg!(--date <DATE> "YYYY-MM-DD").required(true),
        arg!(--category <NAME>).required(true),
        arg!(--description <TEXT>),
    ]
}

pub fn build_cli() -> Command {
    Command::new("pocketbook")
        .about("Personal income/expense tracker")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("tx")
                .about("Record and browse transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .args(transaction_fields()),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Replace every field of a transaction")
                        .arg(arg!(--id <ID>).required(true))
                        .args(transaction_fields()),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(arg!(--id <ID>).required(true)),
                )
                .subcommand(Command::new("clear").about("Delete every transaction"))
                .subcommand(
                    Command::new("list")
                        .about("List transactions")
                        .args(filter_args())
                        .arg(arg!(--sort <ORDER> "date-desc | date-asc | amount-desc | amount-asc | category-asc | category-desc"))
                        .arg(arg!(--offset <N>).value_parser(value_parser!(usize)))
                        .arg(arg!(--limit <N>).value_parser(value_parser!(usize)))
                        .arg(json_flag())
                        .arg(arg!(--jsonl "Print one JSON object per line").action(ArgAction::SetTrue)),
                )
                .subcommand(Command::new("stats").about("Totals over all transactions").arg(json_flag())),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("list")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("TYPE")
                                .help("all | income | expense"),
                        )
                        .arg(arg!(--search <TEXT> "Case-insensitive name search"))
                        .arg(json_flag()),
                )
                .subcommand(
                    Command::new("add")
                        .arg(arg!(--name <NAME>).required(true))
                        .arg(type_arg(true))
                        .arg(arg!(--color <HEX> "#RRGGBB; random preset when omitted")),
                )
                .subcommand(
                    Command::new("edit")
                        .arg(arg!(--id <ID>).required(true))
                        .arg(arg!(--name <NAME>))
                        .arg(type_arg(false))
                        .arg(arg!(--color <HEX>)),
                )
                .subcommand(Command::new("rm").arg(arg!(--id <ID>).required(true)))
                .subcommand(Command::new("reset").about("Restore the default categories"))
                .subcommand(Command::new("stats").arg(json_flag())),
        )
        .subcommand(
            Command::new("report")
                .about("Dashboard figures")
                .subcommand(
                    Command::new("summary")
                        .about("Income, expense and balance")
                        .args(filter_args())
                        .arg(json_flag()),
                )
                .subcommand(
                    Command::new("by-category")
                        .about("Share of each category within income or expense")
                        .arg(
                            Arg::new("kind")
                                .long("type")
                                .value_name("TYPE")
                                .help("income | expense")
                                .required(true),
                        )
                        .arg(arg!(--from <DATE>))
                        .arg(arg!(--to <DATE>))
                        .arg(arg!(--category <NAME> "Exact category name, or 'all'"))
                        .arg(json_flag()),
                ),
        )
        .subcommand(
            Command::new("export").subcommand(
                Command::new("transactions")
                    .arg(arg!(--format <FMT> "csv | json").required(true))
                    .arg(arg!(--out <PATH>).required(true)),
            ),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set")
                        .arg(arg!(<key> "default_sort | list_limit"))
                        .arg(arg!(<value>)),
                ),
        )
        .subcommand(Command::new("clear-all").about("Delete transactions and restore default categories"))
        .subcommand(Command::new("doctor").about("Check stored data for inconsistencies"))
}
