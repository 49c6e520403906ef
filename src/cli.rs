// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn id_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .required(true)
        .value_parser(value_parser!(i64))
}

fn opt_i64(name: &'static str) -> Arg {
    Arg::new(name).long(name).value_parser(value_parser!(i64))
}

fn opt_u32(name: &'static str) -> Arg {
    Arg::new(name).long(name).value_parser(value_parser!(u32))
}

fn opt_str(name: &'static str) -> Arg {
    Arg::new(name).long(name)
}

fn flag(name: &'static str) -> Arg {
    Arg::new(name).long(name).action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    Command::new("organizze")
        .about("Organizze: command-line client for the Organizze personal-finance API")
        .version(clap::crate_version!())
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to a JSON config file"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log HTTP requests to stderr"),
        )
        .subcommand(
            Command::new("account")
                .about("Bank and savings accounts")
                .subcommand(json_args(Command::new("list")))
                .subcommand(json_args(Command::new("show").arg(id_arg("id"))))
                .subcommand(
                    Command::new("add")
                        .arg(opt_str("name").required(true))
                        .arg(
                            opt_str("type")
                                .default_value("checking")
                                .value_parser(["checking", "savings", "other"]),
                        )
                        .arg(opt_str("description"))
                        .arg(flag("default")),
                )
                .subcommand(
                    Command::new("update")
                        .arg(id_arg("id"))
                        .arg(opt_str("name"))
                        .arg(opt_str("description")),
                )
                .subcommand(Command::new("rm").arg(id_arg("id"))),
        )
        .subcommand(
            Command::new("category")
                .about("Transaction categories")
                .subcommand(json_args(Command::new("list")))
                .subcommand(json_args(Command::new("show").arg(id_arg("id"))))
                .subcommand(
                    json_args(Command::new("find"))
                        .arg(opt_str("name").required(true))
                        .arg(flag("regex")),
                )
                .subcommand(
                    Command::new("add")
                        .arg(opt_str("name").required(true))
                        .arg(opt_i64("parent")),
                )
                .subcommand(
                    Command::new("update")
                        .arg(id_arg("id"))
                        .arg(opt_str("name"))
                        .arg(opt_i64("parent").conflicts_with("root"))
                        .arg(flag("root").help("Detach from the parent category")),
                )
                .subcommand(
                    Command::new("rm")
                        .arg(id_arg("id"))
                        .arg(opt_i64("replacement").help("Category receiving the transactions")),
                ),
        )
        .subcommand(
            Command::new("card")
                .about("Credit cards")
                .subcommand(json_args(Command::new("list")))
                .subcommand(json_args(Command::new("show").arg(id_arg("id"))))
                .subcommand(
                    Command::new("add")
                        .arg(opt_str("name").required(true))
                        .arg(opt_str("network").required(true))
                        .arg(opt_u32("due-day").required(true))
                        .arg(opt_u32("closing-day").required(true))
                        .arg(opt_str("limit").required(true).help("Limit, e.g. 1500.00"))
                        .arg(opt_str("description")),
                )
                .subcommand(
                    Command::new("update")
                        .arg(id_arg("id"))
                        .arg(opt_str("name"))
                        .arg(opt_str("network"))
                        .arg(opt_u32("due-day"))
                        .arg(opt_u32("closing-day"))
                        .arg(opt_str("limit"))
                        .arg(opt_str("invoices-since").help("YYYY-MM-DD")),
                )
                .subcommand(Command::new("archive").arg(id_arg("id")))
                .subcommand(Command::new("rm").arg(id_arg("id"))),
        )
        .subcommand(
            Command::new("invoice")
                .about("Credit card invoices")
                .subcommand(json_args(Command::new("list").arg(id_arg("card"))))
                .subcommand(json_args(
                    Command::new("show").arg(id_arg("card")).arg(id_arg("id")),
                ))
                .subcommand(
                    Command::new("payments")
                        .arg(id_arg("card"))
                        .arg(id_arg("id")),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    json_args(Command::new("list"))
                        .arg(opt_str("from").required(true).help("YYYY-MM-DD"))
                        .arg(opt_str("to").required(true).help("YYYY-MM-DD"))
                        .arg(opt_i64("account"))
                        .arg(opt_str("title"))
                        .arg(flag("regex")),
                )
                .subcommand(json_args(Command::new("show").arg(id_arg("id"))))
                .subcommand(
                    Command::new("add")
                        .arg(opt_str("description").required(true))
                        .arg(opt_str("date").required(true).help("YYYY-MM-DD"))
                        .arg(
                            opt_str("amount")
                                .required(true)
                                .allow_hyphen_values(true)
                                .help("Signed amount, e.g. -42.90"),
                        )
                        .arg(opt_i64("account"))
                        .arg(opt_i64("category"))
                        .arg(opt_i64("card"))
                        .arg(opt_str("notes"))
                        .arg(opt_str("tag").action(ArgAction::Append))
                        .arg(flag("paid"))
                        .arg(opt_str("fixed").help("Periodicity of a fixed transaction"))
                        .arg(
                            opt_u32("installments")
                                .conflicts_with("fixed")
                                .requires("period"),
                        )
                        .arg(opt_str("period").requires("installments")),
                )
                .subcommand(
                    Command::new("update")
                        .arg(id_arg("id"))
                        .arg(opt_str("description"))
                        .arg(opt_str("date"))
                        .arg(opt_str("amount").allow_hyphen_values(true))
                        .arg(opt_i64("account"))
                        .arg(opt_i64("category"))
                        .arg(opt_str("notes"))
                        .arg(flag("paid").conflicts_with("unpaid"))
                        .arg(flag("unpaid"))
                        .arg(flag("future"))
                        .arg(flag("all")),
                )
                .subcommand(
                    Command::new("rm")
                        .arg(id_arg("id"))
                        .arg(flag("future"))
                        .arg(flag("all")),
                ),
        )
        .subcommand(
            Command::new("budget").about("Budgets and goals").subcommand(
                json_args(Command::new("list"))
                    .arg(
                        Arg::new("year")
                            .long("year")
                            .value_parser(value_parser!(i32)),
                    )
                    .arg(opt_u32("month").requires("year")),
            ),
        )
        .subcommand(
            Command::new("user")
                .about("Users of the account")
                .subcommand(json_args(Command::new("list")))
                .subcommand(json_args(Command::new("show").arg(id_arg("id")))),
        )
        .subcommand(
            Command::new("config")
                .about("Configuration")
                .subcommand(Command::new("path").about("Print the default config file path")),
        )
}
