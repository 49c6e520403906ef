// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::{Context, Result};

use organizze::config::{self, Config};
use organizze::{Session, cli, commands, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    utils::init_tracing(matches.get_flag("verbose"));

    if let Some(("config", sub)) = matches.subcommand() {
        if let Some(("path", _)) = sub.subcommand() {
            println!("{}", config::config_path()?.display());
        }
        return Ok(());
    }
    if matches.subcommand().is_none() {
        cli::build_cli().print_help()?;
        println!();
        return Ok(());
    }

    let cfg_path = matches.get_one::<String>("config").map(PathBuf::from);
    let cfg = Config::load(cfg_path.as_deref()).context("Load Organizze configuration")?;
    let session = Session::from_config(&cfg)?;

    match matches.subcommand() {
        Some(("account", sub)) => commands::accounts::handle(&session, sub)?,
        Some(("category", sub)) => commands::categories::handle(&session, sub)?,
        Some(("card", sub)) => commands::credit_cards::handle(&session, sub)?,
        Some(("invoice", sub)) => commands::invoices::handle(&session, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&session, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&session, sub)?,
        Some(("user", sub)) => commands::users::handle(&session, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
