// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{json_flags, required};
use crate::models::User;
use crate::resources::users;
use crate::session::Session;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => print_users(sub, &users::list(session)?)?,
        Some(("show", sub)) => {
            let id = *required::<i64>(sub, "id")?;
            print_users(sub, &[users::get(session, id)?])?;
        }
        _ => {}
    }
    Ok(())
}

fn print_users(sub: &clap::ArgMatches, data: &[User]) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|u| vec![u.id.to_string(), u.name.clone(), u.email.clone(), u.role.clone()])
        .collect();
    println!("{}", pretty_table(&["ID", "Name", "Email", "Role"], rows));
    Ok(())
}
