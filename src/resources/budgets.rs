// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Local};

use super::Endpoint;
use crate::error::{Error, Result};
use crate::models::Budget;
use crate::session::Session;

pub const MIN_YEAR: i32 = 1900;

/// Budgets of `year`, or of one month when `month` is within 1-12.
///
/// Any other month value scopes the request to the whole year.
pub fn list(session: &Session, year: i32, month: Option<u32>) -> Result<Vec<Budget>> {
    let current = Local::now().year();
    if !(MIN_YEAR..=current).contains(&year) {
        return Err(Error::validation(format!(
            "year {} is out of range ({}-{})",
            year, MIN_YEAR, current
        )));
    }
    let base = match month.filter(|m| (1..=12).contains(m)) {
        Some(m) => format!("/budgets/{}/{}", year, m),
        None => format!("/budgets/{}", year),
    };
    Endpoint::<Budget>::new(base).list(session, &[])
}

/// Budgets of the current month, as chosen by the API.
pub fn list_current(session: &Session) -> Result<Vec<Budget>> {
    Endpoint::<Budget>::new("/budgets").list(session, &[])
}
