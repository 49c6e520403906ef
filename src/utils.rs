// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Once;

use chrono::{Duration, NaiveDate};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{Error, Result};

/// Widest span, in days, the transactions endpoint accepts per request.
pub const DEFAULT_SPAN_DAYS: u32 = 80;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| Error::validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

/// An inclusive calendar interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Splits `[start, end]` into consecutive ranges of at most `span_days` days.
///
/// Returns nothing when `start > end`. A zero span is treated as one day.
pub fn date_ranges(start: NaiveDate, end: NaiveDate, span_days: u32) -> Vec<DateRange> {
    let span = Duration::days(i64::from(span_days.max(1)));
    let mut out = Vec::new();
    let mut cursor = start;
    while cursor <= end {
        let chunk_end = cursor
            .checked_add_signed(span - Duration::days(1))
            .map_or(end, |e| e.min(end));
        out.push(DateRange {
            start: cursor,
            end: chunk_end,
        });
        cursor = match cursor.checked_add_signed(span) {
            Some(next) => next,
            None => break,
        };
    }
    out
}

/// Parses a money amount such as `"-42.9"` into cents.
pub fn parse_cents(s: &str) -> Result<i64> {
    let d = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_| Error::validation(format!("Invalid amount '{}'", s)))?;
    let cents = d * Decimal::ONE_HUNDRED;
    if !cents.fract().is_zero() {
        return Err(Error::validation(format!(
            "Amount '{}' has more than two decimal places",
            s
        )));
    }
    cents
        .to_i64()
        .ok_or_else(|| Error::validation(format!("Amount '{}' is out of range", s)))
}

/// Formats an integer amount of cents as `"-1234.50"`.
pub fn fmt_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line.
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

static TRACING_INIT: Once = Once::new();

/// Installs the stderr subscriber. `RUST_LOG` overrides the default level.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let default = if verbose { "organizze=debug" } else { "organizze=warn" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

pub fn opt_to_string<T: ToString>(v: &Option<T>) -> String {
    v.as_ref().map(|x| x.to_string()).unwrap_or_default()
}
