// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Transactions: chunked listing, the three creation flavours, and
//! recurrence-aware update/delete.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::Endpoint;
use crate::error::{Error, Result};
use crate::models::{Tag, Transaction};
use crate::session::Session;
use crate::utils::{DEFAULT_SPAN_DAYS, date_ranges};

pub const MIN_INSTALLMENTS: u32 = 2;
pub const MAX_INSTALLMENTS: u32 = 480;

fn endpoint() -> Endpoint<Transaction> {
    Endpoint::new("/transactions")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Periodicity {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Bimonthly,
    Trimonthly,
    Semesterly,
    Yearly,
}

impl Periodicity {
    pub const ALL: [Periodicity; 8] = [
        Periodicity::Daily,
        Periodicity::Weekly,
        Periodicity::Biweekly,
        Periodicity::Monthly,
        Periodicity::Bimonthly,
        Periodicity::Trimonthly,
        Periodicity::Semesterly,
        Periodicity::Yearly,
    ];

    /// Token the API expects in `periodicity`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Daily => "daily",
            Periodicity::Weekly => "weekly",
            Periodicity::Biweekly => "biweekly",
            Periodicity::Monthly => "monthly",
            Periodicity::Bimonthly => "bimonthly",
            Periodicity::Trimonthly => "trimonthly",
            Periodicity::Semesterly => "semesterly",
            Periodicity::Yearly => "yearly",
        }
    }

    pub fn tokens() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|p| p.as_str())
    }
}

impl FromStr for Periodicity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Periodicity::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| {
                Error::validation(format!(
                    "unknown periodicity '{}', expected one of: {}",
                    s,
                    Periodicity::tokens().collect::<Vec<_>>().join(", ")
                ))
            })
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Periodicity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Which occurrences of a recurring transaction an update or delete touches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecurrenceScope {
    #[default]
    Single,
    Future,
    All,
}

impl RecurrenceScope {
    /// `all` wins when both flags are set.
    pub fn from_flags(future: bool, all: bool) -> Self {
        if all {
            RecurrenceScope::All
        } else if future {
            RecurrenceScope::Future
        } else {
            RecurrenceScope::Single
        }
    }

    fn flag(&self) -> Option<&'static str> {
        match self {
            RecurrenceScope::Single => None,
            RecurrenceScope::Future => Some("update_future"),
            RecurrenceScope::All => Some("update_all"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    pub description: String,
    pub date: NaiveDate,
    pub amount_cents: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl NewTransaction {
    pub fn new(description: impl Into<String>, date: NaiveDate, amount_cents: i64) -> Self {
        Self {
            description: description.into(),
            date,
            amount_cents,
            paid: None,
            account_id: None,
            category_id: None,
            credit_card_id: None,
            notes: None,
            tags: Vec::new(),
        }
    }

    pub fn account(mut self, id: i64) -> Self {
        self.account_id = Some(id);
        self
    }

    pub fn category(mut self, id: i64) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn credit_card(mut self, id: i64) -> Self {
        self.credit_card_id = Some(id);
        self
    }

    pub fn paid(mut self, paid: bool) -> Self {
        self.paid = Some(paid);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn tag(mut self, name: impl Into<String>) -> Self {
        self.tags.push(Tag { name: name.into() });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

#[derive(Serialize)]
struct Recurrence {
    periodicity: Periodicity,
}

#[derive(Serialize)]
struct Installments {
    periodicity: Periodicity,
    total: u32,
}

#[derive(Serialize)]
struct CreateBody<'a> {
    #[serde(flatten)]
    tx: &'a NewTransaction,
    #[serde(skip_serializing_if = "Option::is_none")]
    recurrence_attributes: Option<Recurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    installments_attributes: Option<Installments>,
}

#[derive(Serialize)]
struct UpdateBody<'a> {
    #[serde(flatten)]
    changes: &'a TransactionChanges,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    update_future: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    update_all: bool,
}

/// Lists transactions dated within `[start, end]`, one request per
/// 80-day window.
pub fn list(session: &Session, start: NaiveDate, end: NaiveDate) -> Result<Vec<Transaction>> {
    list_with_span(session, start, end, DEFAULT_SPAN_DAYS)
}

/// Same as [`list`] with a caller-chosen window width. Windows are fetched
/// in order, one after the other; the first failure aborts the listing.
pub fn list_with_span(
    session: &Session,
    start: NaiveDate,
    end: NaiveDate,
    span_days: u32,
) -> Result<Vec<Transaction>> {
    let ep = endpoint();
    let mut out = Vec::new();
    for range in date_ranges(start, end, span_days) {
        let query = [
            ("start_date", range.start.to_string()),
            ("end_date", range.end.to_string()),
        ];
        out.extend(ep.list(session, &query)?);
    }
    Ok(out)
}

pub fn get(session: &Session, id: i64) -> Result<Transaction> {
    endpoint().get(session, id)
}

pub fn create(session: &Session, tx: &NewTransaction) -> Result<()> {
    endpoint().create(
        session,
        &CreateBody {
            tx,
            recurrence_attributes: None,
            installments_attributes: None,
        },
    )
}

/// Creates a fixed transaction repeating every `periodicity`.
pub fn create_fixed(session: &Session, tx: &NewTransaction, periodicity: Periodicity) -> Result<()> {
    endpoint().create(
        session,
        &CreateBody {
            tx,
            recurrence_attributes: Some(Recurrence { periodicity }),
            installments_attributes: None,
        },
    )
}

/// Creates a transaction split into `total` installments (2 to 480).
pub fn create_installments(
    session: &Session,
    tx: &NewTransaction,
    periodicity: Periodicity,
    total: u32,
) -> Result<()> {
    if !(MIN_INSTALLMENTS..=MAX_INSTALLMENTS).contains(&total) {
        return Err(Error::validation(format!(
            "installment count {} out of range ({}-{})",
            total, MIN_INSTALLMENTS, MAX_INSTALLMENTS
        )));
    }
    endpoint().create(
        session,
        &CreateBody {
            tx,
            recurrence_attributes: None,
            installments_attributes: Some(Installments { periodicity, total }),
        },
    )
}

pub fn update(
    session: &Session,
    id: i64,
    changes: &TransactionChanges,
    scope: RecurrenceScope,
) -> Result<()> {
    let body = UpdateBody {
        changes,
        update_future: scope == RecurrenceScope::Future,
        update_all: scope == RecurrenceScope::All,
    };
    endpoint().update(session, id, &body)
}

pub fn delete(session: &Session, id: i64, scope: RecurrenceScope) -> Result<()> {
    let query: Vec<(&str, String)> = scope
        .flag()
        .map(|flag| (flag, "true".to_string()))
        .into_iter()
        .collect();
    endpoint().delete(session, id, &query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periodicity_table_round_trips_every_token() {
        for token in Periodicity::tokens() {
            assert_eq!(token.parse::<Periodicity>().unwrap().as_str(), token);
        }
        assert_eq!(" Yearly ".parse::<Periodicity>().unwrap(), Periodicity::Yearly);
        assert!(matches!("quarterly".parse::<Periodicity>(), Err(Error::Validation(_))));
    }

    #[test]
    fn scope_precedence() {
        assert_eq!(RecurrenceScope::from_flags(false, false), RecurrenceScope::Single);
        assert_eq!(RecurrenceScope::from_flags(true, false), RecurrenceScope::Future);
        assert_eq!(RecurrenceScope::from_flags(false, true), RecurrenceScope::All);
        assert_eq!(RecurrenceScope::from_flags(true, true), RecurrenceScope::All);
    }
}
