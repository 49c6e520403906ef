// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};

pub type Timestamp = DateTime<FixedOffset>;

/// A typed mirror of one remote resource.
pub trait Record: Serialize + DeserializeOwned {
    /// Resource name used in diagnostics.
    const KIND: &'static str;
}

pub fn parse_one<T: Record>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Maps a JSON array into records, dropping elements that do not fit `T`.
///
/// Every dropped element is reported through `tracing::warn!`; the order of
/// the surviving elements is preserved.
pub fn parse_many<T: Record>(value: Value) -> Result<Vec<T>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(Error::Decode(serde::de::Error::custom(format!(
                "expected a JSON array of {}, got {}",
                T::KIND,
                json_kind(&other)
            ))));
        }
    };
    let mut out = Vec::with_capacity(items.len());
    for (pos, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(rec) => out.push(rec),
            Err(err) => warn!(kind = T::KIND, pos, %err, "skipping malformed record"),
        }
    }
    Ok(out)
}

pub fn to_value<T: Record>(record: &T) -> Result<Value> {
    Ok(serde_json::to_value(record)?)
}

fn null_as_empty<'de, D, T>(de: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(de)?.unwrap_or_default())
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
    #[serde(other)]
    Other,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "checking",
            AccountType::Savings => "savings",
            AccountType::Other => "other",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccountType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "checking" => Ok(AccountType::Checking),
            "savings" => Ok(AccountType::Savings),
            "other" => Ok(AccountType::Other),
            _ => Err(Error::validation(format!(
                "unknown account type '{}', expected checking, savings or other",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// `None` when the API sends `"type": null`.
    pub r#type: Option<AccountType>,
    pub default: bool,
    pub archived: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for Account {
    const KIND: &'static str = "account";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub parent_id: Option<i64>,
}

impl Record for Category {
    const KIND: &'static str = "category";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub card_network: String,
    pub closing_day: u32,
    pub due_day: u32,
    pub limit_cents: i64,
    pub r#type: String,
    pub archived: bool,
    pub default: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for CreditCard {
    const KIND: &'static str = "credit card";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub date: NaiveDate,
    pub starting_date: NaiveDate,
    pub closing_date: NaiveDate,
    pub amount_cents: i64,
    pub payment_amount_cents: i64,
    pub balance_cents: i64,
    pub previous_balance_cents: i64,
    pub credit_card_id: i64,
}

impl Record for Invoice {
    const KIND: &'static str = "invoice";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    pub date: NaiveDate,
    pub paid: bool,
    pub amount_cents: i64,
    pub total_installments: u32,
    pub installment: u32,
    pub recurring: bool,
    pub account_id: Option<i64>,
    pub category_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<Tag>,
    pub notes: Option<String>,
    #[serde(default)]
    pub attachments_count: u32,
    pub credit_card_id: Option<i64>,
    pub credit_card_invoice_id: Option<i64>,
    pub paid_credit_card_id: Option<i64>,
    pub paid_credit_card_invoice_id: Option<i64>,
    // The API spells these with a single "p".
    #[serde(rename = "oposite_transaction_id")]
    pub opposite_transaction_id: Option<i64>,
    #[serde(rename = "oposite_account_id")]
    pub opposite_account_id: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for Transaction {
    const KIND: &'static str = "transaction";
}

/// A spending or income goal for one category and month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub amount_in_cents: i64,
    pub category_id: i64,
    pub date: NaiveDate,
    pub activity_type: i64,
    pub total: i64,
    pub predicted_total: i64,
    pub percentage: String, // decimal, e.g. "42.5"
}

impl Budget {
    pub fn percentage_value(&self) -> Result<Decimal> {
        self.percentage.trim().parse::<Decimal>().map_err(|_| {
            Error::Decode(serde::de::Error::custom(format!(
                "invalid budget percentage '{}'",
                self.percentage
            )))
        })
    }
}

impl Record for Budget {
    const KIND: &'static str = "budget";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Record for User {
    const KIND: &'static str = "user";
}
