// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! One module per remote resource, all built on [`Endpoint`].

pub mod accounts;
pub mod budgets;
pub mod categories;
pub mod credit_cards;
pub mod invoices;
pub mod transactions;
pub mod users;

use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::models::{Record, parse_many, parse_one};
use crate::session::Session;

/// A collection path plus the record type its members decode into.
pub(crate) struct Endpoint<T> {
    base: String,
    _record: PhantomData<T>,
}

impl<T: Record> Endpoint<T> {
    pub(crate) fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            _record: PhantomData,
        }
    }

    pub(crate) fn item(&self, id: i64) -> String {
        format!("{}/{}", self.base, id)
    }

    /// The collection body, undecoded.
    pub(crate) fn fetch(&self, session: &Session, query: &[(&str, String)]) -> Result<Value> {
        session.get(&self.base, query)
    }

    pub(crate) fn list(&self, session: &Session, query: &[(&str, String)]) -> Result<Vec<T>> {
        parse_many(self.fetch(session, query)?)
    }

    pub(crate) fn get(&self, session: &Session, id: i64) -> Result<T> {
        parse_one(session.get(&self.item(id), &[])?)
    }

    pub(crate) fn create<B: Serialize + ?Sized>(&self, session: &Session, body: &B) -> Result<()> {
        session.post(&self.base, body)
    }

    pub(crate) fn update<B: Serialize + ?Sized>(
        &self,
        session: &Session,
        id: i64,
        body: &B,
    ) -> Result<()> {
        session.put(&self.item(id), body)
    }

    pub(crate) fn delete(&self, session: &Session, id: i64, query: &[(&str, String)]) -> Result<()> {
        session.delete(&self.item(id), query)
    }
}
