// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

use super::Endpoint;
use crate::error::Result;
use crate::models::Category;
use crate::session::Session;

fn endpoint() -> Endpoint<Category> {
    Endpoint::new("/categories")
}

/// `parent_id` is always sent; `null` creates a root category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCategory {
    pub name: String,
    pub parent_id: Option<i64>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_id: None,
        }
    }

    pub fn parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `Some(None)` detaches the category from its parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<i64>>,
}

pub fn list(session: &Session) -> Result<Vec<Category>> {
    endpoint().list(session, &[])
}

pub fn get(session: &Session, id: i64) -> Result<Category> {
    endpoint().get(session, id)
}

pub fn create(session: &Session, category: &NewCategory) -> Result<()> {
    endpoint().create(session, category)
}

pub fn update(session: &Session, id: i64, changes: &CategoryChanges) -> Result<()> {
    endpoint().update(session, id, changes)
}

/// Deletes a category, moving its transactions to `replacement_id` when given.
pub fn delete(session: &Session, id: i64, replacement_id: Option<i64>) -> Result<()> {
    let query: Vec<(&str, String)> = replacement_id
        .map(|r| ("replacement_id", r.to_string()))
        .into_iter()
        .collect();
    endpoint().delete(session, id, &query)
}
