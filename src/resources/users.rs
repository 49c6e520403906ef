// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Endpoint;
use crate::error::Result;
use crate::models::User;
use crate::session::Session;

fn endpoint() -> Endpoint<User> {
    Endpoint::new("/users")
}

pub fn list(session: &Session) -> Result<Vec<User>> {
    endpoint().list(session, &[])
}

pub fn get(session: &Session, id: i64) -> Result<User> {
    endpoint().get(session, id)
}
