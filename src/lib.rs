// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Typed client for the Organizze personal-finance REST API.
//!
//! Build a [`Session`] and pass it to the functions in [`resources`]:
//!
//! ```no_run
//! use organizze::{Session, resources::accounts};
//!
//! let session = Session::new("ana@example.com", "api-token", "Ana")?;
//! for account in accounts::list(&session)? {
//!     println!("{} {}", account.id, account.name);
//! }
//! # Ok::<(), organizze::Error>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod filters;
pub mod models;
pub mod resources;
pub mod session;
pub mod utils;

pub use error::{Error, Result};
pub use session::Session;
