// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Bad caller input, rejected before any request is sent.
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("HTTP 401 unauthorized: check the Organizze email and API token")]
    Unauthorized,
    #[error("HTTP 404 not found: {path}")]
    NotFound { path: String },
    #[error("request to {path} failed with HTTP {status}: {body}")]
    Request {
        path: String,
        status: u16,
        body: String,
    },
    /// No response was obtained (DNS, timeout, connection reset).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// HTTP status carried by the error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Unauthorized => Some(401),
            Error::NotFound { .. } => Some(404),
            Error::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_reported_for_http_failures_only() {
        assert_eq!(Error::Unauthorized.status(), Some(401));
        assert_eq!(
            Error::NotFound {
                path: "/accounts/9".into()
            }
            .status(),
            Some(404)
        );
        assert_eq!(
            Error::Request {
                path: "/accounts".into(),
                status: 500,
                body: String::new()
            }
            .status(),
            Some(500)
        );
        assert_eq!(Error::validation("bad").status(), None);
    }
}
