// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Authenticated access to the Organizze REST API.
//!
//! A [`Session`] owns the credentials and turns verb calls into [`ApiRequest`]s
//! handed to a [`Transport`]. The default transport is a blocking `reqwest`
//! client; tests plug in their own.

use std::fmt;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};

pub const API_URL: &str = "https://api.organizze.com.br/rest/v2";
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const DEFAULT_AUTHOR: &str = "organizze-rs";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("static email regex")
});

/// One outgoing call, fully resolved.
#[derive(Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub user_agent: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("query", &self.query)
            .field("body", &self.body)
            .field("user_agent", &self.user_agent)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a request and reports whatever status came back.
///
/// Implementations return `Err` only when no response was obtained; HTTP
/// status handling belongs to [`Session`].
pub trait Transport: Send + Sync {
    fn execute(&self, request: &ApiRequest) -> Result<RawResponse>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &ApiRequest) -> Result<RawResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .basic_auth(&request.username, Some(&request.password))
            .header(USER_AGENT, request.user_agent.as_str())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }
        let resp = builder.send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(RawResponse { status, body })
    }
}

pub struct Session {
    email: String,
    token: String,
    user_agent: String,
    base_url: String,
    transport: Box<dyn Transport>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("email", &self.email)
            .field("user_agent", &self.user_agent)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Opens a session over the default HTTP transport.
    ///
    /// `author` names the caller in the `User-Agent`, which the API requires
    /// in the form `"<author> (<email>)"`.
    pub fn new(email: &str, token: &str, author: &str) -> Result<Self> {
        Self::with_transport(email, token, author, HttpTransport::new(DEFAULT_TIMEOUT)?)
    }

    pub fn with_transport(
        email: &str,
        token: &str,
        author: &str,
        transport: impl Transport + 'static,
    ) -> Result<Self> {
        validate_email(email)?;
        if token.trim().is_empty() {
            return Err(Error::validation("API token must not be empty"));
        }
        let author = if author.trim().is_empty() {
            DEFAULT_AUTHOR
        } else {
            author.trim()
        };
        Ok(Self {
            email: email.to_string(),
            token: token.to_string(),
            user_agent: format!("{} ({})", author, email),
            base_url: API_URL.to_string(),
            transport: Box::new(transport),
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        let transport = HttpTransport::new(Duration::from_secs(cfg.timeout_secs))?;
        Ok(Self::with_transport(&cfg.email, &cfg.token, &cfg.author, transport)?
            .with_base_url(&cfg.base_url))
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let resp = self.send(Method::GET, path, query, None)?;
        Ok(serde_json::from_str(&resp.body)?)
    }

    pub fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.send(Method::POST, path, &[], Some(serde_json::to_value(body)?))?;
        Ok(())
    }

    pub fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.send(Method::PUT, path, &[], Some(serde_json::to_value(body)?))?;
        Ok(())
    }

    pub fn delete(&self, path: &str, query: &[(&str, String)]) -> Result<()> {
        self.send(Method::DELETE, path, query, None)?;
        Ok(())
    }

    fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<RawResponse> {
        let request = ApiRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            body,
            user_agent: self.user_agent.clone(),
            username: self.email.clone(),
            password: self.token.clone(),
        };
        debug!(method = %request.method, path, query = ?request.query, "organizze request");
        let resp = self.transport.execute(&request)?;
        check_status(path, resp)
    }
}

fn check_status(path: &str, resp: RawResponse) -> Result<RawResponse> {
    if resp.is_success() {
        return Ok(resp);
    }
    debug!(path, status = resp.status, "organizze request failed");
    match resp.status {
        401 => Err(Error::Unauthorized),
        404 => Err(Error::NotFound {
            path: path.to_string(),
        }),
        status => Err(Error::Request {
            path: path.to_string(),
            status,
            body: resp.body,
        }),
    }
}

pub fn validate_email(email: &str) -> Result<()> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(Error::validation(format!(
            "'{}' is not a well-formed email address",
            email
        )))
    }
}
