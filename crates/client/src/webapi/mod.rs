// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bytes::Bytes;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use thiserror::Error;
use url::Url;

use crate::session::{Session, SessionStore};

pub trait ClientEnvironment {
    fn client(&self) -> &Client;

    fn join_api_url(&self, query_suffix: &str) -> anyhow::Result<Url>;

    fn session_store(&self) -> &dyn SessionStore;

    /// Endpoint for resolving the file names of wiki images
    fn mediawiki_api_url(&self) -> Option<&Url>;

    /// Append percent-encoded path segments to the API URL
    fn join_api_path(&self, segments: &[&str]) -> anyhow::Result<Url> {
        let mut url = self.join_api_url("")?;
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("API URL cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        log::debug!("API URL: {url}");
        Ok(url)
    }
}

#[derive(Error, Debug)]
pub enum RequestError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("{status}")]
    Status {
        status: StatusCode,
        body: Option<serde_json::Value>,
    },

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl RequestError {
    /// The reason given by the backend for rejecting the request
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        let Self::Status {
            body: Some(body), ..
        } = self
        else {
            return None;
        };
        body.get("detail").and_then(serde_json::Value::as_str)
    }
}

pub async fn receive_response_body(response: Response) -> Result<Bytes, RequestError> {
    let status = response.status();
    let bytes = response.bytes().await?;
    if !status.is_success() {
        let body = serde_json::from_slice::<serde_json::Value>(&bytes)
            .ok()
            .filter(|json| !json.is_null());
        return Err(RequestError::Status { status, body });
    }
    Ok(bytes)
}

/// Decode a JSON response body
///
/// An empty body is decoded as `null`.
pub fn decode_response_body(bytes: &[u8]) -> Result<serde_json::Value, RequestError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_slice(bytes).map_err(Into::into)
}

/// Send a request on behalf of the user and receive the JSON response
pub async fn send_authorized(
    request: RequestBuilder,
    session: &Session,
) -> Result<serde_json::Value, RequestError> {
    let response = request.bearer_auth(&session.access_token).send().await?;
    let response_body = receive_response_body(response).await?;
    decode_response_body(&response_body)
}

pub async fn send(request: RequestBuilder) -> Result<serde_json::Value, RequestError> {
    let response = request.send().await?;
    let response_body = receive_response_body(response).await?;
    decode_response_body(&response_body)
}
