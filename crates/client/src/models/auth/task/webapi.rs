// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core_json::auth::{LoginRequest, RegisterRequest, TokenResponse};
use reqwest::header::CONTENT_TYPE;

use crate::{
    session::Session,
    webapi::{ClientEnvironment, RequestError, send},
};

use super::{
    super::{Credentials, Effect, Registration},
    Task,
};

const JSON_CONTENT_TYPE: &str = "application/json";

impl Task {
    pub async fn execute<E: ClientEnvironment>(self, env: &E) -> Effect {
        log::trace!("Executing task: {self:?}");
        match self {
            Self::Login { token, credentials } => {
                let result = login(env, credentials).await;
                Effect::LoginFinished { token, result }
            }
            Self::Register {
                token,
                registration,
            } => {
                let result = register(env, registration).await;
                Effect::RegisterFinished { token, result }
            }
            Self::Logout => {
                if let Some(session) = env.session_store().clear() {
                    log::debug!("Cleared session of user {username}", username = session.username);
                }
                Effect::LoggedOut
            }
        }
    }
}

/// Replace the error by the reason given by the backend
fn with_detail(err: RequestError) -> anyhow::Error {
    log::warn!("Authentication failed: {err}");
    anyhow::anyhow!(err.detail().unwrap_or("Unknown Error").to_owned())
}

async fn login<E: ClientEnvironment>(env: &E, credentials: Credentials) -> anyhow::Result<String> {
    let Credentials { username, password } = credentials;
    let request_url = env.join_api_path(&["api", "token"])?;
    let body = serde_json::to_vec(&LoginRequest {
        username: username.clone(),
        password,
    })?;
    let request = env
        .client()
        .post(request_url)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(body);
    let response = send(request).await.map_err(with_detail)?;
    let TokenResponse { access_token, .. } = serde_json::from_value(response)?;
    env.session_store().store(Session {
        username: username.clone(),
        access_token,
    });
    log::info!("Logged in as user {username}");
    Ok(username)
}

async fn register<E: ClientEnvironment>(
    env: &E,
    registration: Registration,
) -> anyhow::Result<String> {
    let Registration { credentials, email } = registration;
    let request_url = env.join_api_path(&["users", "register"])?;
    let body = serde_json::to_vec(&RegisterRequest {
        username: credentials.username.clone(),
        password: credentials.password.clone(),
        email,
    })?;
    let request = env
        .client()
        .post(request_url)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(body);
    send(request).await.map_err(with_detail)?;
    log::info!("Registered user {username}", username = credentials.username);
    login(env, credentials).await
}
