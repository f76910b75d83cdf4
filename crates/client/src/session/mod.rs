// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    fmt,
    sync::{PoisonError, RwLock},
};

use thiserror::Error;

/// An authenticated user
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,

    /// Sent as bearer token
    pub access_token: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.username)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("not logged in")]
    NotLoggedIn,
}

/// Holds the session of the current user
///
/// Shared between the message loop and the tasks that need to
/// authenticate their requests.
pub trait SessionStore: fmt::Debug + Send + Sync {
    fn load(&self) -> Option<Session>;

    fn store(&self, session: Session);

    /// Returns the previous session, if any
    fn clear(&self) -> Option<Session>;

    fn require(&self) -> Result<Session, SessionError> {
        self.load().ok_or(SessionError::NotLoggedIn)
    }
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            session: RwLock::new(None),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store(&self, session: Session) {
        log::debug!("Storing session of user {username}", username = session.username);
        *self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    fn clear(&self) -> Option<Session> {
        self.session
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
