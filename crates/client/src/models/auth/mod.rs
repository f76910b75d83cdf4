// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Login, registration, and logout of the current user

use std::fmt;

use crate::{
    notification::{Notification, Notifications},
    util::remote::RemoteData,
};

pub mod intent;
pub use self::intent::Intent;

pub mod effect;
pub use self::effect::Effect;

pub mod task;
pub use self::task::Task;

pub type Action = crate::action::Action<Effect, Task>;
pub type StateUpdated = crate::state::StateUpdated<Effect, Task>;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.username.trim().is_empty() || self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub credentials: Credentials,
    pub email: String,
}

#[derive(Debug, Default)]
pub struct State {
    /// Name of the authenticated user
    pub(super) user: RemoteData<String>,
    pub(super) notifications: Notifications,
}

impl State {
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.user.last_value().map(String::as_str)
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.last_value().is_some()
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.user.is_pending()
    }

    #[must_use]
    pub const fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn discard_notifications(&mut self) -> usize {
        self.notifications.discard_all()
    }

    pub(super) fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
