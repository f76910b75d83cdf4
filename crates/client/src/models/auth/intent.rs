// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::notification::Notification;

use super::{Action, Credentials, Registration, State, StateUpdated, Task};

#[derive(Debug)]
pub enum Intent {
    Login(Credentials),
    /// Register a new user and log in afterwards
    Register(Registration),
    Logout,
    DiscardNotifications,
}

impl Intent {
    pub fn apply_on(self, state: &mut State) -> StateUpdated {
        log::trace!("Applying intent {self:?} on {state:?}");
        match self {
            Self::Login(credentials) => {
                if credentials.is_blank() {
                    state.notify(Notification::error("Username and password are required."));
                    return StateUpdated::maybe_changed(None);
                }
                let Some(token) = state.user.try_start_pending_now() else {
                    log::warn!("Discarding login request while authentication is pending");
                    return StateUpdated::unchanged(None);
                };
                StateUpdated::maybe_changed(Action::dispatch_task(Task::Login {
                    token,
                    credentials,
                }))
            }
            Self::Register(registration) => {
                if registration.credentials.is_blank() || registration.email.trim().is_empty() {
                    state.notify(Notification::error(
                        "Username, password, and email are required.",
                    ));
                    return StateUpdated::maybe_changed(None);
                }
                let Some(token) = state.user.try_start_pending_now() else {
                    log::warn!("Discarding registration request while authentication is pending");
                    return StateUpdated::unchanged(None);
                };
                StateUpdated::maybe_changed(Action::dispatch_task(Task::Register {
                    token,
                    registration,
                }))
            }
            Self::Logout => {
                if state.is_pending() {
                    log::warn!("Discarding logout request while authentication is pending");
                    return StateUpdated::unchanged(None);
                }
                let Some(snapshot) = state.user.reset() else {
                    return StateUpdated::unchanged(None);
                };
                log::info!("Logging out user {username}", username = snapshot.value);
                StateUpdated::maybe_changed(Action::dispatch_task(Task::Logout))
            }
            Self::DiscardNotifications => {
                if state.discard_notifications() == 0 {
                    return StateUpdated::unchanged(None);
                }
                StateUpdated::maybe_changed(None)
            }
        }
    }
}
