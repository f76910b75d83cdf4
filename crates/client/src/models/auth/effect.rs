// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{notification::Notification, util::roundtrip::PendingToken};

use super::{State, StateUpdated};

#[derive(Debug)]
pub enum Effect {
    LoginFinished {
        token: PendingToken,
        /// The name of the authenticated user
        result: anyhow::Result<String>,
    },
    RegisterFinished {
        token: PendingToken,
        result: anyhow::Result<String>,
    },
    LoggedOut,
}

impl Effect {
    pub fn apply_on(self, state: &mut State) -> StateUpdated {
        log::trace!("Applying effect {self:?} on {state:?}");
        match self {
            Self::LoginFinished { token, result } => {
                finish_authentication(state, token, result, "Failed to login")
            }
            Self::RegisterFinished { token, result } => {
                finish_authentication(state, token, result, "Failed to register")
            }
            Self::LoggedOut => {
                debug_assert!(!state.is_logged_in());
                StateUpdated::unchanged(None)
            }
        }
    }
}

fn finish_authentication(
    state: &mut State,
    token: PendingToken,
    result: anyhow::Result<String>,
    failure_message: &str,
) -> StateUpdated {
    match result {
        Ok(username) => {
            if let Err(username) = state.user.finish_pending_with_value_now(token, username) {
                log::warn!("Discarding superseded authentication of user {username}");
                return StateUpdated::unchanged(None);
            }
            state.notify(Notification::success("Logged in."));
        }
        Err(err) => {
            if !state.user.finish_pending(token) {
                log::warn!("Discarding error of superseded authentication: {err:#}");
                return StateUpdated::unchanged(None);
            }
            state.notify(Notification::failed(failure_message, &err));
        }
    }
    StateUpdated::maybe_changed(None)
}
