// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Unidirectional dataflow client for trading card collections

pub mod action;
pub mod message;
pub mod messaging;
pub mod models;
pub mod notification;
pub mod session;
pub mod state;
pub mod task;
pub mod util;

#[cfg(feature = "webapi-backend")]
pub mod webapi;

pub mod prelude {
    pub use crate::{
        action::Action,
        message::Message,
        messaging::{
            MessageHandled, MessageReceiver, MessageSender, handle_next_message, message_channel,
            message_loop, send_message,
        },
        notification::{Notification, Notifications, Severity},
        session::{InMemorySessionStore, Session, SessionError, SessionStore},
        state::{RenderStateFn, State, StateMutation, StateUpdated, state_updated},
        task::{PendingTasksCounter, TaskDispatcher},
        util::{remote::RemoteData, roundtrip::PendingToken},
    };

    #[cfg(feature = "webapi-backend")]
    pub use crate::webapi::{ClientEnvironment, RequestError};
}
