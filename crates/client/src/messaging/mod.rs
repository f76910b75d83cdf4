// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, sync::Arc};

use tokio::sync::mpsc;

use crate::{
    action::Action,
    message::Message,
    state::{RenderStateFn, State, StateMutation, StateUpdated},
    task::TaskDispatcher,
};

pub type MessageSender<Intent, Effect> = mpsc::UnboundedSender<Message<Intent, Effect>>;
pub type MessageReceiver<Intent, Effect> = mpsc::UnboundedReceiver<Message<Intent, Effect>>;
pub type MessageChannel<Intent, Effect> = (
    MessageSender<Intent, Effect>,
    MessageReceiver<Intent, Effect>,
);

#[must_use]
pub fn message_channel<Intent, Effect>() -> MessageChannel<Intent, Effect> {
    mpsc::unbounded_channel()
}

pub fn send_message<Intent: fmt::Debug, Effect: fmt::Debug>(
    message_tx: &MessageSender<Intent, Effect>,
    message: impl Into<Message<Intent, Effect>>,
) {
    let message = message.into();
    log::debug!("Sending message: {message:?}");
    if let Err(message) = message_tx.send(message) {
        // Channel is closed, i.e. receiver has been dropped
        log::debug!("Failed to send message: {:?}", message.0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageHandled {
    Progressing,
    NoProgress,
}

/// Update the state with a single message
///
/// Subsequent effects are applied immediately. The state is rendered
/// before a resulting task is dispatched. Observers thus always see
/// the outcome of an update, e.g. an optimistic modification, before
/// the corresponding request is sent.
pub fn handle_next_message<E, S>(
    shared_env: &Arc<E>,
    state: &mut S,
    message_tx: &MessageSender<S::Intent, S::Effect>,
    mut next_message: Message<S::Intent, S::Effect>,
    render_fn: &mut RenderStateFn<S, S::Intent>,
) -> MessageHandled
where
    E: TaskDispatcher<S::Intent, S::Effect, S::Task>,
    S: State + fmt::Debug,
    S::Intent: fmt::Debug,
    S::Effect: fmt::Debug,
    S::Task: fmt::Debug,
{
    let mut state_mutation = StateMutation::Unchanged;
    let mut number_of_next_actions = 0;
    let next_task = loop {
        let StateUpdated {
            state_mutation: next_state_mutation,
            next_action,
        } = state.update(next_message);
        state_mutation += next_state_mutation;
        match next_action {
            Some(Action::ApplyEffect(effect)) => {
                number_of_next_actions += 1;
                log::debug!("Applying subsequent effect immediately: {effect:?}");
                next_message = Message::Effect(effect);
            }
            Some(Action::DispatchTask(task)) => {
                number_of_next_actions += 1;
                break Some(task);
            }
            None => break None,
        }
    };
    let mut number_of_messages_sent = 0;
    if state_mutation == StateMutation::MaybeChanged || number_of_next_actions > 0 {
        log::debug!("Rendering current state: {state:?}");
        if let Some(observation_intent) = render_fn(state) {
            log::debug!("Received intent after observing state: {observation_intent:?}");
            send_message(message_tx, Message::Intent(observation_intent));
            number_of_messages_sent += 1;
        }
    }
    let mut number_of_tasks_dispatched = 0;
    if let Some(task) = next_task {
        log::debug!("Dispatching task asynchronously: {task:?}");
        shared_env.dispatch_task(Arc::clone(shared_env), message_tx.clone(), task);
        number_of_tasks_dispatched += 1;
    }
    log::debug!(
        "number_of_next_actions = {number_of_next_actions}, number_of_messages_sent = \
         {number_of_messages_sent}, number_of_tasks_dispatched = {number_of_tasks_dispatched}"
    );
    if number_of_messages_sent + number_of_tasks_dispatched > 0 {
        MessageHandled::Progressing
    } else {
        MessageHandled::NoProgress
    }
}

/// Process messages until no more progress is possible
///
/// Terminates when the channel is closed or if neither messages nor
/// tasks are pending. Returns the final state.
pub async fn message_loop<E, S>(
    shared_env: Arc<E>,
    (message_tx, mut message_rx): MessageChannel<S::Intent, S::Effect>,
    mut state: S,
    mut render_state_fn: Box<RenderStateFn<S, S::Intent>>,
) -> S
where
    E: TaskDispatcher<S::Intent, S::Effect, S::Task>,
    S: State + fmt::Debug,
    S::Intent: fmt::Debug,
    S::Effect: fmt::Debug,
    S::Task: fmt::Debug,
{
    while let Some(next_message) = message_rx.recv().await {
        match handle_next_message(
            &shared_env,
            &mut state,
            &message_tx,
            next_message,
            &mut *render_state_fn,
        ) {
            MessageHandled::Progressing => (),
            MessageHandled::NoProgress => {
                if shared_env.all_tasks_finished() && message_rx.is_empty() {
                    break;
                }
            }
        }
    }
    log::debug!("Terminated message loop");
    state
}
