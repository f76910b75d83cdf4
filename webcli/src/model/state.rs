// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_client::{
    models::{auth, card_search, cardsets, collection, images, prices},
    notification::Notification,
    state::State as ClientState,
};

use super::{Message, StateUpdated};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ControlState {
    #[default]
    Running,
    Terminating,
}

#[derive(Debug, Default)]
pub(crate) struct State {
    pub(super) control_state: ControlState,
    pub(crate) auth: auth::State,
    pub(crate) collection: collection::State,
    pub(crate) card_search: card_search::State,
    pub(crate) cardsets: cardsets::State,
    pub(crate) prices: prices::State,
    pub(crate) images: images::State,
}

impl State {
    #[must_use]
    pub(crate) fn new(image_suffix: impl Into<String>) -> Self {
        Self {
            images: images::State::new(image_suffix),
            ..Default::default()
        }
    }

    #[must_use]
    pub(crate) fn is_pending(&self) -> bool {
        self.auth.is_pending()
            || self.collection.is_pending()
            || self.card_search.is_pending()
            || self.cardsets.is_pending()
            || self.prices.is_pending()
            || self.images.is_pending()
    }

    #[must_use]
    pub(crate) fn is_terminating(&self) -> bool {
        self.control_state == ControlState::Terminating
    }

    /// Notifications of all models that have not been discarded yet
    pub(crate) fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.auth
            .notifications()
            .iter()
            .chain(self.collection.notifications().iter())
            .chain(self.card_search.notifications().iter())
            .chain(self.cardsets.notifications().iter())
            .chain(self.prices.notifications().iter())
    }

    pub(super) fn discard_notifications(&mut self) -> usize {
        self.auth.discard_notifications()
            + self.collection.discard_notifications()
            + self.card_search.discard_notifications()
            + self.cardsets.discard_notifications()
            + self.prices.discard_notifications()
    }
}

impl ClientState for State {
    type Intent = super::Intent;
    type Effect = super::Effect;
    type Task = super::Task;

    fn update(&mut self, message: Message) -> StateUpdated {
        log::trace!("Updating state {self:?} with message {message:?}");
        match message {
            Message::Intent(intent) => intent.apply_on(self),
            Message::Effect(effect) => effect.apply_on(self),
        }
    }
}
