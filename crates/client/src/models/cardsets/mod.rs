// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{
    CardKind, Cardset, CatalogCard, CollectionItem, card::CardsetId, collection::count_owned,
};
use cardfolio_core_api::cardsets::Params;

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

#[derive(Debug)]
pub struct State {
    pub(super) kind: CardKind,
    pub(super) cardsets: RemoteData<Vec<Cardset>>,
    pub(super) params: Params,
    pub(super) selected_cardset_id: Option<CardsetId>,
    pub(super) cards: RemoteData<Vec<CatalogCard>>,
    pub(super) notifications: Notifications,
}

impl State {
    #[must_use]
    pub fn new(kind: CardKind) -> Self {
        Self {
            kind,
            cardsets: RemoteData::default(),
            params: Params::default(),
            selected_cardset_id: None,
            cards: RemoteData::default(),
            notifications: Notifications::default(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> CardKind {
        self.kind
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.cardsets.is_pending() || self.cards.is_pending()
    }

    #[must_use]
    pub fn cardsets(&self) -> &[Cardset] {
        self.cardsets
            .last_value()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// All card sets that match the filter
    #[must_use]
    pub fn filtered_cardsets(&self) -> Vec<&Cardset> {
        self.params.filter(self.cardsets())
    }

    /// The current page of filtered card sets
    #[must_use]
    pub fn page_cardsets(&self) -> Vec<&Cardset> {
        let filtered = self.filtered_cardsets();
        self.params.pagination().slice(&filtered).to_vec()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.params
            .pagination()
            .page_count(self.filtered_cardsets().len())
    }

    #[must_use]
    pub fn selected_cardset(&self) -> Option<&Cardset> {
        let selected_id = self.selected_cardset_id?;
        self.cardsets()
            .iter()
            .find(|cardset| cardset.id == selected_id)
    }

    /// The cards of the selected card set in the order of the card kind
    #[must_use]
    pub fn cards(&self) -> &[CatalogCard] {
        self.cards.last_value().map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of cards of the selected card set that are owned
    #[must_use]
    pub fn owned_count<T>(&self, collection: &[T]) -> usize
    where
        T: AsRef<CollectionItem>,
    {
        count_owned(self.cards(), collection)
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

impl Default for State {
    fn default() -> Self {
        Self::new(CardKind::Pokemon)
    }
}

pub(super) fn fetch_cardsets(state: &mut State) -> StateUpdated {
    let token = state.cardsets.start_pending_now();
    StateUpdated::maybe_changed(Action::dispatch_task(Task::FetchCardsets {
        token,
        kind: state.kind,
    }))
}

#[cfg(test)]
mod tests;
