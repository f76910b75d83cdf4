// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{CardKind, CatalogCard};
use cardfolio_core_api::card_search::{Params, Visible};

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
    pub(super) query: String,
    pub(super) results: RemoteData<Vec<CatalogCard>>,
    pub(super) params: Params,
    pub(super) notifications: Notifications,
}

impl State {
    #[must_use]
    pub fn new(kind: CardKind) -> Self {
        Self {
            kind,
            query: String::new(),
            results: RemoteData::default(),
            params: Params::default(),
            notifications: Notifications::default(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> CardKind {
        self.kind
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.results.is_pending()
    }

    /// All cards of the latest search
    #[must_use]
    pub fn results(&self) -> &[CatalogCard] {
        self.results
            .last_value()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// Filtered results within the loaded window
    #[must_use]
    pub fn visible(&self) -> Visible<'_> {
        self.params.evaluate(self.results())
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

#[cfg(test)]
mod tests;
