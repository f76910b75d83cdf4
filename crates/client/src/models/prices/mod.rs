// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Market prices of a single card

use cardfolio_core::{CardKind, PriceListing, SpecificId};

use crate::{
    notification::{Notification, Notifications},
    util::remote::RemoteData,
};

pub mod intent;
pub use self::intent::Intent;

pub mod effect;
pub use self::effect::{Effect, RefreshOutcome};

pub mod task;
pub use self::task::Task;

pub type Action = crate::action::Action<Effect, Task>;
pub type StateUpdated = crate::state::StateUpdated<Effect, Task>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedCard {
    pub kind: CardKind,
    pub specific_id: SpecificId,
}

#[derive(Debug, Default)]
pub struct State {
    pub(super) card: Option<PricedCard>,
    pub(super) listings: RemoteData<Vec<PriceListing>>,
    pub(super) refresh_pending: bool,
    pub(super) notifications: Notifications,
}

impl State {
    #[must_use]
    pub const fn card(&self) -> Option<PricedCard> {
        self.card
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.listings.is_pending() || self.refresh_pending
    }

    #[must_use]
    pub fn listings(&self) -> &[PriceListing] {
        self.listings
            .last_value()
            .map(Vec::as_slice)
            .unwrap_or_default()
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

pub(super) fn fetch_listings(state: &mut State, card: PricedCard) -> StateUpdated {
    let token = state.listings.start_pending_now();
    StateUpdated::maybe_changed(Action::dispatch_task(Task::FetchListings { token, card }))
}

#[cfg(test)]
mod tests;
