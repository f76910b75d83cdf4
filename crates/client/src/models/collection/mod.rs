// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::BTreeSet;

use cardfolio_core::{
    AggregatedEntry, CollectionItem, Currency, NewCollectionItem, PriceTotals, SpecificId,
    aggregate, collection::find_entry,
};
use cardfolio_core_api::collection::{Params, View};

use crate::{
    notification::{Notification, Notifications},
    util::{remote::RemoteData, roundtrip::PendingToken},
};

pub mod intent;
pub use self::intent::Intent;

pub mod effect;
pub use self::effect::Effect;

pub mod task;
pub use self::task::Task;

pub type Action = crate::action::Action<Effect, Task>;
pub type StateUpdated = crate::state::StateUpdated<Effect, Task>;

/// Identifies a single add request
pub type RequestId = u64;

/// An item that is displayed before the backend confirmed it
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAdd {
    pub request_id: RequestId,
    pub new_item: NewCollectionItem,
}

#[derive(Debug, Default)]
pub struct RemoteView {
    /// The last known-good list as received from or confirmed by the backend
    pub confirmed_items: RemoteData<Vec<CollectionItem>>,
}

impl RemoteView {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.confirmed_items.is_pending()
    }

    #[must_use]
    pub fn confirmed_items(&self) -> &[CollectionItem] {
        self.confirmed_items
            .last_value()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct State {
    pub(super) remote_view: RemoteView,
    pub(super) pending_adds: Vec<PendingAdd>,
    pub(super) last_request_id: RequestId,
    pub(super) pending_mutations: usize,
    pub(super) items: Vec<CollectionItem>,
    pub(super) entries: Vec<AggregatedEntry>,
    pub(super) params: Params,
    pub(super) display_currency: Currency,
    pub(super) open_add_forms: BTreeSet<SpecificId>,
    pub(super) bulk_selection: BTreeSet<SpecificId>,
    pub(super) bulk_form_open: bool,
    pub(super) notifications: Notifications,
}

impl State {
    #[must_use]
    pub const fn remote_view(&self) -> &RemoteView {
        &self.remote_view
    }

    /// Requests that are still awaiting a response
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.remote_view.is_pending() || !self.pending_adds.is_empty() || self.pending_mutations > 0
    }

    #[must_use]
    pub fn pending_adds(&self) -> &[PendingAdd] {
        &self.pending_adds
    }

    /// All displayed ownership records
    ///
    /// The confirmed items followed by all pending adds.
    #[must_use]
    pub fn items(&self) -> &[CollectionItem] {
        &self.items
    }

    /// The displayed collection, aggregated by card
    #[must_use]
    pub fn entries(&self) -> &[AggregatedEntry] {
        &self.entries
    }

    #[must_use]
    pub fn owned_entry(&self, specific_id: SpecificId) -> Option<&AggregatedEntry> {
        find_entry(&self.entries, specific_id)
    }

    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// Filtered, sorted, and paginated ownership records
    #[must_use]
    pub fn view(&self) -> View<'_, CollectionItem> {
        self.params.evaluate(&self.items)
    }

    #[must_use]
    pub const fn display_currency(&self) -> Currency {
        self.display_currency
    }

    /// Price totals of all filtered records in the display currency
    #[must_use]
    pub fn price_totals(&self) -> PriceTotals {
        let view = self.view();
        PriceTotals::of_items(self.display_currency, view.arranged().iter().copied())
    }

    #[must_use]
    pub fn is_add_form_open(&self, specific_id: SpecificId) -> bool {
        self.open_add_forms.contains(&specific_id)
    }

    #[must_use]
    pub const fn bulk_selection(&self) -> &BTreeSet<SpecificId> {
        &self.bulk_selection
    }

    #[must_use]
    pub const fn is_bulk_form_open(&self) -> bool {
        self.bulk_form_open
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

    /// Recompute the displayed entries
    ///
    /// The list is replaced as a whole and never modified in place.
    pub(super) fn refresh_entries(&mut self) {
        self.items = self
            .remote_view
            .confirmed_items()
            .iter()
            .cloned()
            .chain(
                self.pending_adds
                    .iter()
                    .map(|pending_add| pending_add.new_item.to_collection_item()),
            )
            .collect();
        self.entries = aggregate(&self.items);
    }

    pub(super) fn next_request_id(&mut self) -> RequestId {
        self.last_request_id = self.last_request_id.wrapping_add(1);
        self.last_request_id
    }

    pub(super) fn finish_pending_items(
        &mut self,
        token: PendingToken,
        items: Vec<CollectionItem>,
    ) -> bool {
        let accepted = self
            .remote_view
            .confirmed_items
            .finish_pending_with_value_now(token, items)
            .is_ok();
        if accepted {
            self.refresh_entries();
        }
        accepted
    }

    /// Append a record that has been persisted by an add request
    ///
    /// Records that are already known by their identifier are not
    /// appended again. Returns `true` if a fetch is still pending.
    pub(super) fn confirm_added_item(&mut self, item: CollectionItem) -> bool {
        let confirmed_items = self.remote_view.confirmed_items();
        let is_known = item.user_item_id.is_some_and(|user_item_id| {
            confirmed_items
                .iter()
                .any(|confirmed| confirmed.user_item_id == Some(user_item_id))
        });
        if is_known {
            log::debug!("Added item {item:?} has already been fetched");
        } else {
            let confirmed_items = confirmed_items
                .iter()
                .cloned()
                .chain(std::iter::once(item))
                .collect::<Vec<_>>();
            self.remote_view
                .confirmed_items
                .replace_value_now(confirmed_items);
        }
        self.remote_view.is_pending()
    }

    pub(super) fn take_pending_add(&mut self, request_id: RequestId) -> Option<PendingAdd> {
        let index = self
            .pending_adds
            .iter()
            .position(|pending_add| pending_add.request_id == request_id)?;
        Some(self.pending_adds.remove(index))
    }
}

/// Refetch the whole collection
///
/// Supersedes a fetch that is still pending.
pub(super) fn fetch_items(state: &mut State) -> StateUpdated {
    let token = state.remote_view.confirmed_items.start_pending_now();
    StateUpdated::maybe_changed(Action::dispatch_task(Task::FetchItems { token }))
}

#[cfg(test)]
mod tests;
