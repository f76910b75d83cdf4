// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{
    BulkAddItems, CardKind, Currency, ItemAttributes, NewCollectionItem, SpecificId, UserItemId,
    prelude::*,
};
use cardfolio_core_api::{
    PageNumber, PageSize,
    collection::{Filter, SortField, SortOrder},
};

use crate::notification::Notification;

use super::{Action, Effect, State, StateUpdated, Task, fetch_items};

#[derive(Debug)]
pub enum Intent {
    FetchItems,
    AddItem(NewCollectionItem),
    EditItem {
        user_item_id: UserItemId,
        kind: Option<CardKind>,
        attributes: ItemAttributes,
    },
    DeleteItem {
        user_item_id: UserItemId,
    },
    /// Add all selected cards of the given kind
    BulkAddSelected {
        kind: CardKind,
        attributes: ItemAttributes,
    },
    OpenAddForm {
        specific_id: SpecificId,
    },
    CloseAddForm {
        specific_id: SpecificId,
    },
    ToggleBulkSelection {
        specific_id: SpecificId,
    },
    ClearBulkSelection,
    OpenBulkForm,
    CloseBulkForm,
    SetFilter(Filter),
    SetNameFilter(String),
    SetLanguageFilter(String),
    SetSourceTableFilter(String),
    ToggleSortField(SortField),
    SetOrdering(Option<SortOrder>),
    SetPage(PageNumber),
    SetPageSize(PageSize),
    SetDisplayCurrency(Currency),
    DiscardNotifications,
}

impl Intent {
    #[allow(clippy::too_many_lines)]
    pub fn apply_on(self, state: &mut State) -> StateUpdated {
        log::trace!("Applying intent {self:?} on {state:?}");
        match self {
            Self::FetchItems => fetch_items(state),
            Self::AddItem(new_item) => {
                if let Err(err) = new_item.validate() {
                    log::warn!("Rejecting invalid item {new_item:?}: {err:?}");
                    state.notify(Notification::error("Invalid card attributes."));
                    return StateUpdated::maybe_changed(None);
                }
                StateUpdated::unchanged(Action::apply_effect(Effect::AddItemAccepted(new_item)))
            }
            Self::EditItem {
                user_item_id,
                kind,
                attributes,
            } => {
                let attributes = attributes.normalize();
                if let Err(err) = attributes.validate() {
                    log::warn!("Rejecting invalid attributes {attributes:?}: {err:?}");
                    state.notify(Notification::error("Invalid card attributes."));
                    return StateUpdated::maybe_changed(None);
                }
                state.pending_mutations += 1;
                let task = Task::EditItem {
                    user_item_id,
                    kind,
                    attributes,
                };
                StateUpdated::maybe_changed(Action::dispatch_task(task))
            }
            Self::DeleteItem { user_item_id } => {
                state.pending_mutations += 1;
                StateUpdated::maybe_changed(Action::dispatch_task(Task::DeleteItem {
                    user_item_id,
                }))
            }
            Self::BulkAddSelected { kind, attributes } => {
                let bulk_add = BulkAddItems {
                    kind,
                    specific_ids: state.bulk_selection.iter().copied().collect(),
                    attributes: attributes.normalize(),
                };
                if let Err(err) = bulk_add.validate() {
                    log::warn!("Rejecting invalid bulk add {bulk_add:?}: {err:?}");
                    state.notify(Notification::error("Select cards and a positive quantity."));
                    return StateUpdated::maybe_changed(None);
                }
                state.pending_mutations += 1;
                StateUpdated::maybe_changed(Action::dispatch_task(Task::BulkAddItems(bulk_add)))
            }
            Self::OpenAddForm { specific_id } => {
                if !state.open_add_forms.insert(specific_id) {
                    return StateUpdated::unchanged(None);
                }
                StateUpdated::maybe_changed(None)
            }
            Self::CloseAddForm { specific_id } => {
                if !state.open_add_forms.remove(&specific_id) {
                    return StateUpdated::unchanged(None);
                }
                StateUpdated::maybe_changed(None)
            }
            Self::ToggleBulkSelection { specific_id } => {
                if !state.bulk_selection.remove(&specific_id) {
                    state.bulk_selection.insert(specific_id);
                }
                StateUpdated::maybe_changed(None)
            }
            Self::ClearBulkSelection => {
                if state.bulk_selection.is_empty() {
                    return StateUpdated::unchanged(None);
                }
                state.bulk_selection.clear();
                StateUpdated::maybe_changed(None)
            }
            Self::OpenBulkForm => {
                state.bulk_form_open = true;
                StateUpdated::maybe_changed(None)
            }
            Self::CloseBulkForm => {
                state.bulk_form_open = false;
                StateUpdated::maybe_changed(None)
            }
            Self::SetFilter(filter) => {
                state.params.set_filter(filter);
                StateUpdated::maybe_changed(None)
            }
            Self::SetNameFilter(name) => {
                state.params.set_name_filter(name);
                StateUpdated::maybe_changed(None)
            }
            Self::SetLanguageFilter(language) => {
                state.params.set_language_filter(language);
                StateUpdated::maybe_changed(None)
            }
            Self::SetSourceTableFilter(source_table) => {
                state.params.set_source_table_filter(source_table);
                StateUpdated::maybe_changed(None)
            }
            Self::ToggleSortField(field) => {
                state.params.toggle_sort_field(field);
                StateUpdated::maybe_changed(None)
            }
            Self::SetOrdering(ordering) => {
                state.params.set_ordering(ordering);
                StateUpdated::maybe_changed(None)
            }
            Self::SetPage(page) => {
                state.params.set_page(page);
                StateUpdated::maybe_changed(None)
            }
            Self::SetPageSize(size) => {
                state.params.set_page_size(size);
                StateUpdated::maybe_changed(None)
            }
            Self::SetDisplayCurrency(currency) => {
                if state.display_currency == currency {
                    return StateUpdated::unchanged(None);
                }
                state.display_currency = currency;
                StateUpdated::maybe_changed(None)
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
