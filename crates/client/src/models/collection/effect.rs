// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{CollectionItem, NewCollectionItem, UserItemId};

use crate::{notification::Notification, util::roundtrip::PendingToken};

use super::{Action, PendingAdd, RequestId, State, StateUpdated, Task, fetch_items};

#[derive(Debug)]
pub enum Effect {
    FetchItemsFinished {
        token: PendingToken,
        result: anyhow::Result<Vec<CollectionItem>>,
    },
    AddItemAccepted(NewCollectionItem),
    AddItemFinished {
        request_id: RequestId,
        /// The identifier of the new record, if returned by the backend
        result: anyhow::Result<Option<UserItemId>>,
    },
    EditItemFinished(anyhow::Result<()>),
    DeleteItemFinished(anyhow::Result<()>),
    BulkAddItemsFinished(anyhow::Result<usize>),
}

impl Effect {
    pub fn apply_on(self, state: &mut State) -> StateUpdated {
        log::trace!("Applying effect {self:?} on {state:?}");
        match self {
            Self::FetchItemsFinished { token, result } => match result {
                Ok(items) => {
                    log::debug!("Fetched {count} collection item(s)", count = items.len());
                    if state.finish_pending_items(token, items) {
                        StateUpdated::maybe_changed(None)
                    } else {
                        log::debug!("Discarding superseded collection items");
                        StateUpdated::unchanged(None)
                    }
                }
                Err(err) => {
                    // Degrade to an empty collection
                    if !state.finish_pending_items(token, Vec::new()) {
                        log::debug!("Discarding error of superseded request: {err:#}");
                        return StateUpdated::unchanged(None);
                    }
                    state.notify(Notification::failed("Failed to fetch collection", &err));
                    StateUpdated::maybe_changed(None)
                }
            },
            Self::AddItemAccepted(new_item) => {
                let request_id = state.next_request_id();
                state.pending_adds.push(PendingAdd {
                    request_id,
                    new_item: new_item.clone(),
                });
                state.refresh_entries();
                let task = Task::AddItem {
                    request_id,
                    new_item,
                };
                StateUpdated::maybe_changed(Action::dispatch_task(task))
            }
            Self::AddItemFinished { request_id, result } => {
                let Some(PendingAdd { new_item, .. }) = state.take_pending_add(request_id) else {
                    log::warn!("No pending add request {request_id}");
                    return StateUpdated::unchanged(None);
                };
                match result {
                    Ok(user_item_id) => {
                        let mut confirmed_item = new_item.to_collection_item();
                        confirmed_item.user_item_id = user_item_id;
                        let is_fetch_pending = state.confirm_added_item(confirmed_item);
                        state.open_add_forms.remove(&new_item.specific_id);
                        state.bulk_selection.remove(&new_item.specific_id);
                        state.notify(Notification::success("Card added to collection!"));
                        state.refresh_entries();
                        if is_fetch_pending {
                            // The pending response might not contain the new record
                            return fetch_items(state);
                        }
                    }
                    Err(err) => {
                        // Roll back only this request
                        state.notify(Notification::failed(
                            "Failed to add card to collection",
                            &err,
                        ));
                        state.refresh_entries();
                    }
                }
                StateUpdated::maybe_changed(None)
            }
            Self::EditItemFinished(result) => {
                finish_mutation(state, result, "Edit successful.", "Failed to edit item")
            }
            Self::DeleteItemFinished(result) => finish_mutation(
                state,
                result,
                "Deleted successfully.",
                "Failed to delete item",
            ),
            Self::BulkAddItemsFinished(result) => {
                if let Ok(count) = &result {
                    log::debug!("Added {count} card(s) to the collection");
                    state.bulk_selection.clear();
                    state.bulk_form_open = false;
                }
                finish_mutation(
                    state,
                    result,
                    "Cards added to collection!",
                    "Failed to add cards to collection",
                )
            }
        }
    }
}

/// Notify about the outcome and refetch after success
fn finish_mutation<T>(
    state: &mut State,
    result: anyhow::Result<T>,
    success_message: &str,
    failure_message: &str,
) -> StateUpdated {
    debug_assert!(state.pending_mutations > 0);
    state.pending_mutations = state.pending_mutations.saturating_sub(1);
    match result {
        Ok(_) => {
            state.notify(Notification::success(success_message));
            fetch_items(state)
        }
        Err(err) => {
            state.notify(Notification::failed(failure_message, &err));
            StateUpdated::maybe_changed(None)
        }
    }
}
