// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{CardKind, card::CardsetId};
use cardfolio_core_api::PageNumber;

use super::{Action, State, StateUpdated, Task, fetch_cardsets};

#[derive(Debug)]
pub enum Intent {
    /// Switch the catalog and fetch its card sets
    SetKind(CardKind),
    FetchCardsets,
    SetNameFilter(String),
    SetLanguageFilter(String),
    SetPage(PageNumber),
    SelectCardset(CardsetId),
    DeselectCardset,
    DiscardNotifications,
}

impl Intent {
    pub fn apply_on(self, state: &mut State) -> StateUpdated {
        log::trace!("Applying intent {self:?} on {state:?}");
        match self {
            Self::SetKind(kind) => {
                if state.kind == kind {
                    return StateUpdated::unchanged(None);
                }
                state.kind = kind;
                state.cardsets.reset();
                state.selected_cardset_id = None;
                state.cards.reset();
                fetch_cardsets(state)
            }
            Self::FetchCardsets => fetch_cardsets(state),
            Self::SetNameFilter(name) => {
                state.params.set_name(name);
                StateUpdated::maybe_changed(None)
            }
            Self::SetLanguageFilter(language) => {
                state.params.set_language(language);
                StateUpdated::maybe_changed(None)
            }
            Self::SetPage(page) => {
                state.params.set_page(page);
                StateUpdated::maybe_changed(None)
            }
            Self::SelectCardset(cardset_id) => {
                state.selected_cardset_id = Some(cardset_id);
                let token = state.cards.start_pending_now();
                let task = Task::FetchCards {
                    token,
                    kind: state.kind,
                    cardset_id,
                };
                StateUpdated::maybe_changed(Action::dispatch_task(task))
            }
            Self::DeselectCardset => {
                if state.selected_cardset_id.take().is_none() {
                    return StateUpdated::unchanged(None);
                }
                state.cards.reset();
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
