// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::CardKind;

use super::{Action, State, StateUpdated, Task};

#[derive(Debug)]
pub enum Intent {
    /// Switch the catalog and discard the current search
    SetKind(CardKind),
    SetQuery(String),
    Search,
    SetLanguageFilter(String),
    LoadMore,
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
                state.query.clear();
                // Responses of pending searches will be discarded
                state.results.reset();
                state.params.reset_window();
                StateUpdated::maybe_changed(None)
            }
            Self::SetQuery(query) => {
                if state.query == query {
                    return StateUpdated::unchanged(None);
                }
                state.query = query;
                StateUpdated::maybe_changed(None)
            }
            Self::Search => {
                let token = state.results.start_pending_now();
                let task = Task::Search {
                    token,
                    kind: state.kind,
                    query: state.query.trim().to_owned(),
                };
                StateUpdated::maybe_changed(Action::dispatch_task(task))
            }
            Self::SetLanguageFilter(language) => {
                state.params.set_language(language);
                StateUpdated::maybe_changed(None)
            }
            Self::LoadMore => {
                if !state.visible().has_more {
                    return StateUpdated::unchanged(None);
                }
                state.params.load_more();
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
