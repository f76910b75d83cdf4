// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{Cardset, CatalogCard, card::sort_cardset_cards};

use crate::{notification::Notification, util::roundtrip::PendingToken};

use super::{State, StateUpdated};

#[derive(Debug)]
pub enum Effect {
    FetchCardsetsFinished {
        token: PendingToken,
        result: anyhow::Result<Vec<Cardset>>,
    },
    FetchCardsFinished {
        token: PendingToken,
        result: anyhow::Result<Vec<CatalogCard>>,
    },
}

impl Effect {
    pub fn apply_on(self, state: &mut State) -> StateUpdated {
        log::trace!("Applying effect {self:?} on {state:?}");
        match self {
            Self::FetchCardsetsFinished { token, result } => {
                let (cardsets, err) = match result {
                    Ok(cardsets) => (cardsets, None),
                    Err(err) => (Vec::new(), Some(err)),
                };
                if state
                    .cardsets
                    .finish_pending_with_value_now(token, cardsets)
                    .is_err()
                {
                    log::debug!("Discarding superseded card sets");
                    return StateUpdated::unchanged(None);
                }
                state.params.set_page(1);
                if let Some(err) = err {
                    state.notify(Notification::failed("Failed to fetch card sets", &err));
                }
                StateUpdated::maybe_changed(None)
            }
            Self::FetchCardsFinished { token, result } => {
                let (mut cards, err) = match result {
                    Ok(cards) => (cards, None),
                    Err(err) => (Vec::new(), Some(err)),
                };
                sort_cardset_cards(state.kind, &mut cards);
                if state
                    .cards
                    .finish_pending_with_value_now(token, cards)
                    .is_err()
                {
                    log::debug!("Discarding cards of superseded card set");
                    return StateUpdated::unchanged(None);
                }
                if let Some(err) = err {
                    state.notify(Notification::failed("Failed to fetch cards", &err));
                }
                StateUpdated::maybe_changed(None)
            }
        }
    }
}
