// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{PriceVariant, card::PriceRefresh};

use super::{Action, PricedCard, State, StateUpdated, Task, fetch_listings};

#[derive(Debug)]
pub enum Intent {
    /// Show the prices of a card
    SelectCard(PricedCard),
    FetchListings,
    /// Ask the pricing service for recently sold listings
    RefreshSoldPrices,
    DiscardNotifications,
}

impl Intent {
    pub fn apply_on(self, state: &mut State) -> StateUpdated {
        log::trace!("Applying intent {self:?} on {state:?}");
        match self {
            Self::SelectCard(card) => {
                if state.card == Some(card) {
                    return StateUpdated::unchanged(None);
                }
                state.card = Some(card);
                state.listings.reset();
                fetch_listings(state, card)
            }
            Self::FetchListings => {
                let Some(card) = state.card else {
                    log::warn!("No card selected");
                    return StateUpdated::unchanged(None);
                };
                fetch_listings(state, card)
            }
            Self::RefreshSoldPrices => {
                let Some(card) = state.card else {
                    log::warn!("No card selected");
                    return StateUpdated::unchanged(None);
                };
                if state.refresh_pending {
                    log::warn!("Refreshing sold prices is already pending");
                    return StateUpdated::unchanged(None);
                }
                state.refresh_pending = true;
                let variants = match card.kind.descriptor().price_refresh {
                    PriceRefresh::PerVariant => PriceVariant::all().collect(),
                    PriceRefresh::PerCard => Vec::new(),
                };
                StateUpdated::maybe_changed(Action::dispatch_task(Task::RefreshSoldPrices {
                    card,
                    variants,
                }))
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
