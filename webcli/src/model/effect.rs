// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_client::{
    models::{auth, card_search, cardsets, collection, images, prices},
    state::state_updated,
};

use super::{State, StateUpdated};

/// Results of finished tasks
///
/// Effects are applied even while terminating, i.e. the outcomes
/// of all pending requests are still recorded.
#[derive(Debug)]
pub(crate) enum Effect {
    Auth(auth::Effect),
    Collection(collection::Effect),
    CardSearch(card_search::Effect),
    Cardsets(cardsets::Effect),
    Prices(prices::Effect),
    Images(images::Effect),
}

impl From<auth::Effect> for Effect {
    fn from(effect: auth::Effect) -> Self {
        Self::Auth(effect)
    }
}

impl From<collection::Effect> for Effect {
    fn from(effect: collection::Effect) -> Self {
        Self::Collection(effect)
    }
}

impl From<card_search::Effect> for Effect {
    fn from(effect: card_search::Effect) -> Self {
        Self::CardSearch(effect)
    }
}

impl From<cardsets::Effect> for Effect {
    fn from(effect: cardsets::Effect) -> Self {
        Self::Cardsets(effect)
    }
}

impl From<prices::Effect> for Effect {
    fn from(effect: prices::Effect) -> Self {
        Self::Prices(effect)
    }
}

impl From<images::Effect> for Effect {
    fn from(effect: images::Effect) -> Self {
        Self::Images(effect)
    }
}

impl Effect {
    pub(crate) fn apply_on(self, state: &mut State) -> StateUpdated {
        log::debug!("Applying effect {self:?} on {state:?}");
        match self {
            Self::Auth(effect) => state_updated(effect.apply_on(&mut state.auth)),
            Self::Collection(effect) => state_updated(effect.apply_on(&mut state.collection)),
            Self::CardSearch(effect) => state_updated(effect.apply_on(&mut state.card_search)),
            Self::Cardsets(effect) => state_updated(effect.apply_on(&mut state.cardsets)),
            Self::Prices(effect) => state_updated(effect.apply_on(&mut state.prices)),
            Self::Images(effect) => state_updated(effect.apply_on(&mut state.images)),
        }
    }
}
