// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use cardfolio_client::{
    models::{auth, card_search, cardsets, collection, images, prices},
    state::state_updated,
};

use super::{State, StateUpdated, state::ControlState};

#[derive(Debug)]
pub(crate) enum Intent {
    RenderState,
    DiscardNotifications,
    Terminate,
    Auth(auth::Intent),
    Collection(collection::Intent),
    CardSearch(card_search::Intent),
    Cardsets(cardsets::Intent),
    Prices(prices::Intent),
    Images(images::Intent),
}

impl From<auth::Intent> for Intent {
    fn from(intent: auth::Intent) -> Self {
        Self::Auth(intent)
    }
}

impl From<collection::Intent> for Intent {
    fn from(intent: collection::Intent) -> Self {
        Self::Collection(intent)
    }
}

impl From<card_search::Intent> for Intent {
    fn from(intent: card_search::Intent) -> Self {
        Self::CardSearch(intent)
    }
}

impl From<cardsets::Intent> for Intent {
    fn from(intent: cardsets::Intent) -> Self {
        Self::Cardsets(intent)
    }
}

impl From<prices::Intent> for Intent {
    fn from(intent: prices::Intent) -> Self {
        Self::Prices(intent)
    }
}

impl From<images::Intent> for Intent {
    fn from(intent: images::Intent) -> Self {
        Self::Images(intent)
    }
}

impl Intent {
    pub(crate) fn apply_on(self, state: &mut State) -> StateUpdated {
        log::debug!("Applying intent {self:?} on {state:?}");
        match self {
            Self::RenderState => StateUpdated::maybe_changed(None), // enforce re-rendering
            Self::DiscardNotifications => {
                if state.discard_notifications() == 0 {
                    return StateUpdated::unchanged(None);
                }
                StateUpdated::maybe_changed(None)
            }
            Self::Terminate => {
                if state.control_state == ControlState::Terminating {
                    // Already terminating, nothing to do
                    return StateUpdated::unchanged(None);
                }
                state.control_state = ControlState::Terminating;
                StateUpdated::maybe_changed(None)
            }
            Self::Auth(intent) => apply_model_intent(state, intent, |intent, state| {
                state_updated(intent.apply_on(&mut state.auth))
            }),
            Self::Collection(intent) => apply_model_intent(state, intent, |intent, state| {
                state_updated(intent.apply_on(&mut state.collection))
            }),
            Self::CardSearch(intent) => apply_model_intent(state, intent, |intent, state| {
                state_updated(intent.apply_on(&mut state.card_search))
            }),
            Self::Cardsets(intent) => apply_model_intent(state, intent, |intent, state| {
                state_updated(intent.apply_on(&mut state.cardsets))
            }),
            Self::Prices(intent) => apply_model_intent(state, intent, |intent, state| {
                state_updated(intent.apply_on(&mut state.prices))
            }),
            Self::Images(intent) => apply_model_intent(state, intent, |intent, state| {
                state_updated(intent.apply_on(&mut state.images))
            }),
        }
    }
}

fn apply_model_intent<I: fmt::Debug>(
    state: &mut State,
    intent: I,
    apply_on: impl FnOnce(I, &mut State) -> StateUpdated,
) -> StateUpdated {
    if state.control_state != ControlState::Running {
        log::debug!("Discarding intent while not running: {intent:?}");
        return StateUpdated::unchanged(None);
    }
    let updated = apply_on(intent, state);
    if updated.is_unchanged() && updated.next_action.is_none() {
        // Render anyway for submitting the next intent
        return StateUpdated::maybe_changed(None);
    }
    updated
}
