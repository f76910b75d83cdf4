// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::VecDeque;

use cardfolio_client::{models::images, notification::Notification};
use cardfolio_core::{CardKind, CatalogCard};

use crate::model::{Intent, State};

/// Intents of a command that are submitted one after another
///
/// The next intent is only submitted after all requests of the
/// preceding intent have finished. Any error terminates the plan.
#[derive(Debug, Default)]
pub(crate) struct Plan {
    intents: VecDeque<Intent>,
    resolve_images: bool,
}

impl Plan {
    #[must_use]
    pub(crate) fn new(intents: impl IntoIterator<Item = Intent>) -> Self {
        Self {
            intents: intents.into_iter().collect(),
            resolve_images: false,
        }
    }

    /// Resolve the images of all listed cards before terminating
    #[must_use]
    pub(crate) fn resolve_images(mut self, resolve_images: bool) -> Self {
        self.resolve_images = resolve_images;
        self
    }

    #[must_use]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.intents.is_empty()
    }

    pub(crate) fn render_state(&mut self, state: &State) -> Option<Intent> {
        if state.is_terminating() {
            return None;
        }
        if state.notifications().any(Notification::is_error) {
            // Keep the errors for reporting them after terminating
            return Some(Intent::Terminate);
        }
        if state.notifications().next().is_some() {
            return Some(Intent::DiscardNotifications);
        }
        if state.is_pending() {
            return None;
        }
        if let Some(next_intent) = self.intents.pop_front() {
            return Some(next_intent);
        }
        if self.resolve_images
            && let Some(next_intent) = next_image_resolution(state)
        {
            return Some(next_intent.into());
        }
        Some(Intent::Terminate)
    }
}

fn listed_cards(state: &State) -> impl Iterator<Item = (CardKind, &CatalogCard)> {
    let card_search_kind = state.card_search.kind();
    let cardsets_kind = state.cardsets.kind();
    state
        .card_search
        .visible()
        .cards
        .into_iter()
        .map(move |card| (card_search_kind, card))
        .chain(
            state
                .cardsets
                .cards()
                .iter()
                .map(move |card| (cardsets_kind, card)),
        )
}

fn next_image_resolution(state: &State) -> Option<images::Intent> {
    listed_cards(state)
        .find(|(kind, card)| state.images.needs_resolution(*kind, &card.images))
        .map(|(kind, card)| images::Intent::ResolveImage {
            kind,
            images: card.images.clone(),
        })
}
