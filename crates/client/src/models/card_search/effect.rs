// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::CatalogCard;

use crate::{notification::Notification, util::roundtrip::PendingToken};

use super::{State, StateUpdated};

#[derive(Debug)]
pub enum Effect {
    SearchFinished {
        token: PendingToken,
        result: anyhow::Result<Vec<CatalogCard>>,
    },
}

impl Effect {
    pub fn apply_on(self, state: &mut State) -> StateUpdated {
        log::trace!("Applying effect {self:?} on {state:?}");
        match self {
            Self::SearchFinished { token, result } => {
                let (cards, err) = match result {
                    Ok(cards) => (cards, None),
                    // Degrade to an empty result
                    Err(err) => (Vec::new(), Some(err)),
                };
                if state
                    .results
                    .finish_pending_with_value_now(token, cards)
                    .is_err()
                {
                    log::debug!("Discarding results of superseded search");
                    return StateUpdated::unchanged(None);
                }
                state.params.reset_window();
                if let Some(err) = err {
                    state.notify(Notification::failed("Failed to search cards", &err));
                }
                StateUpdated::maybe_changed(None)
            }
        }
    }
}
