// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{State, StateUpdated};

#[derive(Debug)]
pub enum Effect {
    WikiFileResolved {
        file_name: String,
        result: anyhow::Result<Option<String>>,
    },
}

impl Effect {
    pub fn apply_on(self, state: &mut State) -> StateUpdated {
        log::trace!("Applying effect {self:?} on {state:?}");
        match self {
            Self::WikiFileResolved { file_name, result } => {
                if !state.pending_files.remove(&file_name) {
                    log::warn!("Resolving {file_name} has not been requested");
                }
                let url = result.unwrap_or_else(|err| {
                    log::warn!("Failed to resolve {file_name}: {err:#}");
                    None
                });
                if url.is_none() {
                    log::debug!("No image found for {file_name}");
                }
                state.resolved_files.insert(file_name, url);
                StateUpdated::maybe_changed(None)
            }
        }
    }
}
