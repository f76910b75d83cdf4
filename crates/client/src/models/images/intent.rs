// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::CardKind;

use super::{Action, ImageSource, State, StateUpdated, Task};

#[derive(Debug)]
pub enum Intent {
    /// Resolve the image of a card if needed
    ResolveImage { kind: CardKind, images: Vec<String> },
}

impl Intent {
    pub fn apply_on(self, state: &mut State) -> StateUpdated {
        log::trace!("Applying intent {self:?} on {state:?}");
        match self {
            Self::ResolveImage { kind, images } => {
                let ImageSource::WikiFile(file_name) = state.image_source(kind, &images) else {
                    return StateUpdated::unchanged(None);
                };
                if state.resolved_files.contains_key(&file_name)
                    || !state.pending_files.insert(file_name.clone())
                {
                    return StateUpdated::unchanged(None);
                }
                StateUpdated::maybe_changed(Action::dispatch_task(Task::ResolveWikiFile {
                    file_name,
                }))
            }
        }
    }
}
