// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

#[derive(Debug)]
pub enum Task {
    ResolveWikiFile { file_name: String },
}

#[cfg(feature = "webapi-backend")]
mod webapi;
