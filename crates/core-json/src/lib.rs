// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod prelude {
    pub(crate) use serde::{Deserialize, Serialize};

    pub(crate) use crate::util::*;
}

pub mod auth;
pub mod card;
pub mod collection;
pub mod mediawiki;
pub mod price;
pub mod util;
