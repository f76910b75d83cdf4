// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::util::roundtrip::PendingToken;

use super::{Credentials, Registration};

#[derive(Debug)]
pub enum Task {
    Login {
        token: PendingToken,
        credentials: Credentials,
    },
    Register {
        token: PendingToken,
        registration: Registration,
    },
    Logout,
}

#[cfg(feature = "webapi-backend")]
mod webapi;
