// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{CardKind, card::CardsetId};

use crate::util::roundtrip::PendingToken;

#[derive(Debug)]
pub enum Task {
    FetchCardsets {
        token: PendingToken,
        kind: CardKind,
    },
    FetchCards {
        token: PendingToken,
        kind: CardKind,
        cardset_id: CardsetId,
    },
}

#[cfg(feature = "webapi-backend")]
mod webapi;
