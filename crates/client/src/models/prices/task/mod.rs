// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::PriceVariant;

use crate::util::roundtrip::PendingToken;

use super::PricedCard;

#[derive(Debug)]
pub enum Task {
    FetchListings {
        token: PendingToken,
        card: PricedCard,
    },
    /// Refresh each variant one after another or the whole card if empty
    RefreshSoldPrices {
        card: PricedCard,
        variants: Vec<PriceVariant>,
    },
}

#[cfg(feature = "webapi-backend")]
mod webapi;
