// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod card;
pub use self::card::{CardKind, CardKindDescriptor, Cardset, CatalogCard};

pub mod collection;
pub use self::collection::{
    AggregatedEntry, BulkAddItems, CollectionItem, Condition, ItemAttributes, NewCollectionItem,
    Quantity, SourceItemDetails, SpecificId, UserItemDetails, UserItemId, aggregate,
};

pub mod price;
pub use self::price::{
    Currency, PriceListing, PriceSummary, PriceTotals, PriceVariant, SoldPriceUpdate,
};

pub mod util;

pub mod prelude {
    pub(crate) use semval::prelude::*;
    // Re-export trait methods from semval
    pub use semval::{IntoValidated as _, IsValid, Validate as _, ValidatedFrom as _};
}
