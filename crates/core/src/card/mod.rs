// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::cmp::Ordering;

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::util::string::natural_cmp;

/// Catalog identifier of a card
pub type CardId = u64;

/// Catalog identifier of a card set
pub type CardsetId = u64;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum CardKind {
    Pokemon,
    #[strum(serialize = "yugioh")]
    YuGiOh,
    Fftcg,
    NarutoKayou,
}

/// How the order of cards within a card set is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardsetOrdering {
    /// Natural order of the printed set number, e.g. "LOB-EN002" < "LOB-EN010"
    SetNumber,
    /// Ascending catalog id
    CardId,
}

/// How the image of a card is located
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageResolution {
    /// The catalog provides a complete URL
    Direct,
    /// The catalog provides a URL prefix that requires a quality suffix
    DirectWithSuffix,
    /// The catalog provides wiki file names that need to be resolved
    MediaWiki,
}

/// How sold prices are refreshed for a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRefresh {
    /// Once per condition and edition
    PerVariant,
    /// Once for the whole card
    PerCard,
}

/// Capabilities that differ between card kinds
///
/// Collection handling is identical for all card kinds and only
/// parameterized by this descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardKindDescriptor {
    pub kind: CardKind,
    pub display_name: &'static str,

    /// Name of the catalog table, e.g. for addressing owned items
    pub source_table: &'static str,

    /// Path segment for searching and browsing the catalog
    pub catalog_segment: &'static str,

    /// Path segment for listing all card sets
    ///
    /// Differs from [`Self::catalog_segment`] for some card kinds.
    pub cardsets_segment: &'static str,

    pub cardset_ordering: CardsetOrdering,
    pub image_resolution: ImageResolution,
    pub fallback_image: &'static str,
    pub price_refresh: PriceRefresh,

    /// Whether condition and first edition are recorded for owned cards
    pub tracks_condition: bool,

    /// Permitted values for extras or empty if extras are free text
    pub extras_vocabulary: &'static [&'static str],
}

const POKEMON: CardKindDescriptor = CardKindDescriptor {
    kind: CardKind::Pokemon,
    display_name: "Pokémon",
    source_table: "cards_pokemon",
    catalog_segment: "pokemon",
    cardsets_segment: "pokemon",
    cardset_ordering: CardsetOrdering::CardId,
    image_resolution: ImageResolution::DirectWithSuffix,
    fallback_image: "/pokemon_back_card.webp",
    price_refresh: PriceRefresh::PerVariant,
    tracks_condition: true,
    extras_vocabulary: &["Reverse", "Holo"],
};

const YUGIOH: CardKindDescriptor = CardKindDescriptor {
    kind: CardKind::YuGiOh,
    display_name: "Yu-Gi-Oh!",
    source_table: "cards_yugioh",
    catalog_segment: "yugioh",
    cardsets_segment: "yugioh",
    cardset_ordering: CardsetOrdering::SetNumber,
    image_resolution: ImageResolution::MediaWiki,
    fallback_image: "/yugioh_back_card.webp",
    price_refresh: PriceRefresh::PerVariant,
    tracks_condition: true,
    extras_vocabulary: &[],
};

const FFTCG: CardKindDescriptor = CardKindDescriptor {
    kind: CardKind::Fftcg,
    display_name: "Final Fantasy TCG",
    source_table: "cards_fftcg",
    catalog_segment: "fftcg",
    cardsets_segment: "fftcg",
    cardset_ordering: CardsetOrdering::SetNumber,
    image_resolution: ImageResolution::Direct,
    fallback_image: "/fftcg_back_card.webp",
    price_refresh: PriceRefresh::PerVariant,
    tracks_condition: true,
    extras_vocabulary: &[],
};

const NARUTO_KAYOU: CardKindDescriptor = CardKindDescriptor {
    kind: CardKind::NarutoKayou,
    display_name: "Naruto Kayou",
    source_table: "cards_naruto-kayou",
    catalog_segment: "naruto-kayou",
    cardsets_segment: "narutokayou",
    cardset_ordering: CardsetOrdering::CardId,
    image_resolution: ImageResolution::Direct,
    fallback_image: "/naruto_default_card.webp",
    price_refresh: PriceRefresh::PerCard,
    tracks_condition: false,
    extras_vocabulary: &[],
};

impl CardKind {
    #[must_use]
    pub const fn descriptor(self) -> &'static CardKindDescriptor {
        match self {
            Self::Pokemon => &POKEMON,
            Self::YuGiOh => &YUGIOH,
            Self::Fftcg => &FFTCG,
            Self::NarutoKayou => &NARUTO_KAYOU,
        }
    }

    #[must_use]
    pub const fn source_table(self) -> &'static str {
        self.descriptor().source_table
    }

    /// Reverse lookup by the name of the catalog table
    #[must_use]
    pub fn from_source_table(source_table: &str) -> Option<Self> {
        use strum::IntoEnumIterator as _;
        Self::iter().find(|kind| kind.source_table() == source_table)
    }
}

impl CardKindDescriptor {
    /// Check if the given extras are permitted for this card kind
    ///
    /// Empty extras are always permitted.
    #[must_use]
    pub fn accepts_extras(&self, extras: &str) -> bool {
        let extras = extras.trim();
        extras.is_empty()
            || self.extras_vocabulary.is_empty()
            || self
                .extras_vocabulary
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(extras))
    }
}

/// A card from the external catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogCard {
    pub id: CardId,
    pub name: String,
    pub language: Option<String>,
    pub rarity: Option<String>,
    pub set: Option<String>,

    /// Printed code within the set, e.g. "LOB-EN001"
    pub set_number: Option<String>,

    /// Image URL or wiki file names, depending on the card kind
    pub images: Vec<String>,
}

impl CatalogCard {
    #[must_use]
    pub fn cmp_by(&self, other: &Self, ordering: CardsetOrdering) -> Ordering {
        match ordering {
            CardsetOrdering::SetNumber => natural_cmp(
                self.set_number.as_deref().unwrap_or_default(),
                other.set_number.as_deref().unwrap_or_default(),
            )
            .then_with(|| self.id.cmp(&other.id)),
            CardsetOrdering::CardId => self.id.cmp(&other.id),
        }
    }
}

/// Sort the cards of a card set as the card kind requires
pub fn sort_cardset_cards(kind: CardKind, cards: &mut [CatalogCard]) {
    let ordering = kind.descriptor().cardset_ordering;
    cards.sort_by(|lhs, rhs| lhs.cmp_by(rhs, ordering));
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cardset {
    pub id: CardsetId,
    pub name: String,
    pub language: Option<String>,
    pub code: Option<String>,
    pub release_date: Option<String>,
}

#[cfg(test)]
mod tests;
