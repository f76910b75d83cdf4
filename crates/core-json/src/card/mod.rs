// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::card::{CardId, CardsetId};

use crate::prelude::*;

mod _core {
    pub(super) use cardfolio_core::{Cardset, CatalogCard};
}

/// A card from a catalog search or card set
///
/// The shape differs between card kinds. Only the fields that are
/// needed for the collection are decoded, everything else is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct CatalogCard {
    pub id: CardId,

    #[serde(default)]
    pub name: String,

    #[serde(default, alias = "lang", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,

    #[serde(default, alias = "extension", skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,

    #[serde(default, alias = "set_number", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub images: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_image: Option<String>,
}

impl From<CatalogCard> for _core::CatalogCard {
    fn from(from: CatalogCard) -> Self {
        let CatalogCard {
            id,
            name,
            language,
            rarity,
            set,
            code,
            mut images,
            image,
            full_image,
        } = from;
        // Preferred image first
        for image in [image, full_image].into_iter().flatten().rev() {
            if !images.contains(&image) {
                images.insert(0, image);
            }
        }
        Self {
            id,
            name,
            language,
            rarity,
            set,
            set_number: code,
            images,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Cardset {
    pub id: CardsetId,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(
        default,
        alias = "prefix",
        alias = "local_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

impl From<Cardset> for _core::Cardset {
    fn from(from: Cardset) -> Self {
        let Cardset {
            id,
            name,
            language,
            code,
            release_date,
        } = from;
        Self {
            id,
            name,
            language,
            code,
            release_date,
        }
    }
}
