// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Responses of the `imageinfo` query of the `MediaWiki` API

use std::collections::BTreeMap;

use crate::prelude::*;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageInfoResponse {
    #[serde(default)]
    pub query: Option<ImageInfoQuery>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageInfoQuery {
    /// Keyed by page id, missing files have negative ids
    #[serde(default)]
    pub pages: BTreeMap<String, ImageInfoPage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageInfoPage {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub imageinfo: Vec<ImageInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageInfo {
    pub url: String,
}

impl ImageInfoResponse {
    /// The URL of the first file that has been found
    #[must_use]
    pub fn into_first_url(self) -> Option<String> {
        self.query?
            .pages
            .into_values()
            .find_map(|page| page.imageinfo.into_iter().next())
            .map(|info| info.url)
    }
}

#[cfg(test)]
mod tests;
