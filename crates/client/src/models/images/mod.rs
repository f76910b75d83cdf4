// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Image URLs of catalog cards

use std::collections::{HashMap, HashSet};

use cardfolio_core::{CardKind, card::ImageResolution};

pub mod intent;
pub use self::intent::Intent;

pub mod effect;
pub use self::effect::Effect;

pub mod task;
pub use self::task::Task;

pub type Action = crate::action::Action<Effect, Task>;
pub type StateUpdated = crate::state::StateUpdated<Effect, Task>;

/// Appended to image URL prefixes that require a quality suffix
pub const DEFAULT_IMAGE_SUFFIX: &str = "/high.webp";

/// Where the image of a card can be found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    /// A wiki file that needs to be resolved first
    WikiFile(String),
    Fallback(&'static str),
}

/// Locate the image of a card without any roundtrips
#[must_use]
pub fn image_source(kind: CardKind, images: &[String], image_suffix: &str) -> ImageSource {
    let descriptor = kind.descriptor();
    let Some(image) = images
        .iter()
        .map(|image| image.trim())
        .find(|image| !image.is_empty())
    else {
        return ImageSource::Fallback(descriptor.fallback_image);
    };
    match descriptor.image_resolution {
        ImageResolution::Direct => ImageSource::Url(image.to_owned()),
        ImageResolution::DirectWithSuffix => ImageSource::Url(format!("{image}{image_suffix}")),
        ImageResolution::MediaWiki => ImageSource::WikiFile(image.to_owned()),
    }
}

#[derive(Debug)]
pub struct State {
    pub(super) image_suffix: String,

    /// Resolved wiki files, `None` if missing
    pub(super) resolved_files: HashMap<String, Option<String>>,

    pub(super) pending_files: HashSet<String>,
}

impl State {
    #[must_use]
    pub fn new(image_suffix: impl Into<String>) -> Self {
        Self {
            image_suffix: image_suffix.into(),
            resolved_files: HashMap::new(),
            pending_files: HashSet::new(),
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.pending_files.is_empty()
    }

    #[must_use]
    pub fn image_source(&self, kind: CardKind, images: &[String]) -> ImageSource {
        image_source(kind, images, &self.image_suffix)
    }

    /// Whether the image needs to be resolved before it could be displayed
    #[must_use]
    pub fn needs_resolution(&self, kind: CardKind, images: &[String]) -> bool {
        match self.image_source(kind, images) {
            ImageSource::WikiFile(file_name) => {
                !self.resolved_files.contains_key(&file_name)
                    && !self.pending_files.contains(&file_name)
            }
            ImageSource::Url(_) | ImageSource::Fallback(_) => false,
        }
    }

    /// The image URL of a card
    ///
    /// Falls back to the card back of the card kind until the image
    /// has been resolved or if it could not be found.
    #[must_use]
    pub fn image_url(&self, kind: CardKind, images: &[String]) -> String {
        match self.image_source(kind, images) {
            ImageSource::Url(url) => url,
            ImageSource::WikiFile(file_name) => self
                .resolved_files
                .get(&file_name)
                .and_then(Option::as_deref)
                .unwrap_or(kind.descriptor().fallback_image)
                .to_owned(),
            ImageSource::Fallback(fallback_image) => fallback_image.to_owned(),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_SUFFIX)
    }
}
