// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_client::{
    models::{auth, card_search, cardsets, collection, images, prices},
    webapi::ClientEnvironment,
};

use super::Effect;

#[derive(Debug)]
pub(crate) enum Task {
    Auth(auth::Task),
    Collection(collection::Task),
    CardSearch(card_search::Task),
    Cardsets(cardsets::Task),
    Prices(prices::Task),
    Images(images::Task),
}

impl From<auth::Task> for Task {
    fn from(task: auth::Task) -> Self {
        Self::Auth(task)
    }
}

impl From<collection::Task> for Task {
    fn from(task: collection::Task) -> Self {
        Self::Collection(task)
    }
}

impl From<card_search::Task> for Task {
    fn from(task: card_search::Task) -> Self {
        Self::CardSearch(task)
    }
}

impl From<cardsets::Task> for Task {
    fn from(task: cardsets::Task) -> Self {
        Self::Cardsets(task)
    }
}

impl From<prices::Task> for Task {
    fn from(task: prices::Task) -> Self {
        Self::Prices(task)
    }
}

impl From<images::Task> for Task {
    fn from(task: images::Task) -> Self {
        Self::Images(task)
    }
}

impl Task {
    pub(crate) async fn execute<E: ClientEnvironment>(self, env: &E) -> Effect {
        log::debug!("Executing task: {self:?}");
        match self {
            Self::Auth(task) => task.execute(env).await.into(),
            Self::Collection(task) => task.execute(env).await.into(),
            Self::CardSearch(task) => task.execute(env).await.into(),
            Self::Cardsets(task) => task.execute(env).await.into(),
            Self::Prices(task) => task.execute(env).await.into(),
            Self::Images(task) => task.execute(env).await.into(),
        }
    }
}
