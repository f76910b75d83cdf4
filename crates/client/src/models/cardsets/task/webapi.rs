// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{CardKind, Cardset, CatalogCard, card::CardsetId};
use cardfolio_core_json::{
    card::{Cardset as JsonCardset, CatalogCard as JsonCatalogCard},
    util::list_from_value,
};

use crate::webapi::{ClientEnvironment, send};

use super::{super::Effect, Task};

impl Task {
    pub async fn execute<E: ClientEnvironment>(self, env: &E) -> Effect {
        log::trace!("Executing task: {self:?}");
        match self {
            Self::FetchCardsets { token, kind } => {
                let result = fetch_cardsets(env, kind).await;
                Effect::FetchCardsetsFinished { token, result }
            }
            Self::FetchCards {
                token,
                kind,
                cardset_id,
            } => {
                let result = fetch_cards(env, kind, cardset_id).await;
                Effect::FetchCardsFinished { token, result }
            }
        }
    }
}

async fn fetch_cardsets<E: ClientEnvironment>(
    env: &E,
    kind: CardKind,
) -> anyhow::Result<Vec<Cardset>> {
    let request_url =
        env.join_api_path(&["cardsets", kind.descriptor().cardsets_segment, "all"])?;
    let request = env.client().get(request_url);
    let response = send(request).await?;
    let cardsets = list_from_value::<JsonCardset>(response)
        .into_iter()
        .map(Into::into)
        .collect::<Vec<_>>();
    log::debug!("Fetched {count} card set(s)", count = cardsets.len());
    Ok(cardsets)
}

async fn fetch_cards<E: ClientEnvironment>(
    env: &E,
    kind: CardKind,
    cardset_id: CardsetId,
) -> anyhow::Result<Vec<CatalogCard>> {
    let cardset_id = cardset_id.to_string();
    let request_url = env.join_api_path(&[
        "cardsets",
        kind.descriptor().cardsets_segment,
        "id",
        &cardset_id,
        "cards",
    ])?;
    let request = env.client().get(request_url);
    let response = send(request).await?;
    let cards = list_from_value::<JsonCatalogCard>(response)
        .into_iter()
        .map(Into::into)
        .collect::<Vec<_>>();
    log::debug!(
        "Fetched {count} card(s) of card set {cardset_id}",
        count = cards.len()
    );
    Ok(cards)
}
