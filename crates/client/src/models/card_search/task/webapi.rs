// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{CardKind, CatalogCard};
use cardfolio_core_json::{card::CatalogCard as JsonCatalogCard, util::list_from_value};

use crate::webapi::{ClientEnvironment, send};

use super::{super::Effect, Task};

impl Task {
    pub async fn execute<E: ClientEnvironment>(self, env: &E) -> Effect {
        log::trace!("Executing task: {self:?}");
        match self {
            Self::Search { token, kind, query } => {
                let result = search(env, kind, &query).await;
                Effect::SearchFinished { token, result }
            }
        }
    }
}

async fn search<E: ClientEnvironment>(
    env: &E,
    kind: CardKind,
    query: &str,
) -> anyhow::Result<Vec<CatalogCard>> {
    let segment = kind.descriptor().catalog_segment;
    let mut request_url = env.join_api_path(&["cards", segment, "search"])?;
    let query = serde_urlencoded::to_string([("query", query)])?;
    request_url.set_query(Some(&query));
    let request = env.client().get(request_url);
    let response = send(request).await?;
    let cards = list_from_value::<JsonCatalogCard>(response)
        .into_iter()
        .map(Into::into)
        .collect::<Vec<_>>();
    log::debug!("Found {count} {segment} card(s)", count = cards.len());
    Ok(cards)
}
