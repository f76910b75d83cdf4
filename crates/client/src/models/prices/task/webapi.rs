// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{PriceListing, PriceVariant, SoldPriceUpdate};
use cardfolio_core_json::{
    price::{PriceListing as JsonPriceListing, sold_price_update_from_value},
    util::list_from_value,
};
use url::Url;

use crate::webapi::{ClientEnvironment, send};

use super::{
    super::{Effect, PricedCard, RefreshOutcome},
    Task,
};

impl Task {
    pub async fn execute<E: ClientEnvironment>(self, env: &E) -> Effect {
        log::trace!("Executing task: {self:?}");
        match self {
            Self::FetchListings { token, card } => {
                let result = fetch_listings(env, card).await;
                Effect::FetchListingsFinished { token, result }
            }
            Self::RefreshSoldPrices { card, variants } => {
                let mut outcomes = Vec::with_capacity(variants.len().max(1));
                if variants.is_empty() {
                    let result = refresh_sold_prices(env, card, None).await;
                    outcomes.push(RefreshOutcome {
                        variant: None,
                        result,
                    });
                }
                // A failed variant does not stop the remaining variants
                for variant in variants {
                    let result = refresh_sold_prices(env, card, Some(variant)).await;
                    outcomes.push(RefreshOutcome {
                        variant: Some(variant),
                        result,
                    });
                }
                Effect::SoldPricesRefreshed { card, outcomes }
            }
        }
    }
}

fn card_url<E: ClientEnvironment>(
    env: &E,
    card: PricedCard,
    suffix: &[&str],
) -> anyhow::Result<Url> {
    let PricedCard { kind, specific_id } = card;
    let specific_id = specific_id.to_string();
    let mut segments = vec![
        "items",
        "table",
        kind.source_table(),
        "item",
        specific_id.as_str(),
    ];
    segments.extend_from_slice(suffix);
    env.join_api_path(&segments)
}

async fn fetch_listings<E: ClientEnvironment>(
    env: &E,
    card: PricedCard,
) -> anyhow::Result<Vec<PriceListing>> {
    let request_url = card_url(env, card, &["ebay", "prices", "all"])?;
    let request = env.client().get(request_url);
    let response = send(request).await?;
    let listings = list_from_value::<JsonPriceListing>(response)
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(listings)
}

async fn refresh_sold_prices<E: ClientEnvironment>(
    env: &E,
    card: PricedCard,
    variant: Option<PriceVariant>,
) -> anyhow::Result<Option<SoldPriceUpdate>> {
    let request_url = if let Some(PriceVariant {
        condition,
        is_first_edition,
    }) = variant
    {
        card_url(
            env,
            card,
            &[
                "condition",
                <&'static str>::from(condition),
                "first",
                if is_first_edition { "true" } else { "false" },
                "ebay",
                "sold_prices",
            ],
        )?
    } else {
        card_url(env, card, &["ebay", "sold_prices"])?
    };
    let request = env.client().post(request_url);
    let response = send(request).await?;
    Ok(sold_price_update_from_value(response))
}
