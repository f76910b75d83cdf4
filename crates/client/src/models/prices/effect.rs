// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{PriceListing, PriceVariant, SoldPriceUpdate};

use crate::{notification::Notification, util::roundtrip::PendingToken};

use super::{PricedCard, State, StateUpdated, fetch_listings};

/// Outcome of refreshing the sold prices of a single variant
///
/// The variant is absent if prices are refreshed for the whole card.
#[derive(Debug)]
pub struct RefreshOutcome {
    pub variant: Option<PriceVariant>,

    /// `None` if no new prices are available
    pub result: anyhow::Result<Option<SoldPriceUpdate>>,
}

impl RefreshOutcome {
    fn into_notification(self) -> Notification {
        let Self { variant, result } = self;
        match (variant, result) {
            (Some(variant), Ok(Some(update))) => Notification::success(format!(
                "Price updated ({condition} {edition} | {prices})",
                condition = variant.condition,
                edition = if variant.is_first_edition { "1st" } else { "" },
                prices = format_prices(&update),
            )),
            (None, Ok(Some(update))) => Notification::success(format!(
                "Price updated | {prices}",
                prices = format_prices(&update)
            )),
            (Some(variant), Ok(None)) => Notification::info(format!(
                "No new pricing information for {condition}.",
                condition = variant.condition
            )),
            (None, Ok(None)) => Notification::info("No new pricing information available."),
            (Some(variant), Err(err)) => {
                log::warn!("Failed to update price for {variant:?}: {err:#}");
                Notification::error(format!(
                    "Failed to update price for {condition}.",
                    condition = variant.condition
                ))
            }
            (None, Err(err)) => {
                log::warn!("Failed to update price: {err:#}");
                Notification::error("Failed to update price.")
            }
        }
    }
}

fn format_price(price: Option<f64>) -> String {
    price.map_or_else(|| "n/a".to_owned(), |price| format!("{price:.2}"))
}

fn format_prices(update: &SoldPriceUpdate) -> String {
    let SoldPriceUpdate {
        median_price,
        highest_price,
        lowest_price,
    } = update;
    format!(
        "Median: {median}, High: {high}, Low: {low}",
        median = format_price(*median_price),
        high = format_price(*highest_price),
        low = format_price(*lowest_price),
    )
}

#[derive(Debug)]
pub enum Effect {
    FetchListingsFinished {
        token: PendingToken,
        result: anyhow::Result<Vec<PriceListing>>,
    },
    SoldPricesRefreshed {
        card: PricedCard,
        outcomes: Vec<RefreshOutcome>,
    },
}

impl Effect {
    pub fn apply_on(self, state: &mut State) -> StateUpdated {
        log::trace!("Applying effect {self:?} on {state:?}");
        match self {
            Self::FetchListingsFinished { token, result } => {
                let (listings, err) = match result {
                    Ok(listings) => (listings, None),
                    Err(err) => (Vec::new(), Some(err)),
                };
                if state
                    .listings
                    .finish_pending_with_value_now(token, listings)
                    .is_err()
                {
                    log::debug!("Discarding superseded price listings");
                    return StateUpdated::unchanged(None);
                }
                if let Some(err) = err {
                    log::warn!("Failed to fetch price data: {err:#}");
                    state.notify(Notification::error("Failed to fetch price data."));
                }
                StateUpdated::maybe_changed(None)
            }
            Self::SoldPricesRefreshed { card, outcomes } => {
                debug_assert!(state.refresh_pending);
                state.refresh_pending = false;
                let any_updated = outcomes
                    .iter()
                    .any(|outcome| matches!(outcome.result, Ok(Some(_))));
                for outcome in outcomes {
                    state.notify(outcome.into_notification());
                }
                if any_updated && state.card == Some(card) {
                    return fetch_listings(state, card);
                }
                StateUpdated::maybe_changed(None)
            }
        }
    }
}
