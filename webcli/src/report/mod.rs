// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::io;

use cardfolio_core::{
    AggregatedEntry, CardKind, CatalogCard, CollectionItem, Currency, PriceListing,
};

use crate::model::State;

/// What is printed after a command has finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Report {
    Session,
    Collection,
    CardSearch,
    Cardsets,
    Prices,
}

impl Report {
    pub(crate) fn write(self, state: &State, out: &mut impl io::Write) -> io::Result<()> {
        match self {
            Self::Session => write_session(state, out),
            Self::Collection => write_collection(state, out),
            Self::CardSearch => write_card_search(state, out),
            Self::Cardsets => write_cardsets(state, out),
            Self::Prices => write_prices(state, out),
        }
    }
}

fn write_session(state: &State, out: &mut impl io::Write) -> io::Result<()> {
    match state.auth.username() {
        Some(username) => writeln!(out, "Logged in as {username}"),
        None => writeln!(out, "Not logged in"),
    }
}

fn format_price(currency: Currency, price: Option<f64>) -> String {
    price.map_or_else(
        || "n/a".to_owned(),
        |price| format!("{symbol}{price:.2}", symbol = currency.symbol()),
    )
}

/// A single ownership record, identified for editing or deleting
fn write_item(item: &CollectionItem, out: &mut impl io::Write) -> io::Result<()> {
    let details = &item.source_item_details;
    let user_item_id = item
        .user_item_id
        .map_or_else(|| "pending".to_owned(), |user_item_id| user_item_id.to_string());
    let condition = item
        .user_item_details
        .condition
        .map_or("", |condition| condition.short_label());
    let median = item.prices.as_ref().map_or_else(
        || "n/a".to_owned(),
        |prices| format_price(prices.currency, prices.median),
    );
    writeln!(
        out,
        "{user_item_id:>8} {quantity:>4}x {name} [{code}] {set} {condition} {median}",
        quantity = item.user_item_details.quantity_or_zero(),
        name = item.name(),
        code = details.code.as_deref().unwrap_or("-"),
        set = details.set.as_deref().unwrap_or("-"),
    )
}

fn write_collection(state: &State, out: &mut impl io::Write) -> io::Result<()> {
    let collection = &state.collection;
    let view = collection.view();
    for item in view.page_items() {
        write_item(item, out)?;
    }
    writeln!(
        out,
        "Page {page} of {page_count} ({total_count} record(s))",
        page = view.pagination().page,
        page_count = view.page_count(),
        total_count = view.total_count(),
    )?;
    let totals = collection.price_totals();
    writeln!(
        out,
        "Total | Median: {median}, High: {high}, Low: {low}",
        median = format_price(totals.currency, Some(totals.median)),
        high = format_price(totals.currency, Some(totals.high)),
        low = format_price(totals.currency, Some(totals.low)),
    )
}

fn write_card(
    state: &State,
    kind: CardKind,
    card: &CatalogCard,
    out: &mut impl io::Write,
) -> io::Result<()> {
    let owned = state
        .collection
        .owned_entry(card.id)
        .map_or(0, AggregatedEntry::quantity);
    writeln!(
        out,
        "{id:>8} {name} [{set_number}] {set} {image}{owned}",
        id = card.id,
        name = card.name,
        set_number = card.set_number.as_deref().unwrap_or("-"),
        set = card.set.as_deref().unwrap_or("-"),
        image = state.images.image_url(kind, &card.images),
        owned = if owned > 0 {
            format!(" (owned: {owned})")
        } else {
            String::new()
        },
    )
}

fn write_card_search(state: &State, out: &mut impl io::Write) -> io::Result<()> {
    let card_search = &state.card_search;
    let visible = card_search.visible();
    for card in &visible.cards {
        write_card(state, card_search.kind(), card, out)?;
    }
    if visible.has_more {
        writeln!(out, "More cards available")?;
    }
    Ok(())
}

fn write_cardsets(state: &State, out: &mut impl io::Write) -> io::Result<()> {
    let cardsets = &state.cardsets;
    if let Some(cardset) = cardsets.selected_cardset() {
        writeln!(
            out,
            "{name} ({owned} of {count} owned)",
            name = cardset.name,
            owned = cardsets.owned_count(state.collection.entries()),
            count = cardsets.cards().len(),
        )?;
        for card in cardsets.cards() {
            write_card(state, cardsets.kind(), card, out)?;
        }
        return Ok(());
    }
    for cardset in cardsets.page_cardsets() {
        writeln!(
            out,
            "{id:>6} {name} [{code}] {language} {release_date}",
            id = cardset.id,
            name = cardset.name,
            code = cardset.code.as_deref().unwrap_or("-"),
            language = cardset.language.as_deref().unwrap_or("-"),
            release_date = cardset.release_date.as_deref().unwrap_or("-"),
        )?;
    }
    writeln!(
        out,
        "Page {page} of {page_count}",
        page = cardsets.params().pagination().page,
        page_count = cardsets.page_count(),
    )
}

fn write_listing(listing: &PriceListing, out: &mut impl io::Write) -> io::Result<()> {
    let condition = listing
        .condition
        .map_or("any", |condition| condition.short_label());
    let edition = if listing.is_first_edition {
        " 1st"
    } else {
        ""
    };
    writeln!(
        out,
        "{condition}{edition} | Median: {median}, High: {high}, Low: {low}, Mean: {mean}",
        median = format_price(Currency::Dollar, listing.median),
        high = format_price(Currency::Dollar, listing.highest),
        low = format_price(Currency::Dollar, listing.lowest),
        mean = format_price(Currency::Dollar, listing.mean),
    )
}

fn write_prices(state: &State, out: &mut impl io::Write) -> io::Result<()> {
    let listings = state.prices.listings();
    if listings.is_empty() {
        return writeln!(out, "No price data available");
    }
    for listing in listings {
        write_listing(listing, out)?;
    }
    Ok(())
}
