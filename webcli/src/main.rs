// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{env, io, str::FromStr, sync::Arc};

use anyhow::{Context as _, anyhow, bail};
use cardfolio_client::{
    messaging::{message_channel, message_loop, send_message},
    models::{
        auth::{self, Credentials, Registration},
        card_search, cardsets, collection,
        images::DEFAULT_IMAGE_SUFFIX,
        prices::{self, PricedCard},
    },
    notification::Notification,
};
use cardfolio_core::{
    CardKind, CatalogCard, Condition, Currency, ItemAttributes, NewCollectionItem,
};
use cardfolio_core_api::{
    collection::{SortField, SortOrder},
    sorting::SortDirection,
};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use strum::IntoEnumIterator as _;
use tokio::signal;
use url::Url;

mod model;
use self::model::{Environment, Intent, Message, State};

mod plan;
use self::plan::Plan;

mod report;
use self::report::Report;

const DEFAULT_LOG_FILTER: &str = "info";

const DEFAULT_API_URL: &str = "http://localhost:8000/";

const API_URL_ENV: &str = "CARDFOLIO_API_URL";
const MEDIAWIKI_API_URL_ENV: &str = "CARDFOLIO_MEDIAWIKI_API_URL";
const USERNAME_ENV: &str = "CARDFOLIO_USERNAME";
const PASSWORD_ENV: &str = "CARDFOLIO_PASSWORD";
const POKEMON_IMAGE_SUFFIX_ENV: &str = "CARDFOLIO_POKEMON_IMAGE_SUFFIX";

const API_URL_ARG: &str = "api-url";
const MEDIAWIKI_API_URL_ARG: &str = "mediawiki-api-url";
const USERNAME_ARG: &str = "username";
const PASSWORD_ARG: &str = "password";
const IMAGE_SUFFIX_ARG: &str = "image-suffix";

const EMAIL_ARG: &str = "email";
const KIND_ARG: &str = "kind";
const CARD_ID_ARG: &str = "card-id";
const ITEM_ID_ARG: &str = "item-id";
const NAME_ARG: &str = "name";
const QUANTITY_ARG: &str = "quantity";
const CONDITION_ARG: &str = "condition";
const EXTRAS_ARG: &str = "extras";
const FIRST_EDITION_ARG: &str = "first-edition";
const LANGUAGE_ARG: &str = "language";
const SOURCE_TABLE_ARG: &str = "source-table";
const SORT_ARG: &str = "sort";
const DESCENDING_ARG: &str = "descending";
const PAGE_ARG: &str = "page";
const PAGE_SIZE_ARG: &str = "page-size";
const CURRENCY_ARG: &str = "currency";
const QUERY_ARG: &str = "query";
const MORE_ARG: &str = "more";
const CARDSET_ID_ARG: &str = "cardset-id";
const REFRESH_ARG: &str = "refresh";

fn kind_arg() -> Arg {
    Arg::new(KIND_ARG)
        .long(KIND_ARG)
        .help("The kind of cards")
        .num_args(1)
        .value_parser(CardKind::iter().map(<&'static str>::from).collect::<Vec<_>>())
        .default_value(<&'static str>::from(CardKind::Pokemon))
}

fn card_id_arg() -> Arg {
    Arg::new(CARD_ID_ARG)
        .long(CARD_ID_ARG)
        .help("The catalog id of the card")
        .num_args(1)
        .value_parser(value_parser!(u64))
        .required(true)
}

fn item_id_arg() -> Arg {
    Arg::new(ITEM_ID_ARG)
        .long(ITEM_ID_ARG)
        .help("The id of the ownership record")
        .num_args(1)
        .value_parser(value_parser!(u64))
        .required(true)
}

fn attribute_args() -> [Arg; 4] {
    [
        Arg::new(QUANTITY_ARG)
            .long(QUANTITY_ARG)
            .num_args(1)
            .value_parser(value_parser!(u32))
            .default_value("1"),
        Arg::new(CONDITION_ARG)
            .long(CONDITION_ARG)
            .num_args(1)
            .value_parser(Condition::iter().map(<&'static str>::from).collect::<Vec<_>>())
            .default_value(<&'static str>::from(Condition::default())),
        Arg::new(EXTRAS_ARG)
            .long(EXTRAS_ARG)
            .help("Special printing, e.g. \"Holo\" or \"Reverse Holo\"")
            .num_args(1),
        Arg::new(FIRST_EDITION_ARG)
            .long(FIRST_EDITION_ARG)
            .action(ArgAction::SetTrue),
    ]
}

fn language_arg() -> Arg {
    Arg::new(LANGUAGE_ARG)
        .long(LANGUAGE_ARG)
        .help("Only show cards in this language")
        .num_args(1)
}

fn page_arg() -> Arg {
    Arg::new(PAGE_ARG)
        .long(PAGE_ARG)
        .num_args(1)
        .value_parser(value_parser!(usize))
}

#[allow(clippy::too_many_lines)]
fn command() -> Command {
    Command::new("cardfolio-cli")
        .about("A CLI for managing a trading card collection")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new(API_URL_ARG)
                .long(API_URL_ARG)
                .help("The base URL of the backend API")
                .num_args(1)
                .global(true),
        )
        .arg(
            Arg::new(MEDIAWIKI_API_URL_ARG)
                .long(MEDIAWIKI_API_URL_ARG)
                .help("The MediaWiki API for resolving wiki images")
                .num_args(1)
                .global(true),
        )
        .arg(
            Arg::new(USERNAME_ARG)
                .long(USERNAME_ARG)
                .num_args(1)
                .global(true),
        )
        .arg(
            Arg::new(PASSWORD_ARG)
                .long(PASSWORD_ARG)
                .num_args(1)
                .global(true),
        )
        .arg(
            Arg::new(IMAGE_SUFFIX_ARG)
                .long(IMAGE_SUFFIX_ARG)
                .help("Quality suffix of Pokémon card images")
                .num_args(1)
                .global(true),
        )
        .subcommand_required(true)
        .subcommand(Command::new("login").about("Logs in and verifies the credentials"))
        .subcommand(
            Command::new("register")
                .about("Registers a new user account")
                .arg(
                    Arg::new(EMAIL_ARG)
                        .long(EMAIL_ARG)
                        .num_args(1)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("collection")
                .about("Tasks for the collection of the user")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list")
                        .about("Lists the owned cards")
                        .arg(
                            Arg::new(NAME_ARG)
                                .long(NAME_ARG)
                                .help("Only show cards with a matching name")
                                .num_args(1),
                        )
                        .arg(language_arg())
                        .arg(
                            Arg::new(SOURCE_TABLE_ARG)
                                .long(SOURCE_TABLE_ARG)
                                .help("Only show cards of this kind, e.g. \"cards_pokemon\"")
                                .num_args(1),
                        )
                        .arg(
                            Arg::new(SORT_ARG)
                                .long(SORT_ARG)
                                .num_args(1)
                                .value_parser(
                                    SortField::iter()
                                        .map(<&'static str>::from)
                                        .collect::<Vec<_>>(),
                                ),
                        )
                        .arg(
                            Arg::new(DESCENDING_ARG)
                                .long(DESCENDING_ARG)
                                .requires(SORT_ARG)
                                .action(ArgAction::SetTrue),
                        )
                        .arg(page_arg())
                        .arg(
                            Arg::new(PAGE_SIZE_ARG)
                                .long(PAGE_SIZE_ARG)
                                .num_args(1)
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(
                            Arg::new(CURRENCY_ARG)
                                .long(CURRENCY_ARG)
                                .num_args(1)
                                .value_parser(["dollar", "euro"]),
                        ),
                )
                .subcommand(
                    Command::new("add")
                        .about("Adds a card to the collection")
                        .arg(kind_arg())
                        .arg(card_id_arg())
                        .arg(
                            Arg::new(NAME_ARG)
                                .long(NAME_ARG)
                                .help("The name that is displayed until the card is confirmed")
                                .num_args(1),
                        )
                        .args(attribute_args()),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edits an ownership record")
                        .arg(item_id_arg())
                        .arg(kind_arg())
                        .args(attribute_args()),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Deletes an ownership record")
                        .arg(item_id_arg()),
                )
                .subcommand(
                    Command::new("bulk-add")
                        .about("Adds multiple cards with the same attributes")
                        .arg(kind_arg())
                        .arg(card_id_arg().action(ArgAction::Append))
                        .args(attribute_args()),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Searches the card catalog")
                .arg(kind_arg())
                .arg(language_arg())
                .arg(
                    Arg::new(MORE_ARG)
                        .long(MORE_ARG)
                        .help("How many times to load more results")
                        .num_args(1)
                        .value_parser(value_parser!(usize))
                        .default_value("0"),
                )
                .arg(Arg::new(QUERY_ARG).num_args(1).required(true)),
        )
        .subcommand(
            Command::new("cardsets")
                .about("Lists card sets or the cards of a card set")
                .arg(kind_arg())
                .arg(
                    Arg::new(NAME_ARG)
                        .long(NAME_ARG)
                        .help("Only show card sets with a matching name")
                        .num_args(1),
                )
                .arg(language_arg())
                .arg(page_arg())
                .arg(
                    Arg::new(CARDSET_ID_ARG)
                        .long(CARDSET_ID_ARG)
                        .help("Show the cards of this card set")
                        .num_args(1)
                        .value_parser(value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("prices")
                .about("Shows the market prices of a card")
                .arg(kind_arg())
                .arg(card_id_arg())
                .arg(
                    Arg::new(REFRESH_ARG)
                        .long(REFRESH_ARG)
                        .help("Refresh the sold prices before showing them")
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Explicit argument with a fallback to an environment variable
fn arg_or_env(matches: &ArgMatches, arg: &str, env_var: &str) -> Option<String> {
    matches
        .get_one::<String>(arg)
        .cloned()
        .or_else(|| env::var(env_var).ok())
        .filter(|value| !value.trim().is_empty())
}

fn parse_arg<T>(matches: &ArgMatches, arg: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    matches
        .get_one::<String>(arg)
        .map(|value| value.parse().with_context(|| format!("invalid {arg}: {value}")))
        .transpose()
}

fn card_kind(matches: &ArgMatches) -> anyhow::Result<CardKind> {
    parse_arg(matches, KIND_ARG)?.ok_or_else(|| anyhow!("missing {KIND_ARG}"))
}

fn card_id(matches: &ArgMatches) -> anyhow::Result<u64> {
    matches
        .get_one::<u64>(CARD_ID_ARG)
        .copied()
        .ok_or_else(|| anyhow!("missing {CARD_ID_ARG}"))
}

fn item_id(matches: &ArgMatches) -> anyhow::Result<u64> {
    matches
        .get_one::<u64>(ITEM_ID_ARG)
        .copied()
        .ok_or_else(|| anyhow!("missing {ITEM_ID_ARG}"))
}

fn item_attributes(matches: &ArgMatches) -> anyhow::Result<ItemAttributes> {
    Ok(ItemAttributes {
        quantity: matches.get_one::<u32>(QUANTITY_ARG).copied().unwrap_or(1),
        condition: parse_arg(matches, CONDITION_ARG)?.unwrap_or_default(),
        extras: matches.get_one::<String>(EXTRAS_ARG).cloned(),
        is_first_edition: matches.get_flag(FIRST_EDITION_ARG),
    })
}

fn credentials(matches: &ArgMatches) -> anyhow::Result<Credentials> {
    let username = arg_or_env(matches, USERNAME_ARG, USERNAME_ENV)
        .ok_or_else(|| anyhow!("missing {USERNAME_ARG} or {USERNAME_ENV}"))?;
    let password = arg_or_env(matches, PASSWORD_ARG, PASSWORD_ENV)
        .ok_or_else(|| anyhow!("missing {PASSWORD_ARG} or {PASSWORD_ENV}"))?;
    Ok(Credentials { username, password })
}

fn login(matches: &ArgMatches) -> anyhow::Result<Intent> {
    Ok(auth::Intent::Login(credentials(matches)?).into())
}

fn collection_list_intents(matches: &ArgMatches) -> anyhow::Result<Vec<Intent>> {
    let mut intents = Vec::new();
    if let Some(name) = matches.get_one::<String>(NAME_ARG) {
        intents.push(collection::Intent::SetNameFilter(name.clone()).into());
    }
    if let Some(language) = matches.get_one::<String>(LANGUAGE_ARG) {
        intents.push(collection::Intent::SetLanguageFilter(language.clone()).into());
    }
    if let Some(source_table) = matches.get_one::<String>(SOURCE_TABLE_ARG) {
        intents.push(collection::Intent::SetSourceTableFilter(source_table.clone()).into());
    }
    if let Some(field) = parse_arg::<SortField>(matches, SORT_ARG)? {
        let direction = if matches.get_flag(DESCENDING_ARG) {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        let ordering = SortOrder {
            direction,
            ..SortOrder::ascending(field)
        };
        intents.push(collection::Intent::SetOrdering(Some(ordering)).into());
    }
    if let Some(currency) = parse_arg::<Currency>(matches, CURRENCY_ARG)? {
        intents.push(collection::Intent::SetDisplayCurrency(currency).into());
    }
    if let Some(page_size) = matches.get_one::<usize>(PAGE_SIZE_ARG) {
        intents.push(collection::Intent::SetPageSize(*page_size).into());
    }
    // The page is reset by all other parameters
    if let Some(page) = matches.get_one::<usize>(PAGE_ARG) {
        intents.push(collection::Intent::SetPage(*page).into());
    }
    Ok(intents)
}

fn collection_plan(matches: &ArgMatches) -> anyhow::Result<(Vec<Intent>, Report)> {
    let mut intents = vec![login(matches)?, collection::Intent::FetchItems.into()];
    match matches.subcommand() {
        Some(("list", matches)) => {
            intents.extend(collection_list_intents(matches)?);
        }
        Some(("add", matches)) => {
            let card = CatalogCard {
                id: card_id(matches)?,
                name: matches
                    .get_one::<String>(NAME_ARG)
                    .cloned()
                    .unwrap_or_default(),
                ..Default::default()
            };
            let new_item =
                NewCollectionItem::from_card(card_kind(matches)?, &card, item_attributes(matches)?);
            intents.push(collection::Intent::AddItem(new_item).into());
        }
        Some(("edit", matches)) => {
            intents.push(
                collection::Intent::EditItem {
                    user_item_id: item_id(matches)?,
                    kind: Some(card_kind(matches)?),
                    attributes: item_attributes(matches)?,
                }
                .into(),
            );
        }
        Some(("delete", matches)) => {
            intents.push(
                collection::Intent::DeleteItem {
                    user_item_id: item_id(matches)?,
                }
                .into(),
            );
        }
        Some(("bulk-add", matches)) => {
            intents.push(collection::Intent::ClearBulkSelection.into());
            for specific_id in matches.get_many::<u64>(CARD_ID_ARG).into_iter().flatten() {
                intents.push(
                    collection::Intent::ToggleBulkSelection {
                        specific_id: *specific_id,
                    }
                    .into(),
                );
            }
            intents.push(
                collection::Intent::BulkAddSelected {
                    kind: card_kind(matches)?,
                    attributes: item_attributes(matches)?,
                }
                .into(),
            );
        }
        _ => bail!("missing collection subcommand"),
    }
    Ok((intents, Report::Collection))
}

fn search_plan(matches: &ArgMatches) -> anyhow::Result<(Vec<Intent>, Report)> {
    let query = matches
        .get_one::<String>(QUERY_ARG)
        .cloned()
        .ok_or_else(|| anyhow!("missing {QUERY_ARG}"))?;
    let mut intents = vec![
        card_search::Intent::SetKind(card_kind(matches)?).into(),
        card_search::Intent::SetQuery(query).into(),
        card_search::Intent::Search.into(),
    ];
    if let Some(language) = matches.get_one::<String>(LANGUAGE_ARG) {
        intents.push(card_search::Intent::SetLanguageFilter(language.clone()).into());
    }
    let load_more = matches.get_one::<usize>(MORE_ARG).copied().unwrap_or(0);
    intents.extend((0..load_more).map(|_| card_search::Intent::LoadMore.into()));
    Ok((intents, Report::CardSearch))
}

fn cardsets_plan(matches: &ArgMatches) -> anyhow::Result<(Vec<Intent>, Report)> {
    let mut intents = vec![cardsets::Intent::SetKind(card_kind(matches)?).into()];
    if let Some(name) = matches.get_one::<String>(NAME_ARG) {
        intents.push(cardsets::Intent::SetNameFilter(name.clone()).into());
    }
    if let Some(language) = matches.get_one::<String>(LANGUAGE_ARG) {
        intents.push(cardsets::Intent::SetLanguageFilter(language.clone()).into());
    }
    if let Some(page) = matches.get_one::<usize>(PAGE_ARG) {
        intents.push(cardsets::Intent::SetPage(*page).into());
    }
    if let Some(cardset_id) = matches.get_one::<u64>(CARDSET_ID_ARG) {
        intents.push(cardsets::Intent::SelectCardset(*cardset_id).into());
    }
    Ok((intents, Report::Cardsets))
}

fn prices_plan(matches: &ArgMatches) -> anyhow::Result<(Vec<Intent>, Report)> {
    let card = PricedCard {
        kind: card_kind(matches)?,
        specific_id: card_id(matches)?,
    };
    let mut intents = vec![prices::Intent::SelectCard(card).into()];
    if matches.get_flag(REFRESH_ARG) {
        intents.push(prices::Intent::RefreshSoldPrices.into());
    }
    Ok((intents, Report::Prices))
}

fn command_plan(matches: &ArgMatches) -> anyhow::Result<(Vec<Intent>, Report)> {
    match matches.subcommand() {
        Some(("login", _)) => Ok((vec![login(matches)?], Report::Session)),
        Some(("register", sub_matches)) => {
            let email = sub_matches
                .get_one::<String>(EMAIL_ARG)
                .cloned()
                .ok_or_else(|| anyhow!("missing {EMAIL_ARG}"))?;
            let registration = Registration {
                credentials: credentials(matches)?,
                email,
            };
            Ok((vec![auth::Intent::Register(registration).into()], Report::Session))
        }
        Some(("collection", sub_matches)) => collection_plan(sub_matches),
        Some(("search", sub_matches)) => search_plan(sub_matches),
        Some(("cardsets", sub_matches)) => cardsets_plan(sub_matches),
        Some(("prices", sub_matches)) => prices_plan(sub_matches),
        _ => bail!("missing subcommand"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let matches = command().get_matches();

    let api_url = arg_or_env(&matches, API_URL_ARG, API_URL_ENV)
        .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
    let api_url = Url::parse(&api_url).with_context(|| format!("invalid {API_URL_ARG}"))?;
    let mediawiki_api_url = arg_or_env(&matches, MEDIAWIKI_API_URL_ARG, MEDIAWIKI_API_URL_ENV)
        .map(|url| Url::parse(&url))
        .transpose()
        .with_context(|| format!("invalid {MEDIAWIKI_API_URL_ARG}"))?;
    let image_suffix = arg_or_env(&matches, IMAGE_SUFFIX_ARG, POKEMON_IMAGE_SUFFIX_ENV)
        .unwrap_or_else(|| DEFAULT_IMAGE_SUFFIX.to_owned());

    let (intents, report) = command_plan(&matches)?;
    let mut plan = Plan::new(intents).resolve_images(mediawiki_api_url.is_some());

    let shared_env = Arc::new(Environment::new(api_url, mediawiki_api_url));
    let (message_tx, message_rx) = message_channel();

    // Handle Ctrl-C/SIGINT signals to abort processing
    tokio::spawn({
        let message_tx = message_tx.clone();
        async move {
            if let Err(err) = signal::ctrl_c().await {
                log::error!("Failed to receive Ctrl-C/SIGINT signal: {err}");
            }
            log::info!("Terminating after receiving Ctrl-C/SIGINT...");
            send_message(&message_tx, Message::Intent(Intent::Terminate));
        }
    });

    // Kick off the loop by sending a first message
    // before awaiting its termination
    send_message(&message_tx, Message::Intent(Intent::RenderState));
    let state = message_loop(
        shared_env,
        (message_tx, message_rx),
        State::new(image_suffix),
        Box::new(move |state: &State| plan.render_state(state)),
    )
    .await;
    log::info!("Exited message loop");

    let errors = state
        .notifications()
        .filter(|notification| notification.is_error())
        .map(Notification::to_string)
        .collect::<Vec<_>>();
    if !errors.is_empty() {
        for err in &errors {
            log::error!("{err}");
        }
        bail!("{err}", err = errors.join(" | "));
    }

    report.write(&state, &mut io::stdout().lock())?;
    Ok(())
}
