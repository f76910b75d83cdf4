// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{
    BulkAddItems, CardKind, CollectionItem, ItemAttributes, NewCollectionItem, UserItemId,
};
use cardfolio_core_json::collection::CollectionPage;
use reqwest::header::CONTENT_TYPE;

use crate::webapi::{ClientEnvironment, send_authorized};

use super::{super::Effect, Task};

/// Number of items that are requested at once
const FETCH_PAGE_SIZE: usize = 100;

/// Upper bound for the number of requested pages
const MAX_FETCH_PAGES: usize = 1_000;

const JSON_CONTENT_TYPE: &str = "application/json";

impl Task {
    pub async fn execute<E: ClientEnvironment>(self, env: &E) -> Effect {
        log::trace!("Executing task: {self:?}");
        match self {
            Self::FetchItems { token } => {
                let result = fetch_items(env).await;
                Effect::FetchItemsFinished { token, result }
            }
            Self::AddItem {
                request_id,
                new_item,
            } => {
                let result = add_item(env, new_item).await;
                Effect::AddItemFinished { request_id, result }
            }
            Self::EditItem {
                user_item_id,
                kind,
                attributes,
            } => {
                let result = edit_item(env, user_item_id, kind, attributes).await;
                Effect::EditItemFinished(result)
            }
            Self::DeleteItem { user_item_id } => {
                let result = delete_item(env, user_item_id).await;
                Effect::DeleteItemFinished(result)
            }
            Self::BulkAddItems(bulk_add) => {
                let result = bulk_add_items(env, bulk_add).await;
                Effect::BulkAddItemsFinished(result)
            }
        }
    }
}

async fn fetch_items<E: ClientEnvironment>(env: &E) -> anyhow::Result<Vec<CollectionItem>> {
    let session = env.session_store().require()?;
    let mut items = Vec::new();
    for page in 1..=MAX_FETCH_PAGES {
        let mut request_url = env.join_api_path(&["items", "user", "v2", &session.username])?;
        let query = serde_urlencoded::to_string([("page", page), ("size", FETCH_PAGE_SIZE)])?;
        request_url.set_query(Some(&query));
        let request = env.client().get(request_url);
        let response = send_authorized(request, &session).await?;
        let collection_page = CollectionPage::from_value(response);
        let total_count = collection_page.total_count;
        let page_items = collection_page.into_items();
        let page_len = page_items.len();
        items.extend(page_items);
        if page_len < FETCH_PAGE_SIZE
            || total_count
                .and_then(|total_count| usize::try_from(total_count).ok())
                .is_some_and(|total_count| items.len() >= total_count)
        {
            break;
        }
    }
    log::debug!("Fetched {count} collection item(s)", count = items.len());
    Ok(items)
}

async fn add_item<E: ClientEnvironment>(
    env: &E,
    new_item: NewCollectionItem,
) -> anyhow::Result<Option<UserItemId>> {
    let session = env.session_store().require()?;
    let NewCollectionItem {
        kind,
        specific_id,
        attributes,
        source_item_details: _,
    } = new_item;
    let url = env.join_api_path(&[
        "items",
        "table",
        kind.source_table(),
        "item",
        &specific_id.to_string(),
        "user",
        &session.username,
    ])?;
    let body = serde_json::to_vec(&cardfolio_core_json::collection::ItemAttributes::new(
        attributes,
        kind.descriptor(),
    ))?;
    let request = env
        .client()
        .post(url)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(body);
    let response = send_authorized(request, &session).await?;
    let user_item_id = response
        .get("user_item_id")
        .and_then(serde_json::Value::as_u64);
    log::debug!("Added card {specific_id} as user item {user_item_id:?}");
    Ok(user_item_id)
}

async fn edit_item<E: ClientEnvironment>(
    env: &E,
    user_item_id: UserItemId,
    kind: Option<CardKind>,
    attributes: ItemAttributes,
) -> anyhow::Result<()> {
    let session = env.session_store().require()?;
    let url = env.join_api_path(&[
        "items",
        &user_item_id.to_string(),
        "user",
        &session.username,
    ])?;
    let attributes = if let Some(kind) = kind {
        cardfolio_core_json::collection::ItemAttributes::new(attributes, kind.descriptor())
    } else {
        attributes.into()
    };
    let body = serde_json::to_vec(&attributes)?;
    let request = env
        .client()
        .put(url)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(body);
    let _response = send_authorized(request, &session).await?;
    log::debug!("Edited user item {user_item_id}");
    Ok(())
}

async fn delete_item<E: ClientEnvironment>(
    env: &E,
    user_item_id: UserItemId,
) -> anyhow::Result<()> {
    let session = env.session_store().require()?;
    let url = env.join_api_path(&[
        "items",
        &user_item_id.to_string(),
        "user",
        &session.username,
        "delete",
    ])?;
    let request = env.client().delete(url);
    let _response = send_authorized(request, &session).await?;
    log::debug!("Deleted user item {user_item_id}");
    Ok(())
}

async fn bulk_add_items<E: ClientEnvironment>(
    env: &E,
    bulk_add: BulkAddItems,
) -> anyhow::Result<usize> {
    let session = env.session_store().require()?;
    let count = bulk_add.specific_ids.len();
    let url = env.join_api_path(&[
        "items",
        "table",
        bulk_add.kind.source_table(),
        "items",
        "user",
        &session.username,
    ])?;
    let body = serde_json::to_vec(&cardfolio_core_json::collection::BulkAddItems::from(bulk_add))?;
    let request = env
        .client()
        .post(url)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(body);
    let _response = send_authorized(request, &session).await?;
    log::debug!("Added {count} card(s) at once");
    Ok(count)
}
