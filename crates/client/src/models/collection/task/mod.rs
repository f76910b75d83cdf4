// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{BulkAddItems, CardKind, ItemAttributes, NewCollectionItem, UserItemId};

use crate::util::roundtrip::PendingToken;

use super::RequestId;

#[derive(Debug)]
pub enum Task {
    FetchItems {
        token: PendingToken,
    },
    AddItem {
        request_id: RequestId,
        new_item: NewCollectionItem,
    },
    EditItem {
        user_item_id: UserItemId,
        kind: Option<CardKind>,
        attributes: ItemAttributes,
    },
    DeleteItem {
        user_item_id: UserItemId,
    },
    BulkAddItems(BulkAddItems),
}

#[cfg(feature = "webapi-backend")]
mod webapi;
