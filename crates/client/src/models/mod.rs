// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod auth;
pub mod card_search;
pub mod cardsets;
pub mod collection;
pub mod images;
pub mod prices;
