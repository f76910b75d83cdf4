// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Trading card collection client
//!
//! Re-exports the sub-crates that are enabled by features.

pub use cardfolio_core::*;

#[cfg(feature = "api")]
pub use cardfolio_core_api as api;

#[cfg(feature = "json")]
pub use cardfolio_core_json as json;

#[cfg(feature = "client")]
pub use cardfolio_client as client;
