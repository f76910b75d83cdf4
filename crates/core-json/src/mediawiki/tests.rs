// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde_json::json;

use super::*;

#[test]
fn first_url_of_existing_file() {
    let response: ImageInfoResponse = serde_json::from_value(json!({
        "batchcomplete": "",
        "query": {
            "pages": {
                "123": {
                    "pageid": 123,
                    "title": "File:DarkMagician.png",
                    "imageinfo": [{"url": "https://images.example.com/DarkMagician.png"}]
                }
            }
        }
    }))
    .unwrap();
    assert_eq!(
        Some("https://images.example.com/DarkMagician.png"),
        response.into_first_url().as_deref()
    );
}

#[test]
fn no_url_of_missing_file() {
    let response: ImageInfoResponse = serde_json::from_value(json!({
        "query": {
            "pages": {
                "-1": {"title": "File:Missing.png", "missing": ""}
            }
        }
    }))
    .unwrap();
    assert_eq!(None, response.into_first_url());
    let response: ImageInfoResponse = serde_json::from_value(json!({})).unwrap();
    assert_eq!(None, response.into_first_url());
}
