// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core_json::mediawiki::ImageInfoResponse;

use crate::webapi::{ClientEnvironment, send};

use super::{super::Effect, Task};

impl Task {
    pub async fn execute<E: ClientEnvironment>(self, env: &E) -> Effect {
        log::trace!("Executing task: {self:?}");
        match self {
            Self::ResolveWikiFile { file_name } => {
                let result = resolve_wiki_file(env, &file_name).await;
                Effect::WikiFileResolved { file_name, result }
            }
        }
    }
}

async fn resolve_wiki_file<E: ClientEnvironment>(
    env: &E,
    file_name: &str,
) -> anyhow::Result<Option<String>> {
    let Some(api_url) = env.mediawiki_api_url() else {
        anyhow::bail!("no MediaWiki API configured");
    };
    let mut request_url = api_url.clone();
    let title = format!("File:{file_name}");
    let query = serde_urlencoded::to_string([
        ("action", "query"),
        ("format", "json"),
        ("prop", "imageinfo"),
        ("titles", title.as_str()),
        ("iiprop", "url"),
    ])?;
    request_url.set_query(Some(&query));
    let request = env.client().get(request_url);
    let response = send(request).await?;
    let response: ImageInfoResponse = serde_json::from_value(response)?;
    Ok(response.into_first_url())
}
