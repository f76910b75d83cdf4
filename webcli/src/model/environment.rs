// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use reqwest::Client;
use url::Url;

use cardfolio_client::{
    messaging::send_message,
    session::{InMemorySessionStore, SessionStore},
    task::{PendingTasksCounter, TaskDispatcher},
    webapi::ClientEnvironment,
};

use super::{Effect, Intent, Message, MessageSender, Task};

/// Immutable environment
#[derive(Debug)]
pub(crate) struct Environment {
    api_url: Url,
    mediawiki_api_url: Option<Url>,
    client: Client,
    session_store: InMemorySessionStore,
    pending_tasks_counter: PendingTasksCounter,
}

impl Environment {
    #[must_use]
    pub(crate) fn new(api_url: Url, mediawiki_api_url: Option<Url>) -> Self {
        Self {
            api_url,
            mediawiki_api_url,
            client: Client::new(),
            session_store: InMemorySessionStore::new(),
            pending_tasks_counter: PendingTasksCounter::new(),
        }
    }
}

impl ClientEnvironment for Environment {
    fn client(&self) -> &Client {
        &self.client
    }

    fn join_api_url(&self, query_suffix: &str) -> anyhow::Result<Url> {
        let api_url = self.api_url.join(query_suffix)?;
        log::debug!("API URL: {api_url}");
        Ok(api_url)
    }

    fn session_store(&self) -> &dyn SessionStore {
        &self.session_store
    }

    fn mediawiki_api_url(&self) -> Option<&Url> {
        self.mediawiki_api_url.as_ref()
    }
}

impl TaskDispatcher<Intent, Effect, Task> for Environment {
    fn all_tasks_finished(&self) -> bool {
        self.pending_tasks_counter.all_pending_tasks_finished()
    }

    fn dispatch_task(&self, shared_self: Arc<Self>, message_tx: MessageSender, task: Task) {
        let started_pending_task = shared_self.pending_tasks_counter.start_pending_task();
        debug_assert!(started_pending_task > 0);
        if started_pending_task == 1 {
            log::debug!("Started first pending task");
        }
        tokio::spawn(async move {
            let effect = task.execute(&*shared_self).await;
            log::debug!("Task finished with effect: {effect:?}");
            send_message(&message_tx, Message::Effect(effect));
            if shared_self.pending_tasks_counter.finish_pending_task() == 0 {
                log::debug!("Finished last pending task");
            }
        });
    }
}
