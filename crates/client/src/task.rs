// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::messaging::MessageSender;

/// Executes tasks asynchronously
///
/// Each dispatched task must eventually send an effect through the
/// given channel, even when it fails.
pub trait TaskDispatcher<Intent, Effect, Task> {
    fn all_tasks_finished(&self) -> bool;

    fn dispatch_task(
        &self,
        shared_self: Arc<Self>,
        message_tx: MessageSender<Intent, Effect>,
        task: Task,
    );
}

#[derive(Debug, Default)]
pub struct PendingTasksCounter {
    number_of_pending_tasks: AtomicUsize,
}

impl PendingTasksCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            number_of_pending_tasks: AtomicUsize::new(0),
        }
    }

    pub fn start_pending_task(&self) -> usize {
        let pending_tasks = self.number_of_pending_tasks.fetch_add(1, Ordering::Acquire) + 1;
        debug_assert!(!self.all_pending_tasks_finished());
        pending_tasks
    }

    pub fn finish_pending_task(&self) -> usize {
        debug_assert!(!self.all_pending_tasks_finished());
        self.number_of_pending_tasks.fetch_sub(1, Ordering::Release) - 1
    }

    #[must_use]
    pub fn all_pending_tasks_finished(&self) -> bool {
        self.number_of_pending_tasks.load(Ordering::Acquire) == 0
    }
}
