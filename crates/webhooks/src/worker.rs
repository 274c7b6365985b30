use std::sync::Arc;

use {
    herald_config::WebhooksConfig,
    herald_host::{HookEvent, SessionQuery},
    tokio::{sync::mpsc, task::JoinHandle},
    tracing::{debug, warn},
};

use crate::{
    classify::{classify_message, classify_presence_set, classify_presence_unset},
    dispatch::Dispatcher,
};

/// Mailbox capacity. Enqueue only waits for admission here, never for
/// network I/O; a slow endpoint builds backlog instead of blocking hooks.
const QUEUE_CAPACITY: usize = 1024;

/// Per-deployment worker: a single consumer loop that serializes
/// classification and encoding. The POST itself is spawned by the
/// dispatcher, so the loop never waits on a remote endpoint.
pub struct Worker;

/// Handle to a spawned worker: enqueue events, shut it down on
/// deactivation.
pub struct WorkerHandle {
    tx: mpsc::Sender<HookEvent>,
    task: JoinHandle<()>,
}

impl Worker {
    pub fn spawn(config: Arc<WebhooksConfig>, sessions: Arc<dyn SessionQuery>) -> WorkerHandle {
        let (tx, mut rx) = mpsc::channel(QUEUE_CAPACITY);
        let dispatcher = Dispatcher::new(config);
        let task = tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                Self::process(&dispatcher, sessions.as_ref(), event).await;
            }
            debug!("webhook worker drained");
        });
        WorkerHandle { tx, task }
    }

    async fn process(dispatcher: &Dispatcher, sessions: &dyn SessionQuery, event: HookEvent) {
        let events = match event {
            HookEvent::MessageSent { from, to, stanza } => {
                classify_message(&from, &to, &stanza).into_iter().collect()
            },
            HookEvent::PresenceSet {
                user,
                server,
                resource,
                presence,
            } => {
                let count = sessions.resource_count(&user, &server).await;
                classify_presence_set(&user, &server, &resource, &presence, count)
            },
            HookEvent::PresenceUnset {
                user,
                server,
                resource,
                status,
            } => {
                let live = sessions.live_resources(&user, &server).await;
                classify_presence_unset(&user, &server, &resource, &status, &live)
            },
        };
        for event in &events {
            dispatcher.dispatch(event);
        }
    }
}

impl WorkerHandle {
    /// Hand one hook event to the worker. Waits only for queue admission.
    pub async fn enqueue(&self, event: HookEvent) {
        if self.tx.send(event).await.is_err() {
            warn!("webhook worker is gone, dropping event");
        }
    }

    pub(crate) fn sender(&self) -> mpsc::Sender<HookEvent> {
        self.tx.clone()
    }

    /// Close the mailbox and wait for the loop to drain what it holds.
    /// In-flight POSTs are not cancelled; they run to completion on the
    /// runtime.
    pub async fn shutdown(self) {
        drop(self.tx);
        let _ = self.task.await;
    }
}
