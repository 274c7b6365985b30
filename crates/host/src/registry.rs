use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use crate::hooks::{HookEvent, HookHandler, HookKind};

/// Opaque subscription handle returned by [`HookRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookId(u64);

/// Observer registration surface the host exposes to plugins.
///
/// Handlers for one hook kind run in ascending priority order; the exact
/// meaning of the priority scale is host-defined.
pub trait HookRegistry: Send + Sync {
    fn subscribe(&self, kind: HookKind, priority: u8, handler: Arc<dyn HookHandler>) -> HookId;

    /// Remove a subscription. Unknown or already-removed ids are a no-op.
    fn unsubscribe(&self, id: HookId);
}

struct Subscription {
    id: HookId,
    kind: HookKind,
    priority: u8,
    handler: Arc<dyn HookHandler>,
}

/// In-process [`HookRegistry`] for embedding hosts and tests.
#[derive(Default)]
pub struct LocalRegistry {
    subscriptions: Mutex<Vec<Subscription>>,
    next_id: AtomicU64,
}

impl LocalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event to every handler subscribed to its kind, in
    /// ascending priority order (insertion order within a priority).
    pub async fn run(&self, event: HookEvent) {
        let kind = event.kind();
        let handlers: Vec<Arc<dyn HookHandler>> = {
            let subs = self.subscriptions.lock().unwrap();
            subs.iter()
                .filter(|s| s.kind == kind)
                .map(|s| Arc::clone(&s.handler))
                .collect()
        };
        for handler in handlers {
            handler.handle(event.clone()).await;
        }
    }
}

impl HookRegistry for LocalRegistry {
    fn subscribe(&self, kind: HookKind, priority: u8, handler: Arc<dyn HookHandler>) -> HookId {
        let id = HookId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut subs = self.subscriptions.lock().unwrap();
        // Keep the list priority-sorted; equal priorities stay in
        // insertion order.
        let pos = subs.partition_point(|s| s.priority <= priority);
        subs.insert(
            pos,
            Subscription {
                id,
                kind,
                priority,
                handler,
            },
        );
        id
    }

    fn unsubscribe(&self, id: HookId) {
        let mut subs = self.subscriptions.lock().unwrap();
        subs.retain(|s| s.id != id);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use {
        super::*,
        crate::{jid::Jid, stanza::Stanza},
    };

    struct Recorder {
        tag: usize,
        log: Arc<Mutex<Vec<usize>>>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl HookHandler for Recorder {
        async fn handle(&self, _event: HookEvent) {
            self.log.lock().unwrap().push(self.tag);
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn message_event() -> HookEvent {
        HookEvent::MessageSent {
            from: Jid::bare("alice", "example.com"),
            to: Jid::bare("bob", "example.com"),
            stanza: Stanza::new("message"),
        }
    }

    fn recorder(
        tag: usize,
        log: &Arc<Mutex<Vec<usize>>>,
        calls: &Arc<AtomicUsize>,
    ) -> Arc<dyn HookHandler> {
        Arc::new(Recorder {
            tag,
            log: Arc::clone(log),
            calls: Arc::clone(calls),
        })
    }

    #[tokio::test]
    async fn runs_handlers_in_priority_order() {
        let registry = LocalRegistry::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let calls = Arc::new(AtomicUsize::new(0));

        registry.subscribe(HookKind::MessageSent, 80, recorder(3, &log, &calls));
        registry.subscribe(HookKind::MessageSent, 10, recorder(1, &log, &calls));
        registry.subscribe(HookKind::MessageSent, 50, recorder(2, &log, &calls));

        registry.run(message_event()).await;
        assert_eq!(*log.lock().unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn only_matching_kind_runs() {
        let registry = LocalRegistry::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let calls = Arc::new(AtomicUsize::new(0));

        registry.subscribe(HookKind::PresenceSet, 50, recorder(1, &log, &calls));
        registry.run(message_event()).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unsubscribe_is_idempotent() {
        let registry = LocalRegistry::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let calls = Arc::new(AtomicUsize::new(0));

        let id = registry.subscribe(HookKind::MessageSent, 50, recorder(1, &log, &calls));
        registry.unsubscribe(id);
        registry.unsubscribe(id);

        registry.run(message_event()).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
