use std::sync::Arc;

use {
    async_trait::async_trait,
    herald_config::{ConfigError, WebhooksConfig},
    herald_host::{HookEvent, HookHandler, HookId, HookKind, HookRegistry, SessionQuery},
    tokio::sync::mpsc,
    tracing::{info, warn},
};

use crate::worker::{Worker, WorkerHandle};

/// Registration priority for all three hooks, mid-range on the host's
/// 0..=100 scale.
pub const HOOK_PRIORITY: u8 = 50;

/// The webhook forwarding plugin.
pub struct WebhookPlugin;

/// A live activation: worker plus the three hook subscriptions.
pub struct ActivePlugin {
    worker: WorkerHandle,
    subscriptions: Vec<HookId>,
}

/// Hook-side face of the plugin: a thin enqueue into the worker mailbox.
/// Keeps hook invocations cheap and guarantees they cannot observe a
/// delivery failure.
struct EnqueueHandler {
    tx: mpsc::Sender<HookEvent>,
}

#[async_trait]
impl HookHandler for EnqueueHandler {
    async fn handle(&self, event: HookEvent) {
        if self.tx.send(event).await.is_err() {
            warn!("webhook worker is gone, dropping event");
        }
    }
}

impl WebhookPlugin {
    /// Validate the config, spawn the deployment worker, and subscribe on
    /// the three hook points. The config is frozen from here on.
    pub fn activate(
        registry: &dyn HookRegistry,
        config: WebhooksConfig,
        sessions: Arc<dyn SessionQuery>,
    ) -> Result<ActivePlugin, ConfigError> {
        config.validate()?;
        let config = Arc::new(config);
        let worker = Worker::spawn(Arc::clone(&config), sessions);
        let handler: Arc<dyn HookHandler> = Arc::new(EnqueueHandler {
            tx: worker.sender(),
        });

        let subscriptions = [
            HookKind::MessageSent,
            HookKind::PresenceSet,
            HookKind::PresenceUnset,
        ]
        .into_iter()
        .map(|kind| registry.subscribe(kind, HOOK_PRIORITY, Arc::clone(&handler)))
        .collect();

        info!("webhook plugin activated");
        Ok(ActivePlugin {
            worker,
            subscriptions,
        })
    }
}

impl ActivePlugin {
    /// Unsubscribe from the host and drain the worker. In-flight POSTs
    /// keep running on the runtime.
    pub async fn deactivate(self, registry: &dyn HookRegistry) {
        for id in self.subscriptions {
            registry.unsubscribe(id);
        }
        self.worker.shutdown().await;
        info!("webhook plugin deactivated");
    }
}
