//! Event-to-webhook forwarding.
//!
//! The plugin subscribes handlers on the host's message-sent, presence-set
//! and presence-unset hooks, classifies each notification into zero or more
//! reportable events (a first connection also fires `online`, a last
//! disconnect also fires `offline`), and POSTs each event to its configured
//! URL as a form-encoded body. Delivery is best-effort and fire-and-forget:
//! nothing here can fail the host's message or presence pipeline.

pub mod classify;
pub mod dispatch;
pub mod encode;
pub mod event;
pub mod plugin;
pub mod worker;

pub use {
    dispatch::Dispatcher,
    event::{Event, EventKind},
    plugin::{ActivePlugin, HOOK_PRIORITY, WebhookPlugin},
    worker::{Worker, WorkerHandle},
};
