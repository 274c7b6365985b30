use async_trait::async_trait;

use crate::{jid::Jid, stanza::Stanza};

/// Hook points a plugin can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    MessageSent,
    PresenceSet,
    PresenceUnset,
}

/// A notification delivered by the host when one of the hook points fires.
///
/// Presence payloads arrive pre-serialized: the host renders the presence
/// stanza (or status text) before hand-off, so handlers never touch XML.
#[derive(Debug, Clone)]
pub enum HookEvent {
    MessageSent {
        from: Jid,
        to: Jid,
        stanza: Stanza,
    },
    PresenceSet {
        user: String,
        server: String,
        resource: String,
        presence: String,
    },
    PresenceUnset {
        user: String,
        server: String,
        resource: String,
        status: String,
    },
}

impl HookEvent {
    pub fn kind(&self) -> HookKind {
        match self {
            Self::MessageSent { .. } => HookKind::MessageSent,
            Self::PresenceSet { .. } => HookKind::PresenceSet,
            Self::PresenceUnset { .. } => HookKind::PresenceUnset,
        }
    }
}

/// A subscribed hook callback.
///
/// Handlers are infallible by contract: whatever a handler does with the
/// event, errors must stay inside it. The host's message and presence
/// pipelines never observe a handler failure.
#[async_trait]
pub trait HookHandler: Send + Sync {
    async fn handle(&self, event: HookEvent);
}
