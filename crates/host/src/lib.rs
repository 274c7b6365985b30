//! Host collaborator surface.
//!
//! Everything the webhook plugin consumes from the XMPP server lives here:
//! the hook event types delivered on message/presence changes, the registry
//! the plugin subscribes handlers with, and the live-session query the
//! presence classifier needs. `LocalRegistry` is an in-process registry
//! implementation for embedding hosts and tests.

pub mod hooks;
pub mod jid;
pub mod registry;
pub mod sessions;
pub mod stanza;

pub use {
    hooks::{HookEvent, HookHandler, HookKind},
    jid::Jid,
    registry::{HookId, HookRegistry, LocalRegistry},
    sessions::SessionQuery,
    stanza::Stanza,
};
