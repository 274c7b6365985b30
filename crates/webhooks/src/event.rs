/// Category of a reportable event. Each kind has its own destination URL
/// in the deployment config; the name doubles as the config key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Message,
    PresenceSet,
    Online,
    PresenceUnset,
    Offline,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::PresenceSet => "presence_set",
            Self::Online => "online",
            Self::PresenceUnset => "presence_unset",
            Self::Offline => "offline",
        }
    }
}

/// One reportable event: a kind plus its ordered form fields.
///
/// Transient — built, dispatched, and discarded within a single
/// notification. Field order is fixed per kind and becomes the body's
/// key order on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub fields: Vec<(&'static str, String)>,
}

impl Event {
    pub fn new(kind: EventKind, fields: Vec<(&'static str, String)>) -> Self {
        Self { kind, fields }
    }
}
