//! Pure event classification.
//!
//! Each function maps one host notification to the reportable events it
//! produces. None of them can fail: malformed input degrades to "no event"
//! or empty-string fields, never an error.

use {
    crate::event::{Event, EventKind},
    herald_host::{Jid, Stanza},
};

/// Classify an outgoing message stanza.
///
/// Anything whose root element is not `message` is ignored. Missing
/// `type`/`subject`/`body`/`thread` parts become empty strings — the field
/// is always present on the wire.
pub fn classify_message(from: &Jid, to: &Jid, stanza: &Stanza) -> Option<Event> {
    if stanza.name() != "message" {
        return None;
    }
    let child = |name: &str| stanza.child_text(name).unwrap_or("").to_string();
    Some(Event::new(
        EventKind::Message,
        vec![
            ("from", from.to_string()),
            ("to", to.to_string()),
            ("type", stanza.attr("type").unwrap_or("").to_string()),
            ("subject", child("subject")),
            ("body", child("body")),
            ("thread", child("thread")),
        ],
    ))
}

/// Classify a presence-set notification.
///
/// Always produces `presence_set`. When `resource_count` is exactly 1 —
/// this was the account's first live connection — an `online` event with
/// identical fields follows. Any other count (including 0, which a
/// self-consistent host should not report) suppresses it.
pub fn classify_presence_set(
    user: &str,
    server: &str,
    resource: &str,
    presence: &str,
    resource_count: usize,
) -> Vec<Event> {
    let fields = presence_fields(user, server, resource, presence);
    let mut events = vec![Event::new(EventKind::PresenceSet, fields.clone())];
    if resource_count == 1 {
        events.push(Event::new(EventKind::Online, fields));
    }
    events
}

/// Classify a presence-unset notification.
///
/// Always produces `presence_unset`. An `offline` event follows when the
/// account has no live resources left, or when the only live resource is
/// exactly the one unsetting (an explicit logout the host has not yet
/// removed from its table). Any remaining other resource suppresses it.
pub fn classify_presence_unset(
    user: &str,
    server: &str,
    resource: &str,
    status: &str,
    live: &[String],
) -> Vec<Event> {
    let fields = presence_fields(user, server, resource, status);
    let mut events = vec![Event::new(EventKind::PresenceUnset, fields.clone())];
    let last_resource = live.is_empty() || (live.len() == 1 && live[0] == resource);
    if last_resource {
        events.push(Event::new(EventKind::Offline, fields));
    }
    events
}

fn presence_fields(
    user: &str,
    server: &str,
    resource: &str,
    message: &str,
) -> Vec<(&'static str, String)> {
    vec![
        ("user", user.to_string()),
        ("server", server.to_string()),
        ("resource", resource.to_string()),
        ("message", message.to_string()),
    ]
}
