use std::sync::Arc;

use {
    herald_config::WebhooksConfig,
    reqwest::{Client, header::CONTENT_TYPE},
    tokio::task::JoinHandle,
    tracing::{debug, warn},
};

use crate::{encode::form_encode, event::Event};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Fires one HTTP POST per reportable event.
///
/// Delivery is fire-and-forget: the POST runs on a spawned task, the
/// response is observed for diagnostics only, and nothing propagates back
/// to the caller. An event kind with no configured URL is a silent no-op.
pub struct Dispatcher {
    client: Client,
    config: Arc<WebhooksConfig>,
}

impl Dispatcher {
    /// One shared client per deployment; timeouts are the client's
    /// defaults, this component enforces none of its own.
    pub fn new(config: Arc<WebhooksConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Issue the POST for one event, or do nothing if its kind has no URL.
    ///
    /// The returned handle tracks the in-flight request so tests can await
    /// completion; production callers drop it.
    pub fn dispatch(&self, event: &Event) -> Option<JoinHandle<()>> {
        let kind = event.kind.as_str();
        let url = self.config.url_for(kind)?.to_string();
        let body = form_encode(&event.fields);

        let mut request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body);
        if let Some((user, password)) = self.config.basic_auth() {
            request = request.basic_auth(user, Some(password));
        }

        Some(tokio::spawn(async move {
            match request.send().await {
                Ok(response) if response.status().is_success() => {
                    debug!(kind, url = %url, status = %response.status(), "webhook delivered");
                },
                Ok(response) => {
                    warn!(kind, url = %url, status = %response.status(), "webhook endpoint returned error");
                },
                Err(e) => {
                    warn!(kind, url = %url, error = %e, "webhook POST failed");
                },
            }
        }))
    }
}
