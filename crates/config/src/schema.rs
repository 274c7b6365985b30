use {
    serde::{Deserialize, Serialize},
    thiserror::Error,
};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeraldConfig {
    pub webhooks: WebhooksConfig,
}

/// Webhook destinations and credentials for one deployment.
///
/// Constructed once at plugin activation and immutable afterwards. A kind
/// with no URL is disabled: events of that kind are classified and then
/// silently discarded by the dispatcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhooksConfig {
    /// Destination URL per event kind.
    pub message: Option<String>,
    pub presence_set: Option<String>,
    pub presence_unset: Option<String>,
    pub online: Option<String>,
    pub offline: Option<String>,

    /// Basic-auth credentials. Auth is attached only when BOTH are set;
    /// a lone user or password disables it entirely.
    pub user: Option<String>,
    pub password: Option<String>,
}

/// Configuration validation failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid webhook URL for `{kind}` ({url}): {source}")]
    InvalidUrl {
        kind: &'static str,
        url: String,
        source: url::ParseError,
    },
    #[error("webhook URL for `{kind}` must be http or https: {url}")]
    UnsupportedScheme { kind: &'static str, url: String },
}

impl WebhooksConfig {
    fn entries(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("message", self.message.as_deref()),
            ("presence_set", self.presence_set.as_deref()),
            ("presence_unset", self.presence_unset.as_deref()),
            ("online", self.online.as_deref()),
            ("offline", self.offline.as_deref()),
        ]
    }

    /// Destination URL for an event kind, by its wire name.
    pub fn url_for(&self, kind: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(name, _)| *name == kind)
            .and_then(|(_, url)| url)
    }

    /// Basic-auth pair, present only when both halves are configured.
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        match (self.user.as_deref(), self.password.as_deref()) {
            (Some(user), Some(password)) => Some((user, password)),
            _ => None,
        }
    }

    /// Check that every configured URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (kind, url) in self.entries() {
            let Some(url) = url else { continue };
            let parsed = url::Url::parse(url).map_err(|source| ConfigError::InvalidUrl {
                kind,
                url: url.to_string(),
                source,
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::UnsupportedScheme {
                    kind,
                    url: url.to_string(),
                });
            }
        }
        Ok(())
    }
}
