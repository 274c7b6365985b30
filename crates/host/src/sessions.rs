use async_trait::async_trait;

/// Live-session queries the host answers for plugins.
///
/// Plugins do not track presence themselves; the host already knows which
/// resources are connected for a `user@server` pair.
#[async_trait]
pub trait SessionQuery: Send + Sync {
    /// Number of currently connected resources for the account.
    async fn resource_count(&self, user: &str, server: &str) -> usize;

    /// Names of the currently connected resources for the account.
    async fn live_resources(&self, user: &str, server: &str) -> Vec<String>;
}
