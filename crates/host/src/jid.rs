use std::fmt;

/// A user address: `user@server` with an optional `/resource` suffix.
///
/// A user may hold several live resources at once (multi-device); the bare
/// `user@server` pair identifies the account, the full form one connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Jid {
    pub user: String,
    pub server: String,
    pub resource: Option<String>,
}

impl Jid {
    pub fn bare(user: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            server: server.into(),
            resource: None,
        }
    }

    pub fn full(
        user: impl Into<String>,
        server: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            server: server.into(),
            resource: Some(resource.into()),
        }
    }

    /// Permissive parse. Never fails: a string without `@` is treated as a
    /// bare server address, an empty resource suffix is dropped.
    pub fn parse(raw: &str) -> Self {
        let (user, rest) = match raw.split_once('@') {
            Some((user, rest)) => (user.to_string(), rest),
            None => (String::new(), raw),
        };
        let (server, resource) = match rest.split_once('/') {
            Some((server, resource)) => (server.to_string(), Some(resource.to_string())),
            None => (rest.to_string(), None),
        };
        Self {
            user,
            server,
            resource: resource.filter(|r| !r.is_empty()),
        }
    }
}

impl fmt::Display for Jid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.user.is_empty() {
            write!(f, "{}@", self.user)?;
        }
        write!(f, "{}", self.server)?;
        if let Some(resource) = &self.resource {
            write!(f, "/{resource}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_bare_and_full() {
        assert_eq!(Jid::bare("alice", "example.com").to_string(), "alice@example.com");
        assert_eq!(
            Jid::full("alice", "example.com", "phone").to_string(),
            "alice@example.com/phone"
        );
    }

    #[test]
    fn parse_round_trips() {
        for raw in ["alice@example.com", "alice@example.com/phone", "example.com"] {
            assert_eq!(Jid::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn parse_drops_empty_resource() {
        assert_eq!(Jid::parse("alice@example.com/").resource, None);
    }
}
