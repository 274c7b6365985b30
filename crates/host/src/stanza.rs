/// A protocol stanza as handed over by the host, already parsed: element
/// name, attributes, and direct children with their text content. The host
/// owns XML parsing; this type is only the hand-off shape at the hook
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stanza {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<StanzaChild>,
}

/// A direct child element, reduced to its name and text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StanzaChild {
    pub name: String,
    pub text: String,
}

impl Stanza {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.children.push(StanzaChild {
            name: name.into(),
            text: text.into(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the first attribute with the given name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Text content of the first child with the given name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.text.as_str())
    }
}
