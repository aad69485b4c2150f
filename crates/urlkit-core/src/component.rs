//! Named URL components.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named part of a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Scheme,
    User,
    Password,
    /// Login options, the `;opts` suffix of the user part (`imap://user;AUTH=PLAIN@host`).
    Options,
    Host,
    Port,
    Path,
    Query,
    Fragment,
}

impl Component {
    /// Every component, in serialization order.
    pub const ALL: [Component; 9] = [
        Component::Scheme,
        Component::User,
        Component::Password,
        Component::Options,
        Component::Host,
        Component::Port,
        Component::Path,
        Component::Query,
        Component::Fragment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Component::Scheme => "scheme",
            Component::User => "user",
            Component::Password => "password",
            Component::Options => "options",
            Component::Host => "host",
            Component::Port => "port",
            Component::Path => "path",
            Component::Query => "query",
            Component::Fragment => "fragment",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase_name() {
        assert_eq!(Component::Scheme.to_string(), "scheme");
        assert_eq!(Component::Fragment.to_string(), "fragment");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Component::Options).unwrap();
        assert_eq!(json, "\"options\"");
        let parsed: Component = serde_json::from_str("\"port\"").unwrap();
        assert_eq!(parsed, Component::Port);
    }
}
