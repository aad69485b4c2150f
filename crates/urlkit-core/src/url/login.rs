//! Login options carried in the user part (`imap://user;AUTH=PLAIN@host`).
//!
//! The url engine stores the user part percent-encoded, so the `;` separating
//! user from options appears as `%3B`.

use crate::encoding::decode;

/// Schemes whose user part carries login options.
const OPTION_SCHEMES: [&str; 6] = ["imap", "imaps", "pop3", "pop3s", "smtp", "smtps"];

pub(super) fn carries_options(scheme: &str) -> bool {
    OPTION_SCHEMES
        .iter()
        .any(|s| s.eq_ignore_ascii_case(scheme))
}

/// Split an engine username into `(user, options)`. Options are returned decoded.
pub(super) fn split(scheme: &str, username: &str) -> (String, Option<String>) {
    if carries_options(scheme) {
        let at = username
            .find("%3B")
            .into_iter()
            .chain(username.find("%3b"))
            .min();
        if let Some(at) = at {
            return (
                username[..at].to_string(),
                Some(decode(&username[at + 3..])),
            );
        }
    }
    (username.to_string(), None)
}

/// Join user and options into the text handed to the engine's username setter.
pub(super) fn join(user: &str, options: Option<&str>) -> String {
    match options {
        Some(options) => format!("{user};{options}"),
        None => user.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_only_for_option_schemes() {
        assert_eq!(
            split("imap", "user%3BAUTH%3DPLAIN"),
            ("user".to_string(), Some("AUTH=PLAIN".to_string()))
        );
        assert_eq!(
            split("https", "user%3BAUTH%3DPLAIN"),
            ("user%3BAUTH%3DPLAIN".to_string(), None)
        );
        assert_eq!(split("SMTP", "bob"), ("bob".to_string(), None));
    }

    #[test]
    fn join_adds_separator() {
        assert_eq!(join("user", Some("AUTH=*")), "user;AUTH=*");
        assert_eq!(join("user", None), "user");
    }
}
