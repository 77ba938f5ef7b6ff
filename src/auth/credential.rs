//! Credential sources.
//!
//! Two ways a caller can present a key: a plain custom header holding the
//! key verbatim, or an authorization-purposed header using the Bearer scheme.

use crate::auth::Settings;

/// The literal Bearer-scheme prefix. Case-sensitive, single space.
const BEARER_PREFIX: &str = "Bearer ";

/// Which transport carried a successful credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Custom header, key presented verbatim.
    Header,
    /// Authorization-style header, key presented with the Bearer prefix.
    Bearer,
}

impl CredentialSource {
    /// Name of the request header that carried this credential.
    pub fn header_name<'a>(&self, settings: &'a Settings) -> &'a str {
        match self {
            CredentialSource::Header => &settings.header_credential_name,
            CredentialSource::Bearer => &settings.bearer_header_name,
        }
    }
}

/// Extract the candidate key from a Bearer-scheme header value.
///
/// Returns `None` unless the value starts with exactly `"Bearer "`.
pub fn bearer_key(value: &str) -> Option<&str> {
    value.strip_prefix(BEARER_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_prefix_is_exact() {
        assert_eq!(bearer_key("Bearer some-api-key"), Some("some-api-key"));
        // Missing the space.
        assert_eq!(bearer_key("Bearersome-api-key"), None);
        // Wrong case.
        assert_eq!(bearer_key("bearer some-api-key"), None);
        assert_eq!(bearer_key(""), None);
    }

    #[test]
    fn bearer_strips_only_the_prefix() {
        // A second space belongs to the key.
        assert_eq!(bearer_key("Bearer  padded"), Some(" padded"));
    }
}
