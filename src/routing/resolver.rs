//! Destination templating for routing tokens.

use crate::routing::token::RoutingToken;

/// Path on the destination origin that receives routed clicks.
const LANDING_PATH: &str = "/login/";

/// A fully qualified destination URL computed for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget(String);

impl RedirectTarget {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Translates routing tokens into redirect targets.
///
/// Holds the fixed destination base for the process lifetime. Resolution is a
/// pure function of the token and that base, so concurrent requests need no
/// coordination and identical inputs always produce identical outputs.
#[derive(Debug, Clone)]
pub struct Resolver {
    destination_base: String,
}

impl Resolver {
    /// Creates a resolver for the given destination origin.
    ///
    /// A trailing slash on the base is trimmed so templating never produces a
    /// double slash.
    pub fn new(destination_base: &str) -> Self {
        Self {
            destination_base: destination_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn destination_base(&self) -> &str {
        &self.destination_base
    }

    /// Resolves a token to its redirect target.
    ///
    /// A missing token degrades to the destination root rather than failing.
    /// Callers answer 302 on both branches, so malformed or probing requests
    /// are indistinguishable from real clicks.
    pub fn resolve(&self, token: Option<&RoutingToken>) -> RedirectTarget {
        match token {
            Some(token) => RedirectTarget(format!(
                "{}{}{}",
                self.destination_base,
                LANDING_PATH,
                token.encoded()
            )),
            None => RedirectTarget(format!("{}/", self.destination_base)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> Resolver {
        Resolver::new("https://landing.example.com")
    }

    #[test]
    fn test_valid_token_is_templated() {
        let token = RoutingToken::new("abc123").unwrap();
        let target = resolver().resolve(Some(&token));
        assert_eq!(target.as_str(), "https://landing.example.com/login/abc123");
    }

    #[test]
    fn test_missing_token_degrades_to_root() {
        let target = resolver().resolve(None);
        assert_eq!(target.as_str(), "https://landing.example.com/");
    }

    #[test]
    fn test_token_is_encoded_into_single_segment() {
        let token = RoutingToken::new("a/b?c").unwrap();
        let target = resolver().resolve(Some(&token));
        assert_eq!(
            target.as_str(),
            "https://landing.example.com/login/a%2Fb%3Fc"
        );
    }

    #[test]
    fn test_trailing_slash_on_base_is_trimmed() {
        let resolver = Resolver::new("https://landing.example.com/");
        let token = RoutingToken::new("x").unwrap();
        assert_eq!(
            resolver.resolve(Some(&token)).as_str(),
            "https://landing.example.com/login/x"
        );
        assert_eq!(resolver.resolve(None).as_str(), "https://landing.example.com/");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let token = RoutingToken::new("a b").unwrap();
        let first = resolver().resolve(Some(&token));
        let second = resolver().resolve(Some(&token));
        assert_eq!(first, second);
    }
}
