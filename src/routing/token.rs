//! Routing token model and its percent-encoding profile.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Bytes allowed through unescaped when a token is embedded into the
/// destination URL. Everything else, including `/`, `?`, `&`, `%`, `#` and
/// control bytes, is escaped so the token always stays a single path segment.
const TOKEN_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// An opaque routing token, exactly as it appeared on the wire.
///
/// The service never percent-decodes the inbound segment: whatever bytes the
/// client sent after `/r/` are carried through verbatim and encoded once when
/// the destination URL is built. Construction rejects the empty string, which
/// callers treat as the fallback branch.
///
/// Tokens live for a single request and carry no identity beyond their
/// string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingToken {
    raw: String,
}

impl RoutingToken {
    /// Wraps a raw path segment. Returns `None` for the empty string.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self { raw })
        }
    }

    /// The token as received, without any decoding applied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Percent-encoded form, safe to embed as one path segment.
    pub fn encoded(&self) -> String {
        utf8_percent_encode(&self.raw, TOKEN_SEGMENT).to_string()
    }
}

/// Decodes one level of percent-encoding from a token segment.
///
/// Inverse of [`RoutingToken::encoded`]: decoding the token segment of a
/// produced `Location` header returns the original wire token.
pub fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}
