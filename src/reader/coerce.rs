//! Conversion of raw configuration strings into typed values.

use url::Url;

use super::UrlRef;

/// A type that can be parsed from a single raw configuration string.
///
/// `from_raw` returns `None` for malformed input; the reader turns that
/// into [`ReadError::MalformedValue`](super::ReadError::MalformedValue)
/// naming `KIND`.
pub trait FromRaw: Sized {
    /// Human-readable name of the type, used in error messages.
    const KIND: &'static str;

    fn from_raw(raw: &str) -> Option<Self>;
}

impl FromRaw for String {
    const KIND: &'static str = "string";

    fn from_raw(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

/// Base-10 signed integer with an optional leading sign. Whitespace is not trimmed.
impl FromRaw for i64 {
    const KIND: &'static str = "integer";

    fn from_raw(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

/// Accepts `1`, `t`, `true` and `0`, `f`, `false`, ignoring ASCII case.
impl FromRaw for bool {
    const KIND: &'static str = "boolean";

    fn from_raw(raw: &str) -> Option<Self> {
        if raw == "1" || raw.eq_ignore_ascii_case("t") || raw.eq_ignore_ascii_case("true") {
            return Some(true);
        }
        if raw == "0" || raw.eq_ignore_ascii_case("f") || raw.eq_ignore_ascii_case("false") {
            return Some(false);
        }
        None
    }
}

/// Absolute URLs only. The reader's URL accessors use [`UrlRef`], which
/// also accepts relative references.
impl FromRaw for Url {
    const KIND: &'static str = "URL";

    fn from_raw(raw: &str) -> Option<Self> {
        Url::parse(raw).ok()
    }
}

impl FromRaw for UrlRef {
    const KIND: &'static str = "URL";

    fn from_raw(raw: &str) -> Option<Self> {
        UrlRef::parse(raw)
    }
}
