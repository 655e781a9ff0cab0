//! URL references: absolute URLs, relative references, or nothing.

use std::fmt;

use url::Url;

// Relative references are checked by resolving them against this base.
const CHECK_BASE: &str = "http://check.invalid/";

/// A parsed URL reference.
///
/// Accepts what a URL may appear as in configuration: an absolute URL
/// (`https://example.com/api`), a relative reference (`/api/v1`,
/// `../static`, `?page=2`), or the empty string. The empty reference is
/// the zero value returned by the lenient URL accessors.
///
/// ```
/// use strata::{Url, UrlRef};
///
/// let base = Url::parse("https://example.com/app/").unwrap();
/// let api = UrlRef::parse("api/v1").unwrap();
///
/// assert_eq!(api.resolve(&base).unwrap().as_str(), "https://example.com/app/api/v1");
/// assert_eq!(UrlRef::parse(""), Some(UrlRef::Empty));
/// assert_eq!(UrlRef::parse("%%%%%%"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UrlRef {
    #[default]
    Empty,
    Absolute(Url),
    Relative(String),
}

impl UrlRef {
    /// Parses a URL reference, returning `None` if it is malformed.
    ///
    /// Malformed means: a percent sign not followed by two hex digits, an
    /// ASCII control character, a colon in the first path segment of a
    /// reference without a scheme, or an absolute URL that
    /// [`Url::parse`] rejects.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return Some(Self::Empty);
        }
        if raw.chars().any(|c| c.is_ascii_control()) || !valid_escapes(raw) {
            return None;
        }

        if has_scheme(raw) {
            return Url::parse(raw).ok().map(Self::Absolute);
        }

        let first_segment = raw.split(['/', '?', '#']).next().unwrap_or_default();
        if first_segment.contains(':') {
            return None;
        }

        let base = Url::parse(CHECK_BASE).ok()?;
        base.join(raw).ok()?;
        Some(Self::Relative(raw.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, UrlRef::Empty)
    }

    /// The absolute URL, if this reference is one.
    pub fn as_absolute(&self) -> Option<&Url> {
        match self {
            UrlRef::Absolute(url) => Some(url),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            UrlRef::Empty => "",
            UrlRef::Absolute(url) => url.as_str(),
            UrlRef::Relative(reference) => reference,
        }
    }

    /// Resolves this reference against `base`. The empty reference resolves to `base`.
    pub fn resolve(&self, base: &Url) -> Result<Url, url::ParseError> {
        match self {
            UrlRef::Empty => Ok(base.clone()),
            UrlRef::Absolute(url) => Ok(url.clone()),
            UrlRef::Relative(reference) => base.join(reference),
        }
    }
}

impl From<Url> for UrlRef {
    fn from(url: Url) -> Self {
        UrlRef::Absolute(url)
    }
}

impl PartialEq<Url> for UrlRef {
    fn eq(&self, other: &Url) -> bool {
        self.as_absolute() == Some(other)
    }
}

impl fmt::Display for UrlRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `scheme ":"` where scheme is `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
fn has_scheme(raw: &str) -> bool {
    let Some((scheme, _)) = raw.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

fn valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
