//! Layered, typed configuration reads.

mod builder;
mod coerce;
mod error;
pub(crate) mod policy;
mod source;
mod url_ref;

use std::fmt;

pub use builder::ReaderBuilder;
pub use coerce::FromRaw;
pub use error::ReadError;
pub use policy::{exit_process, FatalHandler};
pub use source::Source;
pub use url_ref::UrlRef;

use policy::{default_fatal_handler, policy_variants};

/// Typed access to an ordered list of configuration sources.
///
/// Every lookup asks the sources in construction order and the first one
/// that knows the key wins; later sources are never consulted for it. Put
/// overrides first and defaults last.
///
/// ## Example
///
/// ```
/// use strata::{MapSource, Reader};
///
/// let overrides = MapSource::new().with("port", "9090");
/// let defaults = MapSource::new()
///     .with("port", "8080")
///     .with("debug", "false");
///
/// let reader = Reader::builder()
///     .with_source(overrides)
///     .with_source(defaults)
///     .build();
///
/// assert_eq!(reader.int("port"), 9090);
/// assert!(!reader.bool("debug"));
/// assert_eq!(reader.string_default("name", "app"), "app");
/// ```
pub struct Reader {
    sources: Vec<Box<dyn Source>>,
    fatal: FatalHandler,
}

impl Reader {
    /// Creates a reader from a sequence of optional sources.
    ///
    /// `None` entries are dropped without disturbing the order of the rest.
    /// Each remaining source is initialized exactly once, in order.
    pub fn new<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = Option<Box<dyn Source>>>,
    {
        Self::assemble(sources, default_fatal_handler())
    }

    /// Creates a new reader builder.
    pub fn builder() -> ReaderBuilder {
        ReaderBuilder::default()
    }

    pub(crate) fn assemble<I>(sources: I, fatal: FatalHandler) -> Self
    where
        I: IntoIterator<Item = Option<Box<dyn Source>>>,
    {
        let mut sources: Vec<Box<dyn Source>> = sources.into_iter().flatten().collect();

        for (index, source) in sources.iter_mut().enumerate() {
            source.initialize();
            tracing::debug!(index, "initialized configuration source");
        }

        Self { sources, fatal }
    }

    /// Number of sources consulted by each lookup.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if no sources were retained.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Returns the raw values from the first source that defines `key`.
    pub fn strings_error(&self, key: &str) -> Result<Vec<String>, ReadError> {
        for (index, source) in self.sources.iter().enumerate() {
            if let Some(values) = source.strings(key) {
                tracing::trace!(key, index, "configuration key resolved");
                return Ok(values);
            }
        }

        tracing::trace!(key, "configuration key not found in any source");
        Err(ReadError::key_not_found(key))
    }

    /// Returns the first raw value of `key`.
    ///
    /// A key that is defined with no values reads as an empty string, not
    /// as an error.
    pub fn string_error(&self, key: &str) -> Result<String, ReadError> {
        Ok(self.strings_error(key)?.into_iter().next().unwrap_or_default())
    }

    /// Parses every raw value of `key` as `T`.
    ///
    /// Fails with [`ReadError::MalformedValue`] if any single value does not
    /// parse; partial results are never returned.
    pub fn parsed_error<T: FromRaw>(&self, key: &str) -> Result<Vec<T>, ReadError> {
        self.strings_error(key)?
            .iter()
            .map(|raw| {
                T::from_raw(raw).ok_or_else(|| ReadError::malformed(key, raw.as_str(), T::KIND))
            })
            .collect()
    }

    fn first_parsed<T: FromRaw>(&self, key: &str) -> Result<Option<T>, ReadError> {
        Ok(self.parsed_error(key)?.into_iter().next())
    }

    /// Every value of `key` as a base-10 integer.
    pub fn ints_error(&self, key: &str) -> Result<Vec<i64>, ReadError> {
        self.parsed_error(key)
    }

    /// First value of `key` as an integer, or 0 if the key has no values.
    pub fn int_error(&self, key: &str) -> Result<i64, ReadError> {
        Ok(self.first_parsed(key)?.unwrap_or_default())
    }

    /// Every value of `key` as a boolean.
    pub fn bools_error(&self, key: &str) -> Result<Vec<bool>, ReadError> {
        self.parsed_error(key)
    }

    /// First value of `key` as a boolean, or false if the key has no values.
    ///
    /// Accepts `1`, `t`, `true`, `0`, `f` and `false` in any ASCII case.
    pub fn bool_error(&self, key: &str) -> Result<bool, ReadError> {
        Ok(self.first_parsed(key)?.unwrap_or_default())
    }

    /// Every value of `key` as a URL reference.
    pub fn urls_error(&self, key: &str) -> Result<Vec<UrlRef>, ReadError> {
        self.parsed_error(key)
    }

    /// First value of `key` as a URL reference, absolute or relative.
    ///
    /// Reads as [`UrlRef::Empty`] if the key has no values or its value is
    /// the empty string.
    pub fn url_error(&self, key: &str) -> Result<UrlRef, ReadError> {
        Ok(self.first_parsed(key)?.unwrap_or_default())
    }

    fn or_fatal<T: Default>(&self, result: Result<T, ReadError>) -> T {
        result.unwrap_or_else(|err| {
            (self.fatal)(&err);
            T::default()
        })
    }
}

impl Reader {
    policy_variants!(list String => strings_error, strings, strings_panic, strings_fatal, strings_default);
    policy_variants!(String => string_error, string, string_panic, string_fatal, string_default);
    policy_variants!(list i64 => ints_error, ints, ints_panic, ints_fatal, ints_default);
    policy_variants!(i64 => int_error, int, int_panic, int_fatal, int_default);
    policy_variants!(list bool => bools_error, bools, bools_panic, bools_fatal, bools_default);
    policy_variants!(bool => bool_error, bool, bool_panic, bool_fatal, bool_default);
    policy_variants!(list UrlRef => urls_error, urls, urls_panic, urls_fatal, urls_default);
    policy_variants!(UrlRef => url_error, url, url_panic, url_fatal, url_default);
}

impl fmt::Debug for Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reader")
            .field("sources", &self.sources)
            .finish_non_exhaustive()
    }
}
