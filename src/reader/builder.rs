use std::fmt;
use std::sync::Arc;

use super::policy::{default_fatal_handler, FatalHandler};
use super::{ReadError, Reader, Source};

/// Builder for a [`Reader`].
///
/// Sources are consulted in registration order, so register overrides
/// before defaults:
///
/// ```
/// use strata::{EnvSource, MapSource, Reader};
///
/// let reader = Reader::builder()
///     .with_source(EnvSource::new("MYAPP"))
///     .with_source(MapSource::new().with("log_level", "info"))
///     .build();
///
/// let level = reader.string("log_level");
/// # let _ = level;
/// ```
#[derive(Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ReaderBuilder {
    sources: Vec<Option<Box<dyn Source>>>,
    fatal: Option<FatalHandler>,
}

impl ReaderBuilder {
    /// Appends a source with lower precedence than all sources added so far.
    pub fn with_source(mut self, source: impl Source + 'static) -> Self {
        self.sources.push(Some(Box::new(source)));
        self
    }

    /// Appends a source if present. `None` is skipped.
    ///
    /// Pairs with [`FileSource::open`](crate::FileSource::open), which
    /// returns `None` for a missing optional file.
    pub fn with_optional_source<S: Source + 'static>(mut self, source: Option<S>) -> Self {
        self.sources.push(source.map(|s| Box::new(s) as Box<dyn Source>));
        self
    }

    /// Replaces the handler used by the `*_fatal` accessors.
    ///
    /// Defaults to [`exit_process`](crate::exit_process).
    pub fn with_fatal_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ReadError) + Send + Sync + 'static,
    {
        self.fatal = Some(Arc::new(handler));
        self
    }

    /// Initializes every source once, in order, and returns the reader.
    pub fn build(self) -> Reader {
        let fatal = self.fatal.unwrap_or_else(default_fatal_handler);
        Reader::assemble(self.sources, fatal)
    }
}

impl fmt::Debug for ReaderBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderBuilder")
            .field("sources", &self.sources)
            .field("custom_fatal_handler", &self.fatal.is_some())
            .finish()
    }
}
