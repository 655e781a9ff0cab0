//! Typed reads over layered, string-keyed configuration sources.
//!
//! A [`Reader`] asks its [`Source`]s in order and the first one that knows a
//! key wins. Values are coerced to strings, integers, booleans or URLs, and
//! every accessor comes in five flavors that differ only in how failures
//! are handled:
//!
//! - `int_error` returns a `Result` distinguishing a missing key from a
//!   malformed value,
//! - `int` returns the zero value on any failure,
//! - `int_panic` panics with the [`ReadError`],
//! - `int_fatal` hands the error to the reader's [`FatalHandler`],
//! - `int_default` substitutes a fallback for a missing key only.

pub mod reader;
pub mod sources;
mod error;

pub use error::Error;
pub use reader::{
    exit_process, FatalHandler, FromRaw, ReadError, Reader, ReaderBuilder, Source, UrlRef,
};
pub use sources::{EnvSource, FileSource, MapSource, SourceError};
pub use url::Url;
