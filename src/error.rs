use crate::reader::ReadError;
use crate::sources::SourceError;
use thiserror::Error;

/// Top-level error type for the strata library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration read error: {0}")]
    Read(#[from] ReadError),

    #[error("configuration source error: {0}")]
    Source(#[from] SourceError),
}
