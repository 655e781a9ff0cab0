//! Reference [`Source`](crate::Source) implementations.

mod env;
mod error;
mod file;
mod map;

pub use env::EnvSource;
pub use error::SourceError;
pub use file::FileSource;
pub use map::MapSource;
