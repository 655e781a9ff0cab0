use std::fmt::Debug;

/// A string-keyed configuration provider.
///
/// Implementations return `None` when they do not know a key, which lets
/// the [`Reader`](super::Reader) continue with the next source. Returning
/// `Some` with an empty vector claims the key and stops the search.
pub trait Source: Send + Sync + Debug {
    /// One-time setup, called by the reader exactly once during construction.
    fn initialize(&mut self) {}

    /// Resolves a key to its raw values. Must not panic.
    fn strings(&self, key: &str) -> Option<Vec<String>>;
}

