use std::collections::BTreeMap;

use crate::reader::Source;

/// In-memory source, typically registered last to hold defaults.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: BTreeMap<String, Vec<String>>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines `key` with a single value, replacing any previous definition.
    pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_values(key, [value])
    }

    /// Defines `key` with any number of values. An empty list still claims the key.
    pub fn with_values<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values
            .insert(key.into(), values.into_iter().map(Into::into).collect());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |source, (key, value)| source.with(key, value))
    }
}

impl Source for MapSource {
    fn strings(&self, key: &str) -> Option<Vec<String>> {
        self.values.get(key).cloned()
    }
}
