use std::collections::HashMap;

use crate::reader::Source;

/// Reads keys from environment variables captured at initialization.
///
/// A key is mapped to a variable name by uppercasing it, replacing `.` and
/// `-` with the separator, and prepending the prefix and separator:
/// with prefix `MYAPP`, `database.url` is read from `MYAPP_DATABASE_URL`.
///
/// The environment is snapshotted in [`Source::initialize`]; later changes
/// to the process environment are not observed.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
    separator: String,
    list_separator: Option<char>,
    snapshot: HashMap<String, String>,
}

impl EnvSource {
    /// Creates a source for variables starting with `prefix` and `_`.
    ///
    /// An empty prefix maps keys to bare variable names.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: "_".to_string(),
            list_separator: None,
            snapshot: HashMap::new(),
        }
    }

    /// Uses `separator` between the prefix and key segments instead of `_`.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        assert!(!separator.is_empty(), "separator must not be empty");
        self.separator = separator;
        self
    }

    /// Splits each variable on `separator` into multiple values.
    ///
    /// Pieces are trimmed and empty pieces dropped, so `"a, b,"` reads as
    /// `["a", "b"]` and an empty variable reads as no values.
    pub fn with_list_separator(mut self, separator: char) -> Self {
        self.list_separator = Some(separator);
        self
    }

    /// The environment variable consulted for `key`.
    pub fn var_name(&self, key: &str) -> String {
        let name = key.to_uppercase().replace(['.', '-'], &self.separator);

        if self.prefix.is_empty() {
            name
        } else {
            format!("{}{}{}", self.prefix, self.separator, name)
        }
    }

    fn split(&self, value: &str) -> Vec<String> {
        match self.list_separator {
            Some(sep) => value
                .split(sep)
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect(),
            None => vec![value.to_string()],
        }
    }
}

impl Source for EnvSource {
    fn initialize(&mut self) {
        let prefix_with_sep = format!("{}{}", self.prefix, self.separator);

        // Variables that are not valid unicode cannot be read as strings and are skipped.
        self.snapshot = std::env::vars_os()
            .filter_map(|(key, value)| {
                Some((key.into_string().ok()?, value.into_string().ok()?))
            })
            .filter(|(key, _)| self.prefix.is_empty() || key.starts_with(&prefix_with_sep))
            .collect();

        tracing::debug!(
            prefix = %self.prefix,
            variables = self.snapshot.len(),
            "captured environment"
        );
    }

    fn strings(&self, key: &str) -> Option<Vec<String>> {
        self.snapshot
            .get(&self.var_name(key))
            .map(|value| self.split(value))
    }
}
