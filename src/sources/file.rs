//! Flat TOML file source.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use toml::Value;

use super::SourceError;
use crate::reader::Source;

/// A source backed by a TOML file of top-level keys.
///
/// Scalars become a single raw value and arrays of scalars become one raw
/// value per element. Tables and nested arrays are rejected, since keys
/// have no hierarchy.
///
/// ```toml
/// port = 8080
/// debug = true
/// peers = ["http://a.internal", "http://b.internal"]
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    values: HashMap<String, Vec<String>>,
}

impl FileSource {
    /// Loads and parses the file at `path`.
    ///
    /// A missing file is an error if `required` is true and `Ok(None)`
    /// otherwise, which can be passed straight to
    /// [`ReaderBuilder::with_optional_source`](crate::ReaderBuilder::with_optional_source).
    pub fn open(path: impl AsRef<Path>, required: bool) -> Result<Option<Self>, SourceError> {
        let path = path.as_ref();

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(path, &contents).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if required {
                    Err(SourceError::FileNotFound(path.to_path_buf()))
                } else {
                    tracing::debug!(path = %path.display(), "optional config file not found");
                    Ok(None)
                }
            }
            Err(e) => Err(SourceError::Read {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, SourceError> {
        let table: toml::Table = toml::from_str(contents).map_err(|e| SourceError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut values = HashMap::with_capacity(table.len());
        for (key, value) in table {
            let raw = match value {
                Value::Array(items) => items
                    .iter()
                    .map(scalar_to_string)
                    .collect::<Option<Vec<_>>>(),
                scalar => scalar_to_string(&scalar).map(|s| vec![s]),
            };

            match raw {
                Some(raw) => {
                    values.insert(key, raw);
                }
                None => {
                    return Err(SourceError::NestedValue {
                        path: path.to_path_buf(),
                        key,
                    })
                }
            }
        }

        tracing::debug!(path = %path.display(), keys = values.len(), "loaded config file");

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    /// The file this source was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Source for FileSource {
    fn strings(&self, key: &str) -> Option<Vec<String>> {
        self.values.get(key).cloned()
    }
}

/// Renders a scalar TOML value as a raw string. Returns `None` for tables and arrays.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Datetime(dt) => Some(dt.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}
