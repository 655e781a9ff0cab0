#![allow(dead_code)]

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use strata::{ReadError, Reader, Source};

/// A source that defines a single key and counts its initializations.
#[derive(Debug, Clone)]
pub struct FakeSource {
    key: String,
    values: Vec<String>,
    initialized: Arc<AtomicUsize>,
}

impl FakeSource {
    pub fn new(key: &str, values: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
            initialized: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn empty() -> Self {
        Self::new("", &[])
    }

    /// Shared counter, still readable after the source is moved into a reader.
    pub fn initialized(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.initialized)
    }
}

impl Source for FakeSource {
    fn initialize(&mut self) {
        self.initialized.fetch_add(1, Ordering::SeqCst);
    }

    fn strings(&self, key: &str) -> Option<Vec<String>> {
        (key == self.key).then(|| self.values.clone())
    }
}

pub fn fixture_sources() -> Vec<FakeSource> {
    vec![
        FakeSource::empty(),
        FakeSource::new("string", &["asdf"]),
        FakeSource::new("string", &["qwer"]),
        FakeSource::new("string-no-values", &[]),
        FakeSource::new("int", &["42"]),
        FakeSource::new("int", &["-1"]),
        FakeSource::new("int-bad", &["not an integer"]),
        FakeSource::new("bool", &["true"]),
        FakeSource::new("bool-bad", &["not a bool"]),
        FakeSource::new("url", &["http://www.google.com"]),
        FakeSource::new("url-bad", &["%%%%%%"]),
    ]
}

fn boxed(sources: Vec<FakeSource>) -> Vec<Option<Box<dyn Source>>> {
    sources
        .into_iter()
        .map(|s| Some(Box::new(s) as Box<dyn Source>))
        .collect()
}

pub fn fixture() -> Reader {
    Reader::new(boxed(fixture_sources()))
}

/// The fixture reader with a fatal handler that records errors instead of exiting.
pub fn fixture_with_capture() -> (Reader, Arc<Mutex<Vec<ReadError>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&captured);

    let reader = fixture_sources()
        .into_iter()
        .fold(Reader::builder(), |builder, source| builder.with_source(source))
        .with_fatal_handler(move |err| sink.lock().unwrap().push(err.clone()))
        .build();

    (reader, captured)
}

/// Runs `f`, which must panic, and returns the [`ReadError`] it panicked with.
pub fn panic_payload<T>(f: impl FnOnce() -> T) -> ReadError {
    let payload = match catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("expected a panic"),
        Err(payload) => payload,
    };

    payload
        .downcast_ref::<ReadError>()
        .cloned()
        .expect("panic payload should be a ReadError")
}

pub fn not_found(key: &str) -> ReadError {
    ReadError::KeyNotFound {
        key: key.to_string(),
    }
}

pub fn malformed(key: &str, value: &str, expected: &'static str) -> ReadError {
    ReadError::MalformedValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    }
}
