//! Failure policies applied on top of the `*_error` accessors.
//!
//! Every typed accessor exists in five flavors that share the same lookup
//! and coercion and differ only in what they do with a [`ReadError`]:
//!
//! | accessor        | on `KeyNotFound`     | on `MalformedValue`  |
//! |-----------------|----------------------|----------------------|
//! | `x_error`       | `Err`                | `Err`                |
//! | `x`             | zero value           | zero value           |
//! | `x_panic`       | panics with error    | panics with error    |
//! | `x_fatal`       | fatal handler, zero  | fatal handler, zero  |
//! | `x_default`     | fallback             | zero value           |

use std::sync::Arc;

use super::ReadError;

/// Called by the `*_fatal` accessors when a read fails.
///
/// The default handler, [`exit_process`], terminates the process. Tests
/// install a capturing closure through
/// [`ReaderBuilder::with_fatal_handler`](super::ReaderBuilder::with_fatal_handler).
pub type FatalHandler = Arc<dyn Fn(&ReadError) + Send + Sync>;

/// Logs the error and exits the process with status 1.
pub fn exit_process(err: &ReadError) {
    tracing::error!(error = %err, key = err.key(), "fatal configuration error");
    std::process::exit(1);
}

pub(crate) fn default_fatal_handler() -> FatalHandler {
    Arc::new(exit_process)
}

/// Unwraps or panics with the [`ReadError`] itself as the panic payload,
/// so it can be recovered with `downcast_ref::<ReadError>()`.
pub(crate) fn or_panic<T>(result: Result<T, ReadError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => std::panic::panic_any(err),
    }
}

/// Substitutes `fallback` only for a missing key. Malformed values yield the zero value.
pub(crate) fn or_fallback<T: Default>(result: Result<T, ReadError>, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(ReadError::KeyNotFound { .. }) => fallback,
        Err(ReadError::MalformedValue { .. }) => T::default(),
    }
}

/// Generates the bare, `_panic`, `_fatal` and `_default` accessors for an
/// existing `_error` accessor.
///
/// `T => ...` wraps an accessor returning `Result<T, ReadError>`;
/// `list T => ...` wraps one returning `Result<Vec<T>, ReadError>` and lets
/// its `_default` take any iterable of values convertible into `T`.
macro_rules! policy_variants {
    (@shared $ty:ty => $error:ident, $bare:ident, $panic:ident, $fatal:ident) => {
        #[doc = concat!("Like [`", stringify!($error), "`](Self::", stringify!($error), "), returning the zero value on any failure.")]
        pub fn $bare(&self, key: &str) -> $ty {
            self.$error(key).unwrap_or_default()
        }

        #[doc = concat!("Like [`", stringify!($error), "`](Self::", stringify!($error), "), panicking with the [`ReadError`] on any failure.")]
        pub fn $panic(&self, key: &str) -> $ty {
            $crate::reader::policy::or_panic(self.$error(key))
        }

        #[doc = concat!("Like [`", stringify!($error), "`](Self::", stringify!($error), "), invoking the fatal handler on any failure.")]
        pub fn $fatal(&self, key: &str) -> $ty {
            self.or_fatal(self.$error(key))
        }
    };
    (list $elem:ty => $error:ident, $bare:ident, $panic:ident, $fatal:ident, $default:ident) => {
        policy_variants!(@shared Vec<$elem> => $error, $bare, $panic, $fatal);

        #[doc = concat!("Like [`", stringify!($error), "`](Self::", stringify!($error), "), returning `fallback` when the key is missing.")]
        ///
        /// A malformed value still yields an empty list, not the fallback.
        pub fn $default<I>(&self, key: &str, fallback: I) -> Vec<$elem>
        where
            I: IntoIterator,
            I::Item: Into<$elem>,
        {
            let fallback = fallback.into_iter().map(Into::into).collect();
            $crate::reader::policy::or_fallback(self.$error(key), fallback)
        }
    };
    ($ty:ty => $error:ident, $bare:ident, $panic:ident, $fatal:ident, $default:ident) => {
        policy_variants!(@shared $ty => $error, $bare, $panic, $fatal);

        #[doc = concat!("Like [`", stringify!($error), "`](Self::", stringify!($error), "), returning `fallback` when the key is missing.")]
        ///
        /// A malformed value still yields the zero value, not the fallback.
        pub fn $default(&self, key: &str, fallback: impl Into<$ty>) -> $ty {
            $crate::reader::policy::or_fallback(self.$error(key), fallback.into())
        }
    };
}

pub(crate) use policy_variants;
