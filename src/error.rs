//! Error types shared by the containers and the linked collection.
//!
//! Every error here is a small, concrete struct implementing [`std::error::Error`],
//! so callers can match on exactly what went wrong instead of inspecting strings:
//!
//! - [`NoSuchElement`]: a value was requested from a container that has none.
//! - [`PredicateError`]: [`Try::filter`](crate::Try::filter) rejected a value.
//! - [`UnsupportedOperation`]: [`Try::invert`](crate::Try::invert) on a success.
//! - [`IndexOutOfBounds`]: list index outside `0..len` (or `0..=len` for inserts).
//! - [`IllegalState`]: a cursor was asked to remove without a current element.
//! - [`Panicked`]: a captured, non-fatal panic.
//!
//! [`Fatal`] is not an error value but a panic payload: anything that panics with it is
//! never captured by [`Try::catching`](crate::Try::catching).
//!
//! # Example
//!
//! ```rust
//! use wellspring::error::NoSuchElement;
//! use wellspring::Optional;
//!
//! let empty = Optional::<i32>::empty();
//! let err: NoSuchElement = empty.get().unwrap_err();
//! assert_eq!(err.to_string(), "no such element: Optional has no value");
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;

/// The default failure type carried by [`Try`](crate::Try).
///
/// Any `std::error::Error + Send + Sync` converts into it through `?` or `.into()`.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// A value was requested from a container that does not hold one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoSuchElement {
    reason: &'static str,
}

impl NoSuchElement {
    /// Create a new error with a static description of what was missing.
    pub const fn new(reason: &'static str) -> Self {
        NoSuchElement { reason }
    }

    /// The description of what was missing.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

impl fmt::Display for NoSuchElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no such element: {}", self.reason)
    }
}

impl StdError for NoSuchElement {}

/// A predicate passed to [`Try::filter`](crate::Try::filter) or
/// [`Try::filter_not`](crate::Try::filter_not) rejected the success value.
///
/// This is kept distinct from user errors so that "my predicate rejected this" can be told
/// apart from "the operation itself failed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateError {
    message: String,
}

impl PredicateError {
    /// Create a predicate error describing the rejected value.
    pub fn rejected<T: fmt::Debug>(value: &T) -> Self {
        PredicateError {
            message: format!("predicate did not match <{:?}>", value),
        }
    }

    /// The human readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PredicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for PredicateError {}

/// An operation has no meaningful result for the receiving variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedOperation {
    message: &'static str,
}

impl UnsupportedOperation {
    /// Create a new error.
    pub const fn new(message: &'static str) -> Self {
        UnsupportedOperation { message }
    }

    /// The human readable message.
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl fmt::Display for UnsupportedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported operation: {}", self.message)
    }
}

impl StdError for UnsupportedOperation {}

/// An index was outside the valid range of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The length of the list at the time of the call.
    pub len: usize,
}

impl IndexOutOfBounds {
    /// Create a new error.
    pub const fn new(index: usize, len: usize) -> Self {
        IndexOutOfBounds { index, len }
    }
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} is out of bounds for length {}", self.index, self.len)
    }
}

impl StdError for IndexOutOfBounds {}

/// An operation was called while the receiver was not positioned for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalState {
    message: &'static str,
}

impl IllegalState {
    /// Create a new error.
    pub const fn new(message: &'static str) -> Self {
        IllegalState { message }
    }

    /// The human readable message.
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl fmt::Display for IllegalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal state: {}", self.message)
    }
}

impl StdError for IllegalState {}

/// A panic captured by [`Try::catching`](crate::Try::catching).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Build from a raw panic payload, extracting the message when it is a string.
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "<non-string panic payload>".to_string()
        };
        Panicked { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked: {}", self.message)
    }
}

impl StdError for Panicked {}

/// Panic payload marking an unrecoverable condition.
///
/// [`Try::catching`](crate::Try::catching) and
/// [`Optional::catching`](crate::Optional::catching) resume a panic carrying this payload
/// instead of turning it into a value.
///
/// # Example
///
/// ```rust,should_panic
/// use wellspring::error::Fatal;
/// use wellspring::Try;
///
/// // Never becomes a `Failure`.
/// let _ = Try::<i32>::catching(|| Fatal::raise("heap exhausted"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fatal {
    message: String,
}

impl Fatal {
    /// Create a fatal marker.
    pub fn new(message: impl Into<String>) -> Self {
        Fatal {
            message: message.into(),
        }
    }

    /// Panic with a fatal marker payload.
    pub fn raise(message: impl Into<String>) -> ! {
        std::panic::panic_any(Fatal::new(message))
    }

    /// Whether a panic payload carries the fatal marker.
    pub fn is_fatal(payload: &(dyn Any + Send)) -> bool {
        payload.is::<Fatal>()
    }

    /// The description of the condition.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Fatal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fatal: {}", self.message)
    }
}
