//! The outcome of a computation that may have failed.
//!
//! `Try<T, E>` is either `Success(T)` or `Failure(E)`. It carries the same combinators as
//! [`Optional`](crate::Optional), with the failure side holding the cause instead of
//! nothing, plus combinators that work on the failure channel (`map_failure`,
//! `flat_map_failure`).
//!
//! # Capturing failures
//!
//! - [`Try::invoke`] runs a closure returning `std::result::Result` and records `Err` as a
//!   `Failure`. Panics are not touched.
//! - [`Try::catching`] additionally turns a panic into `Failure(Panicked)`. A panic raised
//!   with a [`Fatal`] payload is always resumed: recovering from an unrecoverable condition
//!   is never attempted.
//!
//! # Examples
//!
//! ```rust
//! use wellspring::Try;
//!
//! let parsed = Try::invoke(|| "42".parse::<i32>());
//! assert_eq!(parsed.map(|n| n + 1).into_result(), Ok(43));
//!
//! let broken = Try::invoke(|| "forty-two".parse::<i32>());
//! assert!(broken.is_failure());
//! ```

use std::fmt;
use std::ops::Not;
use std::panic::{self, AssertUnwindSafe};

use crate::either::Either;
use crate::error::{Cause, Fatal, NoSuchElement, Panicked, PredicateError, UnsupportedOperation};
use crate::iter::Singleton;
use crate::optional::Optional;

const NO_VALUE: NoSuchElement = NoSuchElement::new("Failure contains no value");
const NO_CAUSE: NoSuchElement = NoSuchElement::new("Success contains no cause");

/// A successful value or the cause of a failure.
///
/// The failure type defaults to [`Cause`], a boxed `std::error::Error`, so that
/// heterogeneous errors can flow through a single `Try<T>`. Use a concrete `E` when the
/// failure set is known.
///
/// # Example
///
/// ```rust
/// use wellspring::Try;
///
/// let ok: Try<i32, &str> = Try::success(2);
/// let err: Try<i32, &str> = Try::failure("no disk");
///
/// assert_eq!(ok.fold(|_| 0, |v| v * 10), 20);
/// assert_eq!(err.fold(|e| e.len() as i32, |v| v * 10), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Try<T, E = Cause> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with a cause.
    Failure(E),
}

impl<T, E> Try<T, E> {
    // ========== Constructors ==========

    /// Create a success.
    #[inline]
    pub fn success(value: T) -> Self {
        Try::Success(value)
    }

    /// Create a failure.
    #[inline]
    pub fn failure(cause: E) -> Self {
        Try::Failure(cause)
    }

    /// Run `f`, recording its error as a `Failure`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Try;
    ///
    /// let t = Try::invoke(|| std::fs::read_to_string("/definitely/not/here"));
    /// assert!(t.is_failure());
    /// ```
    #[inline]
    pub fn invoke<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        Try::from_result(f())
    }

    /// Run `f`, recording a non-fatal panic as `Failure(Panicked)`.
    ///
    /// A panic carrying a [`Fatal`] payload is resumed and never becomes a value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::error::Panicked;
    /// use wellspring::Try;
    ///
    /// let t: Try<i32, Panicked> = Try::catching(|| panic!("index out of range"));
    /// assert_eq!(t.get_cause().unwrap().message(), "index out of range");
    /// ```
    pub fn catching<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
        E: From<Panicked>,
    {
        match catch_non_fatal(f) {
            Ok(value) => Try::Success(value),
            Err(panicked) => Try::Failure(E::from(panicked)),
        }
    }

    /// Build from a standard `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Try::Success(v),
            Err(e) => Try::Failure(e),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` for `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Try::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Try::Failure(_))
    }

    // ========== Extractors ==========

    /// The success value, or [`NoSuchElement`] for a failure.
    #[inline]
    pub fn get(&self) -> Result<&T, NoSuchElement> {
        match self {
            Try::Success(v) => Ok(v),
            Try::Failure(_) => Err(NO_VALUE),
        }
    }

    /// The failure cause, or [`NoSuchElement`] for a success.
    #[inline]
    pub fn get_cause(&self) -> Result<&E, NoSuchElement> {
        match self {
            Try::Success(_) => Err(NO_CAUSE),
            Try::Failure(e) => Ok(e),
        }
    }

    /// Owning form of [`get`](Self::get).
    #[inline]
    pub fn into_value(self) -> Result<T, NoSuchElement> {
        match self {
            Try::Success(v) => Ok(v),
            Try::Failure(_) => Err(NO_VALUE),
        }
    }

    /// Owning form of [`get_cause`](Self::get_cause).
    #[inline]
    pub fn into_cause(self) -> Result<E, NoSuchElement> {
        match self {
            Try::Success(_) => Err(NO_CAUSE),
            Try::Failure(e) => Ok(e),
        }
    }

    /// Run `action` on the success value.
    #[inline]
    pub fn if_success<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Try::Success(v) = self {
            action(v);
        }
    }

    /// Run `action` on the failure cause.
    #[inline]
    pub fn if_failure<F>(&self, action: F)
    where
        F: FnOnce(&E),
    {
        if let Try::Failure(e) = self {
            action(e);
        }
    }

    /// Convert to `Try<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Try<&T, &E> {
        match self {
            Try::Success(v) => Try::Success(v),
            Try::Failure(e) => Try::Failure(e),
        }
    }

    // ========== Folding ==========

    /// Eliminate both cases. Exactly one branch runs.
    #[inline]
    pub fn fold<R, F, S>(self, if_failure: F, if_success: S) -> R
    where
        F: FnOnce(E) -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Try::Failure(e) => if_failure(e),
            Try::Success(v) => if_success(v),
        }
    }

    // ========== Success channel ==========

    /// Transform the success value; failures pass through.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Try<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Try::Success(v) => Try::Success(f(v)),
            Try::Failure(e) => Try::Failure(e),
        }
    }

    /// Chain a computation on the success value; failures pass through.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Try;
    ///
    /// let checked_half = |n: i32| -> Try<i32, String> {
    ///     if n % 2 == 0 { Try::success(n / 2) } else { Try::failure(format!("{} is odd", n)) }
    /// };
    ///
    /// assert_eq!(Try::success(8).flat_map(checked_half), Try::success(4));
    /// assert_eq!(Try::success(3).flat_map(checked_half), Try::failure("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Try<U, E>
    where
        F: FnOnce(T) -> Try<U, E>,
    {
        match self {
            Try::Success(v) => f(v),
            Try::Failure(e) => Try::Failure(e),
        }
    }

    /// Keep the success only if `predicate` holds; otherwise fail with [`PredicateError`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::error::PredicateError;
    /// use wellspring::Try;
    ///
    /// let t: Try<i32, PredicateError> = Try::success(5).filter(|n| *n > 10);
    /// assert_eq!(t.get_cause().unwrap().message(), "predicate did not match <5>");
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
        T: fmt::Debug,
        E: From<PredicateError>,
    {
        match self {
            Try::Success(v) => {
                if predicate(&v) {
                    Try::Success(v)
                } else {
                    Try::Failure(E::from(PredicateError::rejected(&v)))
                }
            }
            failure => failure,
        }
    }

    /// Keep the success only if `predicate` does not hold.
    #[inline]
    pub fn filter_not<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
        T: fmt::Debug,
        E: From<PredicateError>,
    {
        self.filter(|v| !predicate(v))
    }

    /// `false` for a failure, otherwise the predicate's result.
    #[inline]
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Try::Success(v) => predicate(v),
            Try::Failure(_) => false,
        }
    }

    /// `true` for a failure, otherwise the predicate's result.
    #[inline]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Try::Success(v) => predicate(v),
            Try::Failure(_) => true,
        }
    }

    // ========== Failure channel ==========

    /// Recover from a failure by turning its cause into a success value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Try;
    ///
    /// let t: Try<usize, &str> = Try::failure("oops");
    /// assert_eq!(t.map_failure(|e| e.len()), Try::success(4));
    /// ```
    #[inline]
    pub fn map_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Try::Failure(e) => Try::Success(f(e)),
            success => success,
        }
    }

    /// Recover from a failure with another `Try`, which may itself fail.
    #[inline]
    pub fn flat_map_failure<E2, F>(self, f: F) -> Try<T, E2>
    where
        F: FnOnce(E) -> Try<T, E2>,
    {
        match self {
            Try::Failure(e) => f(e),
            Try::Success(v) => Try::Success(v),
        }
    }

    /// Transform the cause without recovering.
    #[inline]
    pub fn map_cause<E2, F>(self, f: F) -> Try<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Try::Success(v) => Try::Success(v),
            Try::Failure(e) => Try::Failure(f(e)),
        }
    }

    /// Swap the channels: a failure's cause becomes a success value.
    ///
    /// This is lossy in one direction: a success value is discarded and replaced by an
    /// [`UnsupportedOperation`] cause.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::error::UnsupportedOperation;
    /// use wellspring::Try;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum E { Disk, Unsupported(UnsupportedOperation) }
    ///
    /// impl From<UnsupportedOperation> for E {
    ///     fn from(e: UnsupportedOperation) -> Self { E::Unsupported(e) }
    /// }
    ///
    /// assert_eq!(Try::<i32, E>::failure(E::Disk).invert(), Try::success(E::Disk));
    /// assert!(Try::<i32, E>::success(1).invert().is_failure());
    /// ```
    #[inline]
    pub fn invert(self) -> Try<E, E>
    where
        E: From<UnsupportedOperation>,
    {
        match self {
            Try::Failure(e) => Try::Success(e),
            Try::Success(_) => {
                Try::Failure(E::from(UnsupportedOperation::new("Success[failure]")))
            }
        }
    }

    // ========== Conversions ==========

    /// `Success(v)` becomes `Some(v)`; a failure's cause is discarded.
    #[inline]
    pub fn to_optional(self) -> Optional<T> {
        match self {
            Try::Success(v) => Optional::Some(v),
            Try::Failure(_) => Optional::None,
        }
    }

    /// Convert into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Try::Success(v) => Ok(v),
            Try::Failure(e) => Err(e),
        }
    }

    /// Failure goes left, success goes right.
    #[inline]
    pub fn to_either(self) -> Either<E, T> {
        match self {
            Try::Failure(e) => Either::Left(e),
            Try::Success(v) => Either::Right(v),
        }
    }

    // ========== Iterator Support ==========

    /// Iterate over the success value by reference.
    #[inline]
    pub fn iter(&self) -> Singleton<&T> {
        Singleton::from_option(self.get().ok())
    }
}

/// Run `f`, converting a non-fatal panic into [`Panicked`] and resuming a fatal one.
pub(crate) fn catch_non_fatal<T, F>(f: F) -> Result<T, Panicked>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => {
            if Fatal::is_fatal(payload.as_ref()) {
                #[cfg(feature = "tracing")]
                tracing::error!("fatal panic inside a catching block, resuming unwind");
                panic::resume_unwind(payload);
            }
            let panicked = Panicked::from_payload(payload.as_ref());
            #[cfg(feature = "tracing")]
            tracing::debug!("captured panic: {}", panicked.message());
            Err(panicked)
        }
    }
}

// ========== Trait Implementations ==========

impl<T, E> Not for Try<T, E>
where
    E: From<UnsupportedOperation>,
{
    type Output = Try<E, E>;

    fn not(self) -> Self::Output {
        self.invert()
    }
}

impl<T, E> From<Result<T, E>> for Try<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Try::from_result(result)
    }
}

impl<T, E> From<Try<T, E>> for Result<T, E> {
    fn from(t: Try<T, E>) -> Self {
        t.into_result()
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Try<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Try::Success(v) => write!(f, "Success[{}]", v),
            Try::Failure(e) => write!(f, "Failure[{}]", e),
        }
    }
}

impl<T, E> IntoIterator for Try<T, E> {
    type Item = T;
    type IntoIter = Singleton<T>;

    fn into_iter(self) -> Self::IntoIter {
        Singleton::from_option(self.into_value().ok())
    }
}

impl<'a, T, E> IntoIterator for &'a Try<T, E> {
    type Item = &'a T;
    type IntoIter = Singleton<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_success_get(x: i32) {
            let t = Try::<i32, String>::success(x);
            prop_assert_eq!(t.get(), Ok(&x));
            prop_assert!(t.get_cause().is_err());
        }

        #[test]
        fn prop_failure_get_cause(e: String) {
            let t = Try::<i32, String>::failure(e.clone());
            prop_assert_eq!(t.get_cause(), Ok(&e));
        }

        #[test]
        fn prop_to_optional(x: Result<i32, String>) {
            let t = Try::from_result(x.clone());
            prop_assert_eq!(t.to_optional().into_option(), x.ok());
        }

        #[test]
        fn prop_functor_composition(x: i32) {
            let f = |v: i32| v.wrapping_sub(7);
            let g = |v: i32| v.wrapping_mul(5);
            let t = Try::<i32, ()>::success(x);
            prop_assert_eq!(t.map(f).map(g), t.map(|v| g(f(v))));
        }
    }
}

#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_captured_panic_is_logged() {
        let _ = Try::<i32>::catching(|| panic!("logged boom"));
        assert!(logs_contain("captured panic: logged boom"));
    }
}
