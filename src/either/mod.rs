//! A semantically neutral sum type for representing one of two possible values.
//!
//! # Either vs Try
//!
//! `Either<L, R>` carries no success/failure meaning: neither variant implies an error.
//! Use [`Try`](crate::Try) when one side is clearly a failure.
//!
//! # Projections
//!
//! `Either` is unbiased. Instead of picking a side for `map` and `flat_map`, it hands out
//! a projection for each side: [`LeftProjection`] and [`RightProjection`]. A projection
//! behaves like a container of zero or one element holding that side's value, and passes
//! the other side through untouched.
//!
//! ```rust
//! use wellspring::Either;
//!
//! let e: Either<i32, &str> = Either::left(20);
//!
//! assert_eq!(e.project_left().map(|n| n + 1), Either::left(21));
//! assert_eq!(e.project_right().map(|s| s.len()), Either::left(20));
//! assert!(e.project_left().any(|n| *n == 20));
//! assert!(e.project_right().all(|_| false)); // vacuously true
//! ```

mod projection;

pub use projection::{LeftProjection, RightProjection};

use std::fmt;
use std::ops::Not;

use crate::error::NoSuchElement;

const NOT_LEFT: NoSuchElement =
    NoSuchElement::new("Right side does not contain value of Left side");
const NOT_RIGHT: NoSuchElement =
    NoSuchElement::new("Left side does not contain value of Right side");

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Example
///
/// ```rust
/// use wellspring::Either;
///
/// let left: Either<i32, &str> = Either::left(42);
/// let right: Either<i32, &str> = Either::right("hello");
///
/// match left {
///     Either::Left(n) => println!("Got left: {}", n),
///     Either::Right(s) => println!("Got right: {}", s),
/// }
///
/// let described = right.fold(|n| format!("number: {}", n), |s| format!("string: {}", s));
/// assert_eq!(described, "string: hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    /// The left variant
    Left(L),
    /// The right variant
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a Left value.
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Create from a `Result` (`Ok` becomes `Right`, `Err` becomes `Left`).
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Returns `true` if the held value, whichever side it is on, equals `item`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Either;
    ///
    /// let e: Either<i32, i32> = Either::right(3);
    /// assert!(e.contains(&3));
    /// assert!(!e.contains(&4));
    /// ```
    #[inline]
    pub fn contains<U>(&self, item: &U) -> bool
    where
        L: PartialEq<U>,
        R: PartialEq<U>,
    {
        match self {
            Either::Left(l) => l == item,
            Either::Right(r) => r == item,
        }
    }

    // ========== Extractors ==========

    /// The left value, or [`NoSuchElement`] if this is a `Right`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(42);
    /// assert_eq!(e.left_value(), Ok(&42));
    /// assert!(e.right_value().is_err());
    /// ```
    #[inline]
    pub fn left_value(&self) -> Result<&L, NoSuchElement> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(NOT_LEFT),
        }
    }

    /// The right value, or [`NoSuchElement`] if this is a `Left`.
    #[inline]
    pub fn right_value(&self) -> Result<&R, NoSuchElement> {
        match self {
            Either::Left(_) => Err(NOT_RIGHT),
            Either::Right(r) => Ok(r),
        }
    }

    /// Owning form of [`left_value`](Self::left_value).
    #[inline]
    pub fn into_left_value(self) -> Result<L, NoSuchElement> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(NOT_LEFT),
        }
    }

    /// Owning form of [`right_value`](Self::right_value).
    #[inline]
    pub fn into_right_value(self) -> Result<R, NoSuchElement> {
        match self {
            Either::Left(_) => Err(NOT_RIGHT),
            Either::Right(r) => Ok(r),
        }
    }

    /// Convert to `Either<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Convert to `Either<&mut L, &mut R>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Either;
    ///
    /// let mut e: Either<i32, String> = Either::left(42);
    /// if let Either::Left(l) = e.as_mut() {
    ///     *l = 100;
    /// }
    /// assert_eq!(e, Either::left(100));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Run `action` on the left value, if any.
    #[inline]
    pub fn if_left<F>(&self, action: F)
    where
        F: FnOnce(&L),
    {
        if let Either::Left(l) = self {
            action(l);
        }
    }

    /// Run `action` on the right value, if any.
    #[inline]
    pub fn if_right<F>(&self, action: F)
    where
        F: FnOnce(&R),
    {
        if let Either::Right(r) = self {
            action(r);
        }
    }

    // ========== Projections ==========

    /// View this value through its left side.
    #[inline]
    pub fn project_left(self) -> LeftProjection<L, R> {
        LeftProjection::new(self)
    }

    /// View this value through its right side.
    #[inline]
    pub fn project_right(self) -> RightProjection<L, R> {
        RightProjection::new(self)
    }

    // ========== Transformations ==========

    /// Transform the left value, passing right values through unchanged.
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform the right value, passing left values through unchanged.
    #[inline]
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transform both variants.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(1);
    /// assert_eq!(left.bimap(|x| x + 1, |s| s.len()), Either::left(2));
    /// ```
    #[inline]
    pub fn bimap<L2, R2, F, G>(self, f: F, g: G) -> Either<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(g(r)),
        }
    }

    /// Swap Left and Right, keeping the payload.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// assert_eq!(left.swap(), Either::right(42));
    /// assert_eq!(left.swap().swap(), left);
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    // ========== Folding ==========

    /// Fold both variants into a single value. Exactly one branch runs.
    #[inline]
    pub fn fold<T, F, G>(self, if_left: F, if_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => if_left(l),
            Either::Right(r) => if_right(r),
        }
    }

    // ========== Conversions ==========

    /// Convert to `Result` (`Right` becomes `Ok`, `Left` becomes `Err`).
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}

impl<T> Either<T, ()> {
    /// `Left(v)` for a present value, `Right(())` for an absent one.
    ///
    /// Left is the side of presence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Either;
    ///
    /// assert_eq!(Either::from_nullable(Some(5)), Either::Left(5));
    /// assert_eq!(Either::<i32, ()>::from_nullable(None), Either::Right(()));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Either::Left(v),
            None => Either::Right(()),
        }
    }
}

// ========== Trait Implementations ==========

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left[{}]", l),
            Either::Right(r) => write!(f, "Right[{}]", r),
        }
    }
}

/// `!either` swaps the sides, same as [`Either::swap`].
impl<L, R> Not for Either<L, R> {
    type Output = Either<R, L>;

    fn not(self) -> Self::Output {
        self.swap()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_swap_involution(x: i32, left: bool) {
            let e: Either<i32, i32> = if left { Either::left(x) } else { Either::right(x) };
            prop_assert_eq!(e.swap().swap(), e);
        }

        #[test]
        fn prop_left_value_roundtrip(x: i32) {
            let e: Either<i32, String> = Either::left(x);
            prop_assert_eq!(e.left_value(), Ok(&x));
            prop_assert!(e.right_value().is_err());
        }

        #[test]
        fn prop_bimap_swap_commutes(x: i32, left: bool) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);

            let e: Either<i32, i32> = if left { Either::left(x) } else { Either::right(x) };
            prop_assert_eq!(e.bimap(f, g).swap(), e.swap().bimap(g, f));
        }

        #[test]
        fn prop_result_roundtrip(x: i32) {
            let either: Either<(), i32> = Either::right(x);
            let result: Result<i32, ()> = either.into();
            let back: Either<(), i32> = result.into();
            prop_assert_eq!(back, Either::right(x));
        }
    }
}
