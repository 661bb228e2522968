//! One-sided views over an [`Either`].

use crate::error::NoSuchElement;
use crate::iter::Singleton;

use super::Either;

const LEFT_FROM_RIGHT: NoSuchElement =
    NoSuchElement::new("Retrieving left-side value from right-side");
const RIGHT_FROM_LEFT: NoSuchElement =
    NoSuchElement::new("Retrieving right-side value from left-side");

/// The left side of an [`Either`], viewed as a container of zero or one values.
///
/// Created by [`Either::project_left`]. Operations act on the left value when there is one;
/// a `Right` passes through every transformation untouched.
///
/// # Example
///
/// ```rust
/// use wellspring::Either;
///
/// let e: Either<&str, u8> = Either::right(7);
/// let p = e.project_left();
///
/// assert!(p.value().is_err());
/// assert_eq!(p.iter().count(), 0);
/// assert_eq!(p.map(str::len), Either::right(7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LeftProjection<L, R> {
    backing: Either<L, R>,
}

impl<L, R> LeftProjection<L, R> {
    pub(crate) fn new(backing: Either<L, R>) -> Self {
        LeftProjection { backing }
    }

    /// The left value, or [`NoSuchElement`] when the backing value is a `Right`.
    #[inline]
    pub fn value(&self) -> Result<&L, NoSuchElement> {
        match &self.backing {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(LEFT_FROM_RIGHT),
        }
    }

    /// Owning form of [`value`](Self::value).
    #[inline]
    pub fn into_value(self) -> Result<L, NoSuchElement> {
        match self.backing {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(LEFT_FROM_RIGHT),
        }
    }

    /// Transform the left value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Either<U, R>
    where
        F: FnOnce(L) -> U,
    {
        self.backing.map_left(f)
    }

    /// Chain a computation on the left value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Either;
    ///
    /// let e: Either<i32, String> = Either::left(4);
    /// let out = e.project_left().flat_map(|n| {
    ///     if n > 3 { Either::right(format!("{} is too big", n)) } else { Either::left(n) }
    /// });
    /// assert_eq!(out, Either::right("4 is too big".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Either<U, R>
    where
        F: FnOnce(L) -> Either<U, R>,
    {
        match self.backing {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Run `action` on the left value, if any.
    #[inline]
    pub fn for_each<F>(&self, action: F)
    where
        F: FnOnce(&L),
    {
        self.backing.if_left(action)
    }

    /// `false` on a `Right`, otherwise the predicate's result.
    #[inline]
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&L) -> bool,
    {
        match &self.backing {
            Either::Left(l) => predicate(l),
            Either::Right(_) => false,
        }
    }

    /// `true` on a `Right`, otherwise the predicate's result.
    #[inline]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&L) -> bool,
    {
        match &self.backing {
            Either::Left(l) => predicate(l),
            Either::Right(_) => true,
        }
    }

    /// `true` on a `Right`, otherwise the negated predicate's result.
    #[inline]
    pub fn none<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&L) -> bool,
    {
        !self.any(predicate)
    }

    /// Returns `true` if there is a left value equal to `item`.
    #[inline]
    pub fn contains<U>(&self, item: &U) -> bool
    where
        L: PartialEq<U>,
    {
        self.any(|l| l == item)
    }

    /// Iterate over the left value by reference.
    #[inline]
    pub fn iter(&self) -> Singleton<&L> {
        Singleton::from_option(self.value().ok())
    }

    /// Swap the sides of the backing value.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        self.backing.swap()
    }

    /// Borrow the backing value.
    #[inline]
    pub fn as_either(&self) -> &Either<L, R> {
        &self.backing
    }

    /// Recover the backing value.
    #[inline]
    pub fn into_either(self) -> Either<L, R> {
        self.backing
    }
}

impl<L, R> IntoIterator for LeftProjection<L, R> {
    type Item = L;
    type IntoIter = Singleton<L>;

    fn into_iter(self) -> Self::IntoIter {
        Singleton::from_option(self.into_value().ok())
    }
}

impl<'a, L, R> IntoIterator for &'a LeftProjection<L, R> {
    type Item = &'a L;
    type IntoIter = Singleton<&'a L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The right side of an [`Either`], viewed as a container of zero or one values.
///
/// Created by [`Either::project_right`]. Mirror image of [`LeftProjection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RightProjection<L, R> {
    backing: Either<L, R>,
}

impl<L, R> RightProjection<L, R> {
    pub(crate) fn new(backing: Either<L, R>) -> Self {
        RightProjection { backing }
    }

    /// The right value, or [`NoSuchElement`] when the backing value is a `Left`.
    #[inline]
    pub fn value(&self) -> Result<&R, NoSuchElement> {
        match &self.backing {
            Either::Left(_) => Err(RIGHT_FROM_LEFT),
            Either::Right(r) => Ok(r),
        }
    }

    /// Owning form of [`value`](Self::value).
    #[inline]
    pub fn into_value(self) -> Result<R, NoSuchElement> {
        match self.backing {
            Either::Left(_) => Err(RIGHT_FROM_LEFT),
            Either::Right(r) => Ok(r),
        }
    }

    /// Transform the right value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        self.backing.map_right(f)
    }

    /// Chain a computation on the right value.
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self.backing {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Run `action` on the right value, if any.
    #[inline]
    pub fn for_each<F>(&self, action: F)
    where
        F: FnOnce(&R),
    {
        self.backing.if_right(action)
    }

    /// `false` on a `Left`, otherwise the predicate's result.
    #[inline]
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match &self.backing {
            Either::Left(_) => false,
            Either::Right(r) => predicate(r),
        }
    }

    /// `true` on a `Left`, otherwise the predicate's result.
    #[inline]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match &self.backing {
            Either::Left(_) => true,
            Either::Right(r) => predicate(r),
        }
    }

    /// `true` on a `Left`, otherwise the negated predicate's result.
    #[inline]
    pub fn none<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        !self.any(predicate)
    }

    /// Returns `true` if there is a right value equal to `item`.
    #[inline]
    pub fn contains<U>(&self, item: &U) -> bool
    where
        R: PartialEq<U>,
    {
        self.any(|r| r == item)
    }

    /// Iterate over the right value by reference.
    #[inline]
    pub fn iter(&self) -> Singleton<&R> {
        Singleton::from_option(self.value().ok())
    }

    /// Swap the sides of the backing value.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        self.backing.swap()
    }

    /// Borrow the backing value.
    #[inline]
    pub fn as_either(&self) -> &Either<L, R> {
        &self.backing
    }

    /// Recover the backing value.
    #[inline]
    pub fn into_either(self) -> Either<L, R> {
        self.backing
    }
}

impl<L, R> IntoIterator for RightProjection<L, R> {
    type Item = R;
    type IntoIter = Singleton<R>;

    fn into_iter(self) -> Self::IntoIter {
        Singleton::from_option(self.into_value().ok())
    }
}

impl<'a, L, R> IntoIterator for &'a RightProjection<L, R> {
    type Item = &'a R;
    type IntoIter = Singleton<&'a R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type E = Either<i32, &'static str>;

    #[test]
    fn test_left_projection_on_left() {
        let p = E::left(10).project_left();
        assert_eq!(p.value(), Ok(&10));
        assert_eq!(p.map(|x| x * 2), Either::left(20));
        assert_eq!(p.flat_map(|_| E::right("swapped")), Either::right("swapped"));
        assert!(p.any(|x| *x == 10));
        assert!(p.all(|x| *x == 10));
        assert!(!p.none(|x| *x == 10));
        assert!(p.contains(&10));
        assert_eq!(p.iter().collect::<Vec<_>>(), vec![&10]);
        assert_eq!(p.into_iter().collect::<Vec<_>>(), vec![10]);
    }

    #[test]
    fn test_left_projection_on_right() {
        let p = E::right("r").project_left();
        assert_eq!(
            p.value().unwrap_err().reason(),
            "Retrieving left-side value from right-side"
        );
        let called = Cell::new(false);
        let mapped = p.map(|x| {
            called.set(true);
            x * 2
        });
        assert_eq!(mapped, Either::right("r"));
        assert!(!called.get());
        assert!(!p.any(|_| true));
        assert!(p.all(|_| false));
        assert!(p.none(|_| true));
        assert!(!p.contains(&0));
        assert_eq!(p.iter().count(), 0);
    }

    #[test]
    fn test_right_projection_on_right() {
        let p = E::right("abc").project_right();
        assert_eq!(p.value(), Ok(&"abc"));
        assert_eq!(p.map(str::len), Either::right(3));
        assert_eq!(
            p.flat_map(|s| Either::<i32, usize>::left(s.len() as i32)),
            Either::left(3)
        );
        assert_eq!(p.flat_map(|s| E::right(&s[1..])), Either::right("bc"));
        assert!(p.any(|s| s.starts_with('a')));
        assert!(!p.none(|s| s.starts_with('a')));
        assert!(p.none(|s| s.is_empty()));
        assert!(p.contains(&"abc"));
        assert_eq!(p.into_iter().collect::<Vec<_>>(), vec!["abc"]);
    }

    #[test]
    fn test_right_projection_on_left() {
        let p = E::left(1).project_right();
        assert!(p.value().is_err());
        assert_eq!(p.map(str::len), Either::left(1));
        assert!(p.all(|_| false));
        assert!(p.none(|_| true));
        assert_eq!((&p).into_iter().count(), 0);
    }

    #[test]
    fn test_for_each_runs_only_on_matching_side() {
        let hits = Cell::new(0);
        E::left(1).project_left().for_each(|_| hits.set(hits.get() + 1));
        E::left(1).project_right().for_each(|_| hits.set(hits.get() + 10));
        E::right("x").project_right().for_each(|_| hits.set(hits.get() + 100));
        assert_eq!(hits.get(), 101);
    }

    #[test]
    fn test_projection_swap_and_recover() {
        let e = E::left(5);
        assert_eq!(e.project_left().swap(), Either::right(5));
        assert_eq!(e.project_right().swap(), Either::right(5));
        assert_eq!(e.project_right().into_either(), e);
        assert_eq!(e.project_left().as_either(), &e);
    }
}
