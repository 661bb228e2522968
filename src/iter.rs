//! Zero- and one-element iterators used by the containers.
//!
//! Every container in this crate iterates over at most one value. [`Singleton`] covers both
//! cases: it either still holds its item or it is exhausted, which is exactly the state of
//! an [`Empty`] iterator. [`Empty`] exists separately as a zero-sized constant for callers
//! that need an iterator that can never yield.
//!
//! # Example
//!
//! ```rust
//! use wellspring::iter::{empty, singleton};
//!
//! assert_eq!(singleton(3).collect::<Vec<_>>(), vec![3]);
//! assert_eq!(empty::<i32>().next(), None);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// An iterator that never yields anything.
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

/// Create an [`Empty`] iterator.
pub const fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

impl<T> Iterator for Empty<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl<T> DoubleEndedIterator for Empty<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        None
    }
}

impl<T> ExactSizeIterator for Empty<T> {}

impl<T> FusedIterator for Empty<T> {}

// Manual impls so that `T` needs no bounds.
impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        empty()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

/// An iterator over at most one item.
#[derive(Clone, Debug)]
pub struct Singleton<T> {
    item: Option<T>,
}

/// Create a [`Singleton`] that yields `item` once.
pub const fn singleton<T>(item: T) -> Singleton<T> {
    Singleton { item: Some(item) }
}

impl<T> Singleton<T> {
    /// Create a singleton from an optional item; `None` behaves like [`Empty`].
    pub const fn from_option(item: Option<T>) -> Self {
        Singleton { item }
    }

    /// Create an already exhausted singleton.
    pub const fn exhausted() -> Self {
        Singleton { item: None }
    }
}

impl<T> Iterator for Singleton<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.item.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.item.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Singleton<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.item.take()
    }
}

impl<T> ExactSizeIterator for Singleton<T> {}

impl<T> FusedIterator for Singleton<T> {}

impl<T> From<Empty<T>> for Singleton<T> {
    fn from(_: Empty<T>) -> Self {
        Singleton::exhausted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yields_nothing() {
        let mut it = empty::<String>();
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_singleton_yields_once() {
        let mut it = singleton("only");
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some("only"));
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_singleton_from_back() {
        let mut it = singleton(9);
        assert_eq!(it.next_back(), Some(9));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_singleton_from_option() {
        assert_eq!(Singleton::from_option(Some(1)).count(), 1);
        assert_eq!(Singleton::<i32>::from_option(None).count(), 0);
        assert_eq!(Singleton::from(empty::<i32>()).count(), 0);
    }

    #[test]
    fn test_singleton_clone_restarts() {
        let it = singleton(5);
        assert_eq!(it.clone().sum::<i32>(), 5);
        assert_eq!(it.sum::<i32>(), 5);
    }
}
