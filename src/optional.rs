//! A container for a value that may or may not be present.
//!
//! # Optional vs Option
//!
//! `Optional<T>` carries the same information as `std::option::Option<T>`, but exposes the
//! vocabulary shared by every container in this crate (`fold`, `flat_map`, `filter_not`,
//! `any`/`all`/`none`, `get_or_throw`) so that code written against [`Either`](crate::Either)
//! and [`Try`](crate::Try) reads the same when it deals with absence. Conversions to and
//! from `Option` are free.
//!
//! # Examples
//!
//! ```rust
//! use wellspring::Optional;
//!
//! fn lookup(key: &str) -> Optional<u16> {
//!     match key {
//!         "port" => Optional::of(8080),
//!         _ => Optional::empty(),
//!     }
//! }
//!
//! assert_eq!(lookup("port").map(|p| p + 1).get_or_else(0), 8081);
//! assert_eq!(lookup("host").map(|p| p + 1).get_or_else(0), 0);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::attempt::catch_non_fatal;
use crate::error::NoSuchElement;
use crate::iter::Singleton;

const NO_VALUE: NoSuchElement = NoSuchElement::new("Optional has no value");

/// A value that is either present (`Some`) or absent (`None`).
///
/// `None` carries no payload and is zero-cost to create. `Optional` is immutable: every
/// transformation returns a new value.
///
/// # Example
///
/// ```rust
/// use wellspring::Optional;
///
/// let present = Optional::of(21);
/// let absent = Optional::<i32>::empty();
///
/// assert_eq!(present.map(|x| x * 2), Optional::of(42));
/// assert_eq!(absent.map(|x| x * 2), Optional::empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Optional<T> {
    /// No value is present.
    None,
    /// A value is present.
    Some(T),
}

impl<T> Optional<T> {
    // ========== Constructors ==========

    /// Wrap a value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Optional;
    ///
    /// assert!(Optional::of("x").is_present());
    /// ```
    #[inline]
    pub fn of(value: T) -> Self {
        Optional::Some(value)
    }

    /// Alias for [`of`](Self::of).
    #[inline]
    pub fn some(value: T) -> Self {
        Optional::Some(value)
    }

    /// The absent value.
    #[inline]
    pub const fn empty() -> Self {
        Optional::None
    }

    /// Wrap a value that may be absent: `None` stays absent, `Some(v)` becomes present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Optional;
    ///
    /// assert_eq!(Optional::from_nullable(Some(5)), Optional::of(5));
    /// assert_eq!(Optional::<i32>::from_nullable(None), Optional::empty());
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Optional::Some(v),
            None => Optional::None,
        }
    }

    /// `Some(item)` if `condition` holds, otherwise `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Optional;
    ///
    /// assert_eq!(Optional::when(2 > 1, "yes"), Optional::of("yes"));
    /// assert_eq!(Optional::when(1 > 2, "yes"), Optional::empty());
    /// ```
    #[inline]
    pub fn when(condition: bool, item: T) -> Self {
        if condition {
            Optional::Some(item)
        } else {
            Optional::None
        }
    }

    /// Run a computation that may panic, mapping a panic to `None`.
    ///
    /// Panics raised with a [`Fatal`](crate::error::Fatal) payload are resumed rather than
    /// swallowed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Optional;
    ///
    /// let parsed = Optional::catching(|| "12".parse::<i32>().unwrap());
    /// assert_eq!(parsed, Optional::of(12));
    ///
    /// let broken = Optional::catching(|| "zz".parse::<i32>().unwrap());
    /// assert_eq!(broken, Optional::empty());
    /// ```
    pub fn catching<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_non_fatal(f) {
            Ok(value) => Optional::Some(value),
            Err(_) => Optional::None,
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Optional::None)
    }

    // ========== Extractors ==========

    /// Return the value, or [`NoSuchElement`] if absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Optional;
    ///
    /// assert_eq!(Optional::of(7).get(), Ok(7));
    /// assert!(Optional::<i32>::empty().get().is_err());
    /// ```
    #[inline]
    pub fn get(self) -> Result<T, NoSuchElement> {
        match self {
            Optional::Some(v) => Ok(v),
            Optional::None => Err(NO_VALUE),
        }
    }

    /// Return the value or `default`.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Optional::Some(v) => v,
            Optional::None => default,
        }
    }

    /// Return the value or compute a fallback. `supplier` only runs when absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Optional;
    ///
    /// let value = Optional::of(1).get_or_else_with(|| unreachable!());
    /// assert_eq!(value, 1);
    /// assert_eq!(Optional::empty().get_or_else_with(|| 2), 2);
    /// ```
    #[inline]
    pub fn get_or_else_with<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Some(v) => v,
            Optional::None => supplier(),
        }
    }

    /// Return the value, or the error produced by `error_supplier` if absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Optional;
    ///
    /// let missing = Optional::<u8>::empty().get_or_throw(|| "missing key");
    /// assert_eq!(missing, Err("missing key"));
    /// ```
    #[inline]
    pub fn get_or_throw<X, F>(self, error_supplier: F) -> Result<T, X>
    where
        F: FnOnce() -> X,
    {
        match self {
            Optional::Some(v) => Ok(v),
            Optional::None => Err(error_supplier()),
        }
    }

    /// Convert into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Some(v) => Some(v),
            Optional::None => None,
        }
    }

    /// Alias of [`into_option`](Self::into_option), named after its nullable counterpart.
    #[inline]
    pub fn or_null(self) -> Option<T> {
        self.into_option()
    }

    /// Convert to `Optional<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(v) => Optional::Some(v),
            Optional::None => Optional::None,
        }
    }

    /// Convert to `Optional<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Optional::Some(v) => Optional::Some(v),
            Optional::None => Optional::None,
        }
    }

    /// Run `action` on the value if present.
    #[inline]
    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Optional::Some(v) = self {
            action(v);
        }
    }

    // ========== Folding ==========

    /// Eliminate both cases into a single value. Exactly one branch runs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Optional;
    ///
    /// let describe = |o: Optional<i32>| o.fold(|| "nothing".to_string(), |v| v.to_string());
    /// assert_eq!(describe(Optional::of(3)), "3");
    /// assert_eq!(describe(Optional::empty()), "nothing");
    /// ```
    #[inline]
    pub fn fold<R, E, P>(self, if_empty: E, if_present: P) -> R
    where
        E: FnOnce() -> R,
        P: FnOnce(T) -> R,
    {
        match self {
            Optional::None => if_empty(),
            Optional::Some(v) => if_present(v),
        }
    }

    // ========== Transformations ==========

    /// Transform the value if present. `f` is never called on `None`.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Some(v) => Optional::Some(f(v)),
            Optional::None => Optional::None,
        }
    }

    /// Transform the value with a function that may itself produce nothing.
    ///
    /// An absent result collapses to `None` rather than a present-but-empty value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Optional;
    ///
    /// let first_char = |s: &str| s.chars().next();
    /// assert_eq!(Optional::of("abc").map_nullable(first_char), Optional::of('a'));
    /// assert_eq!(Optional::of("").map_nullable(first_char), Optional::empty());
    /// ```
    #[inline]
    pub fn map_nullable<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Optional::Some(v) => Optional::from_nullable(f(v)),
            Optional::None => Optional::None,
        }
    }

    /// Chain a computation that returns another `Optional`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Optional;
    ///
    /// let half = |x: i32| Optional::when(x % 2 == 0, x / 2);
    /// assert_eq!(Optional::of(8).flat_map(half), Optional::of(4));
    /// assert_eq!(Optional::of(7).flat_map(half), Optional::empty());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Some(v) => f(v),
            Optional::None => Optional::None,
        }
    }

    /// Keep the value only if `predicate` holds.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Some(v) => {
                if predicate(&v) {
                    Optional::Some(v)
                } else {
                    Optional::None
                }
            }
            Optional::None => Optional::None,
        }
    }

    /// Keep the value only if `predicate` does not hold.
    #[inline]
    pub fn filter_not<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(|v| !predicate(v))
    }

    // ========== Quantifiers ==========

    /// `false` when empty, otherwise the predicate's result.
    #[inline]
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Some(v) => predicate(v),
            Optional::None => false,
        }
    }

    /// `true` when empty, otherwise the predicate's result.
    #[inline]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Some(v) => predicate(v),
            Optional::None => true,
        }
    }

    /// `true` when empty, otherwise the negated predicate's result.
    #[inline]
    pub fn none<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        !self.any(predicate)
    }

    /// Returns `true` if present and equal to `value`.
    #[inline]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Optional::Some(v) => v == value,
            Optional::None => false,
        }
    }

    // ========== Combination ==========

    /// `None` if this is empty, otherwise `other`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Optional;
    ///
    /// assert_eq!(Optional::of(1).and(Optional::of("b")), Optional::of("b"));
    /// assert_eq!(Optional::<i32>::empty().and(Optional::of("b")), Optional::empty());
    /// ```
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Optional::Some(_) => other,
            Optional::None => Optional::None,
        }
    }

    /// This value if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        match self {
            Optional::Some(_) => self,
            Optional::None => other,
        }
    }

    // ========== Iterator Support ==========

    /// Iterate over the value by reference: one element if present, none otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::Optional;
    ///
    /// let o = Optional::of(4);
    /// assert_eq!(o.iter().collect::<Vec<_>>(), vec![&4]);
    /// assert_eq!(o.iter().count(), 1); // restartable
    /// ```
    #[inline]
    pub fn iter(&self) -> Singleton<&T> {
        self.as_ref().into_iter()
    }
}

impl<T> Optional<Optional<T>> {
    /// Remove one level of nesting.
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.flat_map(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<T> Default for Optional<T> {
    /// Returns `None`.
    fn default() -> Self {
        Optional::None
    }
}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            // Present values hash exactly like their payload.
            Optional::Some(v) => v.hash(state),
            Optional::None => 0usize.hash(state),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Some(v) => write!(f, "Some[{}]", v),
            Optional::None => f.write_str("None"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = Singleton<T>;

    fn into_iter(self) -> Self::IntoIter {
        Singleton::from_option(self.into_option())
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Singleton<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
