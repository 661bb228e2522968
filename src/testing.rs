//! Testing utilities for code built on wellspring's containers.
//!
//! This module provides assertion macros that report the unexpected variant's contents on
//! failure, and, behind the `proptest` feature, [`Arbitrary`](proptest::arbitrary::Arbitrary)
//! implementations so the containers can be generated in property tests.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use wellspring::{assert_failure, assert_none, assert_some, assert_success, Optional, Try};
//!
//! let present = Optional::of(42);
//! assert_eq!(assert_some!(present), 42);
//! assert_none!(Optional::<i32>::empty());
//!
//! let ok: Try<i32, String> = Try::success(1);
//! assert_success!(ok);
//!
//! let failed: Try<i32, String> = Try::failure("boom".to_string());
//! assert_eq!(assert_failure!(failed), "boom");
//! ```
//!
//! ## Property-based testing
//!
//! With the `proptest` feature enabled:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use wellspring::Optional;
//!
//! proptest! {
//!     #[test]
//!     fn map_identity(opt in any::<Optional<i32>>()) {
//!         prop_assert_eq!(opt.map(|x| x), opt);
//!     }
//! }
//! ```

/// Assert that an `Optional` holds a value, and evaluate to that value.
///
/// This macro will panic if the optional is `None`.
///
/// # Example
///
/// ```rust
/// use wellspring::{assert_some, Optional};
///
/// let name = assert_some!(Optional::of("ferris"));
/// assert_eq!(name, "ferris");
/// ```
#[macro_export]
macro_rules! assert_some {
    ($optional:expr) => {
        match $optional {
            $crate::Optional::Some(value) => value,
            $crate::Optional::None => {
                panic!("Expected Some, got None");
            }
        }
    };
}

/// Assert that an `Optional` is empty.
///
/// This macro will panic if the optional holds a value.
///
/// # Example
///
/// ```rust
/// use wellspring::{assert_none, Optional};
///
/// assert_none!(Optional::from_nullable(None::<u8>));
/// ```
#[macro_export]
macro_rules! assert_none {
    ($optional:expr) => {
        match $optional {
            $crate::Optional::None => {}
            $crate::Optional::Some(value) => {
                panic!("Expected None, got Some: {:?}", value);
            }
        }
    };
}

/// Assert that a `Try` succeeded, and evaluate to the success value.
///
/// This macro will panic if the try is a `Failure`.
///
/// # Example
///
/// ```rust
/// use wellspring::{assert_success, Try};
///
/// let t: Try<i32, String> = Try::success(42);
/// assert_eq!(assert_success!(t), 42);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($attempt:expr) => {
        match $attempt {
            $crate::Try::Success(value) => value,
            $crate::Try::Failure(cause) => {
                panic!("Expected Success, got Failure: {:?}", cause);
            }
        }
    };
}

/// Assert that a `Try` failed, and evaluate to the cause.
///
/// This macro will panic if the try is a `Success`.
///
/// # Example
///
/// ```rust
/// use wellspring::{assert_failure, Try};
///
/// let t: Try<i32, &str> = Try::failure("nope");
/// assert_eq!(assert_failure!(t), "nope");
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($attempt:expr) => {
        match $attempt {
            $crate::Try::Failure(cause) => cause,
            $crate::Try::Success(value) => {
                panic!("Expected Failure, got Success: {:?}", value);
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::prelude::*;

    use crate::{DoublyLinkedList, Either, Optional, Try};

    impl<T> Arbitrary for Optional<T>
    where
        T: Arbitrary + 'static,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            prop::option::of(any_with::<T>(args))
                .prop_map(Optional::from_nullable)
                .boxed()
        }
    }

    impl<L, R> Arbitrary for Either<L, R>
    where
        L: Arbitrary + 'static,
        R: Arbitrary + 'static,
    {
        type Parameters = (L::Parameters, R::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (l_params, r_params) = args;
            prop_oneof![
                any_with::<L>(l_params).prop_map(Either::Left),
                any_with::<R>(r_params).prop_map(Either::Right),
            ]
            .boxed()
        }
    }

    impl<T, E> Arbitrary for Try<T, E>
    where
        T: Arbitrary + 'static,
        E: Arbitrary + 'static,
    {
        type Parameters = (T::Parameters, E::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (t_params, e_params) = args;
            prop_oneof![
                any_with::<T>(t_params).prop_map(Try::Success),
                any_with::<E>(e_params).prop_map(Try::Failure),
            ]
            .boxed()
        }
    }

    impl<T> Arbitrary for DoublyLinkedList<T>
    where
        T: Arbitrary + 'static,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            prop::collection::vec(any_with::<T>(args), 0..32)
                .prop_map(|values| values.into_iter().collect())
                .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Optional, Try};

    #[test]
    fn assert_some_macro() {
        let value = assert_some!(Optional::of(7));
        assert_eq!(value, 7);
    }

    #[test]
    fn assert_none_macro() {
        assert_none!(Optional::<i32>::empty());
    }

    #[test]
    fn assert_success_macro() {
        let t: Try<i32, String> = Try::success(42);
        assert_eq!(assert_success!(t), 42);
    }

    #[test]
    fn assert_failure_macro() {
        let t: Try<i32, String> = Try::failure("error".to_string());
        assert_eq!(assert_failure!(t), "error");
    }

    #[test]
    #[should_panic(expected = "Expected Some, got None")]
    fn assert_some_panics_on_none() {
        assert_some!(Optional::<i32>::empty());
    }

    #[test]
    #[should_panic(expected = "Expected None, got Some: 3")]
    fn assert_none_panics_on_some() {
        assert_none!(Optional::of(3));
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        let t: Try<i32, String> = Try::failure("error".to_string());
        assert_success!(t);
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        let t: Try<i32, String> = Try::success(42);
        assert_failure!(t);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::{DoublyLinkedList, Either, Optional, Try};
        use proptest::prelude::*;
        use proptest::strategy::ValueTree;
        use proptest::test_runner::TestRunner;

        #[test]
        fn optional_arbitrary_produces_both_variants() {
            let mut runner = TestRunner::deterministic();
            let strategy = any::<Optional<Vec<u8>>>();
            let (mut present, mut empty) = (0, 0);
            for _ in 0..200 {
                let value = strategy.new_tree(&mut runner).unwrap().current();
                if value.is_present() {
                    present += 1;
                } else {
                    empty += 1;
                }
            }
            assert!(present > 0, "no present values generated");
            assert!(empty > 0, "no empty values generated");
        }

        proptest! {
            #[test]
            fn optional_arbitrary_generates_valid_instances(opt in any::<Optional<i32>>()) {
                prop_assert_eq!(opt.is_present(), !opt.is_empty());
            }

            #[test]
            fn either_arbitrary_generates_valid_instances(e in any::<Either<i32, String>>()) {
                prop_assert_eq!(e.is_left(), !e.is_right());
            }

            #[test]
            fn try_arbitrary_generates_valid_instances(t in any::<Try<i32, String>>()) {
                match t {
                    Try::Success(_) => {
                        prop_assert!(t.is_success());
                    }
                    Try::Failure(_) => {
                        prop_assert!(t.is_failure());
                    }
                }
            }

            #[test]
            fn list_arbitrary_generates_linked_instances(list in any::<DoublyLinkedList<u8>>()) {
                prop_assert_eq!(list.iter().count(), list.len());
                prop_assert_eq!(list.iter().rev().count(), list.len());
            }
        }
    }
}
