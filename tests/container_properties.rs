//! Property-based tests for the container laws

use proptest::prelude::*;
use wellspring::{Either, Fatal, Optional, Panicked, Try};

fn optional_of<T: std::fmt::Debug + Clone>(
    inner: impl Strategy<Value = T>,
) -> impl Strategy<Value = Optional<T>> {
    prop::option::of(inner).prop_map(Optional::from_nullable)
}

fn either_of(
    left: impl Strategy<Value = i32>,
    right: impl Strategy<Value = String>,
) -> impl Strategy<Value = Either<i32, String>> {
    prop_oneof![left.prop_map(Either::left), right.prop_map(Either::right)]
}

proptest! {
    // ---------- Optional ----------

    #[test]
    fn prop_optional_of_then_get(value in any::<i64>()) {
        prop_assert_eq!(Optional::of(value).get(), Ok(value));
    }

    #[test]
    fn prop_from_nullable_matches_option(raw in prop::option::of(any::<u8>())) {
        let opt = Optional::from_nullable(raw);
        prop_assert_eq!(opt.is_present(), raw.is_some());
        prop_assert_eq!(opt.into_option(), raw);
    }

    #[test]
    fn prop_optional_functor_composition(opt in optional_of(any::<i32>())) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_sub(7);
        prop_assert_eq!(opt.map(f).map(g), opt.map(|x| g(f(x))));
    }

    #[test]
    fn prop_optional_left_identity(value in any::<i32>()) {
        let f = |x: i32| Optional::when(x % 2 == 0, x / 2);
        prop_assert_eq!(Optional::of(value).flat_map(f), f(value));
    }

    #[test]
    fn prop_optional_right_identity(opt in optional_of(any::<i32>())) {
        prop_assert_eq!(opt.flat_map(Optional::of), opt);
    }

    #[test]
    fn prop_optional_none_is_not_any(opt in optional_of(any::<i16>()), bound in any::<i16>()) {
        let pred = |x: &i16| *x > bound;
        prop_assert_eq!(opt.none(pred), !opt.any(pred));
    }

    #[test]
    fn prop_optional_iter_len(opt in optional_of(any::<u32>())) {
        prop_assert_eq!(opt.iter().count(), usize::from(opt.is_present()));
    }

    // ---------- Either ----------

    #[test]
    fn prop_swap_is_an_involution(e in either_of(any::<i32>(), ".*")) {
        prop_assert_eq!(e.clone().swap().swap(), e);
    }

    #[test]
    fn prop_exactly_one_side_has_a_value(e in either_of(any::<i32>(), ".*")) {
        prop_assert_eq!(e.left_value().is_ok(), e.is_left());
        prop_assert_eq!(e.right_value().is_ok(), e.is_right());
        prop_assert_ne!(e.is_left(), e.is_right());
    }

    #[test]
    fn prop_projections_are_symmetric(e in either_of(any::<i32>(), "[a-z]{0,4}")) {
        let left = e.clone().project_left();
        let right = e.clone().project_right();
        prop_assert_eq!(left.iter().count() + right.iter().count(), 1);
        prop_assert_eq!(left.none(|_| true), e.is_right());
        prop_assert_eq!(right.none(|_| true), e.is_left());
    }

    #[test]
    fn prop_either_result_round_trip(e in either_of(any::<i32>(), ".*")) {
        let result: Result<String, i32> = e.clone().into();
        prop_assert_eq!(Either::from(result), e);
    }

    // ---------- Try ----------

    #[test]
    fn prop_try_success_get(value in any::<i32>()) {
        let t: Try<i32, String> = Try::success(value);
        prop_assert_eq!(t.get(), Ok(&value));
        prop_assert!(t.get_cause().is_err());
    }

    #[test]
    fn prop_try_failure_get_cause(cause in ".*") {
        let t: Try<i32, String> = Try::failure(cause.clone());
        prop_assert_eq!(t.get_cause(), Ok(&cause));
        prop_assert!(t.get().is_err());
    }

    #[test]
    fn prop_try_to_optional(result in prop::result::maybe_ok(any::<i32>(), ".*")) {
        let t: Try<i32, String> = Try::from_result(result.clone());
        prop_assert_eq!(t.to_optional().into_option(), result.ok());
    }

    #[test]
    fn prop_try_map_on_failure_is_identity(cause in ".*") {
        let t: Try<i32, String> = Try::failure(cause);
        prop_assert_eq!(t.clone().map(|x| x + 1), t);
    }
}

// ============================================================================
// Panic capture
// ============================================================================

#[test]
fn catching_records_ordinary_panics() {
    let t = Try::<i32>::catching(|| panic!("disk on fire"));
    assert!(t.is_failure());
    assert_eq!(t.get_cause().unwrap().to_string(), "panicked: disk on fire");

    let typed: Try<i32, Panicked> = Try::catching(|| panic!("typed"));
    assert_eq!(typed.get_cause().unwrap().message(), "typed");
}

#[test]
fn catching_passes_through_values() {
    let t = Try::<i32>::catching(|| 40 + 2);
    assert_eq!(t.get().copied().unwrap(), 42);
}

#[test]
fn catching_resumes_fatal_panics() {
    let outer = std::panic::catch_unwind(|| {
        let _ = Try::<i32>::catching(|| Fatal::raise("out of memory"));
    });
    let payload = outer.unwrap_err();
    assert!(Fatal::is_fatal(payload.as_ref()));
}

#[test]
fn optional_catching_resumes_fatal_panics() {
    let outer = std::panic::catch_unwind(|| {
        let _ = Optional::<i32>::catching(|| Fatal::raise("stack exhausted"));
    });
    assert!(outer.is_err());
}

#[test]
fn from_nullable_either_prefers_left() {
    assert_eq!(Either::from_nullable(Some(5)), Either::left(5));
    assert_eq!(Either::<i32, ()>::from_nullable(None), Either::right(()));
}
