//! # Wellspring
//!
//! Value containers that make absence, alternatives and failure explicit, plus a
//! doubly-linked list with O(1) cursor removal.
//!
//! - [`Optional<T>`]: a value that may be absent.
//! - [`Either<L, R>`]: exactly one of two alternatives, with one-sided
//!   [`LeftProjection`]/[`RightProjection`] views.
//! - [`Try<T, E>`]: the outcome of a computation that may fail, capturing non-fatal
//!   panics when asked to.
//! - [`DoublyLinkedList<T>`] and [`Queue<T>`]: arena-backed linked collections.
//!
//! Every container is an immutable value: transformations return new values and never
//! mutate the receiver.
//!
//! ## Quick Example
//!
//! ```rust
//! use wellspring::{Either, Optional, Try};
//!
//! fn parse_port(raw: &str) -> Try<u16, std::num::ParseIntError> {
//!     Try::from_result(raw.parse())
//! }
//!
//! let port = parse_port("8080")
//!     .to_optional()
//!     .filter(|p| *p >= 1024)
//!     .get_or_else(80);
//! assert_eq!(port, 8080);
//!
//! let fallback = parse_port("http").to_optional().get_or_else(80);
//! assert_eq!(fallback, 80);
//!
//! let route: Either<&str, u16> = Either::right(port);
//! assert_eq!(route.project_right().map(|p| p + 1), Either::right(8081));
//! ```
//!
//! ## Features
//!
//! - `tracing`: log captured panics and cursor misuse through `tracing`.
//! - `serde`: `Serialize`/`Deserialize` for every container.
//! - `proptest`: `Arbitrary` implementations for property-based tests.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod attempt;
pub mod either;
pub mod error;
pub mod iter;
pub mod linked;
pub mod optional;
pub mod testing;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use attempt::Try;
pub use either::{Either, LeftProjection, RightProjection};
pub use error::{
    Cause, Fatal, IllegalState, IndexOutOfBounds, NoSuchElement, Panicked, PredicateError,
    UnsupportedOperation,
};
pub use linked::{CursorMut, DoublyLinkedList, Queue};
pub use optional::Optional;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::attempt::Try;
    pub use crate::doubly_linked_list;
    pub use crate::either::{Either, LeftProjection, RightProjection};
    pub use crate::error::{Cause, Fatal, NoSuchElement};
    pub use crate::linked::{DoublyLinkedList, Queue};
    pub use crate::optional::Optional;
}
