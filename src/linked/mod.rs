//! Linked collections backed by an index arena.
//!
//! [`DoublyLinkedList`] stores its nodes in a `Vec` of slots and links them by index rather
//! than by pointer. Removed slots go on a free list and are reused by later insertions, so a
//! long-lived list does not grow without bound under churn. Every link is a plain `usize`,
//! which keeps the implementation free of `unsafe` and of reference counting while still
//! giving O(1) insertion at both ends and O(1) removal through a [`CursorMut`].
//!
//! [`Queue`] is a first-in first-out wrapper over the list.
//!
//! # Example
//!
//! ```rust
//! use wellspring::doubly_linked_list;
//!
//! let mut list = doubly_linked_list![13, 957, -653];
//! list.push_back(1337);
//! assert!(list.remove(&13));
//!
//! assert_eq!(list.front(), Some(&957));
//! assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![1337, -653, 957]);
//! ```

mod cursor;
mod iter;
mod list;
mod queue;

pub use cursor::CursorMut;
pub use iter::{IntoIter, Iter};
pub use list::DoublyLinkedList;
pub use queue::Queue;

/// Create a [`DoublyLinkedList`] holding the given elements in order.
///
/// # Example
///
/// ```rust
/// use wellspring::{doubly_linked_list, DoublyLinkedList};
///
/// let list = doubly_linked_list![17, 7532, -3321];
/// assert_eq!(list.len(), 3);
///
/// let empty: DoublyLinkedList<u8> = doubly_linked_list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! doubly_linked_list {
    () => {
        $crate::DoublyLinkedList::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut list = $crate::DoublyLinkedList::new();
        $(list.push_back($value);)+
        list
    }};
}
