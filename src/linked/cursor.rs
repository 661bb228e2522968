use std::fmt;

use super::DoublyLinkedList;
use crate::error::IllegalState;

const NOT_POSITIONED: IllegalState =
    IllegalState::new("remove() requires a preceding next() that has not been removed yet");

/// A forward cursor over a [`DoublyLinkedList`] that can remove the element it last returned.
///
/// Removal re-links the neighbours of the removed node in O(1) and keeps the head and tail of
/// the list correct whether the node sat in the middle, at either end, or alone.
///
/// # Example
///
/// ```rust
/// use wellspring::doubly_linked_list;
///
/// let mut list = doubly_linked_list![1, 2, 3];
/// let mut cursor = list.cursor_mut();
///
/// assert!(cursor.remove().is_err());
/// cursor.next();
/// cursor.next();
/// assert_eq!(cursor.remove(), Ok(2));
/// assert!(cursor.remove().is_err());
///
/// assert_eq!(list.to_vec(), vec![1, 3]);
/// ```
pub struct CursorMut<'a, T> {
    list: &'a mut DoublyLinkedList<T>,
    next: Option<usize>,
    last: Option<usize>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) fn new(list: &'a mut DoublyLinkedList<T>, next: Option<usize>) -> Self {
        CursorMut {
            list,
            next,
            last: None,
        }
    }

    /// Advance past the next element and return it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&mut T> {
        let idx = self.next?;
        self.last = Some(idx);
        let node = self.list.node_mut(idx);
        self.next = node.next;
        Some(&mut node.value)
    }

    /// The element the next call to [`next`](Self::next) would return.
    pub fn peek_next(&self) -> Option<&T> {
        self.next.map(|idx| &self.list.node(idx).value)
    }

    /// Returns `true` if another element remains ahead of the cursor.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Remove the element most recently returned by [`next`](Self::next).
    ///
    /// Fails with [`IllegalState`] when `next` has not been called yet, or when the element it
    /// returned has already been removed.
    pub fn remove(&mut self) -> Result<T, IllegalState> {
        match self.last.take() {
            Some(idx) => Ok(self.list.unlink(idx)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!("cursor remove() called without a current element");
                Err(NOT_POSITIONED)
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("next", &self.peek_next())
            .field("len", &self.list.len())
            .finish()
    }
}
