use super::{DoublyLinkedList, IntoIter, Iter};
use crate::error::NoSuchElement;

const EMPTY_QUEUE: NoSuchElement = NoSuchElement::new("Queue is empty");

/// A first-in first-out queue over a [`DoublyLinkedList`].
///
/// # Example
///
/// ```rust
/// use wellspring::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue("first");
/// queue.enqueue("second");
///
/// assert_eq!(queue.peek(), Ok(&"first"));
/// assert_eq!(queue.dequeue(), Some("first"));
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    items: DoublyLinkedList<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Queue {
            items: DoublyLinkedList::new(),
        }
    }

    /// Number of queued elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `value` at the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Take the element at the front of the queue.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// The element that [`dequeue`](Self::dequeue) would return next.
    pub fn peek(&self) -> Result<&T, NoSuchElement> {
        self.items.front().ok_or(EMPTY_QUEUE)
    }

    /// Returns `true` if some queued element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    /// Iterate front to back without dequeuing.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> From<DoublyLinkedList<T>> for Queue<T> {
    fn from(items: DoublyLinkedList<T>) -> Self {
        Queue { items }
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
