use std::fmt;
use std::iter::FusedIterator;

use super::DoublyLinkedList;

/// Borrowing iterator over a [`DoublyLinkedList`], head to tail.
///
/// Double-ended: `.rev()` walks the back links from tail to head.
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(
        list: &'a DoublyLinkedList<T>,
        front: Option<usize>,
        back: Option<usize>,
    ) -> Self {
        Iter {
            list,
            front,
            back,
            remaining: list.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Owning iterator over a [`DoublyLinkedList`].
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(list: DoublyLinkedList<T>) -> Self {
        IntoIter { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::doubly_linked_list;

    #[test]
    fn test_forward_and_backward() {
        let list = doubly_linked_list!['a', 'b', 'c'];
        assert_eq!(list.iter().collect::<String>(), "abc");
        assert_eq!(list.iter().rev().collect::<String>(), "cba");
    }

    #[test]
    fn test_meet_in_the_middle() {
        let list = doubly_linked_list![1, 2, 3, 4, 5];
        let mut it = list.iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_borrowed_for_loop() {
        let list = doubly_linked_list![2, 4, 6];
        let mut sum = 0;
        for v in &list {
            sum += v;
        }
        assert_eq!(sum, 12);
    }

    #[test]
    fn test_into_iter_both_ends() {
        let list = doubly_linked_list![String::from("x"), String::from("y"), String::from("z")];
        let mut it = list.into_iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next_back().as_deref(), Some("z"));
        assert_eq!(it.collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_iter_debug() {
        let list = doubly_linked_list![1, 2];
        assert_eq!(format!("{:?}", list.iter()), "[1, 2]");
    }
}
