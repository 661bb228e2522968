use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use super::{CursorMut, IntoIter, Iter};
use crate::error::IndexOutOfBounds;

/// A single list node. Links are slot indices into the owning list.
#[derive(Clone, Debug)]
pub(super) struct Node<T> {
    pub(super) value: T,
    pub(super) prev: Option<usize>,
    pub(super) next: Option<usize>,
}

/// A list with links in both directions.
///
/// # Time Complexity
///
/// With `n` the number of elements and `i` the index in question:
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` / `back` | `O(1)` |
/// | `push_front` / `push_back` | `O(1)` amortized |
/// | `pop_front` / `pop_back` | `O(1)` |
/// | `get` / `insert` / `remove_at` | `O(min(i, n - i))` |
/// | `remove` / `contains` | `O(n)` |
/// | [`CursorMut::remove`] | `O(1)` |
///
/// # Example
///
/// ```rust
/// use wellspring::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// list.push_back(2);
/// list.push_back(3);
/// list.push_front(1);
///
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
/// assert_eq!(list.get(1), Ok(&2));
/// assert!(list.get(3).is_err());
/// ```
pub struct DoublyLinkedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    /// Create an empty list.
    pub const fn new() -> Self {
        DoublyLinkedList {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The head element.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|idx| &self.node(idx).value)
    }

    /// Mutable access to the head element.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let idx = self.head?;
        Some(&mut self.node_mut(idx).value)
    }

    /// The tail element.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|idx| &self.node(idx).value)
    }

    /// Mutable access to the tail element.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let idx = self.tail?;
        Some(&mut self.node_mut(idx).value)
    }

    /// Append `value` after the current tail.
    pub fn push_back(&mut self, value: T) {
        self.link_before(None, value);
    }

    /// Prepend `value` before the current head.
    pub fn push_front(&mut self, value: T) {
        self.link_before(self.head, value);
    }

    /// Remove and return the head element.
    pub fn pop_front(&mut self) -> Option<T> {
        let idx = self.head?;
        Some(self.unlink(idx))
    }

    /// Remove and return the tail element.
    pub fn pop_back(&mut self) -> Option<T> {
        let idx = self.tail?;
        Some(self.unlink(idx))
    }

    /// The element at `index`, walking from whichever end is nearer.
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let idx = self.seek(index)?;
        Ok(&self.node(idx).value)
    }

    /// Mutable access to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let idx = self.seek(index)?;
        Ok(&mut self.node_mut(idx).value)
    }

    /// Insert `value` so that it ends up at position `index`.
    ///
    /// `index == len` appends. Anything larger is rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::doubly_linked_list;
    ///
    /// let mut list = doubly_linked_list!['a', 'c'];
    /// list.insert(1, 'b').unwrap();
    /// list.insert(3, 'd').unwrap();
    /// assert_eq!(list.to_vec(), vec!['a', 'b', 'c', 'd']);
    /// assert!(list.insert(9, 'z').is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index == self.len {
            self.push_back(value);
            return Ok(());
        }
        let at = self.seek(index)?;
        self.link_before(Some(at), value);
        Ok(())
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let idx = self.seek(index)?;
        Ok(self.unlink(idx))
    }

    /// Remove the first element equal to `value`. Returns whether one was found.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cursor = self.cursor_mut();
        while let Some(current) = cursor.next() {
            if *current == *value {
                return cursor.remove().is_ok();
            }
        }
        false
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Move every element of `other` onto the end of this list, leaving `other` empty.
    pub fn append(&mut self, other: &mut DoublyLinkedList<T>) {
        if self.is_empty() {
            mem::swap(self, other);
            return;
        }
        self.extend(mem::take(other));
    }

    /// Keep only the elements for which `keep` returns `true`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.cursor_mut();
        while let Some(current) = cursor.next() {
            if !keep(current) {
                // positioned by the preceding next()
                let _ = cursor.remove();
            }
        }
    }

    /// Iterate from head to tail. Use `.rev()` to walk from tail to head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self, self.head, self.tail)
    }

    /// A forward cursor that can remove the element it last returned.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        let head = self.head;
        CursorMut::new(self, head)
    }

    /// Copy the elements into a `Vec`, head first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// A sorted copy of this list. The receiver is left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::doubly_linked_list;
    ///
    /// let list = doubly_linked_list![17, 7532, -3321];
    /// assert_eq!(list.sorted().to_vec(), vec![-3321, 17, 7532]);
    /// assert_eq!(list.to_vec(), vec![17, 7532, -3321]);
    /// ```
    pub fn sorted(&self) -> DoublyLinkedList<T>
    where
        T: Ord + Clone,
    {
        self.sorted_by(Ord::cmp)
    }

    /// A copy of this list sorted with `compare`. The sort is stable.
    pub fn sorted_by<F>(&self, compare: F) -> DoublyLinkedList<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut copy = self.clone();
        copy.sort_by(compare);
        copy
    }

    /// Sort the list in place.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(Ord::cmp)
    }

    /// Sort the list in place with `compare`. The sort is stable.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut values: Vec<T> = mem::take(self).into_iter().collect();
        values.sort_by(compare);
        self.extend(values);
    }
}

// ========== Slot management ==========

impl<T> DoublyLinkedList<T> {
    pub(super) fn node(&self, idx: usize) -> &Node<T> {
        match &self.slots[idx] {
            Some(node) => node,
            None => unreachable!("link {idx} points at a vacant slot"),
        }
    }

    pub(super) fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match &mut self.slots[idx] {
            Some(node) => node,
            None => unreachable!("link {idx} points at a vacant slot"),
        }
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Link a new node in front of `at`, or after the tail when `at` is `None`.
    fn link_before(&mut self, at: Option<usize>, value: T) -> usize {
        let prev = match at {
            Some(next) => self.node(next).prev,
            None => self.tail,
        };
        let idx = self.alloc(Node {
            value,
            prev,
            next: at,
        });
        match prev {
            Some(p) => self.node_mut(p).next = Some(idx),
            None => self.head = Some(idx),
        }
        match at {
            Some(n) => self.node_mut(n).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.len += 1;
        idx
    }

    /// Detach the node at slot `idx`, re-linking its neighbours, and return its value.
    pub(super) fn unlink(&mut self, idx: usize) -> T {
        let node = match self.slots[idx].take() {
            Some(node) => node,
            None => unreachable!("unlinking vacant slot {idx}"),
        };
        match node.prev {
            Some(p) => self.node_mut(p).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.node_mut(n).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.free.push(idx);
        self.len -= 1;
        node.value
    }

    /// Slot index of the element at list position `index`.
    fn seek(&self, index: usize) -> Result<usize, IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds::new(index, self.len));
        }
        let out_of_bounds = IndexOutOfBounds::new(index, self.len);
        if index < self.len / 2 {
            let mut curr = self.head.ok_or(out_of_bounds)?;
            for _ in 0..index {
                curr = self.node(curr).next.ok_or(out_of_bounds)?;
            }
            Ok(curr)
        } else {
            let mut curr = self.tail.ok_or(out_of_bounds)?;
            for _ in index + 1..self.len {
                curr = self.node(curr).prev.ok_or(out_of_bounds)?;
            }
            Ok(curr)
        }
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut forward = 0;
        let mut prev = None;
        let mut curr = self.head;
        while let Some(idx) = curr {
            let node = self.node(idx);
            assert_eq!(node.prev, prev, "broken back link at slot {idx}");
            prev = Some(idx);
            curr = node.next;
            forward += 1;
        }
        assert_eq!(self.tail, prev, "tail does not end the forward walk");
        assert_eq!(forward, self.len, "forward walk disagrees with len");
        assert_eq!(
            self.slots.len(),
            self.len + self.free.len(),
            "slots leaked outside the free list"
        );
    }
}

// ========== Trait implementations ==========

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self {
            item.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" <-> ")?;
            }
            write!(f, "({})", item)?;
        }
        Ok(())
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
