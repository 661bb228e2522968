//! Integration tests for the doubly-linked list and queue.
//!
//! These tests drive the list only through its public surface and check that both link
//! directions stay consistent after every kind of mutation.

use wellspring::{doubly_linked_list, DoublyLinkedList, IndexOutOfBounds, Queue};

/// Forward and backward walks must agree with each other and with `len`.
fn assert_consistent<T: Clone + PartialEq + std::fmt::Debug>(list: &DoublyLinkedList<T>) {
    let forward: Vec<T> = list.iter().cloned().collect();
    let mut backward: Vec<T> = list.iter().rev().cloned().collect();
    backward.reverse();
    assert_eq!(forward, backward);
    assert_eq!(forward.len(), list.len());
    assert_eq!(list.front(), forward.first());
    assert_eq!(list.back(), forward.last());
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn round_trip_through_push_back() {
    let mut list = DoublyLinkedList::new();
    for v in ["a", "b", "c"] {
        list.push_back(v);
    }
    assert_eq!(list.to_vec(), vec!["a", "b", "c"]);
    assert_consistent(&list);
}

#[test]
fn macro_and_collect_agree() {
    let from_macro = doubly_linked_list![1, 2, 3];
    let collected: DoublyLinkedList<i32> = vec![1, 2, 3].into_iter().collect();
    assert_eq!(from_macro, collected);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn sorted_returns_new_list_and_keeps_original() {
    let list = doubly_linked_list![17, 7532, -3321];
    let sorted = list.sorted();

    assert_eq!(sorted.to_vec(), vec![-3321, 17, 7532]);
    assert_eq!(list.to_vec(), vec![17, 7532, -3321]);
    assert_consistent(&sorted);
}

#[test]
fn sorted_by_descending() {
    let list = doubly_linked_list![3, 1, 2];
    let desc = list.sorted_by(|a, b| b.cmp(a));
    assert_eq!(desc.to_vec(), vec![3, 2, 1]);
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn mutable_scenario_tracks_head_and_tail() {
    let mut list = doubly_linked_list![13, 957, -653];

    list.push_back(1337);
    assert_eq!(list.len(), 4);
    assert_eq!(list.back(), Some(&1337));
    assert_consistent(&list);

    assert!(list.remove(&1337));
    assert_eq!(list.back(), Some(&-653));
    assert_consistent(&list);

    assert!(list.remove(&13));
    assert_eq!(list.front(), Some(&957));
    assert_consistent(&list);

    assert!(list.remove(&-653));
    assert_eq!(list.back(), Some(&957));
    assert_eq!(list.front(), Some(&957));
    assert_eq!(list.len(), 1);
    assert_consistent(&list);
}

#[test]
fn cursor_removes_middle_element() {
    let mut list = doubly_linked_list!['a', 'b', 'c'];
    {
        let mut cursor = list.cursor_mut();
        cursor.next();
        cursor.next();
        assert_eq!(cursor.remove(), Ok('b'));
    }
    assert_eq!(list.iter().collect::<String>(), "ac");
    assert_eq!(list.iter().rev().collect::<String>(), "ca");
}

#[test]
fn cursor_can_empty_the_list() {
    let mut list: DoublyLinkedList<u32> = (0..5).collect();
    {
        let mut cursor = list.cursor_mut();
        while cursor.next().is_some() {
            cursor.remove().unwrap();
        }
    }
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);

    list.push_back(9);
    assert_consistent(&list);
}

#[test]
fn cursor_misuse_is_an_error_not_a_panic() {
    let mut list = doubly_linked_list![1, 2];
    let mut cursor = list.cursor_mut();
    assert!(cursor.remove().is_err());
    cursor.next();
    assert!(cursor.remove().is_ok());
    assert!(cursor.remove().is_err());
}

#[test]
fn indexed_access_reports_bounds() {
    let mut list = doubly_linked_list![10, 20, 30];
    assert_eq!(list.get(2), Ok(&30));
    assert_eq!(list.get(3), Err(IndexOutOfBounds::new(3, 3)));
    assert_eq!(
        list.insert(5, 0).unwrap_err().to_string(),
        "index 5 is out of bounds for length 3"
    );
    assert_eq!(list.remove_at(0), Ok(10));
    assert_consistent(&list);
}

#[test]
fn churn_keeps_links_consistent() {
    let mut list = DoublyLinkedList::new();
    for round in 0..20 {
        list.push_back(round);
        list.push_front(-round);
        if round % 3 == 0 {
            list.pop_back();
        }
        if round % 4 == 0 {
            let _ = list.remove_at(list.len() / 2);
        }
        assert_consistent(&list);
    }
    list.retain(|v| v % 2 == 0);
    assert!(list.iter().all(|v| v % 2 == 0));
    assert_consistent(&list);
}

// ============================================================================
// Queue
// ============================================================================

#[test]
fn queue_is_first_in_first_out() {
    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    queue.enqueue(3);

    assert_eq!(queue.peek(), Ok(&1));
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.dequeue(), Some(2));
    queue.enqueue(4);
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![3, 4]);
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.dequeue(), Some(4));
    assert_eq!(queue.dequeue(), None);
    assert!(queue.peek().is_err());
}
