//! Serde support for the containers (feature-gated)
//!
//! This module provides `Serialize` and `Deserialize` implementations when the `serde`
//! feature is enabled:
//!
//! - [`Optional<T>`] uses the same representation as `Option<T>` (`null` or the value).
//! - [`Either<L, R>`] and [`Try<T, E>`] are externally tagged: `{"Left": v}`,
//!   `{"Success": v}`, and so on.
//! - [`DoublyLinkedList<T>`] and [`Queue<T>`] are plain sequences, head first.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use wellspring::{Either, Optional};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Profile {
//!     nickname: Optional<String>,
//!     id: Either<u64, String>,
//! }
//!
//! let json = r#"{"nickname":null,"id":{"Left":7}}"#;
//! let profile: Profile = serde_json::from_str(json).unwrap();
//! assert!(profile.nickname.is_empty());
//! ```

use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

use crate::{DoublyLinkedList, Either, Optional, Queue, Try};

// ========== Optional ==========

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Optional::Some(value) => serializer.serialize_some(value),
            Optional::None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}

// ========== Either / Try ==========

#[derive(Serialize)]
#[serde(rename = "Either")]
enum EitherRef<'a, L, R> {
    Left(&'a L),
    Right(&'a R),
}

#[derive(Deserialize)]
#[serde(rename = "Either")]
enum EitherRepr<L, R> {
    Left(L),
    Right(R),
}

impl<L: Serialize, R: Serialize> Serialize for Either<L, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Either::Left(l) => EitherRef::<L, R>::Left(l),
            Either::Right(r) => EitherRef::<L, R>::Right(r),
        }
        .serialize(serializer)
    }
}

impl<'de, L, R> Deserialize<'de> for Either<L, R>
where
    L: Deserialize<'de>,
    R: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match EitherRepr::deserialize(deserializer)? {
            EitherRepr::Left(l) => Either::Left(l),
            EitherRepr::Right(r) => Either::Right(r),
        })
    }
}

#[derive(Serialize)]
#[serde(rename = "Try")]
enum TryRef<'a, T, E> {
    Success(&'a T),
    Failure(&'a E),
}

#[derive(Deserialize)]
#[serde(rename = "Try")]
enum TryRepr<T, E> {
    Success(T),
    Failure(E),
}

impl<T: Serialize, E: Serialize> Serialize for Try<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Try::Success(value) => TryRef::<T, E>::Success(value),
            Try::Failure(cause) => TryRef::<T, E>::Failure(cause),
        }
        .serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for Try<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match TryRepr::deserialize(deserializer)? {
            TryRepr::Success(value) => Try::Success(value),
            TryRepr::Failure(cause) => Try::Failure(cause),
        })
    }
}

// ========== Linked collections ==========

impl<T: Serialize> Serialize for DoublyLinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

struct ListVisitor<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for ListVisitor<T> {
    type Value = DoublyLinkedList<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut list = DoublyLinkedList::new();
        while let Some(item) = seq.next_element()? {
            list.push_back(item);
        }
        Ok(list)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DoublyLinkedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(ListVisitor {
            _marker: PhantomData,
        })
    }
}

impl<T: Serialize> Serialize for Queue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Queue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        DoublyLinkedList::deserialize(deserializer).map(Queue::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doubly_linked_list;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Record {
        nickname: Optional<String>,
        id: Either<u64, String>,
        outcome: Try<i32, String>,
    }

    #[test]
    fn test_serialize_record() {
        let record = Record {
            nickname: Optional::of("neo".to_string()),
            id: Either::left(7),
            outcome: Try::failure("timeout".to_string()),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"nickname":"neo","id":{"Left":7},"outcome":{"Failure":"timeout"}}"#
        );
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{"nickname":null,"id":{"Right":"abc"},"outcome":{"Success":3}}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert!(record.nickname.is_empty());
        assert_eq!(record.id, Either::right("abc".to_string()));
        assert_eq!(record.outcome, Try::success(3));
    }

    #[test]
    fn test_unknown_tag_fails() {
        let result: Result<Either<i32, i32>, _> = serde_json::from_str(r#"{"Middle":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_is_a_sequence() {
        let list = doubly_linked_list![3, 1, 2];
        assert_eq!(serde_json::to_string(&list).unwrap(), "[3,1,2]");

        let restored: DoublyLinkedList<i32> = serde_json::from_str("[3,1,2]").unwrap();
        assert_eq!(restored, list);
        assert_eq!(restored.back(), Some(&2));
    }

    #[test]
    fn test_queue_is_a_sequence() {
        let queue: Queue<&str> = ["a", "b"].into_iter().collect();
        assert_eq!(serde_json::to_string(&queue).unwrap(), r#"["a","b"]"#);

        let mut restored: Queue<String> = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(restored.dequeue().as_deref(), Some("a"));
    }

    #[test]
    fn test_list_rejects_non_sequence() {
        let result: Result<DoublyLinkedList<i32>, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
