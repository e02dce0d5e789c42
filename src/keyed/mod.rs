//! Helpers for removing things from collections by position or by key.
//!
//! These mirror the removal methods of the standard collections as free functions, so they can be
//! passed around, and add conditional variants that only remove an element once a predicate has
//! approved it.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};

mod tests;

/// A collection with two ends that elements can be removed from.
pub trait Ends<T> {
    /// Removes and returns the last element, if any.
    fn pop(&mut self) -> Option<T>;

    /// Removes and returns the first element, if any.
    fn shift(&mut self) -> Option<T>;

    /// Returns a reference to the last element, if any.
    fn peek_last(&self) -> Option<&T>;

    /// Returns a reference to the first element, if any.
    fn peek_first(&self) -> Option<&T>;
}

impl<T> Ends<T> for Vec<T> {
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    /// Takes `O(n)`, since every remaining element has to move. Prefer a [`VecDeque`] when
    /// shifting often.
    fn shift(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.remove(0))
        }
    }

    fn peek_last(&self) -> Option<&T> {
        self.last()
    }

    fn peek_first(&self) -> Option<&T> {
        self.first()
    }
}

impl<T> Ends<T> for VecDeque<T> {
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    fn shift(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn peek_last(&self) -> Option<&T> {
        self.back()
    }

    fn peek_first(&self) -> Option<&T> {
        self.front()
    }
}

/// Removes and returns the last element of `collection`.
pub fn pop<T, C: Ends<T>>(collection: &mut C) -> Option<T> {
    collection.pop()
}

/// Removes and returns the first element of `collection`.
pub fn shift<T, C: Ends<T>>(collection: &mut C) -> Option<T> {
    collection.shift()
}

/// Removes and returns the last element of `collection` only if `predicate` returns true for it.
/// Otherwise `collection` is left untouched.
///
/// # Examples
/// ```
/// # use skink::keyed::pop_if;
/// let mut stack = vec![1, 2, 3];
/// assert_eq!(pop_if(&mut stack, |top| *top > 2), Some(3));
/// assert_eq!(pop_if(&mut stack, |top| *top > 2), None);
/// assert_eq!(stack, [1, 2]);
/// ```
pub fn pop_if<T, C, P>(collection: &mut C, predicate: P) -> Option<T>
where
    C: Ends<T>,
    P: FnOnce(&T) -> bool,
{
    if predicate(collection.peek_last()?) {
        collection.pop()
    } else {
        None
    }
}

/// Removes and returns the first element of `collection` only if `predicate` returns true for it.
/// Otherwise `collection` is left untouched.
pub fn shift_if<T, C, P>(collection: &mut C, predicate: P) -> Option<T>
where
    C: Ends<T>,
    P: FnOnce(&T) -> bool,
{
    if predicate(collection.peek_first()?) {
        collection.shift()
    } else {
        None
    }
}

/// A map that entries can be removed from by key.
pub trait KeyedRemove<K, V> {
    /// Removes `key` from the map, returning its value if it was present.
    fn remove_key<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized;
}

impl<K: Hash + Eq, V, S: BuildHasher> KeyedRemove<K, V> for HashMap<K, V, S> {
    fn remove_key<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        self.remove(key)
    }
}

impl<K: Ord, V> KeyedRemove<K, V> for BTreeMap<K, V> {
    fn remove_key<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        self.remove(key)
    }
}

/// Removes `key` from `map` if `predicate` returns true for the map as a whole, returning the
/// removed value.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use skink::keyed::delete_if;
/// let mut scores = HashMap::from([("a", 1), ("b", 2)]);
/// assert_eq!(delete_if(&mut scores, |map| map.len() > 1, "a"), Some(1));
/// assert_eq!(delete_if(&mut scores, |map| map.len() > 1, "b"), None);
/// ```
pub fn delete_if<K, V, M, P, Q>(map: &mut M, predicate: P, key: &Q) -> Option<V>
where
    M: KeyedRemove<K, V>,
    P: FnOnce(&M) -> bool,
    K: Borrow<Q>,
    Q: Hash + Ord + ?Sized,
{
    if predicate(map) {
        map.remove_key(key)
    } else {
        None
    }
}
