use std::{hash::Hash, iter::FusedIterator};

use ahash::{HashSet, HashSetExt};
use derive_where::derive_where;

/// Yields the first occurrence of every distinct value of the inner iterator,
/// in the order those first occurrences appear.
#[derive_where(Debug, Clone; I, I::Item)]
pub struct Unique<I: Iterator> {
    iter: I,
    seen: HashSet<I::Item>,
}

impl<I> Iterator for Unique<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.find(|item| self.seen.insert(item.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        // Only the very first element is guaranteed to be new.
        let lower = if self.seen.is_empty() { lower.min(1) } else { 0 };
        (lower, upper)
    }
}

impl<I> FusedIterator for Unique<I>
where
    I: FusedIterator,
    I::Item: Eq + Hash + Clone,
{
}

/// Yields the first element for every distinct key of the inner iterator.
///
/// The key function is called exactly once per element.
#[derive(Debug, Clone)]
pub struct UniqueBy<I, K, F> {
    iter: I,
    seen: HashSet<K>,
    key_fn: F,
}

impl<I, K, F> Iterator for UniqueBy<I, K, F>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Self { iter, seen, key_fn } = self;
        iter.find(|item| seen.insert(key_fn(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let lower = if self.seen.is_empty() { lower.min(1) } else { 0 };
        (lower, upper)
    }
}

impl<I, K, F> FusedIterator for UniqueBy<I, K, F>
where
    I: FusedIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
}

/// Lazily removes repeated values, keeping the first occurrence of each.
pub fn remove_duplicates<I>(seq: I) -> Unique<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    Unique {
        iter: seq.into_iter(),
        seen: HashSet::new(),
    }
}

/// Lazily removes elements whose key was already produced by an earlier
/// element.
pub fn remove_duplicates_by_key<I, K, F>(seq: I, key_fn: F) -> UniqueBy<I::IntoIter, K, F>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    UniqueBy {
        iter: seq.into_iter(),
        seen: HashSet::new(),
        key_fn,
    }
}

/// Returns true as soon as some value is seen a second time.
///
/// Absent, empty and single element sequences never contain duplicates.
pub fn contains_duplicates<I>(seq: Option<I>) -> bool
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    let Some(seq) = seq else {
        return false;
    };
    let mut seen = HashSet::new();
    for item in seq {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}
