use std::hash::Hash;

use rand::Rng;

use crate::seq::{
    dedup::{self, Unique, UniqueBy},
    flatten,
    nulls::RemoveNulls,
    random,
};

/// Method forms of the sequence helpers, for iterators that are known to be
/// present.
pub trait SequenceExt: Iterator {
    /// See [`dedup::remove_duplicates`].
    fn remove_duplicates(self) -> Unique<Self>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
    {
        dedup::remove_duplicates(self)
    }

    /// See [`dedup::remove_duplicates_by_key`].
    fn remove_duplicates_by_key<K, F>(self, key_fn: F) -> UniqueBy<Self, K, F>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        dedup::remove_duplicates_by_key(self, key_fn)
    }

    fn contains_duplicates(self) -> bool
    where
        Self: Sized,
        Self::Item: Eq + Hash,
    {
        dedup::contains_duplicates(Some(self))
    }

    fn remove_nulls<T>(self) -> RemoveNulls<Self>
    where
        Self: Sized + Iterator<Item = Option<T>>,
    {
        RemoveNulls::new(self)
    }

    /// Picks a uniformly random element in a single pass.
    fn random_element(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.random_element_with(&mut rand::rng())
    }

    fn random_element_with<R: Rng + ?Sized>(self, rng: &mut R) -> Option<Self::Item>
    where
        Self: Sized,
    {
        random::reservoir_sample(self, rng)
    }

    /// See [`flatten::flatten_recursive`].
    fn flatten_recursive<F, C>(self, child_selector: F) -> Vec<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> Option<C>,
        C: IntoIterator<Item = Self::Item>,
    {
        flatten::flatten_forest(self, child_selector)
    }
}

impl<I: Iterator> SequenceExt for I {}
