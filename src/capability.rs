use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// A container that knows its number of elements without iterating.
pub trait KnownLen {
    fn known_len(&self) -> usize;

    fn is_known_empty(&self) -> bool {
        self.known_len() == 0
    }
}

/// A container with constant time positional access.
///
/// Selection helpers use this to pick an index directly instead of
/// scanning the whole sequence.
pub trait RandomAccess: KnownLen {
    type Item;

    /// Returns the element at `index`, or `None` if out of bounds.
    fn get_at(&self, index: usize) -> Option<&Self::Item>;
}

impl<T> KnownLen for [T] {
    fn known_len(&self) -> usize {
        self.len()
    }
}

impl<T> RandomAccess for [T] {
    type Item = T;

    fn get_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T, const N: usize> KnownLen for [T; N] {
    fn known_len(&self) -> usize {
        N
    }
}

impl<T, const N: usize> RandomAccess for [T; N] {
    type Item = T;

    fn get_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> KnownLen for Vec<T> {
    fn known_len(&self) -> usize {
        self.len()
    }
}

impl<T> RandomAccess for Vec<T> {
    type Item = T;

    fn get_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> KnownLen for VecDeque<T> {
    fn known_len(&self) -> usize {
        self.len()
    }
}

impl<T> RandomAccess for VecDeque<T> {
    type Item = T;

    fn get_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T, S> KnownLen for HashSet<T, S> {
    fn known_len(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> KnownLen for HashMap<K, V, S> {
    fn known_len(&self) -> usize {
        self.len()
    }
}

impl<T> KnownLen for BTreeSet<T> {
    fn known_len(&self) -> usize {
        self.len()
    }
}

impl<K, V> KnownLen for BTreeMap<K, V> {
    fn known_len(&self) -> usize {
        self.len()
    }
}
