use std::iter::FusedIterator;

/// Yields the present values of an iterator over optional values, in order.
#[derive(Debug, Clone)]
pub struct RemoveNulls<I> {
    iter: I,
}

impl<I> RemoveNulls<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I, T> Iterator for RemoveNulls<I>
where
    I: Iterator<Item = Option<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.find_map(|item| item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, T> FusedIterator for RemoveNulls<I> where I: FusedIterator<Item = Option<T>> {}

/// Skips the absent elements of `seq`.
///
/// An absent `seq` is passed through as `None` instead of becoming an empty
/// sequence.
pub fn remove_nulls<I, T>(seq: Option<I>) -> Option<RemoveNulls<I::IntoIter>>
where
    I: IntoIterator<Item = Option<T>>,
{
    seq.map(|seq| RemoveNulls::new(seq.into_iter()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_removes_absent_elements() {
        let values = vec![Some("a"), None, Some("b")];
        let present: Vec<_> = remove_nulls(Some(values)).unwrap().collect();
        assert_eq!(present, ["a", "b"]);
    }

    #[test]
    fn test_absent_sequence_propagates() {
        assert!(remove_nulls(None::<Vec<Option<u8>>>).is_none());
    }

    #[test]
    fn test_all_absent_is_empty_not_absent() {
        let mut iter = remove_nulls(Some([None::<u8>, None])).unwrap();
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_borrowed_values() {
        let values = [Some(1), None, Some(3)];
        let present: Vec<_> = remove_nulls(Some(values.iter().map(Option::as_ref)))
            .unwrap()
            .copied()
            .collect();
        assert_eq!(present, [1, 3]);
    }
}
