use crate::error::{Error, Result};

pub mod dedup;
pub mod flatten;
pub mod hashing;
pub mod nulls;
pub mod presence;
pub mod random;

/// Tells whether any element of `seq` satisfies `predicate`, stopping at the
/// first one that does.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `seq` is absent.
pub fn contains_predicate<I, P>(seq: Option<I>, predicate: P) -> Result<bool>
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    let seq = seq.ok_or(Error::InvalidArgument("seq"))?;
    Ok(seq.into_iter().any(predicate))
}

/// Tells whether some element of `seq` has a key equal to `key`.
///
/// An absent `seq` contains nothing.
pub fn contains_key<I, K, F>(seq: Option<I>, mut key_fn: F, key: &K) -> bool
where
    I: IntoIterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
    seq.is_some_and(|seq| seq.into_iter().any(|item| key_fn(&item) == *key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_contains_predicate() {
        assert_eq!(contains_predicate(Some(&[1, 3, 4]), |x| x % 2 == 0), Ok(true));
        assert_eq!(contains_predicate(Some(&[1, 3, 5]), |x| x % 2 == 0), Ok(false));
        assert_eq!(
            contains_predicate(None::<Vec<u8>>, |_| true),
            Err(Error::InvalidArgument("seq"))
        );
    }

    #[test]
    fn test_contains_predicate_short_circuits() {
        let mut tested = Vec::new();
        let found = contains_predicate(Some(1..), |x| {
            tested.push(x);
            x == 3
        });
        assert_eq!(found, Ok(true));
        assert_eq!(tested, [1, 2, 3]);
    }

    #[test]
    fn test_contains_key() {
        let people = [("ada", 36), ("alan", 41)];
        assert!(contains_key(Some(&people), |(name, _)| *name, &"alan"));
        assert!(!contains_key(Some(&people), |(_, age)| *age, &40));
        assert!(!contains_key(None::<&[(&str, u32)]>, |(name, _)| *name, &"ada"));
    }

    #[test]
    fn test_contains_key_short_circuits() {
        let mut keyed = Vec::new();
        let found = contains_key(
            Some(1..),
            |x| {
                keyed.push(*x);
                x * 10
            },
            &30,
        );
        assert!(found);
        assert_eq!(keyed, [1, 2, 3]);
    }
}
