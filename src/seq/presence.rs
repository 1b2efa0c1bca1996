use std::iter::Peekable;

use crate::{
    capability::KnownLen,
    error::{Error, Result},
};

/// Tells whether the iterator yields nothing, pulling at most one element.
///
/// An exact `size_hint` (as reported by the iterators of every known-size
/// container) answers without advancing.
fn has_no_elements<I: Iterator>(iter: &mut I) -> bool {
    match iter.size_hint() {
        (_, Some(0)) => true,
        (lower, _) if lower > 0 => false,
        _ => iter.next().is_none(),
    }
}

/// Returns true if `seq` is absent or yields no elements.
///
/// Pass containers by reference (`Some(&vec)`) to leave them untouched.
pub fn is_empty_or_absent<I: IntoIterator>(seq: Option<I>) -> bool {
    match seq {
        None => true,
        Some(seq) => has_no_elements(&mut seq.into_iter()),
    }
}

/// Constant time form of [`is_empty_or_absent`] for known-size containers.
pub fn is_empty_or_absent_len<C: KnownLen + ?Sized>(seq: Option<&C>) -> bool {
    seq.is_none_or(|seq| seq.is_known_empty())
}

pub fn is_present<I: IntoIterator>(seq: Option<I>) -> bool {
    !is_empty_or_absent(seq)
}

/// Narrowing form of [`is_present`]: returns the sequence as a peekable
/// iterator if it is present and non-empty.
///
/// No element is lost by the check, so one-shot sources can still be
/// consumed afterwards.
pub fn present<I: IntoIterator>(seq: Option<I>) -> Option<Peekable<I::IntoIter>> {
    let mut iter = seq?.into_iter().peekable();
    iter.peek()?;
    Some(iter)
}

/// Like [`is_empty_or_absent`], but an absent sequence is an error rather
/// than an empty one.
pub fn is_empty<I: IntoIterator>(seq: Option<I>) -> Result<bool> {
    let seq = seq.ok_or(Error::InvalidArgument("seq"))?;
    Ok(has_no_elements(&mut seq.into_iter()))
}
