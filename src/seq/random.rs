use rand::Rng;

use crate::{
    capability::RandomAccess,
    error::{Error, Result},
};

/// Picks a uniformly random element of an indexed container, or `None` if
/// the container is absent or empty.
pub fn get_random<C: RandomAccess + ?Sized>(seq: Option<&C>) -> Option<&C::Item> {
    get_random_with(seq, &mut rand::rng())
}

pub fn get_random_with<'a, C, R>(seq: Option<&'a C>, rng: &mut R) -> Option<&'a C::Item>
where
    C: RandomAccess + ?Sized,
    R: Rng + ?Sized,
{
    let seq = seq?;
    match seq.known_len() {
        0 => None,
        len => seq.get_at(rng.random_range(0..len)),
    }
}

/// Picks a uniformly random element of a sequence of unknown length.
///
/// The sequence is traversed once and never buffered, so one-shot sources
/// are fine.
pub fn get_random_from_iter<I: IntoIterator>(seq: Option<I>) -> Option<I::Item> {
    get_random_from_iter_with(seq, &mut rand::rng())
}

pub fn get_random_from_iter_with<I, R>(seq: Option<I>, rng: &mut R) -> Option<I::Item>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    reservoir_sample(seq?.into_iter(), rng)
}

/// Like [`get_random`], but absence and emptiness are errors.
pub fn get_random_strict<C: RandomAccess + ?Sized>(seq: Option<&C>) -> Result<&C::Item> {
    get_random_strict_with(seq, &mut rand::rng())
}

pub fn get_random_strict_with<'a, C, R>(seq: Option<&'a C>, rng: &mut R) -> Result<&'a C::Item>
where
    C: RandomAccess + ?Sized,
    R: Rng + ?Sized,
{
    let seq = seq.ok_or(Error::InvalidArgument("seq"))?;
    get_random_with(Some(seq), rng).ok_or(Error::OutOfRange)
}

/// Like [`get_random_from_iter`], but absence and emptiness are errors.
pub fn get_random_from_iter_strict<I: IntoIterator>(seq: Option<I>) -> Result<I::Item> {
    get_random_from_iter_strict_with(seq, &mut rand::rng())
}

pub fn get_random_from_iter_strict_with<I, R>(seq: Option<I>, rng: &mut R) -> Result<I::Item>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    let seq = seq.ok_or(Error::InvalidArgument("seq"))?;
    reservoir_sample(seq.into_iter(), rng).ok_or(Error::OutOfRange)
}

/// Single pass reservoir sampling of size one: the n-th element replaces the
/// current candidate with probability 1/n.
pub(crate) fn reservoir_sample<I, R>(iter: I, rng: &mut R) -> Option<I::Item>
where
    I: Iterator,
    R: Rng + ?Sized,
{
    let mut chosen = None;
    let mut seen = 0usize;
    for item in iter {
        seen += 1;
        if rng.random_range(0..seen) == 0 {
            chosen = Some(item);
        }
    }
    log::trace!("Reservoir sampled {seen} elements");
    chosen
}
