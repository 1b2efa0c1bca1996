use std::hash::{BuildHasher, Hash, Hasher};

use ahash::RandomState;

/// Returned by [`get_aggregate_hash`] for an absent sequence. Never produced
/// for a present one.
pub const ABSENT_HASH: i64 = -1;

const SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Combines the hashes of all elements of `seq`, in iteration order, and
/// optionally the identity (address) of `seq` itself.
///
/// The result is only meaningful within the running process: the identity
/// part depends on where the container lives, so two equal containers
/// hash differently unless `include_identity` is false.
pub fn get_aggregate_hash<'a, C, T>(seq: Option<&'a C>, include_identity: bool) -> i64
where
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a T>,
    T: Hash + 'a,
{
    let state = RandomState::with_seeds(SEEDS[0], SEEDS[1], SEEDS[2], SEEDS[3]);
    get_aggregate_hash_with(seq, include_identity, &state)
}

pub fn get_aggregate_hash_with<'a, C, T, S>(
    seq: Option<&'a C>,
    include_identity: bool,
    hash_builder: &S,
) -> i64
where
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a T>,
    T: Hash + 'a,
    S: BuildHasher,
{
    let Some(seq) = seq else {
        return ABSENT_HASH;
    };

    let mut hasher = hash_builder.build_hasher();
    if include_identity {
        hasher.write_usize(std::ptr::from_ref(seq).cast::<()>().addr());
    }
    for item in seq {
        item.hash(&mut hasher);
    }
    // Dropping the top bit keeps the result clear of the negative sentinel.
    (hasher.finish() >> 1) as i64
}
