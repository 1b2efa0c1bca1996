//! Small, stateless helpers over sequences.
//!
//! Absent sequences are modelled as `None`. Each helper documents whether it
//! tolerates absence (returning `None`, `false` or a sentinel) or rejects it
//! with [`Error::InvalidArgument`].

pub mod capability;
pub mod error;
pub mod ext;
pub mod filter_async;
pub mod seq;

pub use capability::{KnownLen, RandomAccess};
pub use error::{Error, Result};
pub use ext::SequenceExt;
pub use filter_async::{try_where_async, where_async};
pub use seq::{
    contains_key, contains_predicate,
    dedup::{contains_duplicates, remove_duplicates, remove_duplicates_by_key},
    flatten::flatten_recursive,
    hashing::{ABSENT_HASH, get_aggregate_hash, get_aggregate_hash_with},
    nulls::remove_nulls,
    presence::{is_empty, is_empty_or_absent, is_empty_or_absent_len, is_present, present},
    random::{
        get_random, get_random_from_iter, get_random_from_iter_strict,
        get_random_from_iter_strict_with, get_random_from_iter_with, get_random_strict,
        get_random_strict_with, get_random_with,
    },
};
