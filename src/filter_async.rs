//! Filtering with asynchronous predicates.
//!
//! Both filters test one element at a time: the predicate future for an
//! element is driven to completion before the next element is looked at,
//! and the stream only suspends where that future does. Cancellation is
//! polled before each element is tested, so it is observed between elements
//! and never interrupts a running predicate.

use std::future::Future;

use futures::{Stream, stream};
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};

/// Yields the elements of `seq` for which `predicate` resolves to true.
///
/// Once `cancel` is triggered the stream ends quietly before testing the
/// next element. Elements already yielded are unaffected.
pub fn where_async<I, T, P, Fut>(
    seq: I,
    predicate: P,
    cancel: CancellationToken,
) -> impl Stream<Item = T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> Fut,
    Fut: Future<Output = bool>,
{
    stream::unfold(
        (seq.into_iter(), predicate, cancel),
        |(mut iter, mut predicate, cancel)| async move {
            loop {
                if cancel.is_cancelled() {
                    log::debug!("Cancellation observed, ending filter");
                    return None;
                }
                let item = iter.next()?;
                if predicate(&item).await {
                    return Some((item, (iter, predicate, cancel)));
                }
            }
        },
    )
}

/// Like [`where_async`], but cancellation is reported: the stream yields a
/// single `Err(Error::Cancelled)` and then ends.
pub fn try_where_async<I, T, P, Fut>(
    seq: I,
    predicate: P,
    cancel: CancellationToken,
) -> impl Stream<Item = Result<T>>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> Fut,
    Fut: Future<Output = bool>,
{
    stream::unfold(
        Some((seq.into_iter(), predicate, cancel)),
        |state| async move {
            let (mut iter, mut predicate, cancel) = state?;
            loop {
                if cancel.is_cancelled() {
                    log::debug!("Cancellation observed, failing filter");
                    return Some((Err(Error::Cancelled), None));
                }
                let item = iter.next()?;
                if predicate(&item).await {
                    return Some((Ok(item), Some((iter, predicate, cancel))));
                }
            }
        },
    )
}
