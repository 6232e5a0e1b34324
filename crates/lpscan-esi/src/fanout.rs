use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;

/// Concurrency cap applied to each fan-out phase. The cap is the sole form
/// of load control against the remote API.
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Clamp a configured limit to something usable.
pub fn ensure_concurrency_limit(limit: usize) -> usize {
    limit.max(1)
}

/// Scatter `worker` across `items` with at most `max_concurrency` calls in
/// flight, and gather every result before returning.
///
/// This is a barrier, not a stream: nothing is observable until all
/// submitted work has completed. Workers absorb their own failures, so the
/// gather always yields exactly one entry per input item. Completion order
/// is not guaranteed; the result map is keyed, so it does not matter.
pub async fn run_all<I, K, V, F, Fut>(items: I, max_concurrency: usize, worker: F) -> HashMap<K, V>
where
    I: IntoIterator<Item = K>,
    K: Eq + Hash,
    F: Fn(K) -> Fut,
    Fut: Future<Output = (K, V)>,
{
    let limit = ensure_concurrency_limit(max_concurrency);

    stream::iter(items)
        .map(|item| worker(item))
        .buffer_unordered(limit)
        .collect::<Vec<(K, V)>>()
        .await
        .into_iter()
        .collect()
}
