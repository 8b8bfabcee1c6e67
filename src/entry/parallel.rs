//! Parallel size aggregation over a fully built tree

use rayon::prelude::*;

use super::node::Entry;

/// Aggregate size of `entry`, summing its top-level children across a rayon
/// pool and saturating at `u64::MAX`.
///
/// `workers` follows the usual convention: 0 uses rayon's global pool, N
/// builds a dedicated pool with N threads. The result always equals
/// [`Entry::size`].
pub fn par_size(entry: &Entry, workers: usize) -> u64 {
    let Entry::Dir(dir) = entry else {
        return entry.size();
    };

    install(workers, || {
        dir.children()
            .par_iter()
            .map(Entry::size)
            .reduce(|| 0, u64::saturating_add)
    })
}

/// Run `op` on a pool with `workers` threads, or on rayon's global pool
/// when `workers` is 0.
pub(crate) fn install<R, F>(workers: usize, op: F) -> R
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    if workers == 0 {
        return op();
    }

    match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.install(op),
        Err(e) => {
            // Fall back to the global pool if a dedicated one can't be built
            tracing::warn!(workers, error = %e, "failed to build thread pool");
            op()
        }
    }
}
