//! Sampling-without-replacement primitives.

use rand::seq::SliceRandom;
use rand::Rng;

/// Sample `count` distinct elements from a pool.
///
/// The draw is without replacement; `count` is clamped to the pool size, so
/// an undersized pool yields fewer elements rather than duplicates. An empty
/// pool yields an empty vec.
pub fn sample_distinct<T: Clone, R: Rng>(rng: &mut R, pool: &[T], count: usize) -> Vec<T> {
    if pool.is_empty() || count == 0 {
        return Vec::new();
    }

    let effective = count.min(pool.len());

    // Shuffle a copy and take the prefix
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(effective);
    shuffled
}

/// Sample `count` distinct integers from the inclusive range `[min, max]`.
pub fn sample_distinct_range<R: Rng>(rng: &mut R, min: i64, max: i64, count: usize) -> Vec<i64> {
    if max < min || count == 0 {
        return Vec::new();
    }

    let span = (max - min + 1) as usize;
    let effective = count.min(span);

    rand::seq::index::sample(rng, span, effective)
        .into_iter()
        .map(|offset| min + offset as i64)
        .collect()
}
