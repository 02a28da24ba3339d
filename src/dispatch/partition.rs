//! Work partitioning.
//!
//! Splits a list into `n` contiguous chunks. The first `n - 1` chunks hold
//! exactly `len / n` items each; the last chunk takes everything left over,
//! so it absorbs the remainder. With fewer items than chunks, the leading
//! chunks are empty.

use std::num::NonZeroUsize;

/// Split `items` into exactly `chunks` contiguous slices, preserving order.
pub fn partition<T>(items: &[T], chunks: NonZeroUsize) -> Vec<&[T]> {
    let n = chunks.get();
    let base = items.len() / n;

    let mut out = Vec::with_capacity(n);
    for i in 0..n - 1 {
        out.push(&items[i * base..(i + 1) * base]);
    }
    out.push(&items[(n - 1) * base..]);
    out
}
