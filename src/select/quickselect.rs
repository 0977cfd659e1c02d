use rand::Rng;

use crate::error::{Result, SelectionError};
use crate::select::partition;

/// Returns the k-th smallest element of `data` (zero-based) using a
/// uniformly random pivot. Expected O(n) time, O(n^2) in the worst case
/// when the pivot draws are repeatedly poor.
///
/// The caller's slice is never modified.
pub fn quickselect<T: Ord + Copy>(data: &[T], k: usize) -> Result<T> {
    quickselect_with(data, k, &mut rand::thread_rng())
}

/// Same as [`quickselect`], drawing pivots from a caller-supplied
/// generator so pivot sequences can be replayed in tests.
pub fn quickselect_with<T, R>(data: &[T], k: usize, rng: &mut R) -> Result<T>
where
    T: Ord + Copy,
    R: Rng,
{
    if data.is_empty() {
        return Err(SelectionError::EmptyInput);
    }
    if k >= data.len() {
        return Err(SelectionError::rank_out_of_bounds(k, data.len()));
    }
    let mut working = data.to_vec();
    let mut rank = k;
    // Iterative descent: a degenerate pivot run shrinks the vector by one
    // element per round and must not grow the stack with it.
    loop {
        if working.len() == 1 {
            return Ok(working[0]);
        }
        let pivot = working[rng.gen_range(0..working.len())];
        let (low, equal, high) = partition::three_way(&working, pivot);
        if rank < low.len() {
            working = low;
        } else if rank < low.len() + equal {
            return Ok(pivot);
        } else {
            rank -= low.len() + equal;
            working = high;
        }
    }
}
