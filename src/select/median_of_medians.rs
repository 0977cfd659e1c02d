use crate::error::{Result, SelectionError};
use crate::select::partition;

const GROUP_SIZE: usize = 5;

/// Returns the k-th smallest element of `data` (zero-based, so `k = 0` is
/// the minimum) using deterministic median-of-medians pivot selection.
///
/// The caller's slice is never modified; selection runs against an
/// internal copy.
///
/// # Arguments
/// * `data` - The sequence to select from
/// * `k` - The rank of the element to return, `0 <= k < data.len()`
///
/// # Returns
/// * `Ok(value)` - The element that would sit at index `k` if `data` were
///   sorted ascending
/// * `Err(SelectionError)` - If `data` is empty or `k` is out of range
///
/// # Examples
/// ```
/// use selection::median_of_medians;
///
/// let data = [5, 3, 8, 1, 9, 2];
/// assert_eq!(median_of_medians(&data, 2), Ok(3));
/// ```
///
/// # Complexity
/// * Time: O(n) worst case; grouping by five bounds the pivot away from
///   the extremes on every round
/// * Space: O(n)
pub fn median_of_medians<T: Ord + Copy>(data: &[T], k: usize) -> Result<T> {
    if data.is_empty() {
        return Err(SelectionError::EmptyInput);
    }
    if k >= data.len() {
        return Err(SelectionError::rank_out_of_bounds(k, data.len()));
    }
    Ok(select(data.to_vec(), k))
}

// The main descent is a loop; only pivot selection recurses, and it only
// ever sees the medians vector (a fifth of the round's input), so the
// recursion depth stays logarithmic.
fn select<T: Ord + Copy>(mut working: Vec<T>, mut rank: usize) -> T {
    loop {
        if working.len() <= GROUP_SIZE {
            working.sort_unstable();
            return working[rank];
        }
        let pivot = pivot_of(&working);
        let (low, equal, high) = partition::three_way(&working, pivot);
        if rank < low.len() {
            working = low;
        } else if rank < low.len() + equal {
            return pivot;
        } else {
            rank -= low.len() + equal;
            working = high;
        }
    }
}

/// Median of the per-group medians, taken over consecutive groups of at
/// most five elements (the last group may be shorter).
fn pivot_of<T: Ord + Copy>(working: &[T]) -> T {
    let medians: Vec<T> = working.chunks(GROUP_SIZE).map(group_median).collect();
    let mid = medians.len() / 2;
    select(medians, mid)
}

fn group_median<T: Ord + Copy>(group: &[T]) -> T {
    let mut buf = group.to_vec();
    buf.sort_unstable();
    buf[buf.len() / 2]
}
