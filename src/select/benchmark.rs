use std::time::{Duration, Instant};

use log::debug;

use crate::error::Result;
use crate::select::{median_of_medians, quickselect};

/// A selected value paired with the wall-clock time the selector took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkResult<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Side-by-side measurements of the two selectors over the same input
/// and rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison<T> {
    pub deterministic: BenchmarkResult<T>,
    pub randomized: BenchmarkResult<T>,
}

/// Times a single selector invocation against an independent copy of
/// `data`. The clock brackets only the selector call, not the copy.
pub fn benchmark<T, F>(selector: F, data: &[T], k: usize) -> Result<BenchmarkResult<T>>
where
    T: Ord + Copy,
    F: FnOnce(&[T], usize) -> Result<T>,
{
    let input = data.to_vec();
    let start = Instant::now();
    let value = selector(&input, k)?;
    let elapsed = start.elapsed();
    Ok(BenchmarkResult { value, elapsed })
}

/// Runs both selectors through [`benchmark`] with the same rank against
/// copies of the same input, deterministic selector first. One
/// measurement each, no retries.
pub fn compare<T: Ord + Copy>(data: &[T], k: usize) -> Result<Comparison<T>> {
    let deterministic = benchmark(median_of_medians, data, k)?;
    debug!("median of medians finished in {:?}", deterministic.elapsed);
    let randomized = benchmark(quickselect, data, k)?;
    debug!("quickselect finished in {:?}", randomized.elapsed);
    Ok(Comparison {
        deterministic,
        randomized,
    })
}
