pub mod benchmark;
pub mod median_of_medians;
pub mod partition;
pub mod quickselect;

// Re-export the public surface of each submodule
pub use benchmark::{benchmark, compare, BenchmarkResult, Comparison};
pub use median_of_medians::median_of_medians;
pub use quickselect::{quickselect, quickselect_with};
