pub mod error;
pub mod select;
pub mod structures;

pub use error::{Result, SelectionError, StructureError};
pub use select::{
    benchmark, compare, median_of_medians, quickselect, quickselect_with, BenchmarkResult,
    Comparison,
};
pub use structures::{Array, Queue, SinglyLinkedList, Stack};
