//! Error type for heap operations
//!
//! Misuse that Rust's type system can rule out (an element type without a
//! total order, a missing comparator or source, a negative capacity) never
//! reaches runtime. What remains are the two state-dependent failures below.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The requested capacity cannot hold the elements already in the heap
    CapacityBelowLen {
        /// The capacity that was asked for
        requested: usize,
        /// The number of live elements at the time of the request
        len: usize,
    },
    /// The heap has no elements to look at
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::CapacityBelowLen { requested, len } => {
                write!(
                    f,
                    "capacity was less than the current size (requested {requested}, size {len})"
                )
            }
            HeapError::Empty => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}
