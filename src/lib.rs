//! Array-backed Binary Min-Heap for Rust
//!
//! This crate provides [`MinHeap`], a binary min-heap stored as a flat buffer
//! with a pluggable comparator and explicit control over its backing capacity.
//!
//! # Features
//!
//! - **Natural or custom order**: `T: Ord` heaps need no comparator; any
//!   [`Compare`] implementation (including plain closures) can be injected
//! - **Predictable growth**: capacity goes 0 → 4 → 8 → 16 … and never shrinks
//!   on its own
//! - **Exact construction**: building from a source of known length sizes the
//!   buffer to that length and heapifies in O(n)
//!
//! # Example
//!
//! ```rust
//! use min_heap::{HeapError, MinHeap};
//!
//! let mut heap = MinHeap::new();
//! assert_eq!(heap.peek_min(), Err(HeapError::Empty));
//!
//! heap.push(10);
//! heap.push(3);
//! assert_eq!(heap.peek_min(), Ok(&3));
//! assert_eq!(heap.capacity(), 4);
//! ```

pub mod error;
pub mod min_heap;

pub use compare::{Compare, Natural};
pub use error::HeapError;
pub use min_heap::{MinHeap, DEFAULT_CAPACITY};
