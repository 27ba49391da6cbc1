//! A growable, contiguous array that grows by a fixed number of slots at a
//! time.
//!
//! ```
//! use dynarray::DynArray;
//!
//! let mut arr = DynArray::<i32>::new();
//! arr.extend([2, 6, 8, 5, 1]);
//! arr.sort_by(|a, b| b.cmp(a));
//!
//! assert_eq!(arr.to_string(), "8, 6, 5, 2, 1");
//! ```

mod dynarray;

pub mod errors;

pub use dynarray::{DynArray, Drain, IntoIter, DEFAULT_CAPACITY};
pub use errors::IndexOutOfBounds;
