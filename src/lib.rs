//! # Value types for a versioned B-tree store
//!
//! Every key and value a page holds goes through a `DataType`: it decides
//! how values are ordered during search, how they are encoded when a page
//! is flushed, and how much memory they are charged for when the cache
//! decides what to evict.
//!
//! ## Core idea
//! Leaf column types (ints, strings, bytes) each implement the contract on
//! their own. `RowType` implements the same contract over a whole tuple of
//! columns by delegating position `i` to column type `i`, so a composite
//! key is just another value type to the tree.

pub mod buffer;
pub mod error;
pub mod page;
pub mod types;
pub mod varint;

// Public re-exports for the top-level API
pub use buffer::{ReadCursor, WriteBuffer};
pub use error::{Error, Result};
pub use page::{PageOptions, ValuePage};
pub use types::{BytesType, DataType, IntType, LongType, Row, RowType, StringType, Value};

/// Build a `Row` from anything convertible into `Value`.
///
/// ```
/// use mvtype::{row, Value};
///
/// let r = row![5, "five"];
/// assert_eq!(r[0], Value::Int(5));
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::Row::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Row::new(vec![$($crate::Value::from($value)),+])
    };
}
