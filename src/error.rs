use std::fmt;

/// Unified error type for the value-type layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unexpected end of input while decoding.
    Eof,
    /// Bytes that cannot be a valid encoding (overlong varint, bad UTF-8,
    /// checksum mismatch, etc).
    Corruption(String),
    /// A value was handed to a type that does not encode that variant.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// A row has more columns than its row type can delegate to.
    ArityOverflow { arity: usize, columns: usize },
    /// A page has no free slot left.
    PageFull { capacity: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Eof => write!(f, "Unexpected end of input"),
            Error::Corruption(msg) => write!(f, "Corruption: {msg}"),
            Error::TypeMismatch { expected, found } => {
                write!(f, "Type mismatch: expected {expected}, found {found}")
            }
            Error::ArityOverflow { arity, columns } => {
                write!(f, "Row arity {arity} exceeds {columns} column types")
            }
            Error::PageFull { capacity } => write!(f, "Page full ({capacity} slots)"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
