use std::cmp::Ordering;
use std::ops::Deref;
use std::sync::Arc;

/// Fixed per-object overhead charged for boxed leaf values.
const INT_MEMORY: usize = 16;
const LONG_MEMORY: usize = 24;
const HEAP_MEMORY: usize = 24;

/// One column value.
///
/// Column types decide which variants they accept; a `RowType` column holds
/// `Value::Row`, so rows nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i32),
    Long(i64),
    Str(String),
    Bytes(Vec<u8>),
    Row(Row),
}

impl Value {
    /// Short variant name, used in type mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Row(_) => "row",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Int(_) => 0,
            Value::Long(_) => 1,
            Value::Str(_) => 2,
            Value::Bytes(_) => 3,
            Value::Row(_) => 4,
        }
    }

    /// Order used when no column type is available to decide: variant rank
    /// first, then content. Rows compare element-wise with the prefix rule.
    pub fn natural_cmp(&self, other: &Value) -> Ordering {
        if std::ptr::eq(self, other) {
            return Ordering::Equal;
        }
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Long(a), Value::Long(b)) => a.cmp(b),
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
            (Value::Row(a), Value::Row(b)) => {
                if Row::ptr_eq(a, b) {
                    return Ordering::Equal;
                }
                a.iter()
                    .zip(b.iter())
                    .map(|(x, y)| x.natural_cmp(y))
                    .find(|ord| ord.is_ne())
                    .unwrap_or_else(|| a.len().cmp(&b.len()))
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Retained-size estimate when no column type is available.
    ///
    /// Leaf column types charge exactly this for their own variant.
    pub fn approximate_memory(&self) -> usize {
        match self {
            Value::Int(_) => INT_MEMORY,
            Value::Long(_) => LONG_MEMORY,
            Value::Str(s) => HEAP_MEMORY + 2 * s.len(),
            Value::Bytes(b) => HEAP_MEMORY + b.len(),
            Value::Row(row) => row.iter().map(Value::approximate_memory).sum(),
        }
    }

    pub fn as_row(&self) -> Option<&Row> {
        match self {
            Value::Row(row) => Some(row),
            _ => None,
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<Row> for Value {
    fn from(v: Row) -> Self {
        Value::Row(v)
    }
}

/// An ordered tuple of values with any arity.
///
/// Clones share the same allocation, so a page slot and the caller's copy of
/// the same row are identical for `Row::ptr_eq`, which is what lets
/// comparisons during rebalancing skip the column walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row(Arc<[Value]>);

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Row(values.into())
    }

    pub fn empty() -> Self {
        Row(Arc::from(Vec::new()))
    }

    /// True when both rows point at the same allocation.
    pub fn ptr_eq(a: &Row, b: &Row) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl Deref for Row {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Row::new(values)
    }
}

impl FromIterator<Value> for Row {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Row(iter.into_iter().collect())
    }
}
