use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use crate::buffer::{ReadCursor, WriteBuffer};
use crate::error::{Error, Result};
use crate::types::{DataType, Row, Value};

/// A storable tuple of heterogeneous columns.
///
/// Built once per map from the ordered column types of its schema, then
/// shared read-only by every page operation on that map. Each operation
/// delegates position `i` of a row to `columns[i]`.
///
/// Wire format of one row:
/// ```text
/// ┌────────────────┬───────────┬───────────┬─────┬─────────────────┐
/// │ arity (varint) │ column 0  │ column 1  │ ... │ column arity-1  │
/// └────────────────┴───────────┴───────────┴─────┴─────────────────┘
/// ```
/// No padding and no per-column length: every column codec is
/// self-delimiting.
///
/// Rows need not match the schema's width. A shorter row is a prefix key
/// and sorts before every row it is a prefix of. Positions past the last
/// column type still compare (by `Value::natural_cmp`) and are still
/// sized, but they can't be encoded, because no codec exists for them.
#[derive(Debug, Clone)]
pub struct RowType {
    columns: Vec<Arc<dyn DataType>>,
}

impl RowType {
    pub fn new(columns: Vec<Arc<dyn DataType>>) -> Self {
        debug!(columns = columns.len(), "row type bound");
        RowType { columns }
    }

    pub fn columns(&self) -> &[Arc<dyn DataType>] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column-wise order with the prefix rule.
    ///
    /// Only `min(a.len(), b.len())` positions are inspected. When they all
    /// tie, the shorter row is less.
    pub fn compare_rows(&self, a: &Row, b: &Row) -> Ordering {
        if Row::ptr_eq(a, b) {
            return Ordering::Equal;
        }
        for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            let ord = match self.columns.get(i) {
                Some(column) => column.compare(x, y),
                None => x.natural_cmp(y),
            };
            if ord.is_ne() {
                return ord;
            }
        }
        a.len().cmp(&b.len())
    }

    /// Sum of the per-column estimates. Empty row ⇒ 0.
    pub fn row_memory(&self, row: &Row) -> usize {
        row.iter()
            .enumerate()
            .map(|(i, value)| match self.columns.get(i) {
                Some(column) => column.memory(value),
                None => value.approximate_memory(),
            })
            .sum()
    }

    pub fn write_row(&self, sink: &mut WriteBuffer, row: &Row) -> Result<()> {
        let overflow = Error::ArityOverflow {
            arity: row.len(),
            columns: self.columns.len(),
        };
        if row.len() > self.columns.len() {
            return Err(overflow);
        }
        let arity = u32::try_from(row.len()).map_err(|_| overflow)?;
        sink.put_var_u32(arity);
        for (column, value) in self.columns.iter().zip(row.iter()) {
            column.write(sink, value)?;
        }
        Ok(())
    }

    pub fn read_row(&self, cursor: &mut ReadCursor<'_>) -> Result<Row> {
        let arity = cursor.get_var_u32()? as usize;
        let columns = self.columns.get(..arity).ok_or_else(|| {
            Error::Corruption(format!(
                "row arity {arity} exceeds {} column types",
                self.columns.len()
            ))
        })?;
        let mut values = Vec::with_capacity(arity);
        for column in columns {
            values.push(column.read(cursor)?);
        }
        Ok(Row::new(values))
    }
}

impl DataType for RowType {
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        if std::ptr::eq(a, b) {
            return Ordering::Equal;
        }
        match (a, b) {
            (Value::Row(x), Value::Row(y)) => self.compare_rows(x, y),
            _ => a.natural_cmp(b),
        }
    }

    fn memory(&self, value: &Value) -> usize {
        match value {
            Value::Row(row) => self.row_memory(row),
            other => other.approximate_memory(),
        }
    }

    fn read(&self, cursor: &mut ReadCursor<'_>) -> Result<Value> {
        self.read_row(cursor).map(Value::Row)
    }

    fn write(&self, sink: &mut WriteBuffer, value: &Value) -> Result<()> {
        match value {
            Value::Row(row) => self.write_row(sink, row),
            other => Err(Error::TypeMismatch {
                expected: "row",
                found: other.kind(),
            }),
        }
    }
}
