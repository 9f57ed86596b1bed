//! Typed column storage.
//!
//! A [`ColumnData`] is a homogeneous ordered sequence of cells. It carries
//! its own length and a numeric tag, which is what the renderer uses to
//! decide justification. Callers with typed vectors convert via `From`;
//! callers holding dynamic data come in through [`ColumnData::from_json`],
//! which rejects anything that is not a sequence with the same
//! "not a slice" signal the table API documents.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TableError;
use crate::Result;

/// One scalar cell of a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl Value {
    /// Whether this cell is numeric (integers and floats).
    ///
    /// Numeric columns are right-justified by the renderer.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }
}

impl fmt::Display for Value {
    /// The natural display form, used by the default `%v` template.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// A homogeneous ordered sequence of cells.
///
/// All cells of one column share a single element type; homogeneity is
/// established here, at the boundary where the column is supplied, so the
/// table core never needs to inspect element types at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
    Int(Vec<i64>),
    Float(Vec<f64>),
    Str(Vec<String>),
    Bool(Vec<bool>),
}

impl ColumnData {
    /// Number of cells in the column.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::Str(v) => v.len(),
            ColumnData::Bool(v) => v.len(),
        }
    }

    /// Whether the column has zero cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the column holds numeric cells (integers or floats).
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnData::Int(_) | ColumnData::Float(_))
    }

    /// The cell at `row`, or `None` past the end of the column.
    pub fn value(&self, row: usize) -> Option<Value> {
        if row < self.len() {
            Some(self.get(row))
        } else {
            None
        }
    }

    /// Iterate over the cells in row order.
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        (0..self.len()).map(move |row| self.get(row))
    }

    fn get(&self, row: usize) -> Value {
        match self {
            ColumnData::Int(v) => Value::Int(v[row]),
            ColumnData::Float(v) => Value::Float(v[row]),
            ColumnData::Str(v) => Value::Str(v[row].clone()),
            ColumnData::Bool(v) => Value::Bool(v[row]),
        }
    }

    /// Gather the given rows (in order) into a new column of the same type.
    pub(crate) fn take_rows(&self, rows: &[usize]) -> ColumnData {
        match self {
            ColumnData::Int(v) => ColumnData::Int(rows.iter().map(|&r| v[r]).collect()),
            ColumnData::Float(v) => ColumnData::Float(rows.iter().map(|&r| v[r]).collect()),
            ColumnData::Str(v) => ColumnData::Str(rows.iter().map(|&r| v[r].clone()).collect()),
            ColumnData::Bool(v) => ColumnData::Bool(rows.iter().map(|&r| v[r]).collect()),
        }
    }

    /// Concatenate several columns of the same type into one.
    ///
    /// Parts of a differing type (possible only if a caller has broken the
    /// shared-schema invariant across groups) degrade to their display
    /// strings rather than being dropped.
    pub(crate) fn concat(parts: &[ColumnData]) -> ColumnData {
        let first = match parts.first() {
            Some(p) => p,
            None => return ColumnData::Str(Vec::new()),
        };
        if parts.iter().all(|p| p.same_type(first)) {
            let mut out = first.clone();
            for part in &parts[1..] {
                out.extend_same(part);
            }
            return out;
        }
        ColumnData::Str(
            parts
                .iter()
                .flat_map(|p| p.iter().map(|v| v.to_string()))
                .collect(),
        )
    }

    fn same_type(&self, other: &ColumnData) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    fn extend_same(&mut self, other: &ColumnData) {
        match (self, other) {
            (ColumnData::Int(a), ColumnData::Int(b)) => a.extend_from_slice(b),
            (ColumnData::Float(a), ColumnData::Float(b)) => a.extend_from_slice(b),
            (ColumnData::Str(a), ColumnData::Str(b)) => a.extend_from_slice(b),
            (ColumnData::Bool(a), ColumnData::Bool(b)) => a.extend_from_slice(b),
            _ => {}
        }
    }

    /// Build a column from a dynamic JSON value.
    ///
    /// The value must be an array of homogeneous scalars: all integers
    /// (`Int`), all numbers with at least one non-integer (`Float`, with
    /// integer elements widened), all strings (`Str`), or all booleans
    /// (`Bool`). An empty array becomes an empty `Str` column; only its
    /// length ever matters. Anything else fails with
    /// [`TableError::InvalidColumn`].
    pub fn from_json(value: serde_json::Value) -> Result<ColumnData> {
        let items = match value {
            serde_json::Value::Array(items) => items,
            other => {
                return Err(TableError::InvalidColumn(format!(
                    "not a slice (got {})",
                    json_type(&other)
                )))
            }
        };
        if items.is_empty() {
            return Ok(ColumnData::Str(Vec::new()));
        }

        if items.iter().all(|v| v.is_number()) {
            if items.iter().all(|v| v.is_i64()) {
                let ints = items.iter().filter_map(|v| v.as_i64()).collect::<Vec<_>>();
                return Ok(ColumnData::Int(ints));
            }
            let floats = items.iter().filter_map(|v| v.as_f64()).collect::<Vec<_>>();
            return Ok(ColumnData::Float(floats));
        }
        if items.iter().all(|v| v.is_string()) {
            let strs = items
                .iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect::<Vec<_>>();
            return Ok(ColumnData::Str(strs));
        }
        if items.iter().all(|v| v.is_boolean()) {
            let bools = items
                .iter()
                .filter_map(serde_json::Value::as_bool)
                .collect::<Vec<_>>();
            return Ok(ColumnData::Bool(bools));
        }

        // Mixed or non-scalar elements; name the first offender.
        let offender = items
            .iter()
            .find(|v| !v.is_number() && !v.is_string() && !v.is_boolean())
            .unwrap_or(&items[0]);
        Err(TableError::InvalidColumn(format!(
            "not a homogeneous scalar slice (found {})",
            json_type(offender)
        )))
    }
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

// Exactly one integer impl, so integer-literal vectors unify with i64
// instead of hitting an ambiguous Into bound.
impl From<Vec<i64>> for ColumnData {
    fn from(v: Vec<i64>) -> Self {
        ColumnData::Int(v)
    }
}

impl From<Vec<f64>> for ColumnData {
    fn from(v: Vec<f64>) -> Self {
        ColumnData::Float(v)
    }
}

impl From<Vec<String>> for ColumnData {
    fn from(v: Vec<String>) -> Self {
        ColumnData::Str(v)
    }
}

impl From<Vec<&str>> for ColumnData {
    fn from(v: Vec<&str>) -> Self {
        ColumnData::Str(v.into_iter().map(String::from).collect())
    }
}

impl From<Vec<bool>> for ColumnData {
    fn from(v: Vec<bool>) -> Self {
        ColumnData::Bool(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_len_and_numeric_tag() {
        let ints = ColumnData::from(vec![1, 2, 3]);
        assert_eq!(ints.len(), 3);
        assert!(ints.is_numeric());

        let names = ColumnData::from(vec!["a", "b"]);
        assert_eq!(names.len(), 2);
        assert!(!names.is_numeric());

        let floats = ColumnData::from(vec![1.5, 2.5]);
        assert!(floats.is_numeric());

        let flags = ColumnData::from(vec![true]);
        assert!(!flags.is_numeric());
    }

    #[test]
    fn test_value_and_iter() {
        let col = ColumnData::from(vec![10, 20]);
        assert_eq!(col.value(0), Some(Value::Int(10)));
        assert_eq!(col.value(1), Some(Value::Int(20)));
        assert_eq!(col.value(2), None);

        let cells: Vec<Value> = col.iter().collect();
        assert_eq!(cells, vec![Value::Int(10), Value::Int(20)]);
    }

    #[test]
    fn test_take_rows() {
        let col = ColumnData::from(vec!["a", "b", "c", "d"]);
        let picked = col.take_rows(&[0, 2]);
        assert_eq!(picked, ColumnData::from(vec!["a", "c"]));
    }

    #[test]
    fn test_concat_same_type() {
        let merged = ColumnData::concat(&[
            ColumnData::from(vec![1, 2]),
            ColumnData::from(vec![3]),
        ]);
        assert_eq!(merged, ColumnData::from(vec![1, 2, 3]));
    }

    #[test]
    fn test_concat_empty() {
        assert_eq!(ColumnData::concat(&[]).len(), 0);
    }

    #[test]
    fn test_from_json_arrays() {
        assert_eq!(
            ColumnData::from_json(json!([1, 2, 3])).unwrap(),
            ColumnData::from(vec![1, 2, 3])
        );
        assert_eq!(
            ColumnData::from_json(json!([1, 2.5])).unwrap(),
            ColumnData::from(vec![1.0, 2.5])
        );
        assert_eq!(
            ColumnData::from_json(json!(["x", "y"])).unwrap(),
            ColumnData::from(vec!["x", "y"])
        );
        assert_eq!(
            ColumnData::from_json(json!([true, false])).unwrap(),
            ColumnData::from(vec![true, false])
        );
        assert_eq!(ColumnData::from_json(json!([])).unwrap().len(), 0);
    }

    #[test]
    fn test_from_json_not_a_slice() {
        let err = ColumnData::from_json(json!(1)).unwrap_err();
        assert!(err.to_string().contains("not a slice"));

        let err = ColumnData::from_json(json!({"a": 1})).unwrap_err();
        assert!(err.to_string().contains("not a slice"));
    }

    #[test]
    fn test_from_json_rejects_mixed_and_nested() {
        assert!(ColumnData::from_json(json!([1, "x"])).is_err());
        assert!(ColumnData::from_json(json!([null])).is_err());
        assert!(ColumnData::from_json(json!([[1], [2]])).is_err());
    }

    #[test]
    fn test_display_natural_form() {
        assert_eq!(Value::Int(2).to_string(), "2");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Str("hi".to_string()).to_string(), "hi");
        assert_eq!(Value::Bool(true).to_string(), "true");
    }
}
