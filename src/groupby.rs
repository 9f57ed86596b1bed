//! Partitioning a grouping by the values of one column.
//!
//! [`group_by`] scans an existing [`Grouping`] in its natural order
//! (source-group order first, row order within each group second) and
//! buckets rows by the distinct values of one column. The result is a
//! second [`Grouping`] implementation whose groups are keyed `/0`, `/1`,
//! ... in order of first appearance.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::column::{ColumnData, Value};
use crate::error::TableError;
use crate::group::GroupId;
use crate::table::{Grouping, Table};
use crate::Result;

/// The grouping produced by [`group_by`].
///
/// Unlike a plain [`Table`], this view has no root group: its groups are
/// exactly the distinct-value partitions. Convert with
/// [`Table::from_grouping`] to merge it into another table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedTable {
    cols: Vec<String>,
    groups: Vec<(GroupId, Arc<Table>)>,
}

impl Grouping for GroupedTable {
    fn columns(&self) -> Option<&[String]> {
        if self.cols.is_empty() {
            None
        } else {
            Some(&self.cols)
        }
    }

    fn groups(&self) -> Vec<GroupId> {
        self.groups.iter().map(|(gid, _)| gid.clone()).collect()
    }

    fn table(&self, gid: &GroupId) -> Option<&Table> {
        self.groups
            .iter()
            .find(|(existing, _)| existing == gid)
            .map(|(_, sub)| sub.as_ref())
    }
}

/// Hashable form of a cell value; floats key by bit pattern.
#[derive(Clone, PartialEq, Eq, Hash)]
enum CellKey {
    Int(i64),
    Float(u64),
    Str(String),
    Bool(bool),
}

impl From<Value> for CellKey {
    fn from(value: Value) -> Self {
        match value {
            Value::Int(i) => CellKey::Int(i),
            Value::Float(x) => CellKey::Float(x.to_bits()),
            Value::Str(s) => CellKey::Str(s),
            Value::Bool(b) => CellKey::Bool(b),
        }
    }
}

/// Partition `g`'s rows into groups keyed by the distinct values of
/// `column`.
///
/// Each resulting group holds exactly the rows sharing one value, in the
/// source row order (a stable partition). The grouping column stays in
/// every sub-table's schema; grouping is a pure row partition, not a
/// projection. An empty source yields an empty grouping; an unknown
/// column fails with [`TableError::UnknownColumn`].
pub fn group_by<G: Grouping + ?Sized>(g: &G, column: &str) -> Result<GroupedTable> {
    let cols = match g.columns() {
        None => return Ok(GroupedTable::default()),
        Some(cols) => cols.to_vec(),
    };
    if !cols.iter().any(|name| name == column) {
        return Err(TableError::UnknownColumn(column.to_string()));
    }

    // Discovery pass: distinct values in first-appearance order, with the
    // source rows belonging to each, kept per source group.
    let source_gids = g.groups();
    let mut seen: HashMap<CellKey, usize> = HashMap::new();
    let mut buckets: Vec<Vec<(usize, Vec<usize>)>> = Vec::new();
    for (src_idx, gid) in source_gids.iter().enumerate() {
        let sub = match g.table(gid) {
            Some(sub) => sub,
            None => continue,
        };
        let key_col = sub.must_column(column)?;
        for (row, cell) in key_col.iter().enumerate() {
            let key = CellKey::from(cell);
            let bucket = match seen.get(&key).copied() {
                Some(idx) => idx,
                None => {
                    let idx = buckets.len();
                    seen.insert(key, idx);
                    buckets.push(Vec::new());
                    idx
                }
            };
            let new_part = buckets[bucket]
                .last()
                .map_or(true, |(idx, _)| *idx != src_idx);
            if new_part {
                buckets[bucket].push((src_idx, Vec::new()));
            }
            if let Some((_, rows)) = buckets[bucket].last_mut() {
                rows.push(row);
            }
        }
    }

    // Gather pass: build one sub-table per distinct value.
    let mut groups = Vec::with_capacity(buckets.len());
    for (discovery_idx, bucket) in buckets.iter().enumerate() {
        let mut sub = Table::new();
        for name in &cols {
            let mut parts = Vec::with_capacity(bucket.len());
            for (src_idx, rows) in bucket {
                let src = match g.table(&source_gids[*src_idx]) {
                    Some(src) => src,
                    None => continue,
                };
                parts.push(src.must_column(name)?.take_rows(rows));
            }
            sub = sub.add(name.clone(), ColumnData::concat(&parts))?;
        }
        let gid = GroupId::root().extend(discovery_idx.to_string());
        groups.push((gid, Arc::new(sub)));
    }

    Ok(GroupedTable { cols, groups })
}
