//! The persistent table data structure.
//!
//! A [`Table`] maps column names to equal-length [`ColumnData`] sequences
//! and may hold nested sub-tables keyed by [`GroupId`], forming a tree of
//! row partitions over one shared schema. Tables are persistent values:
//! [`Table::add`] and [`Table::add_table`] return a new table and leave
//! the receiver untouched, sharing unchanged columns and sub-tables by
//! reference rather than copying them.
//!
//! The read-only surface is the [`Grouping`] trait; anything downstream of
//! construction (the renderer, [`crate::group_by`]) depends only on it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::column::ColumnData;
use crate::error::TableError;
use crate::group::GroupId;
use crate::Result;

/// Read-only access to a set of columns partitioned into groups.
///
/// Implemented by [`Table`] directly and by the view returned from
/// [`crate::group_by`]. Consumers of tabular data should accept any
/// `Grouping` rather than a concrete `Table`.
pub trait Grouping {
    /// The ordered column names, or `None` when the grouping has no
    /// columns at all (the empty table).
    fn columns(&self) -> Option<&[String]>;

    /// The group identifiers, in order. Root first for a plain non-empty
    /// table; empty for an empty grouping.
    fn groups(&self) -> Vec<GroupId>;

    /// The sub-table holding exactly the rows of `gid`, or `None` when no
    /// such group exists.
    fn table(&self, gid: &GroupId) -> Option<&Table>;

    /// Whether the grouping has no columns (and therefore no rows or
    /// groups).
    fn is_empty(&self) -> bool {
        self.columns().is_none()
    }
}

/// An immutable column-oriented table with nested row groups.
///
/// The zero value ([`Table::new`]) is the empty table: no columns, no row
/// count, no groups. A table first acquires a schema through
/// [`Table::add`] or by adopting another grouping via [`Table::add_table`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column names in insertion order.
    cols: Vec<String>,
    /// Column storage, shared across derived tables.
    data: HashMap<String, Arc<ColumnData>>,
    /// Nested groups in installation order. Empty for a plain table,
    /// whose sole group is itself under the root id.
    nested: Vec<(GroupId, Arc<Table>)>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new table with the column `name` holding `data`.
    ///
    /// If `name` is currently the table's only column, the new data may
    /// have any length and redefines the row count. Otherwise the data's
    /// length must match the established row count, or the call fails
    /// with [`TableError::RowCountMismatch`]. The receiver is never
    /// modified; its nested groups carry over unchanged.
    pub fn add(&self, name: impl Into<String>, data: impl Into<ColumnData>) -> Result<Table> {
        self.add_column(name.into(), Arc::new(data.into()))
    }

    /// Like [`Table::add`], for callers holding dynamic JSON data.
    ///
    /// Fails with [`TableError::InvalidColumn`] before any row-count
    /// check when `data` is not an array of homogeneous scalars.
    pub fn add_json(&self, name: impl Into<String>, data: serde_json::Value) -> Result<Table> {
        self.add_column(name.into(), Arc::new(ColumnData::from_json(data)?))
    }

    fn add_column(&self, name: String, data: Arc<ColumnData>) -> Result<Table> {
        let only_column = self.cols.len() == 1 && self.cols[0] == name;
        if !self.cols.is_empty() && !only_column && data.len() != self.len() {
            return Err(TableError::RowCountMismatch {
                column: name,
                got: data.len(),
                want: self.len(),
            });
        }
        let mut out = self.clone();
        if !out.data.contains_key(&name) {
            out.cols.push(name.clone());
        }
        out.data.insert(name, data);
        Ok(out)
    }

    /// Return a new table with `other` installed as a nested group.
    ///
    /// - An empty donor leaves the receiver unchanged.
    /// - An empty receiver adopts the donor's structure wholesale,
    ///   regardless of `gid`.
    /// - Installing a non-empty donor at the root id replaces the
    ///   receiver wholesale (no schema check applies at root).
    /// - Otherwise the donor's column-name set must exactly match the
    ///   receiver's: a receiver column absent from the donor fails with
    ///   [`TableError::MissingColumn`], checked before any donor column
    ///   absent from the receiver fails with [`TableError::ExtraColumn`].
    ///
    /// Every donor group `dg` is installed at `gid.concat(dg)` in donor
    /// group order, so a root-only donor lands exactly at `gid`. When the
    /// receiver gains its first nested group, its own rows become the
    /// root group, and `groups()` of the result starts with root. A group
    /// already present at a target id is replaced in place.
    pub fn add_table<G: Grouping + ?Sized>(&self, gid: &GroupId, other: &G) -> Result<Table> {
        let theirs = match other.columns() {
            None => return Ok(self.clone()),
            Some(cols) => cols,
        };
        if self.is_empty() || gid.is_root() {
            return Ok(Table::from_grouping(other));
        }

        for name in &self.cols {
            if !theirs.contains(name) {
                return Err(TableError::MissingColumn(name.clone()));
            }
        }
        for name in theirs {
            if !self.data.contains_key(name) {
                return Err(TableError::ExtraColumn(name.clone()));
            }
        }

        let mut out = self.clone();
        if out.nested.is_empty() {
            // First nested group: the receiver's own rows become the root
            // group, keeping root first in group order.
            out.nested
                .push((GroupId::root(), Arc::new(self.flat_clone())));
        }
        for dg in other.groups() {
            let sub = match other.table(&dg) {
                Some(t) => t.flat_clone(),
                None => continue,
            };
            out.install(gid.concat(&dg), Arc::new(sub));
        }
        Ok(out)
    }

    /// Materialize any grouping as a `Table`.
    ///
    /// A root-only grouping becomes that table verbatim. A grouping
    /// without a root group (such as a [`crate::group_by`] view) gets
    /// top-level columns formed by concatenating all group rows in group
    /// order, preserving the full row multiset.
    pub fn from_grouping<G: Grouping + ?Sized>(g: &G) -> Table {
        let cols = match g.columns() {
            None => return Table::new(),
            Some(cols) => cols.to_vec(),
        };
        let gids = g.groups();
        if gids.len() == 1 && gids[0].is_root() {
            if let Some(t) = g.table(&gids[0]) {
                return t.flat_clone();
            }
        }

        let mut nested = Vec::with_capacity(gids.len());
        for gid in &gids {
            if let Some(t) = g.table(gid) {
                nested.push((gid.clone(), Arc::new(t.flat_clone())));
            }
        }
        let data = match nested.iter().find(|(gid, _)| gid.is_root()) {
            Some((_, root)) => root.data.clone(),
            None => {
                let mut data = HashMap::new();
                for name in &cols {
                    let parts: Vec<ColumnData> = nested
                        .iter()
                        .filter_map(|(_, t)| t.column(name).cloned())
                        .collect();
                    data.insert(name.clone(), Arc::new(ColumnData::concat(&parts)));
                }
                data
            }
        };
        Table { cols, data, nested }
    }

    /// The shared row count. Zero both for the empty table and for a
    /// table whose columns have zero rows; the two are distinguished by
    /// [`Grouping::columns`].
    pub fn len(&self) -> usize {
        self.cols
            .first()
            .and_then(|name| self.data.get(name))
            .map_or(0, |col| col.len())
    }

    /// Whether the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    /// The data for column `name`, or `None` if unknown.
    pub fn column(&self, name: &str) -> Option<&ColumnData> {
        self.data.get(name).map(Arc::as_ref)
    }

    /// Like [`Table::column`], but failing with
    /// [`TableError::UnknownColumn`] when the name is absent. Use where
    /// absence is a programming error, not a normal case.
    pub fn must_column(&self, name: &str) -> Result<&ColumnData> {
        self.column(name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    /// A copy of this table's columns without its nested groups.
    fn flat_clone(&self) -> Table {
        Table {
            cols: self.cols.clone(),
            data: self.data.clone(),
            nested: Vec::new(),
        }
    }

    /// Install `sub` at `gid`, replacing in place when the id exists.
    fn install(&mut self, gid: GroupId, sub: Arc<Table>) {
        match self.nested.iter().position(|(existing, _)| *existing == gid) {
            Some(idx) => self.nested[idx].1 = sub,
            None => self.nested.push((gid, sub)),
        }
    }
}

impl Grouping for Table {
    fn columns(&self) -> Option<&[String]> {
        if self.cols.is_empty() {
            None
        } else {
            Some(&self.cols)
        }
    }

    fn groups(&self) -> Vec<GroupId> {
        if !self.nested.is_empty() {
            self.nested.iter().map(|(gid, _)| gid.clone()).collect()
        } else if self.cols.is_empty() {
            Vec::new()
        } else {
            vec![GroupId::root()]
        }
    }

    fn table(&self, gid: &GroupId) -> Option<&Table> {
        if let Some((_, sub)) = self.nested.iter().find(|(existing, _)| existing == gid) {
            return Some(sub);
        }
        if gid.is_root() && !self.cols.is_empty() && self.nested.is_empty() {
            return Some(self);
        }
        None
    }
}
