//! # grouptable
//!
//! Immutable column-oriented tables with hierarchical row grouping and an
//! aligned text renderer.
//!
//! ## Overview
//!
//! A [`Table`] maps column names to equal-length typed columns and may be
//! partitioned into nested row groups, each named by a hierarchical
//! [`GroupId`]. Tables are persistent values: every mutating-looking
//! operation ([`Table::add`], [`Table::add_table`]) returns a new table
//! and leaves the receiver untouched, sharing unchanged columns and
//! sub-tables by reference.
//!
//! The read-only surface is the [`Grouping`] trait; [`group_by`]
//! repartitions any grouping by the distinct values of one column, and
//! [`render`] prints any grouping as aligned, justified text with group
//! annotations.
//!
//! ## Example
//!
//! ```rust
//! use grouptable::{group_by, render, Table};
//!
//! let tab = Table::new()
//!     .add("name", vec!["Washington", "Adams", "Jefferson"]).unwrap()
//!     .add("terms", vec![2, 1, 2]).unwrap()
//!     .add("state", vec!["Virginia", "Massachusetts", "Virginia"]).unwrap();
//!
//! // Numeric columns right-justify; widths fit the widest cell.
//! let text = render::to_string(&tab, &[]);
//! assert!(text.starts_with("name       terms state\n"));
//!
//! // Partition by state: groups appear in order of first appearance.
//! let by_state = group_by(&tab, "state").unwrap();
//! let text = render::to_string(&by_state, &[]);
//! assert!(text.contains("-- /0\n"));
//! ```

pub mod column;
pub mod error;
pub mod format;
pub mod group;
pub mod groupby;
pub mod render;
pub mod table;

pub use column::{ColumnData, Value};
pub use error::TableError;
pub use format::format_value;
pub use group::GroupId;
pub use groupby::{group_by, GroupedTable};
pub use table::{Grouping, Table};

/// Result type for grouptable operations
pub type Result<T> = std::result::Result<T, TableError>;
