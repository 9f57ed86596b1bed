//! Aligned text rendering for any [`Grouping`].
//!
//! [`write`] emits a header line, then each group's rows in group order,
//! with a `-- /gid` separator line before each group when there is more
//! than one. Column widths are global (the widest header or formatted
//! cell across every group), numeric columns are right-justified, all
//! others left-justified, and columns are separated by a single space.
//! An empty grouping renders as zero bytes.

use std::io::{self, Write as IoWrite};

use crate::format::{format_value, DEFAULT_TEMPLATE};
use crate::group::GroupId;
use crate::table::Grouping;

/// One column's formatted cells for a single group.
type GroupCells = Vec<Vec<String>>;

/// Render `g` to `w`, one template per column in [`Grouping::columns`]
/// order.
///
/// Columns beyond the supplied templates default to `%v`. Sink errors
/// propagate immediately and abort the rest of the render.
pub fn write<G, W>(w: &mut W, g: &G, templates: &[&str]) -> io::Result<()>
where
    G: Grouping + ?Sized,
    W: IoWrite,
{
    let cols = match g.columns() {
        None => return Ok(()),
        Some(cols) => cols,
    };
    let gids = g.groups();

    // Format every cell first; widths and justification are global
    // across groups.
    let mut widths: Vec<usize> = cols.iter().map(String::len).collect();
    let mut numeric = vec![false; cols.len()];
    let mut body: Vec<(GroupId, GroupCells)> = Vec::with_capacity(gids.len());
    for gid in &gids {
        let sub = match g.table(gid) {
            Some(sub) => sub,
            None => continue,
        };
        let mut cells: GroupCells = Vec::with_capacity(cols.len());
        for (idx, name) in cols.iter().enumerate() {
            let template = templates.get(idx).copied().unwrap_or(DEFAULT_TEMPLATE);
            let mut formatted = Vec::with_capacity(sub.len());
            if let Some(data) = sub.column(name) {
                if data.is_numeric() {
                    numeric[idx] = true;
                }
                for cell in data.iter() {
                    let text = format_value(template, &cell);
                    widths[idx] = widths[idx].max(text.len());
                    formatted.push(text);
                }
            }
            cells.push(formatted);
        }
        body.push((gid.clone(), cells));
    }

    let header: Vec<&str> = cols.iter().map(String::as_str).collect();
    write_row(w, &header, &widths, &numeric)?;

    let annotate = gids.len() > 1;
    for (gid, cells) in &body {
        if annotate {
            writeln!(w, "-- {}", gid)?;
        }
        let rows = cells.first().map_or(0, Vec::len);
        for row in 0..rows {
            let line: Vec<&str> = cells
                .iter()
                .map(|col| col.get(row).map_or("", String::as_str))
                .collect();
            write_row(w, &line, &widths, &numeric)?;
        }
    }
    Ok(())
}

/// Render `g` to a `String`.
pub fn to_string<G: Grouping + ?Sized>(g: &G, templates: &[&str]) -> String {
    let mut buf = Vec::new();
    match write(&mut buf, g, templates) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        // Writes to a Vec are infallible.
        Err(_) => String::new(),
    }
}

/// Write one line of justified cells separated by single spaces.
/// Trailing padding after the last cell is trimmed.
fn write_row<W: IoWrite>(
    w: &mut W,
    cells: &[&str],
    widths: &[usize],
    numeric: &[bool],
) -> io::Result<()> {
    let mut line = String::new();
    for (idx, cell) in cells.iter().enumerate() {
        if idx > 0 {
            line.push(' ');
        }
        let width = widths.get(idx).copied().unwrap_or(0);
        let right = numeric.get(idx).copied().unwrap_or(false);
        if right {
            for _ in cell.len()..width {
                line.push(' ');
            }
            line.push_str(cell);
        } else {
            line.push_str(cell);
            for _ in cell.len()..width {
                line.push(' ');
            }
        }
    }
    writeln!(w, "{}", line.trim_end_matches(' '))
}
