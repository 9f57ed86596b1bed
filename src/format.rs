//! Printf-style cell templates.
//!
//! The renderer formats each cell by applying the column's template to
//! the cell value. Templates are a small printf subset: literal text
//! around one verb, `%%` for a literal percent. Supported verbs:
//!
//! - `%v` — the value's natural form (the per-column default)
//! - `%s` — string form
//! - `%d` — decimal integer
//! - `%x` / `%X` / `%o` / `%b` — integer bases; the `#` flag adds the
//!   `0x` / `0o` / `0b` prefix
//! - `%f` — fixed-point float, default six decimals
//!
//! A minimum width may precede the verb (`%8d`, right-padded with `%-8s`)
//! and floats take a precision (`%.2f`). Applying a verb to a value of an
//! incompatible type falls back to the value's natural form; a template
//! is never a source of errors.

use crate::column::Value;

/// The template applied to columns the caller supplied no template for.
pub const DEFAULT_TEMPLATE: &str = "%v";

/// Apply a printf-style template to one cell value.
///
/// Only the first verb is substituted; any later verb is kept as literal
/// text, since a template accepts exactly one value.
pub fn format_value(template: &str, value: &Value) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut chars = template.chars().peekable();
    let mut substituted = false;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        // Parse flags, width, and precision ahead of the verb.
        let mut alt = false;
        let mut left = false;
        let mut width = 0usize;
        let mut precision = None;
        let mut raw = String::from("%");
        while let Some(&flag) = chars.peek() {
            match flag {
                '#' => alt = true,
                '-' => left = true,
                _ => break,
            }
            raw.push(flag);
            chars.next();
        }
        while let Some(&digit) = chars.peek() {
            match digit.to_digit(10) {
                Some(d) => width = width * 10 + d as usize,
                None => break,
            }
            raw.push(digit);
            chars.next();
        }
        if chars.peek() == Some(&'.') {
            raw.push('.');
            chars.next();
            let mut prec = 0usize;
            while let Some(&digit) = chars.peek() {
                match digit.to_digit(10) {
                    Some(d) => prec = prec * 10 + d as usize,
                    None => break,
                }
                raw.push(digit);
                chars.next();
            }
            precision = Some(prec);
        }

        match chars.next() {
            Some(verb) if !substituted => {
                let cell = apply_verb(verb, alt, precision, value);
                out.push_str(&pad(&cell, width, left));
                substituted = true;
            }
            Some(verb) => {
                // A second verb has no value to consume; keep it literal.
                out.push_str(&raw);
                out.push(verb);
            }
            None => out.push_str(&raw),
        }
    }
    out
}

fn apply_verb(verb: char, alt: bool, precision: Option<usize>, value: &Value) -> String {
    match (verb, value) {
        ('d', Value::Int(i)) => i.to_string(),
        ('d', Value::Bool(b)) => (*b as i64).to_string(),
        ('x', Value::Int(i)) if alt => format!("{:#x}", i),
        ('x', Value::Int(i)) => format!("{:x}", i),
        ('X', Value::Int(i)) if alt => format!("{:#X}", i),
        ('X', Value::Int(i)) => format!("{:X}", i),
        ('o', Value::Int(i)) if alt => format!("{:#o}", i),
        ('o', Value::Int(i)) => format!("{:o}", i),
        ('b', Value::Int(i)) if alt => format!("{:#b}", i),
        ('b', Value::Int(i)) => format!("{:b}", i),
        ('f', Value::Float(x)) => format!("{:.*}", precision.unwrap_or(6), x),
        ('f', Value::Int(i)) => format!("{:.*}", precision.unwrap_or(6), *i as f64),
        ('v', Value::Float(x)) if precision.is_some() => {
            format!("{:.*}", precision.unwrap_or(0), x)
        }
        // %s, %v, and any type-incompatible verb: natural form.
        _ => value.to_string(),
    }
}

fn pad(cell: &str, width: usize, left: bool) -> String {
    if cell.len() >= width {
        return cell.to_string();
    }
    let fill = " ".repeat(width - cell.len());
    if left {
        format!("{}{}", cell, fill)
    } else {
        format!("{}{}", fill, cell)
    }
}
