// SPDX-License-Identifier: Apache-2.0

//! Helpers for the textual net declarations cells are built from.
//!
//! Ports, wires and regs are stored as declaration fragments of the form
//! `[hi:lo] name` (vectors) or `name` (scalars).

const RANGE_DELIMITER: &str = "] ";

/// Strips an optional leading `[hi:lo] ` prefix from a declaration, returning
/// the bare identifier. Strings without a `"] "` delimiter are returned
/// unchanged.
///
/// ```
/// assert_eq!(cellgen::bare_name("[7:0] sum"), "sum");
/// assert_eq!(cellgen::bare_name("carry"), "carry");
/// ```
pub fn bare_name(decl: &str) -> &str {
    match decl.find(RANGE_DELIMITER) {
        Some(index) => &decl[index + RANGE_DELIMITER.len()..],
        None => decl,
    }
}

/// Width prefix used for port declarations: empty for scalar ports.
pub(crate) fn port_prefix(width: usize) -> String {
    if width > 1 {
        format!("[{}:0] ", width - 1)
    } else {
        String::new()
    }
}

/// Declaration of a `width`-bit vector. Always bracketed, so that bit-selects
/// stay legal even when `width` is 1.
pub fn vector(width: usize, name: impl AsRef<str>) -> String {
    assert!(width > 0, "Vector {} must be at least 1 bit wide", name.as_ref());
    format!("[{}:0] {}", width - 1, name.as_ref())
}

/// Single-bit select, `name[index]`.
pub fn bit(name: impl AsRef<str>, index: usize) -> String {
    format!("{}[{}]", name.as_ref(), index)
}

/// Part select, `name[msb:lsb]`.
pub fn range(name: impl AsRef<str>, msb: usize, lsb: usize) -> String {
    format!("{}[{}:{}]", name.as_ref(), msb, lsb)
}
