// SPDX-License-Identifier: Apache-2.0

use crate::{Cell, Library};

// Repeating the formal `a` and declaring it inout shorts both actuals
// together. Downstream tools must accept the duplicated port name.

impl Library {
    /// Aliases two scalar nets.
    pub fn join(&self, name: impl AsRef<str>, a: impl Into<String>, b: impl Into<String>) -> Cell {
        Cell::new("JOIN", name)
            .with_connections([a.into(), b.into()])
            .with_definition("module JOIN (a, a);\n\tinout a;\nendmodule")
    }

    /// Aliases two `n_bits`-wide nets, e.g. a part select of one wire with
    /// the whole of another.
    pub fn join_n_bit(
        &self,
        name: impl AsRef<str>,
        a: impl Into<String>,
        b: impl Into<String>,
        n_bits: usize,
    ) -> Cell {
        assert!(
            n_bits > 0,
            "JOIN_N_BIT {} must be at least 1 bit wide",
            name.as_ref()
        );
        let kind = format!("JOIN_{n_bits}_BIT");
        let definition = format!(
            "module {kind} (a, a);\n\tinout [{}:0] a;\nendmodule",
            n_bits - 1
        );
        Cell::new(kind, name)
            .with_width(n_bits)
            .with_connections([a.into(), b.into()])
            .with_definition(definition)
    }
}
