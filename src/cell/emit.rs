// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use indexmap::IndexSet;
use itertools::Itertools;

use crate::{Cell, Result};

const BANNER: &str = "\
// Generated code
// Structural Verilog emitted by cellgen
// Do not edit by hand
";

impl Cell {
    /// Writes the output of [`Cell::emit_all`] to the given file path,
    /// followed by a newline. The parent directory must already exist.
    pub fn emit_to_file(&self, path: &Path) -> Result<()> {
        let mut text = self.emit_all();
        text.push('\n');
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Returns Verilog for this cell and everything it instantiates: a banner
    /// comment followed by one definition per distinct module, in
    /// lexicographic order of the definition text.
    pub fn emit_all(&self) -> String {
        let mut code = BANNER.to_string();
        for definition in self.collect_definitions() {
            code.push('\n');
            code.push_str(&definition);
            code.push('\n');
        }
        code
    }

    /// Returns the distinct definitions reachable from this cell, sorted.
    pub fn collect_definitions(&self) -> Vec<String> {
        let mut definitions = IndexSet::new();
        self.collect_definitions_recursive(&mut definitions);
        log::debug!(
            "Collected {} distinct definitions under {}",
            definitions.len(),
            self.kind
        );
        definitions.sort();
        definitions.into_iter().collect()
    }

    fn collect_definitions_recursive(&self, definitions: &mut IndexSet<String>) {
        definitions.insert(self.definition());
        for child in &self.children {
            child.collect_definitions_recursive(definitions);
        }
    }

    /// Returns this cell's module definition: the hand-written text for
    /// primitives, otherwise the composed layout headed `module <kind>`.
    pub fn definition(&self) -> String {
        match &self.fixed_definition {
            Some(text) => text.clone(),
            None => self.emit_self(&format!("module {}", self.kind)),
        }
    }

    /// Returns the instantiation line used by a parent, e.g.
    /// `FULL_ADDER fa_0 (a[0], b[0], c[0], s[0], c[1]);`.
    pub fn instance_statement(&self) -> String {
        format!(
            "{} {} ({});",
            self.kind,
            self.name,
            self.connections.iter().join(", ")
        )
    }

    /// Renders the composed definition of this cell alone under the given
    /// header. Sections always appear in the order inputs, outputs, wires,
    /// regs, extras, sub modules, behaviours.
    pub fn emit_self(&self, header: &str) -> String {
        let port_names = self
            .inputs
            .iter()
            .chain(self.outputs.iter())
            .map(|port| port.name())
            .join(", ");

        let mut code = format!("{header} ({port_names});\n");
        code.push_str(&format!(
            "\t// Transistor count : {}\n",
            self.transistor_total()
        ));

        code.push_str("\n\t// Inputs\n\n");
        for port in &self.inputs {
            let keyword = if port.reg { "input reg" } else { "input" };
            code.push_str(&format!("\t{keyword} {};\n", port.decl));
        }

        code.push_str("\n\t// Outputs\n\n");
        for port in &self.outputs {
            let keyword = if port.reg { "output reg" } else { "output" };
            code.push_str(&format!("\t{keyword} {};\n", port.decl));
        }

        code.push_str("\n\t// Wires\n\n");
        for wire in &self.wires {
            code.push_str(&format!("\twire {wire};\n"));
        }

        code.push_str("\n\t// Regs\n\n");
        for reg in &self.regs {
            code.push_str(&format!("\treg {reg};\n"));
        }

        code.push_str("\n\t// Extras\n\n");
        for extra in &self.extras {
            code.push_str(&format!("\t{extra}\n"));
        }

        code.push_str("\n\t// Sub Modules\n\n");
        for child in &self.children {
            code.push_str(&format!("\t{}\n", child.instance_statement()));
        }

        code.push_str("\n\t// Behaviours\n\n");
        for behaviour in &self.behaviours {
            let block = behaviour.emit().replace('\n', "\n\t");
            code.push_str(&format!("\t{block}\n"));
        }

        code.push_str("\nendmodule");
        code
    }
}
