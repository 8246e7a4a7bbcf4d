// SPDX-License-Identifier: Apache-2.0

use crate::Behaviour;

mod emit;
mod hierarchy;
mod ports;
mod validate;

pub use hierarchy::Submodule;
pub use ports::PortClass;
pub(crate) use ports::PortDecl;

/// A structural module under construction, like `module <kind> ... endmodule`
/// in Verilog, together with the connections used when it is instantiated in
/// a parent.
///
/// Everything that ends up in the definition (ports, wires, regs, extras,
/// children and behaviours) must be derived from the kind's parameters only;
/// the instance name and connections only affect the parent's instantiation
/// line.
#[derive(Clone, Debug)]
pub struct Cell {
    pub(crate) kind: String,
    pub(crate) name: String,
    pub(crate) n_bits: usize,
    pub(crate) connections: Vec<String>,
    pub(crate) inputs: Vec<PortDecl>,
    pub(crate) outputs: Vec<PortDecl>,
    pub(crate) wires: Vec<String>,
    pub(crate) regs: Vec<String>,
    pub(crate) extras: Vec<String>,
    pub(crate) children: Vec<Cell>,
    pub(crate) behaviours: Vec<Behaviour>,
    pub(crate) transistors: usize,
    /// Hand-written definition text; when set, the composed sections are not
    /// used to render the definition.
    pub(crate) fixed_definition: Option<String>,
}

impl Cell {
    /// Creates an empty, 1-bit cell of the given kind (module name) that will
    /// be instantiated as `name`.
    pub fn new(kind: impl AsRef<str>, name: impl AsRef<str>) -> Cell {
        Cell {
            kind: kind.as_ref().to_string(),
            name: name.as_ref().to_string(),
            n_bits: 1,
            connections: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            wires: Vec::new(),
            regs: Vec::new(),
            extras: Vec::new(),
            children: Vec::new(),
            behaviours: Vec::new(),
            transistors: 0,
            fixed_definition: None,
        }
    }

    /// Sets the nominal bit width inherited by ports declared without an
    /// explicit width.
    pub fn with_width(mut self, n_bits: usize) -> Self {
        self.n_bits = n_bits;
        self
    }

    /// Sets the nets connected to this cell's ports, in port order, when it is
    /// instantiated.
    pub fn with_connections<I, S>(mut self, nets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connections = nets.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the transistor cost of this cell itself, excluding children and
    /// behaviours.
    pub fn with_transistors(mut self, transistors: usize) -> Self {
        self.transistors = transistors;
        self
    }

    /// Uses `text` verbatim as this cell's definition.
    pub fn with_definition(mut self, text: impl Into<String>) -> Self {
        self.fixed_definition = Some(text.into());
        self
    }

    /// Returns the module name of this cell.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the instance name used in the parent's instantiation line.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn n_bits(&self) -> usize {
        self.n_bits
    }

    pub fn connections(&self) -> &[String] {
        &self.connections
    }

    pub fn wires(&self) -> &[String] {
        &self.wires
    }

    pub fn regs(&self) -> &[String] {
        &self.regs
    }

    /// Returns the raw Verilog fragments embedded with [`Cell::verilog`].
    pub fn extras(&self) -> &[String] {
        &self.extras
    }

    pub fn behaviours(&self) -> &[Behaviour] {
        &self.behaviours
    }

    /// Returns `true` if the definition is hand-written rather than composed.
    pub fn is_primitive(&self) -> bool {
        self.fixed_definition.is_some()
    }

    /// Appends a local wire declaration, e.g. `[3:0] carry`.
    pub fn add_wire(&mut self, decl: impl Into<String>) {
        self.wires.push(decl.into());
    }

    /// Appends a local register declaration.
    pub fn add_reg(&mut self, decl: impl Into<String>) {
        self.regs.push(decl.into());
    }

    /// Embeds a raw Verilog fragment, e.g. `assign x[0] = 0;`. The fragment is
    /// not checked.
    pub fn verilog(&mut self, fragment: impl Into<String>) {
        self.extras.push(fragment.into());
    }
}
