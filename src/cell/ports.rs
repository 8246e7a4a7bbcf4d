// SPDX-License-Identifier: Apache-2.0

use crate::decl::{bare_name, port_prefix};
use crate::{Cell, Error};

/// Direction and storage class of a port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortClass {
    Input,
    Output,
    InputReg,
    OutputReg,
}

impl PortClass {
    fn is_input(self) -> bool {
        matches!(self, PortClass::Input | PortClass::InputReg)
    }

    fn is_reg(self) -> bool {
        matches!(self, PortClass::InputReg | PortClass::OutputReg)
    }
}

/// Converts the numeric class codes `0..=3` (input, output, input reg,
/// output reg).
impl TryFrom<u8> for PortClass {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(PortClass::Input),
            1 => Ok(PortClass::Output),
            2 => Ok(PortClass::InputReg),
            3 => Ok(PortClass::OutputReg),
            other => Err(Error::InvalidPortClass(other)),
        }
    }
}

/// A declared port: its body declaration (with width prefix) and whether it
/// is register-class.
#[derive(Clone, Debug)]
pub(crate) struct PortDecl {
    pub(crate) decl: String,
    pub(crate) reg: bool,
}

impl PortDecl {
    pub(crate) fn name(&self) -> &str {
        bare_name(&self.decl)
    }
}

impl Cell {
    /// Declares a port whose width is this cell's `n_bits`.
    pub fn declare(&mut self, name: impl AsRef<str>, class: PortClass) {
        self.declare_with_width(name, class, self.n_bits);
    }

    /// Declares a port with an explicit width. Width 1 renders as a bare
    /// declaration; wider ports get a `[w-1:0] ` prefix in the body.
    pub fn declare_with_width(&mut self, name: impl AsRef<str>, class: PortClass, width: usize) {
        let port = PortDecl {
            decl: format!("{}{}", port_prefix(width), name.as_ref()),
            reg: class.is_reg(),
        };
        if class.is_input() {
            self.inputs.push(port);
        } else {
            self.outputs.push(port);
        }
    }

    /// Returns the bare names of the input ports, in declaration order.
    pub fn input_names(&self) -> Vec<&str> {
        self.inputs.iter().map(PortDecl::name).collect()
    }

    /// Returns the bare names of the output ports, in declaration order.
    pub fn output_names(&self) -> Vec<&str> {
        self.outputs.iter().map(PortDecl::name).collect()
    }

    pub(crate) fn port_count(&self) -> usize {
        self.inputs.len() + self.outputs.len()
    }
}
