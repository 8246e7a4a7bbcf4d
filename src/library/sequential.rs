// SPDX-License-Identifier: Apache-2.0

use crate::{Assign, Behaviour, Cell, Library, PortClass};

impl Library {
    /// Positive-edge D flip-flop with ports (A, CLK, OUT). `OUT` is a scalar
    /// register even when the instance drives a wider net.
    pub fn flip_flop(
        &self,
        name: impl AsRef<str>,
        a: impl Into<String>,
        clk: impl Into<String>,
        out: impl Into<String>,
    ) -> Cell {
        let mut cell =
            Cell::new("FLIP_FLOP", name).with_connections([a.into(), clk.into(), out.into()]);

        cell.declare("A", PortClass::Input);
        cell.declare("CLK", PortClass::Input);
        cell.declare("OUT", PortClass::OutputReg);
        cell.add_submodule(self.register_behaviour(1));
        cell
    }

    /// `n_bits`-wide register bank with ports (A, CLK, OUT), clocked on the
    /// rising edge of the scalar `CLK`.
    pub fn flip_flop_n_bit(
        &self,
        name: impl AsRef<str>,
        a: impl Into<String>,
        clk: impl Into<String>,
        out: impl Into<String>,
        n_bits: usize,
    ) -> Cell {
        assert!(
            n_bits > 0,
            "FLIP_FLOP_N_BIT {} must be at least 1 bit wide",
            name.as_ref()
        );
        let mut cell = Cell::new(format!("FLIP_FLOP_{n_bits}_BIT"), name)
            .with_width(n_bits)
            .with_connections([a.into(), clk.into(), out.into()]);

        cell.declare("A", PortClass::Input);
        cell.declare_with_width("CLK", PortClass::Input, 1);
        cell.declare("OUT", PortClass::OutputReg);
        cell.add_submodule(self.register_behaviour(n_bits));
        cell
    }

    fn register_behaviour(&self, n_bits: usize) -> Behaviour {
        let timing = self.tech.flip_flop;
        let mut behaviour =
            Behaviour::new(["posedge CLK"]).with_transistors(timing.transistors * n_bits);
        behaviour.add("OUT", format!("#{} A", timing.delay), Assign::NonBlocking);
        behaviour
    }
}
