// SPDX-License-Identifier: Apache-2.0

use crate::decl::{bit, vector};
use crate::{Cell, Error, Library, PortClass, Result};

impl Library {
    /// One-bit full adder (A, B, Cin) -> (S, Cout), wired from two XOR, three
    /// AND and two OR gates:
    ///
    /// `S = A ^ B ^ Cin`, `Cout = AB + BCin + CinA`.
    pub fn full_adder(
        &self,
        name: impl AsRef<str>,
        a: impl Into<String>,
        b: impl Into<String>,
        cin: impl Into<String>,
        s: impl Into<String>,
        cout: impl Into<String>,
    ) -> Cell {
        let mut cell = Cell::new("FULL_ADDER", name).with_connections([
            a.into(),
            b.into(),
            cin.into(),
            s.into(),
            cout.into(),
        ]);

        cell.declare("A", PortClass::Input);
        cell.declare("B", PortClass::Input);
        cell.declare("Cin", PortClass::Input);
        cell.declare("S", PortClass::Output);
        cell.declare("Cout", PortClass::Output);

        // S
        cell.add_wire("temp_xor_1");
        cell.add_submodule(self.xor_gate("FA_XOR_1", "A", "B", "temp_xor_1"));
        cell.add_submodule(self.xor_gate("FA_XOR_2", "Cin", "temp_xor_1", "S"));

        // Cout
        for wire in ["temp_and_1", "temp_and_2", "temp_and_3", "temp_or_1"] {
            cell.add_wire(wire);
        }
        cell.add_submodule(self.and_gate("FA_AND_1", "A", "B", "temp_and_1"));
        cell.add_submodule(self.and_gate("FA_AND_2", "B", "Cin", "temp_and_2"));
        cell.add_submodule(self.and_gate("FA_AND_3", "Cin", "A", "temp_and_3"));
        cell.add_submodule(self.or_gate("FA_OR_1", "temp_and_1", "temp_and_2", "temp_or_1"));
        cell.add_submodule(self.or_gate("FA_OR_2", "temp_or_1", "temp_and_3", "Cout"));
        cell
    }

    /// `n_bits`-wide ripple-carry adder (A, B) -> out, a chain of full adders
    /// through an `n_bits + 1` bit carry wire whose bit 0 is tied to zero. The
    /// final carry is dropped.
    pub fn carry_ripple_adder(
        &self,
        name: impl AsRef<str>,
        a: impl Into<String>,
        b: impl Into<String>,
        out: impl Into<String>,
        n_bits: usize,
    ) -> Result<Cell> {
        if n_bits == 0 {
            return Err(Error::ZeroWidth);
        }
        let mut cell = Cell::new(format!("CARRY_RIPPLE_ADDER_{n_bits}_BIT"), name)
            .with_width(n_bits)
            .with_connections([a.into(), b.into(), out.into()]);

        cell.declare("A", PortClass::Input);
        cell.declare("B", PortClass::Input);
        cell.declare("out", PortClass::Output);

        let carry = "CRA_carry_wire";
        cell.add_wire(vector(n_bits + 1, carry));
        cell.verilog(format!("assign {} = 0;", bit(carry, 0)));

        for i in 0..n_bits {
            cell.add_submodule(self.full_adder(
                format!("CRA_FA_{i}"),
                bit("A", i),
                bit("B", i),
                bit(carry, i),
                bit("out", i),
                bit(carry, i + 1),
            ));
        }
        Ok(cell)
    }

    /// `n_bits`-wide carry-save adder (A, B, Cin) -> (SUM, Cout, Overflow):
    /// independent full adders per column. Column `i`'s carry lands in
    /// `Cout[i + 1]`, so `Cout[0]` is tied to zero and the top column's carry
    /// leaves through the scalar `Overflow` port.
    #[allow(clippy::too_many_arguments)]
    pub fn carry_save_adder(
        &self,
        name: impl AsRef<str>,
        a: impl Into<String>,
        b: impl Into<String>,
        cin: impl Into<String>,
        sum: impl Into<String>,
        cout: impl Into<String>,
        overflow: impl Into<String>,
        n_bits: usize,
    ) -> Result<Cell> {
        if n_bits == 0 {
            return Err(Error::ZeroWidth);
        }
        let mut cell = Cell::new(format!("CARRY_SAVE_ADDER_{n_bits}_BIT"), name)
            .with_width(n_bits)
            .with_connections([
                a.into(),
                b.into(),
                cin.into(),
                sum.into(),
                cout.into(),
                overflow.into(),
            ]);

        cell.declare("A", PortClass::Input);
        cell.declare("B", PortClass::Input);
        cell.declare("Cin", PortClass::Input);
        cell.declare("SUM", PortClass::Output);
        cell.declare("Cout", PortClass::Output);
        cell.declare_with_width("Overflow", PortClass::Output, 1);

        cell.verilog("assign Cout[0] = 0;");
        for i in 0..n_bits {
            let carry_out = if i + 1 == n_bits {
                "Overflow".to_string()
            } else {
                bit("Cout", i + 1)
            };
            cell.add_submodule(self.full_adder(
                format!("CSA_FA_{i}"),
                bit("A", i),
                bit("B", i),
                bit("Cin", i),
                bit("SUM", i),
                carry_out,
            ));
        }
        Ok(cell)
    }

    /// The carry-lookahead prefix operator over 2-bit states (kill = 00,
    /// propagate = 01, generate = 11):
    ///
    /// `S0 = CS1 | (PS0 & CS0)`, `S1 = CS1 | (PS1 & CS0)`.
    #[allow(clippy::too_many_arguments)]
    pub fn cla_star(
        &self,
        name: impl AsRef<str>,
        ps0: impl Into<String>,
        ps1: impl Into<String>,
        cs0: impl Into<String>,
        cs1: impl Into<String>,
        s0: impl Into<String>,
        s1: impl Into<String>,
    ) -> Cell {
        let mut cell = Cell::new("CLA_STAR", name).with_connections([
            ps0.into(),
            ps1.into(),
            cs0.into(),
            cs1.into(),
            s0.into(),
            s1.into(),
        ]);

        for port in ["PS0", "PS1", "CS0", "CS1"] {
            cell.declare(port, PortClass::Input);
        }
        cell.declare("S0", PortClass::Output);
        cell.declare("S1", PortClass::Output);

        cell.add_wire("temp_and_0");
        cell.add_wire("temp_and_1");
        cell.add_submodule(self.and_gate("CLA_STAR_and_0", "PS0", "CS0", "temp_and_0"));
        cell.add_submodule(self.and_gate("CLA_STAR_and_1", "PS1", "CS0", "temp_and_1"));
        cell.add_submodule(self.or_gate("CLA_STAR_or_0", "temp_and_0", "CS1", "S0"));
        cell.add_submodule(self.or_gate("CLA_STAR_or_1", "temp_and_1", "CS1", "S1"));
        cell
    }
}
