// SPDX-License-Identifier: Apache-2.0

use crate::decl::{bit, range, vector};
use crate::library::prefix_levels;
use crate::{Cell, Error, Library, PortClass, Result};

const CARRY_FINAL: &str = "carry_final";
const XOR_TEMP: &str = "CLA_xor_temp_wire";

/// Number of register stages the pipelined adder inserts on its carry path
/// (and therefore on its sum path): one after every `k`-th prefix level,
/// excluding the last.
pub fn pipeline_stages(n_bits: usize, pipeline_k: usize) -> usize {
    prefix_levels(n_bits).saturating_sub(1) / pipeline_k
}

/// Name of the state wire at `level`, `bit`: `[1:0] s_level_<level>_bit_<bit>`.
fn state_wire(level: usize, bit: usize) -> String {
    format!("s_level_{level}_bit_{bit}")
}

impl Library {
    /// Parallel-prefix (Kogge-Stone style) carry-lookahead adder
    /// `CARRY_LOOK_AHEAD_ADDER_<n>_BIT` with ports (A, B) -> out.
    ///
    /// Each bit's final carry is routed into `carry_final` by the star node
    /// that completes its prefix, and aliased back into the state matrix with
    /// a `JOIN`.
    pub fn carry_look_ahead_adder(
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
        let mut cell = Cell::new(format!("CARRY_LOOK_AHEAD_ADDER_{n_bits}_BIT"), name)
            .with_width(n_bits)
            .with_connections([a.into(), b.into(), out.into()]);

        cell.declare("A", PortClass::Input);
        cell.declare("B", PortClass::Input);
        cell.declare("out", PortClass::Output);

        let levels = prefix_levels(n_bits);
        let mut matrix = self.prefix_matrix(&mut cell, n_bits, levels);
        log::debug!("{}: {} prefix levels", cell.kind(), levels);

        for level in 0..levels {
            let span = 1 << level;
            for i in 0..=n_bits {
                if i < span {
                    matrix[level + 1][i] = matrix[level][i].clone();
                    continue;
                }

                let state = state_wire(level + 1, i);
                cell.add_wire(vector(2, &state));
                matrix[level + 1][i] = state.clone();

                let prev = &matrix[level][i - span];
                let curr = &matrix[level][i];
                let star_name = format!("CLA_level_{}_bit_{}", level + 1, i);

                if 2 * span <= i {
                    cell.add_submodule(self.cla_star(
                        star_name,
                        bit(prev, 0),
                        bit(prev, 1),
                        bit(curr, 0),
                        bit(curr, 1),
                        bit(&state, 0),
                        bit(&state, 1),
                    ));
                } else {
                    // This bit's prefix is complete: its low state bit is the
                    // carry into column i.
                    let star = self.cla_star(
                        star_name,
                        bit(prev, 0),
                        bit(prev, 1),
                        bit(curr, 0),
                        bit(curr, 1),
                        bit(CARRY_FINAL, i),
                        bit(&state, 1),
                    );
                    cell.add_submodule(self.join(
                        format!("CLA_WIRE_JOINT_{}_bit_{}", level + 1, i),
                        bit(CARRY_FINAL, i),
                        bit(&state, 0),
                    ));
                    cell.add_submodule(star);
                }
            }
        }

        cell.add_wire(vector(n_bits, XOR_TEMP));
        cell.add_submodule(self.xor_gate_n_bit("CLA_XOR_1", "A", "B", XOR_TEMP, n_bits));
        cell.add_submodule(self.xor_gate_n_bit(
            "CLA_XOR_2",
            XOR_TEMP,
            range(CARRY_FINAL, n_bits - 1, 0),
            "out",
            n_bits,
        ));
        Ok(cell)
    }

    /// Pipelined carry-lookahead adder
    /// `CARRY_LOOK_AHEAD_ADDER_PIPELINED_<n>_BIT_<k>_PIPELINED` with ports
    /// (A, B, CLK) -> out.
    ///
    /// A 2-bit register is inserted on every state after each prefix level
    /// `l > 0` with `l % k == 0`. The `A ^ B` term passes through the same
    /// number of register banks before the final XOR, and the sum is
    /// registered once more onto `out`.
    #[allow(clippy::too_many_arguments)]
    pub fn carry_look_ahead_adder_pipelined(
        &self,
        name: impl AsRef<str>,
        a: impl Into<String>,
        b: impl Into<String>,
        clk: impl Into<String>,
        out: impl Into<String>,
        n_bits: usize,
        pipeline_k: usize,
    ) -> Result<Cell> {
        if n_bits == 0 {
            return Err(Error::ZeroWidth);
        }
        if pipeline_k == 0 {
            return Err(Error::ZeroPipelineDepth);
        }
        let mut cell = Cell::new(
            format!("CARRY_LOOK_AHEAD_ADDER_PIPELINED_{n_bits}_BIT_{pipeline_k}_PIPELINED"),
            name,
        )
        .with_width(n_bits)
        .with_connections([a.into(), b.into(), clk.into(), out.into()]);

        cell.declare("A", PortClass::Input);
        cell.declare("B", PortClass::Input);
        cell.declare_with_width("CLK", PortClass::Input, 1);
        cell.declare("out", PortClass::Output);

        let levels = prefix_levels(n_bits);
        let mut matrix = self.prefix_matrix(&mut cell, n_bits, levels);

        let mut num_stages = 0;
        for level in 0..levels {
            let register_level = level > 0 && level % pipeline_k == 0;
            if register_level {
                num_stages += 1;
            }

            let span = 1 << level;
            for i in 0..=n_bits {
                if i < span {
                    matrix[level + 1][i] = matrix[level][i].clone();
                } else {
                    let state = state_wire(level + 1, i);
                    cell.add_wire(vector(2, &state));
                    matrix[level + 1][i] = state.clone();

                    let prev = &matrix[level][i - span];
                    let curr = &matrix[level][i];
                    cell.add_submodule(self.cla_star(
                        format!("CLA_level_{}_bit_{}", level + 1, i),
                        bit(prev, 0),
                        bit(prev, 1),
                        bit(curr, 0),
                        bit(curr, 1),
                        bit(&state, 0),
                        bit(&state, 1),
                    ));
                }

                if register_level {
                    let flop_name = format!("CLA_STAR_PIPELINED_FLIPFLOP_LEVEL_{level}_BIT_{i}");
                    let flop_out = format!("{flop_name}_reg");
                    cell.add_wire(vector(2, &flop_out));
                    cell.add_submodule(self.flip_flop_n_bit(
                        &flop_name,
                        matrix[level + 1][i].clone(),
                        "CLK",
                        flop_out.clone(),
                        2,
                    ));
                    matrix[level + 1][i] = flop_out;
                }

                if level + 1 == levels {
                    cell.add_submodule(self.join(
                        format!("CLA_WIRE_JOINT_{}_bit_{}", level + 1, i),
                        bit(CARRY_FINAL, i),
                        bit(&matrix[level + 1][i], 0),
                    ));
                }
            }
        }
        log::debug!(
            "{}: {} prefix levels, {} pipeline stages",
            cell.kind(),
            levels,
            num_stages
        );

        // Delay A ^ B by as many stages as the carry path.
        cell.add_wire(vector(n_bits, XOR_TEMP));
        let xor_1 = self.xor_gate_n_bit("CLA_XOR_1", "A", "B", XOR_TEMP, n_bits);
        let mut delayed = XOR_TEMP.to_string();
        for stage in 0..num_stages {
            let stage_out = format!("{XOR_TEMP}_{stage}");
            cell.add_wire(vector(n_bits, &stage_out));
            cell.add_submodule(self.flip_flop_n_bit(
                format!("CLA_XOR_EMPTY_STAGE_{stage}"),
                delayed,
                "CLK",
                stage_out.clone(),
                n_bits,
            ));
            delayed = stage_out;
        }

        let final_output = "CLA_PIPELINE_FINAL";
        let xor_2 = self.xor_gate_n_bit(
            "CLA_XOR_2",
            delayed,
            range(CARRY_FINAL, n_bits - 1, 0),
            final_output,
            n_bits,
        );
        cell.add_wire(vector(n_bits, final_output));
        cell.add_submodule(xor_1);
        cell.add_submodule(xor_2);
        cell.add_submodule(self.flip_flop_n_bit(
            "CLA_PIPELINED_OUT",
            final_output,
            "CLK",
            "out",
            n_bits,
        ));
        Ok(cell)
    }

    /// Declares the level-0 generate/propagate states and `carry_final`,
    /// returning the `(levels + 1) x (n_bits + 1)` state matrix with row 0
    /// filled in. Bit 0 is the constant kill state.
    fn prefix_matrix(&self, cell: &mut Cell, n_bits: usize, levels: usize) -> Vec<Vec<String>> {
        let mut matrix = vec![vec![String::new(); n_bits + 1]; levels + 1];

        let kill = state_wire(0, 0);
        cell.add_wire(vector(2, &kill));
        cell.verilog(format!("assign {kill} = 0;"));
        matrix[0][0] = kill;

        for i in 1..=n_bits {
            let state = state_wire(0, i);
            cell.add_wire(vector(2, &state));
            cell.add_submodule(self.and_gate(
                format!("CLA_and_pre_bit_{i}"),
                bit("A", i - 1),
                bit("B", i - 1),
                bit(&state, 1),
            ));
            cell.add_submodule(self.or_gate(
                format!("CLA_or_pre_bit_{i}"),
                bit("A", i - 1),
                bit("B", i - 1),
                bit(&state, 0),
            ));
            matrix[0][i] = state;
        }

        cell.add_wire(vector(n_bits + 1, CARRY_FINAL));
        cell.verilog(format!("assign {} = 0;", bit(CARRY_FINAL, 0)));
        matrix
    }
}
