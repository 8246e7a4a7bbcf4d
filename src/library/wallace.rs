// SPDX-License-Identifier: Apache-2.0

use itertools::Itertools;

use crate::decl::{bit, range, vector};
use crate::{Cell, Error, Library, PortClass, Result};

/// A partial-product operand: the vector `wire`, `length` bits wide, placed
/// `shift` columns to the left. Column `c` of the operand holds
/// `wire[c - shift]` for `shift <= c < shift + length`, zero elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slice {
    pub wire: String,
    pub shift: usize,
    pub length: usize,
}

impl Slice {
    /// One past the most significant occupied column.
    pub fn end(&self) -> usize {
        self.shift + self.length
    }
}

impl Library {
    /// Pipelined Wallace tree multiplier `WALLACE_TREE_MULTIPLIER_<n>_BIT`
    /// with ports (A, B, CLK) -> P, where `P` is `2 * n_bits` wide.
    ///
    /// Partial products are reduced three at a time through carry-save adders
    /// until two remain; every `pipeline_k`-th reduction level registers all
    /// surviving operands. The last two operands are summed by a pipelined
    /// carry-lookahead adder whose registered output drives `P`.
    #[allow(clippy::too_many_arguments)]
    pub fn wallace_tree_multiplier(
        &self,
        name: impl AsRef<str>,
        a: impl Into<String>,
        b: impl Into<String>,
        clk: impl Into<String>,
        product: impl Into<String>,
        n_bits: usize,
        pipeline_k: usize,
    ) -> Result<Cell> {
        if n_bits == 0 {
            return Err(Error::ZeroWidth);
        }
        if pipeline_k == 0 {
            return Err(Error::ZeroPipelineDepth);
        }
        let mut cell = Cell::new(format!("WALLACE_TREE_MULTIPLIER_{n_bits}_BIT"), name)
            .with_width(n_bits)
            .with_connections([a.into(), b.into(), clk.into(), product.into()]);

        cell.declare("A", PortClass::Input);
        cell.declare("B", PortClass::Input);
        cell.declare_with_width("CLK", PortClass::Input, 1);
        cell.declare_with_width("P", PortClass::Output, 2 * n_bits);

        let mut slices = self.partial_products(&mut cell, n_bits);

        let mut level = 1;
        while slices.len() > 2 {
            let mut next = Vec::with_capacity(slices.len());
            let mut triples = slices.iter().tuples::<(_, _, _)>();
            for (group, (w1, w2, w3)) in triples.by_ref().enumerate() {
                let (sum, carry) = self.reduce_triple(
                    &mut cell,
                    &format!("WTM_LEVEL_{level}_GROUP_{group}"),
                    [w1, w2, w3],
                )?;
                next.push(sum);
                next.push(carry);
            }
            next.extend(triples.into_buffer().cloned());
            slices = next;

            if level % pipeline_k == 0 {
                self.register_slices(&mut cell, level, &mut slices);
            }
            log::debug!(
                "{}: reduction level {} leaves {} operands",
                cell.kind(),
                level,
                slices.len()
            );
            level += 1;
        }

        self.final_addition(&mut cell, &slices, n_bits, pipeline_k)?;
        Ok(cell)
    }

    /// Level 0: `pp[j][i] = A[i] & B[j]`, one `n_bits`-wide operand per bit
    /// of `B`, shifted by `j`.
    fn partial_products(&self, cell: &mut Cell, n_bits: usize) -> Vec<Slice> {
        (0..n_bits)
            .map(|j| {
                let wire = format!("WTM_PP_0_{j}");
                cell.add_wire(vector(n_bits, &wire));
                for i in 0..n_bits {
                    cell.add_submodule(self.and_gate(
                        format!("WTM_PP_AND_{j}_{i}"),
                        bit("A", i),
                        bit("B", j),
                        bit(&wire, i),
                    ));
                }
                Slice {
                    wire,
                    shift: j,
                    length: n_bits,
                }
            })
            .collect()
    }

    /// Aligns three operands onto a common column range and adds them with a
    /// carry-save adder, returning the (sum, carry) operands.
    fn reduce_triple(
        &self,
        cell: &mut Cell,
        name: &str,
        slices: [&Slice; 3],
    ) -> Result<(Slice, Slice)> {
        let new_shift = slices.iter().map(|s| s.shift).min().unwrap_or_default();
        let top = slices.iter().map(|s| s.end()).max().unwrap_or_default();
        let new_width = top - new_shift;

        let inputs = [1, 2, 3].map(|k| format!("{name}_WIRE_{k}"));
        for input in &inputs {
            cell.add_wire(vector(new_width, input));
        }

        for (k, (slice, input)) in slices.iter().zip(&inputs).enumerate() {
            cell.add_submodule(self.join_n_bit(
                format!("{name}_JOIN_{}", k + 1),
                range(input, slice.end() - new_shift - 1, slice.shift - new_shift),
                &slice.wire,
                slice.length,
            ));
        }

        // zero-pad below and above each operand
        for (slice, input) in slices.iter().zip(&inputs) {
            if slice.shift > new_shift {
                cell.verilog(format!(
                    "assign {} = 0;",
                    range(input, slice.shift - new_shift - 1, 0)
                ));
            }
        }
        for (slice, input) in slices.iter().zip(&inputs) {
            if slice.end() - new_shift < new_width {
                cell.verilog(format!(
                    "assign {} = 0;",
                    range(input, new_width - 1, slice.end() - new_shift)
                ));
            }
        }

        let sum = Slice {
            wire: format!("{name}_SUM_WIRE"),
            shift: new_shift,
            length: new_width,
        };
        let carry_wire = format!("{name}_CARRY_WIRE");
        let [a, b, cin] = inputs;

        let ends = slices.map(Slice::end);
        let tied = ends.iter().sorted().rev().take(2).all_equal();
        log::trace!("{name}: columns {new_shift}..{top}, overflow kept: {tied}");
        let carry = if tied {
            // The top column may carry out: keep the overflow bit.
            cell.add_submodule(self.carry_save_adder(
                format!("{name}_CSA"),
                a,
                b,
                cin,
                sum.wire.clone(),
                range(&carry_wire, new_width - 1, 0),
                bit(&carry_wire, new_width),
                new_width,
            )?);
            Slice {
                wire: carry_wire,
                shift: new_shift,
                length: new_width + 1,
            }
        } else {
            let dangle = format!("{name}_DANGLE");
            cell.add_wire(dangle.clone());
            cell.add_submodule(self.carry_save_adder(
                format!("{name}_CSA"),
                a,
                b,
                cin,
                sum.wire.clone(),
                carry_wire.clone(),
                dangle,
                new_width,
            )?);
            Slice {
                wire: carry_wire,
                shift: new_shift,
                length: new_width,
            }
        };

        cell.add_wire(vector(sum.length, &sum.wire));
        cell.add_wire(vector(carry.length, &carry.wire));
        Ok((sum, carry))
    }

    /// Passes every operand through a register bank of its own width.
    fn register_slices(&self, cell: &mut Cell, level: usize, slices: &mut [Slice]) {
        for (i, slice) in slices.iter_mut().enumerate() {
            let flop_name = format!("WTM_LEVEL_{level}_FLIP_FLOP_{i}");
            let flop_out = format!("{flop_name}_WIRE");
            cell.add_wire(vector(slice.length, &flop_out));
            cell.add_submodule(self.flip_flop_n_bit(
                &flop_name,
                slice.wire.clone(),
                "CLK",
                flop_out.clone(),
                slice.length,
            ));
            slice.wire = flop_out;
        }
    }

    /// Widens the remaining operands to `2 * n_bits` and sums them into `P`.
    /// With a single operand (`n_bits == 1`) the second addend is zero.
    fn final_addition(
        &self,
        cell: &mut Cell,
        slices: &[Slice],
        n_bits: usize,
        pipeline_k: usize,
    ) -> Result<()> {
        let width = 2 * n_bits;
        let finals = ["WTM_FINAL_1", "WTM_FINAL_2"];
        for wire in finals {
            cell.add_wire(vector(width, wire));
        }

        for (slice, wire) in slices.iter().zip(finals) {
            if slice.shift > 0 {
                cell.verilog(format!("assign {} = 0;", range(wire, slice.shift - 1, 0)));
            }
        }
        for (slice, wire) in slices.iter().zip(finals) {
            if slice.length < width {
                cell.verilog(format!(
                    "assign {} = 0;",
                    range(wire, width - 1, slice.length)
                ));
            }
        }
        for wire in finals.iter().skip(slices.len()) {
            cell.verilog(format!("assign {wire} = 0;"));
        }

        for (k, (slice, wire)) in slices.iter().zip(finals).enumerate() {
            let joined = slice.length.min(width);
            cell.add_submodule(self.join_n_bit(
                format!("WTM_FINAL_JOINT_{}", k + 1),
                range(wire, (slice.end() - 1).min(width - 1), slice.shift),
                range(&slice.wire, joined - 1, 0),
                joined,
            ));
        }

        // The adder registers its own output, which drives P directly.
        cell.add_submodule(self.carry_look_ahead_adder_pipelined(
            "WTM_CLA",
            finals[0],
            finals[1],
            "CLK",
            "P",
            width,
            pipeline_k,
        )?);
        Ok(())
    }
}
