// SPDX-License-Identifier: Apache-2.0

use paste::paste;

use crate::{Cell, Library};

// Each two-input gate comes as a scalar `<KIND>` and a vector `<KIND>_<n>_BIT`
// primitive with ports (a, b, c).
macro_rules! binary_gates {
    ($($method:ident: $kind:literal, $timing:ident, $expr:literal;)*) => {
        paste! {
            impl Library {
                $(
                    /// Scalar gate primitive with ports (a, b, c).
                    pub fn $method(
                        &self,
                        name: impl AsRef<str>,
                        a: impl Into<String>,
                        b: impl Into<String>,
                        c: impl Into<String>,
                    ) -> Cell {
                        let timing = self.tech.$timing;
                        Cell::new($kind, name)
                            .with_transistors(timing.transistors)
                            .with_connections([a.into(), b.into(), c.into()])
                            .with_definition(format!(
                                "module {} (a, b, c);\n\tinput a, b;\n\toutput c;\n\tassign #{} c = {};\nendmodule",
                                $kind, timing.delay, $expr
                            ))
                    }

                    /// Bitwise gate over `n_bits`-wide vectors.
                    pub fn [<$method _n_bit>](
                        &self,
                        name: impl AsRef<str>,
                        a: impl Into<String>,
                        b: impl Into<String>,
                        c: impl Into<String>,
                        n_bits: usize,
                    ) -> Cell {
                        assert!(n_bits > 0, "{}_N_BIT {} must be at least 1 bit wide", $kind, name.as_ref());
                        let timing = self.tech.$timing;
                        let kind = format!("{}_{}_BIT", $kind, n_bits);
                        let definition = format!(
                            "module {kind} (a, b, c);\n\tinput [{msb}:0] a, b;\n\toutput [{msb}:0] c;\n\tassign #{delay} c = {expr};\nendmodule",
                            msb = n_bits - 1,
                            delay = timing.delay,
                            expr = $expr,
                        );
                        Cell::new(kind, name)
                            .with_width(n_bits)
                            .with_transistors(timing.transistors * n_bits)
                            .with_connections([a.into(), b.into(), c.into()])
                            .with_definition(definition)
                    }
                )*
            }
        }
    };
}

binary_gates! {
    and_gate: "AND_GATE", and, "a & b";
    or_gate: "OR_GATE", or, "a | b";
    xor_gate: "XOR_GATE", xor, "a ^ b";
    nand_gate: "NAND_GATE", nand, "~(a & b)";
    nor_gate: "NOR_GATE", nor, "~(a | b)";
}

impl Library {
    /// Scalar inverter with ports (in, out).
    pub fn not_gate(
        &self,
        name: impl AsRef<str>,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Cell {
        let timing = self.tech.not;
        Cell::new("NOT_GATE", name)
            .with_transistors(timing.transistors)
            .with_connections([input.into(), output.into()])
            .with_definition(format!(
                "module NOT_GATE (in, out);\n\tinput in;\n\toutput out;\n\tassign #{} out = ~in;\nendmodule",
                timing.delay
            ))
    }

    /// Bitwise inverter over `n_bits`-wide vectors.
    pub fn not_gate_n_bit(
        &self,
        name: impl AsRef<str>,
        input: impl Into<String>,
        output: impl Into<String>,
        n_bits: usize,
    ) -> Cell {
        assert!(
            n_bits > 0,
            "NOT_GATE_N_BIT {} must be at least 1 bit wide",
            name.as_ref()
        );
        let timing = self.tech.not;
        let kind = format!("NOT_GATE_{n_bits}_BIT");
        let definition = format!(
            "module {kind} (in, out);\n\tinput [{msb}:0] in;\n\toutput [{msb}:0] out;\n\tassign #{delay} out = ~in;\nendmodule",
            msb = n_bits - 1,
            delay = timing.delay,
        );
        Cell::new(kind, name)
            .with_width(n_bits)
            .with_transistors(timing.transistors * n_bits)
            .with_connections([input.into(), output.into()])
            .with_definition(definition)
    }
}
