// SPDX-License-Identifier: Apache-2.0

use cellgen::*;

#[test]
fn test_gate_definitions() {
    let lib = Library::default();
    assert_eq!(
        lib.and_gate("g", "x", "y", "z").definition(),
        "module AND_GATE (a, b, c);\n\tinput a, b;\n\toutput c;\n\tassign #2 c = a & b;\nendmodule"
    );
    assert_eq!(
        lib.nor_gate("g", "x", "y", "z").definition(),
        "module NOR_GATE (a, b, c);\n\tinput a, b;\n\toutput c;\n\tassign #1 c = ~(a | b);\nendmodule"
    );
    assert_eq!(
        lib.xor_gate_n_bit("g", "x", "y", "z", 4).definition(),
        "module XOR_GATE_4_BIT (a, b, c);\n\tinput [3:0] a, b;\n\toutput [3:0] c;\n\tassign #3 c = a ^ b;\nendmodule"
    );
    assert_eq!(
        lib.not_gate("g", "x", "y").definition(),
        "module NOT_GATE (in, out);\n\tinput in;\n\toutput out;\n\tassign #1 out = ~in;\nendmodule"
    );
}

#[test]
fn test_gate_instances() {
    let lib = Library::default();
    let gate = lib.or_gate_n_bit("my_or", "x[3:0]", "y", "z", 4);
    assert!(gate.is_primitive());
    assert_eq!(gate.kind(), "OR_GATE_4_BIT");
    assert_eq!(gate.instance_statement(), "OR_GATE_4_BIT my_or (x[3:0], y, z);");
    assert_eq!(gate.transistor_total(), 24);
    assert_eq!(lib.nand_gate("n", "a", "b", "c").transistor_total(), 4);
    assert_eq!(lib.not_gate_n_bit("n", "a", "b", 3).transistor_total(), 6);
}

#[test]
fn test_join() {
    let lib = Library::default();
    let join = lib.join("j", "x[1]", "y");
    assert_eq!(join.definition(), "module JOIN (a, a);\n\tinout a;\nendmodule");
    assert_eq!(join.instance_statement(), "JOIN j (x[1], y);");
    assert_eq!(join.transistor_total(), 0);

    let join = lib.join_n_bit("j", "x[7:4]", "y", 4);
    assert_eq!(join.kind(), "JOIN_4_BIT");
    assert_eq!(
        join.definition(),
        "module JOIN_4_BIT (a, a);\n\tinout [3:0] a;\nendmodule"
    );
}

#[test]
#[should_panic(expected = "JOIN_N_BIT j must be at least 1 bit wide")]
fn test_zero_width_join() {
    Library::default().join_n_bit("j", "a", "b", 0);
}

#[test]
fn test_full_adder() {
    let fa = Library::default().full_adder("fa", "x", "y", "ci", "s", "co");
    assert_eq!(fa.instance_statement(), "FULL_ADDER fa (x, y, ci, s, co);");
    assert_eq!(
        fa.definition(),
        "\
module FULL_ADDER (A, B, Cin, S, Cout);
\t// Transistor count : 54

\t// Inputs

\tinput A;
\tinput B;
\tinput Cin;

\t// Outputs

\toutput S;
\toutput Cout;

\t// Wires

\twire temp_xor_1;
\twire temp_and_1;
\twire temp_and_2;
\twire temp_and_3;
\twire temp_or_1;

\t// Regs


\t// Extras


\t// Sub Modules

\tXOR_GATE FA_XOR_1 (A, B, temp_xor_1);
\tXOR_GATE FA_XOR_2 (Cin, temp_xor_1, S);
\tAND_GATE FA_AND_1 (A, B, temp_and_1);
\tAND_GATE FA_AND_2 (B, Cin, temp_and_2);
\tAND_GATE FA_AND_3 (Cin, A, temp_and_3);
\tOR_GATE FA_OR_1 (temp_and_1, temp_and_2, temp_or_1);
\tOR_GATE FA_OR_2 (temp_or_1, temp_and_3, Cout);

\t// Behaviours


endmodule"
    );
}

#[test]
fn test_flip_flop() {
    let ff = Library::default().flip_flop("ff", "d", "clk", "q");
    assert_eq!(
        ff.definition(),
        "\
module FLIP_FLOP (A, CLK, OUT);
\t// Transistor count : 24

\t// Inputs

\tinput A;
\tinput CLK;

\t// Outputs

\toutput reg OUT;

\t// Wires


\t// Regs


\t// Extras


\t// Sub Modules


\t// Behaviours

\talways @(posedge CLK)
\tbegin
\t\tOUT <= #3 A;
\tend

endmodule"
    );
}

#[test]
fn test_flip_flop_n_bit() {
    let ff = Library::default().flip_flop_n_bit("ff", "d", "clk", "q", 4);
    assert_eq!(ff.kind(), "FLIP_FLOP_4_BIT");
    assert_eq!(ff.input_names(), ["A", "CLK"]);
    assert_eq!(ff.transistor_total(), 96);
    let definition = ff.definition();
    assert!(definition.contains("\tinput [3:0] A;\n\tinput CLK;\n"));
    assert!(definition.contains("\toutput reg [3:0] OUT;\n"));
    assert_eq!(ff.behaviours()[0].statements(), ["OUT <= #3 A"]);
}

#[test]
fn test_carry_ripple_adder() {
    let cra = Library::default()
        .carry_ripple_adder("cra", "x", "y", "z", 4)
        .unwrap();
    assert_eq!(cra.kind(), "CARRY_RIPPLE_ADDER_4_BIT");
    assert_eq!(cra.instances_of("FULL_ADDER").count(), 4);
    assert_eq!(cra.wires(), ["[4:0] CRA_carry_wire"]);
    assert_eq!(cra.extras(), ["assign CRA_carry_wire[0] = 0;"]);
    assert_eq!(cra.transistor_total(), 4 * 54);
    assert_eq!(
        cra.get_instance("CRA_FA_3").unwrap().instance_statement(),
        "FULL_ADDER CRA_FA_3 (A[3], B[3], CRA_carry_wire[3], out[3], CRA_carry_wire[4]);"
    );

    let definitions = cra.collect_definitions();
    let headers: Vec<&str> = definitions
        .iter()
        .map(|d| d.lines().next().unwrap())
        .collect();
    assert_eq!(
        headers,
        [
            "module AND_GATE (a, b, c);",
            "module CARRY_RIPPLE_ADDER_4_BIT (A, B, out);",
            "module FULL_ADDER (A, B, Cin, S, Cout);",
            "module OR_GATE (a, b, c);",
            "module XOR_GATE (a, b, c);",
        ]
    );
}

#[test]
fn test_carry_save_adder() {
    let csa = Library::default()
        .carry_save_adder("csa", "x", "y", "z", "s", "c", "o", 3)
        .unwrap();
    assert_eq!(csa.kind(), "CARRY_SAVE_ADDER_3_BIT");
    assert_eq!(csa.input_names(), ["A", "B", "Cin"]);
    assert_eq!(csa.output_names(), ["SUM", "Cout", "Overflow"]);
    assert_eq!(csa.extras(), ["assign Cout[0] = 0;"]);

    let definition = csa.definition();
    assert!(definition.contains("\toutput [2:0] SUM;\n\toutput [2:0] Cout;\n\toutput Overflow;\n"));
    assert!(definition.contains("\tFULL_ADDER CSA_FA_0 (A[0], B[0], Cin[0], SUM[0], Cout[1]);\n"));
    assert!(definition.contains("\tFULL_ADDER CSA_FA_2 (A[2], B[2], Cin[2], SUM[2], Overflow);\n"));
}

#[test]
fn test_zero_width_adders() {
    let lib = Library::default();
    assert!(matches!(
        lib.carry_ripple_adder("cra", "x", "y", "z", 0),
        Err(Error::ZeroWidth)
    ));
    assert!(matches!(
        lib.carry_save_adder("csa", "x", "y", "z", "s", "c", "o", 0),
        Err(Error::ZeroWidth)
    ));
}

#[test]
fn test_cla_star() {
    let star = Library::default().cla_star("st", "p0", "p1", "c0", "c1", "s0", "s1");
    assert_eq!(star.transistor_total(), 24);
    let lines: Vec<String> = star.children().iter().map(Cell::instance_statement).collect();
    assert_eq!(
        lines,
        [
            "AND_GATE CLA_STAR_and_0 (PS0, CS0, temp_and_0);",
            "AND_GATE CLA_STAR_and_1 (PS1, CS0, temp_and_1);",
            "OR_GATE CLA_STAR_or_0 (temp_and_0, CS1, S0);",
            "OR_GATE CLA_STAR_or_1 (temp_and_1, CS1, S1);",
        ]
    );
}

#[test]
fn test_custom_technology() {
    let lib = Library::new(Technology {
        and: GateTiming::new(5, 8),
        ..Default::default()
    });
    assert!(lib.and_gate("g", "a", "b", "c").definition().contains("assign #5 c = a & b;"));
    // two XOR, three AND, two OR
    let fa = lib.full_adder("fa", "a", "b", "c", "s", "co");
    assert_eq!(fa.transistor_total(), 2 * 12 + 3 * 8 + 2 * 6);
    assert_eq!(lib.tech().flip_flop, GateTiming::new(3, 24));
}
