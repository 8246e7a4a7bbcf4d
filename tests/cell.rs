// SPDX-License-Identifier: Apache-2.0

use cellgen::*;

fn sample_cell() -> Cell {
    let lib = Library::default();
    let mut cell = Cell::new("TOP", "top").with_width(2);
    cell.declare("x", PortClass::Input);
    cell.declare_with_width("clk", PortClass::Input, 1);
    cell.declare("y", PortClass::Output);
    cell.add_wire("[1:0] t");
    cell.add_reg("r");
    cell.verilog("assign t = x;");
    cell.add_submodule(lib.not_gate_n_bit("inv", "t", "y", 2));

    let mut behaviour = Behaviour::new(["posedge clk"]).with_transistors(10);
    behaviour.add("r", "t[0]", Assign::NonBlocking);
    cell.add_submodule(behaviour);
    cell
}

#[test]
fn test_section_layout() {
    let cell = sample_cell();
    assert_eq!(
        cell.definition(),
        "\
module TOP (x, clk, y);
\t// Transistor count : 14

\t// Inputs

\tinput [1:0] x;
\tinput clk;

\t// Outputs

\toutput [1:0] y;

\t// Wires

\twire [1:0] t;

\t// Regs

\treg r;

\t// Extras

\tassign t = x;

\t// Sub Modules

\tNOT_GATE_2_BIT inv (t, y);

\t// Behaviours

\talways @(posedge clk)
\tbegin
\t\tr <= t[0];
\tend

endmodule"
    );
}

#[test]
fn test_introspection() {
    let cell = sample_cell();
    assert_eq!(cell.kind(), "TOP");
    assert_eq!(cell.name(), "top");
    assert_eq!(cell.n_bits(), 2);
    assert_eq!(cell.wires(), ["[1:0] t"]);
    assert_eq!(cell.regs(), ["r"]);
    assert_eq!(cell.extras(), ["assign t = x;"]);
    assert_eq!(cell.input_names(), ["x", "clk"]);
    assert_eq!(cell.output_names(), ["y"]);
    assert_eq!(cell.children().len(), 1);
    assert_eq!(cell.behaviours().len(), 1);

    assert_eq!(Cell::new("ONE", "one").n_bits(), 1);
}

#[test]
fn test_emit_all() {
    let cell = sample_cell();
    let inverter = Library::default().not_gate_n_bit("any", "a", "b", 2);
    assert_eq!(
        cell.emit_all(),
        format!(
            "\
// Generated code
// Structural Verilog emitted by cellgen
// Do not edit by hand

{}

{}
",
            inverter.definition(),
            cell.definition()
        )
    );
}

#[test]
fn test_emit_to_file() {
    let cell = sample_cell();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("top.v");
    cell.emit_to_file(&path).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        format!("{}\n", cell.emit_all())
    );

    let missing = dir.path().join("no_such_dir").join("top.v");
    assert!(matches!(cell.emit_to_file(&missing), Err(Error::Io(_))));
}

#[test]
fn test_definitions_deduplicated() {
    let lib = Library::default();
    let mut parent = Cell::new("PAIR", "pair");
    parent.add_submodule(lib.full_adder("fa_0", "a", "b", "c", "s0", "c0"));
    parent.add_submodule(lib.full_adder("fa_1", "d", "e", "f", "s1", "c1"));

    // PAIR, FULL_ADDER, AND_GATE, OR_GATE, XOR_GATE
    assert_eq!(parent.collect_definitions().len(), 5);
    assert_eq!(parent.emit_all().matches("module FULL_ADDER ").count(), 1);
    assert_eq!(parent.transistor_total(), 2 * 54);
}

#[test]
fn test_instance_names_do_not_affect_definition() {
    let lib = Library::default();
    let a = lib
        .carry_save_adder("first", "a", "b", "c", "d", "e", "f", 4)
        .unwrap();
    let b = lib
        .carry_save_adder("second", "p", "q", "r", "s", "t", "u", 4)
        .unwrap();
    assert_eq!(a.definition(), b.definition());
    assert_ne!(a.instance_statement(), b.instance_statement());
}

#[test]
fn test_transistor_additivity() {
    let lib = Library::default();
    let top = lib
        .wallace_tree_multiplier("wtm", "a", "b", "clk", "p", 4, 2)
        .unwrap();
    let children: usize = top.children().iter().map(Cell::transistor_total).sum();
    assert_eq!(top.transistor_total(), children);

    let cell = sample_cell();
    assert_eq!(cell.transistor_total(), 2 * 2 + 10);
}

#[test]
fn test_walk() {
    let cra = Library::default()
        .carry_ripple_adder("cra", "x", "y", "z", 2)
        .unwrap();
    let mut kinds = Vec::new();
    cra.walk(&mut |cell| kinds.push(cell.kind()));
    // the adder, then two full adders of eight cells each
    assert_eq!(kinds.len(), 1 + 2 * 8);
    assert_eq!(kinds[0], "CARRY_RIPPLE_ADDER_2_BIT");
    assert_eq!(kinds[1], "FULL_ADDER");
    assert_eq!(kinds[2], "XOR_GATE");
}

#[test]
fn test_validate_ok() {
    let lib = Library::default();
    sample_cell().validate().unwrap();
    lib.carry_ripple_adder("cra", "x", "y", "z", 8)
        .unwrap()
        .validate()
        .unwrap();
}

#[test]
fn test_validate_duplicate_instance() {
    let lib = Library::default();
    let mut parent = Cell::new("PARENT", "p");
    parent.add_submodule(lib.and_gate("g", "a", "b", "c"));
    parent.add_submodule(lib.or_gate("g", "a", "b", "d"));
    let err = parent.validate().unwrap_err();
    assert!(matches!(err, Error::DuplicateInstance { .. }));
    assert_eq!(
        err.to_string(),
        "instance g is declared more than once in module PARENT"
    );
}

#[test]
fn test_validate_conflicting_definition() {
    let mut first = Cell::new("X", "first");
    first.add_wire("p");
    let mut second = Cell::new("X", "second");
    second.add_wire("q");

    let mut parent = Cell::new("PARENT", "p");
    parent.add_submodule(first);
    parent.add_submodule(second);
    assert!(matches!(
        parent.validate(),
        Err(Error::ConflictingDefinition { kind }) if kind == "X"
    ));
}

#[test]
fn test_validate_port_count() {
    let mut child = Cell::new("CHILD", "c").with_connections(["only_one"]);
    child.declare("A", PortClass::Input);
    child.declare("B", PortClass::Output);

    let mut parent = Cell::new("PARENT", "p");
    parent.add_submodule(child);
    let err = parent.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "instance PARENT.c of CHILD connects 1 nets to 2 ports"
    );
}

#[test]
fn test_port_class_codes() {
    assert_eq!(PortClass::try_from(1).unwrap(), PortClass::Output);
    assert_eq!(PortClass::try_from(2).unwrap(), PortClass::InputReg);
    let err = PortClass::try_from(7).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid type for port: class code 7 is not one of 0..=3"
    );
}

#[test]
fn test_input_reg() {
    let mut cell = Cell::new("R", "r").with_width(3);
    cell.declare("d", PortClass::try_from(2).unwrap());
    cell.declare("q", PortClass::try_from(3).unwrap());
    let definition = cell.definition();
    assert!(definition.contains("\tinput reg [2:0] d;\n"));
    assert!(definition.contains("\toutput reg [2:0] q;\n"));
}
