// SPDX-License-Identifier: Apache-2.0

use itertools::Itertools;

/// Whether a behavioural statement uses `=` or `<=`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assign {
    Blocking,
    NonBlocking,
}

impl Assign {
    fn operator(self) -> &'static str {
        match self {
            Assign::Blocking => " = ",
            Assign::NonBlocking => " <= ",
        }
    }
}

/// An `always @(...)` block: a sensitivity list followed by an ordered list
/// of assignments. Statements are opaque text and are not validated.
///
/// ```
/// use cellgen::{Assign, Behaviour};
///
/// let mut flop = Behaviour::new(["posedge clk"]);
/// flop.add("q", "#2 d", Assign::NonBlocking);
/// assert_eq!(flop.emit(), "always @(posedge clk)\nbegin\n\tq <= #2 d;\nend");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Behaviour {
    sensitivity: Vec<String>,
    statements: Vec<String>,
    transistors: usize,
}

impl Behaviour {
    /// Creates an empty block triggered by the given fragments, e.g.
    /// `posedge CLK` or a bare signal name.
    pub fn new<I, S>(sensitivity: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Behaviour {
            sensitivity: sensitivity.into_iter().map(Into::into).collect(),
            statements: Vec::new(),
            transistors: 0,
        }
    }

    /// Sets the transistor cost attributed to this block.
    pub fn with_transistors(mut self, transistors: usize) -> Self {
        self.transistors = transistors;
        self
    }

    /// Appends `lhs = rhs` or `lhs <= rhs`.
    pub fn add(&mut self, lhs: impl AsRef<str>, rhs: impl AsRef<str>, assign: Assign) {
        self.statements.push(format!(
            "{}{}{}",
            lhs.as_ref(),
            assign.operator(),
            rhs.as_ref()
        ));
    }

    pub fn transistors(&self) -> usize {
        self.transistors
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Renders the block. Triggers are joined with a literal ` or `.
    pub fn emit(&self) -> String {
        let mut code = format!("always @({})\nbegin", self.sensitivity.iter().join(" or "));
        for statement in &self.statements {
            code.push_str("\n\t");
            code.push_str(statement);
            code.push(';');
        }
        code.push_str("\nend");
        code
    }
}
