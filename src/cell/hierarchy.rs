// SPDX-License-Identifier: Apache-2.0

use crate::{Behaviour, Cell};

/// Something that can be attached to a cell with [`Cell::add_submodule`]:
/// either a child cell instantiation or a behavioural block.
#[derive(Clone, Debug)]
pub enum Submodule {
    Cell(Cell),
    Behaviour(Behaviour),
}

impl From<Cell> for Submodule {
    fn from(cell: Cell) -> Self {
        Submodule::Cell(cell)
    }
}

impl From<Behaviour> for Submodule {
    fn from(behaviour: Behaviour) -> Self {
        Submodule::Behaviour(behaviour)
    }
}

impl Cell {
    /// Takes ownership of a child cell (recorded as an instantiation) or a
    /// behaviour block (inlined into this cell's definition).
    pub fn add_submodule(&mut self, submodule: impl Into<Submodule>) {
        match submodule.into() {
            Submodule::Cell(cell) => self.children.push(cell),
            Submodule::Behaviour(behaviour) => self.behaviours.push(behaviour),
        }
    }

    /// Returns the child cells, in instantiation order.
    pub fn children(&self) -> &[Cell] {
        &self.children
    }

    /// Returns the direct children of the given kind.
    pub fn instances_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Cell> + 'a {
        self.children.iter().filter(move |child| child.kind == kind)
    }

    /// Returns the child with the given instance name, if any.
    pub fn get_instance(&self, name: impl AsRef<str>) -> Option<&Cell> {
        self.children
            .iter()
            .find(|child| child.name == name.as_ref())
    }

    /// Returns the number of transistors needed for one instance of this cell:
    /// its own cost plus every child's total plus every behaviour's cost.
    pub fn transistor_total(&self) -> usize {
        self.transistors
            + self
                .children
                .iter()
                .map(Cell::transistor_total)
                .sum::<usize>()
            + self
                .behaviours
                .iter()
                .map(Behaviour::transistors)
                .sum::<usize>()
    }

    /// Visits this cell and all of its descendants, depth first, parents
    /// before children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Cell)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}
