// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::{Cell, Error, Result};

impl Cell {
    /// Checks the tree rooted at this cell before emission:
    /// - every module kind has exactly one definition,
    /// - instance names are unique within each parent,
    /// - composed children are connected to as many nets as they have ports.
    pub fn validate(&self) -> Result<()> {
        let mut definitions = IndexMap::new();
        self.validate_recursive(&mut definitions)
    }

    fn validate_recursive(&self, definitions: &mut IndexMap<String, String>) -> Result<()> {
        match definitions.entry(self.kind.clone()) {
            Entry::Occupied(entry) => {
                if *entry.get() != self.definition() {
                    return Err(Error::ConflictingDefinition {
                        kind: self.kind.clone(),
                    });
                }
                // Same kind, same definition: its subtree was already checked.
                return Ok(());
            }
            Entry::Vacant(entry) => {
                entry.insert(self.definition());
            }
        }

        let mut instance_names = HashSet::new();
        for child in &self.children {
            if !instance_names.insert(child.name.as_str()) {
                return Err(Error::DuplicateInstance {
                    module: self.kind.clone(),
                    instance: child.name.clone(),
                });
            }
            if !child.is_primitive() && child.port_count() != child.connections.len() {
                return Err(Error::PortCountMismatch {
                    module: self.kind.clone(),
                    instance: child.name.clone(),
                    kind: child.kind.clone(),
                    ports: child.port_count(),
                    nets: child.connections.len(),
                });
            }
        }

        for child in &self.children {
            child.validate_recursive(definitions)?;
        }
        Ok(())
    }
}
