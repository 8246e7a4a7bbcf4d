// SPDX-License-Identifier: Apache-2.0

//! Generators that produce fully populated [`Cell`](crate::Cell)s: primitive
//! gates, adders, flip-flops, and the pipelined arithmetic built on them.
//!
//! Every generator drives the module definition off its width/depth
//! parameters only, so cells of one kind always emit identical text.

use crate::Technology;

mod arithmetic;
mod cla;
mod gates;
mod join;
mod sequential;
mod wallace;

pub use cla::pipeline_stages;
pub use wallace::Slice;

/// Cell generators bound to one constants table.
#[derive(Clone, Debug, Default)]
pub struct Library {
    tech: Technology,
}

impl Library {
    pub fn new(tech: Technology) -> Self {
        Library { tech }
    }

    /// Returns the constants table this library draws delays and transistor
    /// costs from.
    pub fn tech(&self) -> &Technology {
        &self.tech
    }
}

/// Number of parallel-prefix levels for an `n_bits` adder, `ceil(log2(n+1))`.
pub fn prefix_levels(n_bits: usize) -> usize {
    (n_bits + 1).next_power_of_two().trailing_zeros() as usize
}
