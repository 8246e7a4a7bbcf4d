// SPDX-License-Identifier: Apache-2.0

/// Propagation delay (in simulator time units) and transistor cost of one
/// primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateTiming {
    pub delay: u32,
    pub transistors: usize,
}

impl GateTiming {
    pub const fn new(delay: u32, transistors: usize) -> Self {
        GateTiming { delay, transistors }
    }
}

/// Constants table used by the primitive library. Only the emitted `#delay`
/// annotations and transistor totals depend on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Technology {
    pub and: GateTiming,
    pub or: GateTiming,
    pub xor: GateTiming,
    pub nand: GateTiming,
    pub nor: GateTiming,
    pub not: GateTiming,
    pub flip_flop: GateTiming,
}

impl Default for Technology {
    fn default() -> Self {
        Technology {
            and: GateTiming::new(2, 6),
            or: GateTiming::new(2, 6),
            xor: GateTiming::new(3, 12),
            nand: GateTiming::new(1, 4),
            nor: GateTiming::new(1, 4),
            not: GateTiming::new(1, 2),
            flip_flop: GateTiming::new(3, 24),
        }
    }
}
