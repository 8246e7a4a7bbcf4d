// SPDX-License-Identifier: Apache-2.0

//! Build structural Verilog from Rust.
//!
//! A [`Cell`] is a module under construction: ports, local nets, raw
//! fragments, child cells and `always` blocks. The [`Library`] produces
//! ready-made cells (gates, adders, flip-flops, a pipelined carry-lookahead
//! adder and a pipelined Wallace tree multiplier), and [`Cell::emit_all`]
//! renders a cell together with one definition of every module it uses.
//!
//! ```
//! use cellgen::Library;
//!
//! let adder = Library::default()
//!     .carry_ripple_adder("adder", "x", "y", "sum", 4)
//!     .unwrap();
//! let verilog = adder.emit_all();
//! assert!(verilog.contains("module CARRY_RIPPLE_ADDER_4_BIT (A, B, out);"));
//! assert!(verilog.contains("module FULL_ADDER (A, B, Cin, S, Cout);"));
//! ```

mod behaviour;
mod cell;
pub mod decl;
mod error;
mod library;
mod tech;

pub use behaviour::{Assign, Behaviour};
pub use cell::{Cell, PortClass, Submodule};
pub use decl::bare_name;
pub use error::{Error, Result};
pub use library::{Library, Slice, pipeline_stages, prefix_levels};
pub use tech::{GateTiming, Technology};
