// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building, validating, or writing a cell tree.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw port class code outside `0..=3`.
    #[error("invalid type for port: class code {0} is not one of 0..=3")]
    InvalidPortClass(u8),

    #[error("bit width must be at least 1")]
    ZeroWidth,

    #[error("pipeline depth must be at least 1")]
    ZeroPipelineDepth,

    /// Two cells of the same kind produced different definitions.
    #[error("module {kind} has more than one distinct definition")]
    ConflictingDefinition { kind: String },

    #[error("instance {instance} is declared more than once in module {module}")]
    DuplicateInstance { module: String, instance: String },

    #[error(
        "instance {module}.{instance} of {kind} connects {nets} nets to {ports} ports"
    )]
    PortCountMismatch {
        module: String,
        instance: String,
        kind: String,
        ports: usize,
        nets: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
