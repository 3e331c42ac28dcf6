//! Generic 2-, 3- and 4-dimensional vectors.
//!
//! [`Vector2`], [`Vector3`] and [`Vector4`] carry their dimensions in the type,
//! so arithmetic between vectors of different sizes is rejected at compile
//! time. [`Vector`] carries its dimensions at runtime instead, and its binary
//! operations return a [`Result`].

#[macro_use]
mod macros;

pub mod dynamic;
pub mod num;
pub mod vector;

pub use dynamic::Vector;
pub use num::Scalar;
pub use vector::{Dimensions, FixedVector, Vector2, Vector3, Vector4};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorError>;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorError {
    #[error("Cross product is only defined for 3D vectors, got {lhs}D and {rhs}D")]
    InvalidOperation { lhs: Dimensions, rhs: Dimensions },

    #[error("Mismatched vector dimensions: {lhs}D and {rhs}D")]
    DimensionMismatch { lhs: Dimensions, rhs: Dimensions },

    #[error("Expected a {expected}D vector, got {actual}D")]
    UnexpectedDimensions {
        expected: Dimensions,
        actual: Dimensions,
    },
}
