//! Vectors whose dimensions are only known at runtime.

use crate::{
    Result, VectorError,
    num::Scalar,
    vector::{Dimensions, FixedVector, Vector2, Vector3, Vector4},
};
use std::{fmt, ops::Neg};

/// A 2-, 3- or 4-dimensional vector with the number of dimensions tracked at
/// runtime.
///
/// Only the components belonging to the active dimensions exist, so there are
/// no unused slots to read by accident. Binary operations between vectors are
/// checked, and fail with [`VectorError::DimensionMismatch`] when the operands
/// have different dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vector<T> {
    Two(Vector2<T>),
    Three(Vector3<T>),
    Four(Vector4<T>),
}

impl<T: Scalar> Vector<T> {
    /// Creates a 2-dimensional vector.
    #[inline]
    pub const fn new2(x: T, y: T) -> Self {
        Self::Two(Vector2::new(x, y))
    }

    /// Creates a 3-dimensional vector.
    #[inline]
    pub const fn new3(x: T, y: T, z: T) -> Self {
        Self::Three(Vector3::new(x, y, z))
    }

    /// Creates a 4-dimensional vector.
    #[inline]
    pub const fn new4(x: T, y: T, z: T, w: T) -> Self {
        Self::Four(Vector4::new(x, y, z, w))
    }

    /// The number of active components.
    #[inline]
    pub const fn dimensions(&self) -> Dimensions {
        match self {
            Self::Two(_) => Dimensions::Two,
            Self::Three(_) => Dimensions::Three,
            Self::Four(_) => Dimensions::Four,
        }
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        match self {
            Self::Two(v) => v.x(),
            Self::Three(v) => v.x(),
            Self::Four(v) => v.x(),
        }
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        match self {
            Self::Two(v) => v.y(),
            Self::Three(v) => v.y(),
            Self::Four(v) => v.y(),
        }
    }

    /// The z-component, or [`None`] for a 2-dimensional vector.
    #[inline]
    pub const fn z(&self) -> Option<T> {
        match self {
            Self::Two(_) => None,
            Self::Three(v) => Some(v.z()),
            Self::Four(v) => Some(v.z()),
        }
    }

    /// The w-component, or [`None`] unless the vector is 4-dimensional.
    #[inline]
    pub const fn w(&self) -> Option<T> {
        match self {
            Self::Four(v) => Some(v.w()),
            Self::Two(_) | Self::Three(_) => None,
        }
    }

    /// Computes the sum of this vector and another of the same dimensions.
    ///
    /// # Errors
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Self::Two(a), Self::Two(b)) => Ok(Self::Two(a + b)),
            (Self::Three(a), Self::Three(b)) => Ok(Self::Three(a + b)),
            (Self::Four(a), Self::Four(b)) => Ok(Self::Four(a + b)),
            _ => Err(self.mismatch_with(other, "add")),
        }
    }

    /// Computes the difference between this vector and another of the same
    /// dimensions.
    ///
    /// # Errors
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Self::Two(a), Self::Two(b)) => Ok(Self::Two(a - b)),
            (Self::Three(a), Self::Three(b)) => Ok(Self::Three(a - b)),
            (Self::Four(a), Self::Four(b)) => Ok(Self::Four(a - b)),
            _ => Err(self.mismatch_with(other, "subtract")),
        }
    }

    /// Multiplies every active component by the given scalar.
    #[inline]
    pub fn scaled(&self, scalar: T) -> Self {
        match self {
            Self::Two(v) => Self::Two(v * scalar),
            Self::Three(v) => Self::Three(v * scalar),
            Self::Four(v) => Self::Four(v * scalar),
        }
    }

    /// Computes the dot product of this vector with another of the same
    /// dimensions.
    ///
    /// # Errors
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn dot(&self, other: &Self) -> Result<T> {
        match (self, other) {
            (Self::Two(a), Self::Two(b)) => Ok(a.dot(b)),
            (Self::Three(a), Self::Three(b)) => Ok(a.dot(b)),
            (Self::Four(a), Self::Four(b)) => Ok(a.dot(b)),
            _ => Err(self.mismatch_with(other, "dot")),
        }
    }

    /// Computes the cross product of this vector with another. The result is
    /// always 3-dimensional.
    ///
    /// # Errors
    /// Returns [`VectorError::InvalidOperation`] unless both vectors are
    /// 3-dimensional.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        if let (Self::Three(a), Self::Three(b)) = (self, other) {
            Ok(Self::Three(a.cross(b)))
        } else {
            let (lhs, rhs) = (self.dimensions(), other.dimensions());
            log::debug!("Rejected cross product of {lhs}D and {rhs}D vectors");
            Err(VectorError::InvalidOperation { lhs, rhs })
        }
    }

    fn mismatch_with(&self, other: &Self, operation: &str) -> VectorError {
        let (lhs, rhs) = (self.dimensions(), other.dimensions());
        log::debug!("Cannot {operation} {lhs}D and {rhs}D vectors");
        VectorError::DimensionMismatch { lhs, rhs }
    }
}

impl_binop!(Mul, mul, [T: Scalar], Vector<T>, T, Vector<T>, |a, b| {
    a.scaled(*b)
});

impl_unary_op!(Neg, neg, [T: Scalar + Neg<Output = T>], Vector<T>, Vector<T>, |val| {
    match val {
        Vector::Two(v) => Vector::Two(-v),
        Vector::Three(v) => Vector::Three(-v),
        Vector::Four(v) => Vector::Four(-v),
    }
});

impl<T: Scalar> From<Vector2<T>> for Vector<T> {
    #[inline]
    fn from(vector: Vector2<T>) -> Self {
        vector.to_dynamic()
    }
}

impl<T: Scalar> From<Vector3<T>> for Vector<T> {
    #[inline]
    fn from(vector: Vector3<T>) -> Self {
        vector.to_dynamic()
    }
}

impl<T: Scalar> From<Vector4<T>> for Vector<T> {
    #[inline]
    fn from(vector: Vector4<T>) -> Self {
        vector.to_dynamic()
    }
}

macro_rules! impl_try_from_dynamic {
    ($fixed:ident, $variant:ident) => {
        impl<T: Scalar> TryFrom<Vector<T>> for $fixed<T> {
            type Error = VectorError;

            fn try_from(vector: Vector<T>) -> Result<Self> {
                match vector {
                    Vector::$variant(v) => Ok(v),
                    other => Err(VectorError::UnexpectedDimensions {
                        expected: <$fixed<T> as FixedVector<T>>::DIMENSIONS,
                        actual: other.dimensions(),
                    }),
                }
            }
        }
    };
}

impl_try_from_dynamic!(Vector2, Two);
impl_try_from_dynamic!(Vector3, Three);
impl_try_from_dynamic!(Vector4, Four);

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Two(v) => fmt::Display::fmt(v, f),
            Self::Three(v) => fmt::Display::fmt(v, f),
            Self::Four(v) => fmt::Display::fmt(v, f),
        }
    }
}
