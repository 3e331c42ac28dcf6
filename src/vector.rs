//! Fixed-dimension vectors.

use crate::{dynamic::Vector, num::Scalar};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Add, Index, IndexMut, Mul, Neg, Sub},
};

/// The number of active components in a vector.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimensions {
    Two = 2,
    Three = 3,
    Four = 4,
}

/// Operations shared by [`Vector2`], [`Vector3`] and [`Vector4`], allowing
/// code to be written once for all dimensions.
pub trait FixedVector<T: Scalar>:
    Copy + PartialEq + fmt::Debug + fmt::Display + Add<Output = Self> + Sub<Output = Self> + Mul<T, Output = Self>
{
    /// The number of components in the vector.
    const DIMENSIONS: Dimensions;

    /// Computes the dot product of this vector with another.
    fn dot(&self, other: &Self) -> T;

    /// Wraps the vector in a [`Vector`] carrying its dimensions at runtime.
    fn to_dynamic(self) -> Vector<T>;
}

/// A 2-dimensional vector.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector2<T> {
    x: T,
    y: T,
}

/// A 3-dimensional vector.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector3<T> {
    x: T,
    y: T,
    z: T,
}

/// A 4-dimensional vector.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector4<T> {
    x: T,
    y: T,
    z: T,
    w: T,
}

impl Dimensions {
    /// The number of components as an integer.
    #[inline]
    pub const fn count(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

impl<T: Scalar> Vector2<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(T::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: T) -> Self {
        Self::new(value, value)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.y
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped<U: Scalar>(&self, mut f: impl FnMut(T) -> U) -> Vector2<U> {
        Vector2::new(f(self.x), f(self.y))
    }
}

impl<T: Scalar> FixedVector<T> for Vector2<T> {
    const DIMENSIONS: Dimensions = Dimensions::Two;

    #[inline]
    fn dot(&self, other: &Self) -> T {
        Vector2::dot(self, other)
    }

    #[inline]
    fn to_dynamic(self) -> Vector<T> {
        Vector::Two(self)
    }
}

impl<T: Scalar> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> From<Vector2<T>> for [T; 2] {
    #[inline]
    fn from(vector: Vector2<T>) -> Self {
        [vector.x, vector.y]
    }
}

impl_binop!(Add, add, [T: Scalar], Vector2<T>, Vector2<T>, Vector2<T>, |a, b| {
    Vector2::new(a.x + b.x, a.y + b.y)
});

impl_binop!(Sub, sub, [T: Scalar], Vector2<T>, Vector2<T>, Vector2<T>, |a, b| {
    Vector2::new(a.x - b.x, a.y - b.y)
});

impl_binop!(Mul, mul, [T: Scalar], Vector2<T>, T, Vector2<T>, |a, b| {
    Vector2::new(a.x * *b, a.y * *b)
});

impl_binop_assign!(AddAssign, add_assign, [T: Scalar], Vector2<T>, Vector2<T>, |a, b| {
    a.x = a.x + b.x;
    a.y = a.y + b.y;
});

impl_binop_assign!(SubAssign, sub_assign, [T: Scalar], Vector2<T>, Vector2<T>, |a, b| {
    a.x = a.x - b.x;
    a.y = a.y - b.y;
});

impl_binop_assign!(MulAssign, mul_assign, [T: Scalar], Vector2<T>, T, |a, b| {
    a.x = a.x * *b;
    a.y = a.y * *b;
});

impl_unary_op!(Neg, neg, [T: Scalar + Neg<Output = T>], Vector2<T>, Vector2<T>, |val| {
    Vector2::new(-val.x, -val.y)
});

impl<T> Index<usize> for Vector2<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl<T> IndexMut<usize> for Vector2<T> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector2<T>, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon) && a.y.abs_diff_eq(&b.y, epsilon)
});

impl_relative_eq!(Vector2<T>, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative) && a.y.relative_eq(&b.y, epsilon, max_relative)
});

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_components(f, &[&self.x, &self.y])
    }
}

impl<T: Scalar> Vector3<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(T::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: T) -> Self {
        Self::new(value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> T {
        self.z
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut T {
        &mut self.z
    }

    /// The 2D vector containing the x- and y-components of this vector.
    #[inline]
    pub const fn xy(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped<U: Scalar>(&self, mut f: impl FnMut(T) -> U) -> Vector3<U> {
        Vector3::new(f(self.x), f(self.y), f(self.z))
    }
}

impl<T: Scalar> FixedVector<T> for Vector3<T> {
    const DIMENSIONS: Dimensions = Dimensions::Three;

    #[inline]
    fn dot(&self, other: &Self) -> T {
        Vector3::dot(self, other)
    }

    #[inline]
    fn to_dynamic(self) -> Vector<T> {
        Vector::Three(self)
    }
}

impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: Scalar> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(vector: Vector3<T>) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl_binop!(Add, add, [T: Scalar], Vector3<T>, Vector3<T>, Vector3<T>, |a, b| {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Sub, sub, [T: Scalar], Vector3<T>, Vector3<T>, Vector3<T>, |a, b| {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Mul, mul, [T: Scalar], Vector3<T>, T, Vector3<T>, |a, b| {
    Vector3::new(a.x * *b, a.y * *b, a.z * *b)
});

impl_binop_assign!(AddAssign, add_assign, [T: Scalar], Vector3<T>, Vector3<T>, |a, b| {
    a.x = a.x + b.x;
    a.y = a.y + b.y;
    a.z = a.z + b.z;
});

impl_binop_assign!(SubAssign, sub_assign, [T: Scalar], Vector3<T>, Vector3<T>, |a, b| {
    a.x = a.x - b.x;
    a.y = a.y - b.y;
    a.z = a.z - b.z;
});

impl_binop_assign!(MulAssign, mul_assign, [T: Scalar], Vector3<T>, T, |a, b| {
    a.x = a.x * *b;
    a.y = a.y * *b;
    a.z = a.z * *b;
});

impl_unary_op!(Neg, neg, [T: Scalar + Neg<Output = T>], Vector3<T>, Vector3<T>, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl<T> Index<usize> for Vector3<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl<T> IndexMut<usize> for Vector3<T> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector3<T>, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
});

impl_relative_eq!(Vector3<T>, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
});

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_components(f, &[&self.x, &self.y, &self.z])
    }
}

impl<T: Scalar> Vector4<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(T::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> T {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> T {
        self.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut T {
        &mut self.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut T {
        &mut self.w
    }

    /// The 3D vector containing the x-, y-, and z-components of this vector.
    #[inline]
    pub const fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped<U: Scalar>(&self, mut f: impl FnMut(T) -> U) -> Vector4<U> {
        Vector4::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }
}

impl<T: Scalar> FixedVector<T> for Vector4<T> {
    const DIMENSIONS: Dimensions = Dimensions::Four;

    #[inline]
    fn dot(&self, other: &Self) -> T {
        Vector4::dot(self, other)
    }

    #[inline]
    fn to_dynamic(self) -> Vector<T> {
        Vector::Four(self)
    }
}

impl<T: Scalar> From<[T; 4]> for Vector4<T> {
    #[inline]
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<T: Scalar> From<Vector4<T>> for [T; 4] {
    #[inline]
    fn from(vector: Vector4<T>) -> Self {
        [vector.x, vector.y, vector.z, vector.w]
    }
}

impl_binop!(Add, add, [T: Scalar], Vector4<T>, Vector4<T>, Vector4<T>, |a, b| {
    Vector4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Sub, sub, [T: Scalar], Vector4<T>, Vector4<T>, Vector4<T>, |a, b| {
    Vector4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_binop!(Mul, mul, [T: Scalar], Vector4<T>, T, Vector4<T>, |a, b| {
    Vector4::new(a.x * *b, a.y * *b, a.z * *b, a.w * *b)
});

impl_binop_assign!(AddAssign, add_assign, [T: Scalar], Vector4<T>, Vector4<T>, |a, b| {
    a.x = a.x + b.x;
    a.y = a.y + b.y;
    a.z = a.z + b.z;
    a.w = a.w + b.w;
});

impl_binop_assign!(SubAssign, sub_assign, [T: Scalar], Vector4<T>, Vector4<T>, |a, b| {
    a.x = a.x - b.x;
    a.y = a.y - b.y;
    a.z = a.z - b.z;
    a.w = a.w - b.w;
});

impl_binop_assign!(MulAssign, mul_assign, [T: Scalar], Vector4<T>, T, |a, b| {
    a.x = a.x * *b;
    a.y = a.y * *b;
    a.z = a.z * *b;
    a.w = a.w * *b;
});

impl_unary_op!(Neg, neg, [T: Scalar + Neg<Output = T>], Vector4<T>, Vector4<T>, |val| {
    Vector4::new(-val.x, -val.y, -val.z, -val.w)
});

impl<T> Index<usize> for Vector4<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl<T> IndexMut<usize> for Vector4<T> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector4<T>, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
        && a.w.abs_diff_eq(&b.w, epsilon)
});

impl_relative_eq!(Vector4<T>, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
        && a.w.relative_eq(&b.w, epsilon, max_relative)
});

impl<T: fmt::Display> fmt::Display for Vector4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_components(f, &[&self.x, &self.y, &self.z, &self.w])
    }
}

// The structs are `repr(C)` with fields of a single type, so they have no
// padding and any bit pattern valid for `T` is valid for them.
unsafe impl<T: Zeroable> Zeroable for Vector2<T> {}
unsafe impl<T: Pod> Pod for Vector2<T> {}
unsafe impl<T: Zeroable> Zeroable for Vector3<T> {}
unsafe impl<T: Pod> Pod for Vector3<T> {}
unsafe impl<T: Zeroable> Zeroable for Vector4<T> {}
unsafe impl<T: Pod> Pod for Vector4<T> {}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),+ $(,)?) => {
        $(
            impl_binop!(Mul, mul, [], $t, Vector2<$t>, Vector2<$t>, |a, b| { b.mul(a) });
            impl_binop!(Mul, mul, [], $t, Vector3<$t>, Vector3<$t>, |a, b| { b.mul(a) });
            impl_binop!(Mul, mul, [], $t, Vector4<$t>, Vector4<$t>, |a, b| { b.mul(a) });
        )+
    };
}

impl_scalar_lhs_mul!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Writes the given components as a parenthesized, comma-separated list,
/// forwarding the formatter's flags to each component.
fn fmt_components<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    components: &[&T],
) -> fmt::Result {
    f.write_str("(")?;
    for (idx, component) in components.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(component, f)?;
    }
    f.write_str(")")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-6;

    // === Vector2 Tests ===

    #[test]
    fn vector2_arithmetic_operations_work() {
        let v1 = Vector2::new(1, 2);
        let v2 = Vector2::new(3, 4);

        assert_eq!(&v1 + &v2, Vector2::new(4, 6));
        assert_eq!(&v1 - &v2, Vector2::new(-2, -2));
        assert_eq!(&v1 * 2, Vector2::new(2, 4));
        assert_eq!(3 * &v1, Vector2::new(3, 6));
        assert_eq!(-&v1, Vector2::new(-1, -2));
        assert_eq!(v1 + v2, Vector2::new(4, 6));
    }

    #[test]
    fn vector2_sum_formats_with_two_components() {
        let sum = Vector2::new(1, 2) + Vector2::new(3, 4);
        assert_eq!(sum.to_string(), "(4, 6)");
    }

    #[test]
    fn vector2_dot_product_works() {
        let v1 = Vector2::new(1.0_f32, 2.0);
        let v2 = Vector2::new(3.0, 4.0);
        assert_abs_diff_eq!(v1.dot(&v2), 11.0, epsilon = EPSILON);
    }

    #[test]
    fn vector2_compound_assignment_works() {
        let mut v = Vector2::new(1, 2);
        v += Vector2::new(1, 1);
        assert_eq!(v, Vector2::new(2, 3));
        v -= &Vector2::new(2, 0);
        assert_eq!(v, Vector2::new(0, 3));
        v *= 4;
        assert_eq!(v, Vector2::new(0, 12));
    }

    #[test]
    fn extending_vector2_to_vector3_works() {
        let v2 = Vector2::new(1, 2);
        assert_eq!(v2.extended(3), Vector3::new(1, 2, 3));
    }

    #[test]
    fn mapping_vector2_components_works() {
        let v = Vector2::new(1, -2);
        assert_eq!(v.mapped(|x| f64::from(x) * 0.5), Vector2::new(0.5, -1.0));
    }

    #[test]
    fn vector2_indexing_works() {
        let mut v = Vector2::new(1, 2);
        assert_eq!(v[0], 1);
        assert_eq!(v[1], 2);

        v[0] = 10;
        *v.y_mut() = 20;
        assert_eq!(v, Vector2::new(10, 20));
    }

    #[test]
    #[should_panic]
    fn indexing_vector2_out_of_bounds_panics() {
        let v = Vector2::new(1, 2);
        let _ = v[2];
    }

    // === Vector3 Tests ===

    #[test]
    fn vector3_dot_product_works() {
        let v1 = Vector3::new(1, 2, 3);
        let v2 = Vector3::new(4, 5, 6);
        assert_eq!(v1.dot(&v2), 32);
    }

    #[test]
    fn vector3_cross_product_works() {
        let cross = Vector3::<i32>::unit_x().cross(&Vector3::unit_y());
        assert_eq!(cross, Vector3::new(0, 0, 1));
    }

    #[test]
    fn vector3_cross_product_is_perpendicular() {
        let v1 = Vector3::new(1.0_f32, 2.0, 3.0);
        let v2 = Vector3::new(4.0, 5.0, 6.0);
        let cross = v1.cross(&v2);

        assert_abs_diff_eq!(cross.dot(&v1), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(cross.dot(&v2), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn vector3_cross_product_of_parallel_vectors_is_zero() {
        let v1 = Vector3::new(1.0_f32, 2.0, 3.0);
        let v2 = Vector3::new(2.0, 4.0, 6.0);
        assert_abs_diff_eq!(v1.cross(&v2), Vector3::zeros(), epsilon = EPSILON);
    }

    #[test]
    fn vector3_component_operations_work() {
        let v1 = Vector3::new(-1, 2, -3);
        let v2 = Vector3::new(3, -4, 5);
        assert_eq!(v1.component_mul(&v2), Vector3::new(-3, -8, -15));
        assert_eq!(v1.xy(), Vector2::new(-1, 2));
        assert_eq!(v1.extended(7), Vector4::new(-1, 2, -3, 7));
    }

    #[test]
    fn vector3_array_conversions_work() {
        let v = Vector3::from([1_u8, 2, 3]);
        assert_eq!(v, Vector3::new(1, 2, 3));
        assert_eq!(<[u8; 3]>::from(v), [1, 2, 3]);
    }

    // === Vector4 Tests ===

    #[test]
    fn vector4_subtraction_works_and_formats_with_four_components() {
        let diff = Vector4::new(1, 2, 3, 4) - Vector4::same(1);
        assert_eq!(diff, Vector4::new(0, 1, 2, 3));
        assert_eq!(diff.to_string(), "(0, 1, 2, 3)");
    }

    #[test]
    fn vector4_dot_product_works() {
        let v1 = Vector4::new(1, 2, 3, 4);
        let v2 = Vector4::new(5, 6, 7, 8);
        assert_eq!(v1.dot(&v2), 70);
    }

    #[test]
    fn vector4_xyz_drops_w_component() {
        assert_eq!(Vector4::new(1, 2, 3, 4).xyz(), Vector3::new(1, 2, 3));
    }

    #[test]
    #[should_panic]
    fn indexing_vector4_out_of_bounds_panics() {
        let v = Vector4::<i32>::zeros();
        let _ = v[4];
    }

    // === Shared behaviour ===

    #[test]
    fn formatting_forwards_precision_to_components() {
        let v = Vector3::new(1.0, 2.26, -0.54);
        assert_eq!(format!("{v:.1}"), "(1.0, 2.3, -0.5)");
        assert_eq!(Vector2::new(1.5_f64, 2.0).to_string(), "(1.5, 2)");
    }

    #[test]
    fn fixed_vectors_report_their_dimensions() {
        assert_eq!(<Vector2<i32> as FixedVector<i32>>::DIMENSIONS.count(), 2);
        assert_eq!(<Vector3<i32> as FixedVector<i32>>::DIMENSIONS.count(), 3);
        assert_eq!(<Vector4<i32> as FixedVector<i32>>::DIMENSIONS.count(), 4);
        assert_eq!(Dimensions::Three.to_string(), "3");
    }

    #[test]
    fn fixed_vectors_can_be_cast_to_bytes() {
        let vectors = [Vector3::new(1.0_f32, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)];
        let components: &[f32] = bytemuck::cast_slice(&vectors);
        assert_eq!(components, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    fn assert_addition_inverts_subtraction<V: FixedVector<i64>>(a: V, b: V) {
        assert_eq!(a + b - b, a);
    }

    fn assert_dot_is_commutative<V: FixedVector<i64>>(a: V, b: V) {
        assert_eq!(a.dot(&b), b.dot(&a));
    }

    fn assert_one_is_multiplicative_identity<V: FixedVector<i64>>(v: V) {
        assert_eq!(v * 1, v);
    }

    prop_compose! {
        fn component_strategy()(value in -1_000_000_i64..1_000_000) -> i64 {
            value
        }
    }

    prop_compose! {
        fn vector2_strategy()(x in component_strategy(), y in component_strategy()) -> Vector2<i64> {
            Vector2::new(x, y)
        }
    }

    prop_compose! {
        fn vector3_strategy()(
            x in component_strategy(),
            y in component_strategy(),
            z in component_strategy(),
        ) -> Vector3<i64> {
            Vector3::new(x, y, z)
        }
    }

    prop_compose! {
        fn vector4_strategy()(
            xyz in vector3_strategy(),
            w in component_strategy(),
        ) -> Vector4<i64> {
            xyz.extended(w)
        }
    }

    proptest! {
        #[test]
        fn vector2_arithmetic_properties_hold(a in vector2_strategy(), b in vector2_strategy()) {
            assert_addition_inverts_subtraction(a, b);
            assert_dot_is_commutative(a, b);
            assert_one_is_multiplicative_identity(a);
        }
    }

    proptest! {
        #[test]
        fn vector3_arithmetic_properties_hold(a in vector3_strategy(), b in vector3_strategy()) {
            assert_addition_inverts_subtraction(a, b);
            assert_dot_is_commutative(a, b);
            assert_one_is_multiplicative_identity(a);
        }
    }

    proptest! {
        #[test]
        fn vector4_arithmetic_properties_hold(a in vector4_strategy(), b in vector4_strategy()) {
            assert_addition_inverts_subtraction(a, b);
            assert_dot_is_commutative(a, b);
            assert_one_is_multiplicative_identity(a);
        }
    }

    proptest! {
        #[test]
        fn vector3_cross_product_is_anticommutative(a in vector3_strategy(), b in vector3_strategy()) {
            prop_assert_eq!(a.cross(&b), -b.cross(&a));
        }
    }
}
