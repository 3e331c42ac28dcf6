//! Utility macros.

/// Implements a binary operator for all four combinations of owned and
/// borrowed operands. The bracketed list holds the generic parameters of the
/// impls (it may be empty).
macro_rules! impl_binop {
    (
        $op:ident, $method:ident, [$($gen:tt)*], $tl:ty, $tr:ty, $to:ty,
        |$lhs:ident, $rhs:ident| $body:block
    ) => {
        impl<'a, $($gen)*> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($gen)*> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a, $($gen)*> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl<$($gen)*> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, [$($gen:tt)*], $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl<$($gen)*> ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<$($gen)*> ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, [$($gen:tt)*], $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<$($gen)*> ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($gen)*> ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                ::std::ops::$op::$method(self, &rhs);
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl<T> ::approx::AbsDiffEq for $t
        where
            T: $crate::num::Scalar + ::approx::AbsDiffEq,
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl<T> ::approx::RelativeEq for $t
        where
            T: $crate::num::Scalar + ::approx::RelativeEq,
            T::Epsilon: Copy,
        {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}
