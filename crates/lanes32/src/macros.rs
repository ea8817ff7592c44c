//! Shared operation templates
//!
//! Each template expands one reusable block of the public operation
//! surface for a single element kind, wired to the binding-table
//! methods named at the invocation site. The category modules (`mask`,
//! `int`, `uint`, `float`) assemble their types from these, so every
//! (kind, width) pair gets one consistent implementation instead of a
//! hand-maintained near-copy.
//!
//! Expansions resolve `Backend`, `Lanes`, `Simd` and `B32x` at the
//! invocation site; category modules import them.

/// Broadcast constants for a numeric element kind.
macro_rules! impl_constants {
    ($T:ty, zero = $zero:expr, one = $one:expr, min = $min:expr, max = $max:expr) => {
        impl<const N: usize> Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            /// All lanes zero.
            pub const ZERO: Self = Self::splat($zero);
            /// All lanes one.
            pub const ONE: Self = Self::splat($one);
            /// Every lane at the element type's minimum.
            pub const MIN: Self = Self::splat($min);
            /// Every lane at the element type's maximum.
            pub const MAX: Self = Self::splat($max);
        }
    };
}

/// Lane-wise `+`, `-` and negation.
///
/// `neg = via_signed` selects the unsigned fallback: there is no native
/// unsigned negate, so the lanes take a round trip through the signed
/// kind.
macro_rules! impl_arithmetic {
    (@addsub $T:ty, $add:ident, $sub:ident) => {
        impl<const N: usize> core::ops::Add for Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self::Output {
                Self::wrap(<Backend as Lanes<N>>::$add(self.v, rhs.v))
            }
        }

        impl<const N: usize> core::ops::AddAssign for Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            #[inline(always)]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<const N: usize> core::ops::Sub for Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self::Output {
                Self::wrap(<Backend as Lanes<N>>::$sub(self.v, rhs.v))
            }
        }

        impl<const N: usize> core::ops::SubAssign for Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }
    };
    ($T:ty, add = $add:ident, sub = $sub:ident, neg = via_signed) => {
        impl_arithmetic!(@addsub $T, $add, $sub);

        impl<const N: usize> core::ops::Neg for Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self::Output {
                (-self.as_i32()).as_u32()
            }
        }
    };
    ($T:ty, add = $add:ident, sub = $sub:ident, neg = $neg:ident) => {
        impl_arithmetic!(@addsub $T, $add, $sub);

        impl<const N: usize> core::ops::Neg for Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self::Output {
                Self::wrap(<Backend as Lanes<N>>::$neg(self.v))
            }
        }
    };
}

/// Lane-wise comparisons returning a same-width mask.
macro_rules! impl_comparisons {
    ($T:ty, eq = $eq:ident, ne = $ne:ident, le = $le:ident, lt = $lt:ident,
     ge = $ge:ident, gt = $gt:ident) => {
        #[allow(clippy::should_implement_trait)]
        impl<const N: usize> Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            /// Lane-wise `==`, as a mask.
            #[inline(always)]
            pub fn eq(self, other: Self) -> B32x<N> {
                Simd::wrap(<Backend as Lanes<N>>::$eq(self.v, other.v))
            }

            /// Lane-wise `!=`, as a mask.
            #[inline(always)]
            pub fn ne(self, other: Self) -> B32x<N> {
                Simd::wrap(<Backend as Lanes<N>>::$ne(self.v, other.v))
            }

            /// Lane-wise `<=`, as a mask.
            #[inline(always)]
            pub fn le(self, other: Self) -> B32x<N> {
                Simd::wrap(<Backend as Lanes<N>>::$le(self.v, other.v))
            }

            /// Lane-wise `<`, as a mask.
            #[inline(always)]
            pub fn lt(self, other: Self) -> B32x<N> {
                Simd::wrap(<Backend as Lanes<N>>::$lt(self.v, other.v))
            }

            /// Lane-wise `>=`, as a mask.
            #[inline(always)]
            pub fn ge(self, other: Self) -> B32x<N> {
                Simd::wrap(<Backend as Lanes<N>>::$ge(self.v, other.v))
            }

            /// Lane-wise `>`, as a mask.
            #[inline(always)]
            pub fn gt(self, other: Self) -> B32x<N> {
                Simd::wrap(<Backend as Lanes<N>>::$gt(self.v, other.v))
            }
        }
    };
}

/// Min/max, clamping and horizontal reductions for ordered kinds.
macro_rules! impl_ordering {
    ($T:ty, min = $min:ident, max = $max:ident, hmin = $hmin:ident, hmax = $hmax:ident) => {
        impl<const N: usize> Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            /// Lane-wise minimum.
            #[inline(always)]
            pub fn min(self, other: Self) -> Self {
                Self::wrap(<Backend as Lanes<N>>::$min(self.v, other.v))
            }

            /// Lane-wise maximum.
            #[inline(always)]
            pub fn max(self, other: Self) -> Self {
                Self::wrap(<Backend as Lanes<N>>::$max(self.v, other.v))
            }

            /// Lane-wise lower bound: `max(self, lo)`.
            #[inline(always)]
            pub fn at_least(self, lo: Self) -> Self {
                self.max(lo)
            }

            /// Lane-wise upper bound: `min(self, hi)`.
            #[inline(always)]
            pub fn at_most(self, hi: Self) -> Self {
                self.min(hi)
            }

            /// Clamps each lane into `[lo, hi]`.
            ///
            /// The lower bound applies first, then the upper, so a lane
            /// with `lo > hi` ends up at `hi`.
            #[inline(always)]
            pub fn clamp(self, lo: Self, hi: Self) -> Self {
                self.at_least(lo).at_most(hi)
            }

            /// Horizontal minimum: the smallest lane.
            #[inline(always)]
            pub fn hmin(self) -> $T {
                <Backend as Lanes<N>>::$hmin(self.v)
            }

            /// Horizontal maximum: the largest lane.
            #[inline(always)]
            pub fn hmax(self) -> $T {
                <Backend as Lanes<N>>::$hmax(self.v)
            }
        }
    };
}

/// Lane-wise shifts by a single scalar count.
macro_rules! impl_shifts {
    ($T:ty, shl = $shl:ident, shr = $shr:ident) => {
        impl<const N: usize> core::ops::Shl<u32> for Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            type Output = Self;

            #[inline(always)]
            fn shl(self, count: u32) -> Self::Output {
                Self::wrap(<Backend as Lanes<N>>::$shl(self.v, count))
            }
        }

        impl<const N: usize> core::ops::ShlAssign<u32> for Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            #[inline(always)]
            fn shl_assign(&mut self, count: u32) {
                *self = *self << count;
            }
        }

        impl<const N: usize> core::ops::Shr<u32> for Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            type Output = Self;

            #[inline(always)]
            fn shr(self, count: u32) -> Self::Output {
                Self::wrap(<Backend as Lanes<N>>::$shr(self.v, count))
            }
        }

        impl<const N: usize> core::ops::ShrAssign<u32> for Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            #[inline(always)]
            fn shr_assign(&mut self, count: u32) {
                *self = *self >> count;
            }
        }
    };
}

/// Lane-wise bitwise operators.
macro_rules! impl_bitwise {
    ($T:ty, and = $and:ident, or = $or:ident, not = $not:ident) => {
        impl<const N: usize> core::ops::BitAnd for Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            type Output = Self;

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self::Output {
                Self::wrap(<Backend as Lanes<N>>::$and(self.v, rhs.v))
            }
        }

        impl<const N: usize> core::ops::BitAndAssign for Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            #[inline(always)]
            fn bitand_assign(&mut self, rhs: Self) {
                *self = *self & rhs;
            }
        }

        impl<const N: usize> core::ops::BitOr for Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            type Output = Self;

            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self::Output {
                Self::wrap(<Backend as Lanes<N>>::$or(self.v, rhs.v))
            }
        }

        impl<const N: usize> core::ops::BitOrAssign for Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            #[inline(always)]
            fn bitor_assign(&mut self, rhs: Self) {
                *self = *self | rhs;
            }
        }

        impl<const N: usize> core::ops::Not for Simd<$T, N>
        where
            Backend: Lanes<N>,
        {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self::Output {
                Self::wrap(<Backend as Lanes<N>>::$not(self.v))
            }
        }
    };
}

pub(crate) use impl_arithmetic;
pub(crate) use impl_bitwise;
pub(crate) use impl_comparisons;
pub(crate) use impl_constants;
pub(crate) use impl_ordering;
pub(crate) use impl_shifts;
