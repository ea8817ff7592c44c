//! Float vectors

use crate::backends::Backend;
use crate::macros::{impl_arithmetic, impl_comparisons, impl_constants, impl_ordering};
use crate::mask::B32x;
use crate::traits::{Bits32, Element, Lanes};
use crate::uint::U32x;
use crate::vector::Simd;

impl Element for f32 {}

/// 32-bit float vector of `N` lanes.
pub type F32x<const N: usize> = Simd<f32, N>;
/// 2-lane float vector.
pub type F32x2 = Simd<f32, 2>;
/// 4-lane float vector.
pub type F32x4 = Simd<f32, 4>;

impl_constants!(f32, zero = 0.0, one = 1.0, min = f32::MIN, max = f32::MAX);
impl_arithmetic!(f32, add = f32_add, sub = f32_sub, neg = f32_neg);
impl_ordering!(f32, min = f32_min, max = f32_max, hmin = f32_hmin, hmax = f32_hmax);
impl_comparisons!(f32, eq = f32_eq, ne = f32_ne, le = f32_le, lt = f32_lt, ge = f32_ge, gt = f32_gt);

impl<const N: usize> F32x<N>
where
    Backend: Lanes<N>,
{
    /// The lanes' IEEE 754 bit patterns, as an unsigned vector.
    ///
    /// The canonical bit-level view of floats; round-trips exactly with
    /// [`F32x::from_bits`].
    #[inline(always)]
    pub fn to_bits(self) -> U32x<N> {
        Simd::wrap(self.v.map(f32::to_bits))
    }

    /// Builds a float vector from raw IEEE 754 bit patterns.
    #[inline(always)]
    pub fn from_bits(bits: U32x<N>) -> Self {
        Simd::wrap(bits.v.map(f32::from_bits))
    }

    /// Truncating conversion to `i32`, saturating at the range ends.
    /// NaN lanes convert to 0.
    #[inline(always)]
    pub fn to_i32(self) -> crate::int::I32x<N> {
        Simd::wrap(<Backend as Lanes<N>>::f32_to_i32(self.v))
    }

    /// Truncating conversion to `i32` with no range handling.
    ///
    /// The outcome for lanes whose magnitude exceeds the `i32` range is
    /// platform dependent and considered a caller bug; clamp first, or
    /// use [`F32x::to_i32`]. Kept non-`unsafe` because misuse cannot
    /// touch memory, only produce an unspecified lane value.
    #[inline(always)]
    pub fn to_i32_unck(self) -> crate::int::I32x<N> {
        Simd::wrap(<Backend as Lanes<N>>::f32_to_i32_unck(self.v))
    }

    /// Lane-wise round toward negative infinity.
    #[inline(always)]
    pub fn floor(self) -> Self {
        Self::wrap(<Backend as Lanes<N>>::f32_floor(self.v))
    }

    /// Lane-wise round toward positive infinity.
    #[inline(always)]
    pub fn ceil(self) -> Self {
        Self::wrap(<Backend as Lanes<N>>::f32_ceil(self.v))
    }

    /// Lane-wise round to nearest, ties away from zero.
    #[inline(always)]
    pub fn round(self) -> Self {
        Self::wrap(<Backend as Lanes<N>>::f32_round(self.v))
    }

    /// Lane-wise round toward zero.
    #[inline(always)]
    pub fn trunc(self) -> Self {
        Self::wrap(<Backend as Lanes<N>>::f32_trunc(self.v))
    }

    /// Lane-wise absolute value.
    #[inline(always)]
    pub fn abs(self) -> Self {
        Self::wrap(<Backend as Lanes<N>>::f32_abs(self.v))
    }

    /// Lane-wise square root.
    #[inline(always)]
    pub fn sqrt(self) -> Self {
        Self::wrap(<Backend as Lanes<N>>::f32_sqrt(self.v))
    }

    /// Each lane's magnitude combined with the sign bit of `sign`.
    #[inline(always)]
    pub fn with_sign_of(self, sign: Self) -> Self {
        Self::wrap(<Backend as Lanes<N>>::f32_with_sign_of(self.v, sign.v))
    }

    /// Horizontal sum of all lanes.
    #[inline(always)]
    pub fn hadd(self) -> f32 {
        <Backend as Lanes<N>>::f32_hadd(self.v)
    }

    /// Dot product.
    #[inline(always)]
    pub fn dot(self, other: Self) -> f32 {
        (self * other).hadd()
    }

    /// Squared Euclidean length.
    #[inline(always)]
    pub fn length_sq(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline(always)]
    pub fn length(self) -> f32 {
        libm::sqrtf(self.length_sq())
    }

    /// Linear interpolation with one factor for every lane.
    ///
    /// `t = 0` reproduces `self` and `t = 1` reproduces `other` exactly
    /// (the formula is not fused).
    #[inline(always)]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self.lerp_v(other, Self::splat(t))
    }

    /// Linear interpolation with per-lane factors:
    /// `(1 - t)*self + t*other`.
    #[inline(always)]
    pub fn lerp_v(self, other: Self, t: Self) -> Self {
        (Self::ONE - t) * self + t * other
    }
}

impl<const N: usize> core::ops::Mul for F32x<N>
where
    Backend: Lanes<N>,
{
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::wrap(<Backend as Lanes<N>>::f32_mul(self.v, rhs.v))
    }
}

impl<const N: usize> core::ops::MulAssign for F32x<N>
where
    Backend: Lanes<N>,
{
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const N: usize> core::ops::Mul<f32> for F32x<N>
where
    Backend: Lanes<N>,
{
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: f32) -> Self::Output {
        self * Self::splat(rhs)
    }
}

impl<const N: usize> core::ops::Mul<F32x<N>> for f32
where
    Backend: Lanes<N>,
{
    type Output = F32x<N>;

    #[inline(always)]
    fn mul(self, rhs: F32x<N>) -> Self::Output {
        F32x::splat(self) * rhs
    }
}

impl<const N: usize> core::ops::MulAssign<f32> for F32x<N>
where
    Backend: Lanes<N>,
{
    #[inline(always)]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl<const N: usize> core::ops::Div for F32x<N>
where
    Backend: Lanes<N>,
{
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self::wrap(<Backend as Lanes<N>>::f32_div(self.v, rhs.v))
    }
}

impl<const N: usize> core::ops::DivAssign for F32x<N>
where
    Backend: Lanes<N>,
{
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<const N: usize> core::ops::Div<f32> for F32x<N>
where
    Backend: Lanes<N>,
{
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: f32) -> Self::Output {
        self / Self::splat(rhs)
    }
}

impl<const N: usize> core::ops::DivAssign<f32> for F32x<N>
where
    Backend: Lanes<N>,
{
    #[inline(always)]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl<const N: usize> Bits32<N> for F32x<N>
where
    Backend: Lanes<N>,
{
    #[inline(always)]
    fn to_raw(self) -> [u32; N] {
        self.v.map(f32::to_bits)
    }

    #[inline(always)]
    fn from_raw(raw: [u32; N]) -> Self {
        Simd::wrap(raw.map(f32::from_bits))
    }
}

impl<const N: usize> Default for F32x<N>
where
    Backend: Lanes<N>,
{
    #[inline(always)]
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use crate::{F32x2, F32x4};

    #[test]
    fn rounding_modes() {
        let v = F32x4::new(1.3, 1.7, -1.3, -1.7);
        assert_eq!(v.floor().to_array(), [1.0, 1.0, -2.0, -2.0]);
        assert_eq!(v.ceil().to_array(), [2.0, 2.0, -1.0, -1.0]);
        assert_eq!(v.round().to_array(), [1.0, 2.0, -1.0, -2.0]);
        assert_eq!(v.trunc().to_array(), [1.0, 1.0, -1.0, -1.0]);

        let ties = F32x4::new(0.5, 2.5, -0.5, -2.5);
        assert_eq!(ties.round().to_array(), [1.0, 3.0, -1.0, -3.0]);
    }

    #[test]
    fn bits_round_trip() {
        let v = F32x2::new(1.0, -0.0);
        assert_eq!(v.to_bits().to_array(), [0x3F80_0000, 0x8000_0000]);
        assert_eq!(F32x2::from_bits(v.to_bits()).to_array(), v.to_array());
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = F32x4::new(1.0, -2.0, 0.0, 100.0);
        let b = F32x4::new(3.0, 2.0, -8.0, 200.0);
        assert_eq!(a.lerp(b, 0.0).to_array(), a.to_array());
        assert_eq!(a.lerp(b, 1.0).to_array(), b.to_array());
        assert_eq!(a.lerp(b, 0.5).to_array(), [2.0, 0.0, -4.0, 150.0]);
    }

    #[test]
    fn sign_transfer() {
        let v = F32x2::new(3.0, -4.0);
        let s = F32x2::new(-1.0, 1.0);
        assert_eq!(v.with_sign_of(s).to_array(), [-3.0, 4.0]);
        assert_eq!(v.abs().to_array(), [3.0, 4.0]);
    }

    #[test]
    fn conversions_truncate_and_saturate() {
        let v = F32x4::new(1.9, -1.9, 2.0e10, -2.0e10);
        assert_eq!(v.to_i32().to_array(), [1, -1, i32::MAX, i32::MIN]);
        assert_eq!(F32x2::new(f32::NAN, 0.5).to_i32().to_array(), [0, 0]);
    }

    #[test]
    fn horizontal_sum() {
        let v = F32x4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.hadd(), 10.0);
        assert_eq!(v.dot(v), 30.0);
        assert_eq!(F32x2::new(3.0, 4.0).length(), 5.0);
    }
}
