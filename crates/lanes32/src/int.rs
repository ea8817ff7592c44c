//! Signed-integer vectors

use crate::backends::Backend;
use crate::float::F32x;
use crate::macros::{impl_arithmetic, impl_comparisons, impl_constants, impl_ordering, impl_shifts};
use crate::mask::B32x;
use crate::traits::{Bits32, Element, Lanes};
use crate::uint::U32x;
use crate::vector::Simd;

impl Element for i32 {}

/// Signed 32-bit integer vector of `N` lanes.
///
/// Addition, subtraction and negation wrap on overflow, matching the
/// lane semantics of the hardware backends.
pub type I32x<const N: usize> = Simd<i32, N>;
/// 2-lane signed integer vector.
pub type I32x2 = Simd<i32, 2>;
/// 4-lane signed integer vector.
pub type I32x4 = Simd<i32, 4>;

impl_constants!(i32, zero = 0, one = 1, min = i32::MIN, max = i32::MAX);
impl_arithmetic!(i32, add = i32_add, sub = i32_sub, neg = i32_neg);
impl_ordering!(i32, min = i32_min, max = i32_max, hmin = i32_hmin, hmax = i32_hmax);
impl_comparisons!(i32, eq = i32_eq, ne = i32_ne, le = i32_le, lt = i32_lt, ge = i32_ge, gt = i32_gt);
impl_shifts!(i32, shl = i32_shl, shr = i32_shr);

impl<const N: usize> I32x<N>
where
    Backend: Lanes<N>,
{
    /// Reinterprets the lanes as unsigned integers, bit for bit.
    #[inline(always)]
    pub fn as_u32(self) -> U32x<N> {
        Simd::wrap(self.v.map(|v| v as u32))
    }

    /// Converts each lane to `f32`.
    ///
    /// Defined for the whole `i32` range; lanes above 2^24 round to the
    /// nearest representable float.
    #[inline(always)]
    pub fn to_f32(self) -> F32x<N> {
        Simd::wrap(<Backend as Lanes<N>>::i32_to_f32(self.v))
    }
}

impl<const N: usize> Bits32<N> for I32x<N>
where
    Backend: Lanes<N>,
{
    #[inline(always)]
    fn to_raw(self) -> [u32; N] {
        self.v.map(|v| v as u32)
    }

    #[inline(always)]
    fn from_raw(raw: [u32; N]) -> Self {
        Simd::wrap(raw.map(|v| v as i32))
    }
}

impl<const N: usize> Default for I32x<N>
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
    use crate::I32x4;

    #[test]
    fn arithmetic_wraps() {
        let min = I32x4::MIN;
        assert_eq!((-min).to_array(), [i32::MIN; 4]);
        assert_eq!((min - I32x4::ONE).to_array(), [i32::MAX; 4]);
        assert_eq!((I32x4::MAX + I32x4::ONE).to_array(), [i32::MIN; 4]);
    }

    #[test]
    fn shifts_are_arithmetic() {
        let v = I32x4::new(-8, 8, -1, 1);
        assert_eq!((v >> 1).to_array(), [-4, 4, -1, 0]);
        assert_eq!((v << 2).to_array(), [-32, 32, -4, 4]);
    }

    #[test]
    fn ordering() {
        let a = I32x4::new(3, -7, 0, 9);
        let b = I32x4::new(-3, 7, 0, -9);
        assert_eq!(a.min(b).to_array(), [-3, -7, 0, -9]);
        assert_eq!(a.max(b).to_array(), [3, 7, 0, 9]);
        assert_eq!(a.hmin(), -7);
        assert_eq!(a.hmax(), 9);
    }
}
