//! Unsigned-integer vectors

use crate::backends::Backend;
use crate::int::I32x;
use crate::macros::{
    impl_arithmetic, impl_bitwise, impl_comparisons, impl_constants, impl_ordering, impl_shifts,
};
use crate::mask::B32x;
use crate::traits::{Bits32, Element, Lanes};
use crate::vector::Simd;

impl Element for u32 {}

/// Unsigned 32-bit integer vector of `N` lanes.
///
/// Negation has no native instruction on any bound backend; it is the
/// two's-complement round trip through the signed kind.
pub type U32x<const N: usize> = Simd<u32, N>;
/// 2-lane unsigned integer vector.
pub type U32x2 = Simd<u32, 2>;
/// 4-lane unsigned integer vector.
pub type U32x4 = Simd<u32, 4>;

impl_constants!(u32, zero = 0, one = 1, min = u32::MIN, max = u32::MAX);
impl_arithmetic!(u32, add = u32_add, sub = u32_sub, neg = via_signed);
impl_ordering!(u32, min = u32_min, max = u32_max, hmin = u32_hmin, hmax = u32_hmax);
impl_comparisons!(u32, eq = u32_eq, ne = u32_ne, le = u32_le, lt = u32_lt, ge = u32_ge, gt = u32_gt);
impl_shifts!(u32, shl = u32_shl, shr = u32_shr);
impl_bitwise!(u32, and = u32_and, or = u32_or, not = u32_not);

impl<const N: usize> U32x<N>
where
    Backend: Lanes<N>,
{
    /// Reinterprets the lanes as signed integers, bit for bit.
    #[inline(always)]
    pub fn as_i32(self) -> I32x<N> {
        Simd::wrap(self.v.map(|v| v as i32))
    }
}

impl<const N: usize> Bits32<N> for U32x<N>
where
    Backend: Lanes<N>,
{
    #[inline(always)]
    fn to_raw(self) -> [u32; N] {
        self.v
    }

    #[inline(always)]
    fn from_raw(raw: [u32; N]) -> Self {
        Simd::wrap(raw)
    }
}

impl<const N: usize> Default for U32x<N>
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
    use crate::U32x2;

    #[test]
    fn negate_round_trips_through_signed() {
        let v = U32x2::new(1, 0);
        assert_eq!((-v).to_array(), [u32::MAX, 0]);
        assert_eq!((-(-v)).to_array(), [1, 0]);
    }

    #[test]
    fn comparisons_are_unsigned() {
        let a = U32x2::new(u32::MAX, 1);
        let b = U32x2::new(0, 2);
        assert_eq!(a.gt(b).to_bools(), [true, false]);
        assert_eq!(a.min(b).to_array(), [0, 1]);
    }

    #[test]
    fn bitwise_ops() {
        let a = U32x2::new(0b1100, 0xFFFF_0000);
        let b = U32x2::new(0b1010, 0x00FF_FF00);
        assert_eq!((a & b).to_array(), [0b1000, 0x00FF_0000]);
        assert_eq!((a | b).to_array(), [0b1110, 0xFFFF_FF00]);
        assert_eq!((!U32x2::ZERO).to_array(), [u32::MAX; 2]);
        assert_eq!((a >> 8).to_array(), [0, 0x00FF_FF00]);
    }
}
