//! Portable backend
//!
//! The reference binding table: every operation is a per-lane loop over
//! the array, with `libm` supplying the float kernels. Always compiled,
//! on every target, so the hardware tables have a fixed semantics to
//! agree with. Integer arithmetic uses the wrapping forms: vector
//! lanes wrap, and the portable table must match.
//!
//! `mask_select` is not overridden: this backend exercises the
//! documented bitwise-blend fallback.

use crate::mask::B32;
use crate::traits::{Align16, Align8, Lanes};

/// The portable binding table.
#[derive(Clone, Copy, Debug)]
pub struct Scalar;

#[inline(always)]
fn map<T: Copy, U, const N: usize>(v: [T; N], f: impl Fn(T) -> U) -> [U; N] {
    core::array::from_fn(|i| f(v[i]))
}

#[inline(always)]
fn zip<T: Copy, U, const N: usize>(a: [T; N], b: [T; N], f: impl Fn(T, T) -> U) -> [U; N] {
    core::array::from_fn(|i| f(a[i], b[i]))
}

#[inline(always)]
fn fold<T: Copy, const N: usize>(v: [T; N], f: impl Fn(T, T) -> T) -> T {
    let mut acc = v[0];
    for i in 1..N {
        acc = f(acc, v[i]);
    }
    acc
}

macro_rules! scalar_lanes {
    ($N:literal, $Align:ident) => {
        impl Lanes<$N> for Scalar {
            type Align = $Align;
            const ALIGN: $Align = $Align;

            #[inline(always)]
            fn mask_and(a: [B32; $N], b: [B32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32(x.0 & y.0))
            }

            #[inline(always)]
            fn mask_or(a: [B32; $N], b: [B32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32(x.0 | y.0))
            }

            #[inline(always)]
            fn mask_not(v: [B32; $N]) -> [B32; $N] {
                map(v, |x| B32(!x.0))
            }

            #[inline(always)]
            fn i32_add(a: [i32; $N], b: [i32; $N]) -> [i32; $N] {
                zip(a, b, i32::wrapping_add)
            }

            #[inline(always)]
            fn i32_sub(a: [i32; $N], b: [i32; $N]) -> [i32; $N] {
                zip(a, b, i32::wrapping_sub)
            }

            #[inline(always)]
            fn i32_neg(v: [i32; $N]) -> [i32; $N] {
                map(v, i32::wrapping_neg)
            }

            #[inline(always)]
            fn i32_min(a: [i32; $N], b: [i32; $N]) -> [i32; $N] {
                zip(a, b, |x, y| x.min(y))
            }

            #[inline(always)]
            fn i32_max(a: [i32; $N], b: [i32; $N]) -> [i32; $N] {
                zip(a, b, |x, y| x.max(y))
            }

            #[inline(always)]
            fn i32_hmin(v: [i32; $N]) -> i32 {
                fold(v, |x, y| x.min(y))
            }

            #[inline(always)]
            fn i32_hmax(v: [i32; $N]) -> i32 {
                fold(v, |x, y| x.max(y))
            }

            #[inline(always)]
            fn i32_eq(a: [i32; $N], b: [i32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x == y))
            }

            #[inline(always)]
            fn i32_ne(a: [i32; $N], b: [i32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x != y))
            }

            #[inline(always)]
            fn i32_le(a: [i32; $N], b: [i32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x <= y))
            }

            #[inline(always)]
            fn i32_lt(a: [i32; $N], b: [i32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x < y))
            }

            #[inline(always)]
            fn i32_ge(a: [i32; $N], b: [i32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x >= y))
            }

            #[inline(always)]
            fn i32_gt(a: [i32; $N], b: [i32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x > y))
            }

            #[inline(always)]
            fn i32_shl(v: [i32; $N], count: u32) -> [i32; $N] {
                map(v, |x| x.wrapping_shl(count))
            }

            #[inline(always)]
            fn i32_shr(v: [i32; $N], count: u32) -> [i32; $N] {
                map(v, |x| x.wrapping_shr(count))
            }

            #[inline(always)]
            fn i32_to_f32(v: [i32; $N]) -> [f32; $N] {
                map(v, |x| x as f32)
            }

            #[inline(always)]
            fn u32_add(a: [u32; $N], b: [u32; $N]) -> [u32; $N] {
                zip(a, b, u32::wrapping_add)
            }

            #[inline(always)]
            fn u32_sub(a: [u32; $N], b: [u32; $N]) -> [u32; $N] {
                zip(a, b, u32::wrapping_sub)
            }

            #[inline(always)]
            fn u32_and(a: [u32; $N], b: [u32; $N]) -> [u32; $N] {
                zip(a, b, |x, y| x & y)
            }

            #[inline(always)]
            fn u32_or(a: [u32; $N], b: [u32; $N]) -> [u32; $N] {
                zip(a, b, |x, y| x | y)
            }

            #[inline(always)]
            fn u32_not(v: [u32; $N]) -> [u32; $N] {
                map(v, |x| !x)
            }

            #[inline(always)]
            fn u32_min(a: [u32; $N], b: [u32; $N]) -> [u32; $N] {
                zip(a, b, |x, y| x.min(y))
            }

            #[inline(always)]
            fn u32_max(a: [u32; $N], b: [u32; $N]) -> [u32; $N] {
                zip(a, b, |x, y| x.max(y))
            }

            #[inline(always)]
            fn u32_hmin(v: [u32; $N]) -> u32 {
                fold(v, |x, y| x.min(y))
            }

            #[inline(always)]
            fn u32_hmax(v: [u32; $N]) -> u32 {
                fold(v, |x, y| x.max(y))
            }

            #[inline(always)]
            fn u32_eq(a: [u32; $N], b: [u32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x == y))
            }

            #[inline(always)]
            fn u32_ne(a: [u32; $N], b: [u32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x != y))
            }

            #[inline(always)]
            fn u32_le(a: [u32; $N], b: [u32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x <= y))
            }

            #[inline(always)]
            fn u32_lt(a: [u32; $N], b: [u32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x < y))
            }

            #[inline(always)]
            fn u32_ge(a: [u32; $N], b: [u32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x >= y))
            }

            #[inline(always)]
            fn u32_gt(a: [u32; $N], b: [u32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x > y))
            }

            #[inline(always)]
            fn u32_shl(v: [u32; $N], count: u32) -> [u32; $N] {
                map(v, |x| x.wrapping_shl(count))
            }

            #[inline(always)]
            fn u32_shr(v: [u32; $N], count: u32) -> [u32; $N] {
                map(v, |x| x.wrapping_shr(count))
            }

            #[inline(always)]
            fn f32_add(a: [f32; $N], b: [f32; $N]) -> [f32; $N] {
                zip(a, b, |x, y| x + y)
            }

            #[inline(always)]
            fn f32_sub(a: [f32; $N], b: [f32; $N]) -> [f32; $N] {
                zip(a, b, |x, y| x - y)
            }

            #[inline(always)]
            fn f32_mul(a: [f32; $N], b: [f32; $N]) -> [f32; $N] {
                zip(a, b, |x, y| x * y)
            }

            #[inline(always)]
            fn f32_div(a: [f32; $N], b: [f32; $N]) -> [f32; $N] {
                zip(a, b, |x, y| x / y)
            }

            #[inline(always)]
            fn f32_neg(v: [f32; $N]) -> [f32; $N] {
                map(v, |x| -x)
            }

            #[inline(always)]
            fn f32_min(a: [f32; $N], b: [f32; $N]) -> [f32; $N] {
                zip(a, b, libm::fminf)
            }

            #[inline(always)]
            fn f32_max(a: [f32; $N], b: [f32; $N]) -> [f32; $N] {
                zip(a, b, libm::fmaxf)
            }

            #[inline(always)]
            fn f32_hmin(v: [f32; $N]) -> f32 {
                fold(v, libm::fminf)
            }

            #[inline(always)]
            fn f32_hmax(v: [f32; $N]) -> f32 {
                fold(v, libm::fmaxf)
            }

            #[inline(always)]
            fn f32_hadd(v: [f32; $N]) -> f32 {
                fold(v, |x, y| x + y)
            }

            #[inline(always)]
            fn f32_eq(a: [f32; $N], b: [f32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x == y))
            }

            #[inline(always)]
            fn f32_ne(a: [f32; $N], b: [f32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x != y))
            }

            #[inline(always)]
            fn f32_le(a: [f32; $N], b: [f32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x <= y))
            }

            #[inline(always)]
            fn f32_lt(a: [f32; $N], b: [f32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x < y))
            }

            #[inline(always)]
            fn f32_ge(a: [f32; $N], b: [f32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x >= y))
            }

            #[inline(always)]
            fn f32_gt(a: [f32; $N], b: [f32; $N]) -> [B32; $N] {
                zip(a, b, |x, y| B32::new(x > y))
            }

            #[inline(always)]
            fn f32_floor(v: [f32; $N]) -> [f32; $N] {
                map(v, libm::floorf)
            }

            #[inline(always)]
            fn f32_ceil(v: [f32; $N]) -> [f32; $N] {
                map(v, libm::ceilf)
            }

            #[inline(always)]
            fn f32_round(v: [f32; $N]) -> [f32; $N] {
                map(v, libm::roundf)
            }

            #[inline(always)]
            fn f32_trunc(v: [f32; $N]) -> [f32; $N] {
                map(v, libm::truncf)
            }

            #[inline(always)]
            fn f32_abs(v: [f32; $N]) -> [f32; $N] {
                map(v, libm::fabsf)
            }

            #[inline(always)]
            fn f32_sqrt(v: [f32; $N]) -> [f32; $N] {
                map(v, libm::sqrtf)
            }

            #[inline(always)]
            fn f32_with_sign_of(v: [f32; $N], sign: [f32; $N]) -> [f32; $N] {
                zip(v, sign, libm::copysignf)
            }

            #[inline(always)]
            fn f32_to_i32(v: [f32; $N]) -> [i32; $N] {
                map(v, |x| x as i32)
            }

            #[inline(always)]
            fn f32_to_i32_unck(v: [f32; $N]) -> [i32; $N] {
                // in-range inputs are the caller's contract
                map(v, |x| unsafe { x.to_int_unchecked::<i32>() })
            }
        }
    };
}

scalar_lanes!(2, Align8);
scalar_lanes!(4, Align16);

#[cfg(test)]
mod tests {
    use super::Scalar;
    use crate::mask::B32;
    use crate::traits::Lanes;

    #[test]
    fn fallback_select_blends_bits() {
        let mask = [B32::TRUE, B32::FALSE, B32::TRUE, B32::FALSE];
        let picked = <Scalar as Lanes<4>>::mask_select(mask, [9, 9, 9, 9], [1, 2, 3, 4]);
        assert_eq!(picked, [1, 9, 3, 9]);
    }

    #[test]
    fn ne_matches_lane_inequality() {
        let ne = <Scalar as Lanes<2>>::f32_ne([1.0, 2.0], [1.0, 3.0]);
        assert_eq!([ne[0].to_bool(), ne[1].to_bool()], [false, true]);
    }

    #[test]
    fn reductions_fold_all_lanes() {
        assert_eq!(<Scalar as Lanes<4>>::i32_hmax([3, -1, 7, 2]), 7);
        assert_eq!(<Scalar as Lanes<4>>::i32_hmin([3, -1, 7, 2]), -1);
        assert_eq!(<Scalar as Lanes<2>>::u32_hmax([1, u32::MAX]), u32::MAX);
        assert_eq!(<Scalar as Lanes<4>>::f32_hadd([1.0, 2.0, 3.0, 4.0]), 10.0);
    }
}
