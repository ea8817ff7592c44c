//! Shared strategies and reference helpers for the integration suites.
#![allow(dead_code)]

use proptest::prelude::*;

/// Floats from a range where the tested identities are exact, keeping
/// NaN and infinity for the dedicated edge-case suite.
pub fn normal_f32() -> impl Strategy<Value = f32> {
    -1.0e6f32..1.0e6f32
}

/// Floats small enough that `floor`/`ceil`/`round` land on exactly
/// representable integers.
pub fn integral_range_f32() -> impl Strategy<Value = f32> {
    -1.0e4f32..1.0e4f32
}

pub fn f32_lanes2() -> impl Strategy<Value = [f32; 2]> {
    prop::array::uniform2(normal_f32())
}

pub fn f32_lanes4() -> impl Strategy<Value = [f32; 4]> {
    prop::array::uniform4(normal_f32())
}

pub fn i32_lanes4() -> impl Strategy<Value = [i32; 4]> {
    prop::array::uniform4(any::<i32>())
}

pub fn u32_lanes4() -> impl Strategy<Value = [u32; 4]> {
    prop::array::uniform4(any::<u32>())
}

pub fn bool_lanes2() -> impl Strategy<Value = [bool; 2]> {
    prop::array::uniform2(any::<bool>())
}

pub fn bool_lanes4() -> impl Strategy<Value = [bool; 4]> {
    prop::array::uniform4(any::<bool>())
}

/// Absolute-difference check for the few properties that are only
/// exact up to rounding of the formula itself.
pub fn assert_approx_eq(a: f32, b: f32, tol: f32) {
    assert!(
        (a - b).abs() <= tol,
        "expected {a} ~= {b} (tolerance {tol})"
    );
}
