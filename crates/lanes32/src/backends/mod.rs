//! Backend binding tables and build-time selection
//!
//! A backend implements [`Lanes`](crate::traits::Lanes) for widths 2
//! and 4, binding every abstract operation to a concrete instruction.
//! Exactly one backend is selected per build (there is no runtime
//! dispatch) and all eight vector types are generated against it:
//!
//! - `aarch64`: [`Neon`], unless the `force-scalar` feature pins the
//!   portable table.
//! - everywhere else: [`Scalar`], the portable reference table.
//!
//! The portable table is always compiled so its semantics stay
//! buildable (and testable) on every host.

pub mod scalar;

#[cfg(target_arch = "aarch64")]
pub mod neon;

pub use scalar::Scalar;

#[cfg(target_arch = "aarch64")]
pub use neon::Neon;

/// The binding table this build's vector types are generated against.
#[cfg(all(target_arch = "aarch64", not(feature = "force-scalar")))]
pub type Backend = Neon;

/// The binding table this build's vector types are generated against.
#[cfg(any(not(target_arch = "aarch64"), feature = "force-scalar"))]
pub type Backend = Scalar;
