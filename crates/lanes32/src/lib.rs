#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! lanes32: fixed-width SIMD value types over 32-bit lanes
//!
//! Four element kinds, boolean mask ([`B32x2`]/[`B32x4`]), signed
//! integer ([`I32x2`]/[`I32x4`]), unsigned integer ([`U32x2`]/[`U32x4`])
//! and float ([`F32x2`]/[`F32x4`]), at lane widths 2 and 4, with one
//! consistent operation surface: construction, lane access, arithmetic,
//! comparison, selection, rounding, horizontal reduction and bit
//! reinterpretation.
//!
//! # Architecture
//!
//! - [`traits`]: the [`Lanes`] binding table. Every abstract operation
//!   is a trait method; a backend that cannot bind one does not
//!   compile. Fallback compositions (not-equal from equal, blend from
//!   bitwise ops) are provided methods a backend may override.
//! - [`backends`]: the portable [`Scalar`](backends::Scalar) table and
//!   the aarch64 NEON table. One backend per build, selected from the
//!   target architecture; the `force-scalar` feature pins the portable
//!   table for deterministic cross-platform results.
//! - [`vector`]: the storage struct [`Simd`] all kinds share, an
//!   aligned lane array, so same-width kinds reinterpret bit for bit.
//! - `mask` / `int` / `uint` / `float`: the four categories, assembled
//!   from shared operation templates plus kind-specific members.
//!
//! # Example
//!
//! ```
//! use lanes32::I32x4;
//!
//! let v = I32x4::new(1, -2, 3, -4);
//! assert_eq!((-v).to_array(), [-1, 2, -3, 4]);
//!
//! let mask = (-v).lt(I32x4::ZERO);
//! assert_eq!(mask.to_bools(), [true, false, true, false]);
//!
//! let picked = mask.select(I32x4::ZERO, v);
//! assert_eq!(picked.to_array(), [1, 0, 3, 0]);
//! ```
//!
//! # Concurrency
//!
//! Every vector is a small `Copy` value with no indirection, and every
//! operation is a pure function. Values can be shared and read across
//! threads freely; the only mutation path is the indexed lane view on
//! an exclusively borrowed instance.

pub mod backends;
pub mod traits;
pub mod vector;

mod macros;

pub mod float;
pub mod int;
pub mod mask;
pub mod uint;

pub use backends::Backend;
pub use float::{F32x, F32x2, F32x4};
pub use int::{I32x, I32x2, I32x4};
pub use mask::{B32, B32x, B32x2, B32x4};
pub use traits::{Bits32, Element, Lanes};
pub use uint::{U32x, U32x2, U32x4};
pub use vector::Simd;
