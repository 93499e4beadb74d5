#![warn(missing_docs)]

//! Volumetric areas and segment intersection queries for the rcast kernel.
//!
//! An [`Area3d`] is any volume that can answer "where does this line
//! segment enter you". The crate ships an axis-aligned
//! [`RectangularPrism`] owning its corners, a [`PrismWrapper`] that
//! reads its corners from an externally owned object on every query, a
//! [`CombinedArea`] aggregate that returns the nearest hit across many
//! members, and an [`AreaConverter`] registry that adapts foreign types
//! into areas.
//!
//! All queries treat their input as a finite segment: hits are reported
//! only for intersection parameters `t` in `[0, 1]`.

mod area;
mod combined;
mod convert;
mod error;
mod prism;

pub use area::{Area3d, LineHit};
pub use combined::{CombinedArea, MemberHit};
pub use convert::{AreaConverter, ConvertFn};
pub use error::{AreaError, Result};
pub use prism::{CornerFn, PrismWrapper, RectangularPrism};
