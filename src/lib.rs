//! A small fixed-size linear algebra library for the Lumen renderer.
//!
//! # Motivation
//!
//! Lumen needs to expose vectors, matrices, and quaternions in its public APIs, and it needs
//! to hand their storage to graphics APIs that expect column-major element buffers. This
//! library was created to cover exactly that surface:
//!
//! - General-purpose linear algebra libraries aim for maximum flexibility and pay the
//!   complexity cost associated with that; exposing their types would make Lumen's own APIs
//!   harder to use than they need to be.
//! - Several of them still make regular breaking releases, which would cause churn for every
//!   crate that consumes Lumen types.
//! - The renderer only ever needs dimensions 2 to 4. Committing to that keeps every algorithm
//!   a closed formula and the whole crate small enough to audit.
//!
//! # Goals & Non-Goals
//!
//! - Fixed dimensions only, selected by const generics. No dynamically-sized or sparse
//!   storage, no SIMD.
//! - A single, unpadded, column-major data layout for matrices, so that
//!   [`Matrix::column_major`] can expose the storage directly to rendering APIs.
//! - Generic over the element type (`f32`, `f64`, `i32`, `i64` are wired up), but no support
//!   for non-[`Copy`] numeric types.
//! - Approximate comparison is delegated to the [`approx`] crate rather than re-invented
//!   here; exact `==` stays bit-exact.
//! - Closed-form determinants and inverses (cofactor expansion); a singular matrix yields
//!   [`None`] instead of a matrix full of NaNs. No decompositions beyond that (no QR/SVD).
//!
//! # Thread safety
//!
//! Every type in this crate is a plain value: no interior mutability, no global state. Sharing
//! a value between threads is safe; mutating one concurrently is the caller's business to
//! synchronize, as with any other `&mut` access.

mod matrix;
mod quat;
mod space;
mod traits;
mod vector;

pub use matrix::*;
pub use quat::*;
pub use space::*;
pub use traits::*;
pub use vector::*;
