//! Element trait for the containers and numerical routines

use std::fmt;

use num_traits::{Float, NumAssign};

/// Floating-point element type the whole crate is generic over.
///
/// `f64` is the canonical (and only shipped) instantiation; the trait
/// exists so the factorization and solver routines are written once
/// against an abstract scalar. Constants are injected through the
/// `From<f64>` bound, written `<T as From<f64>>::from(...)` at use sites.
pub trait Scalar:
    Float + NumAssign + From<f64> + Into<f64> + fmt::Display + fmt::Debug + 'static
{
}

impl Scalar for f64 {}
