//! Precision type definitions and implementations

/// Trait for scalar types used in the decomposition
///
/// All arithmetic follows IEEE-754 semantics; division by zero produces
/// infinities or NaN rather than an error.
pub trait Precision:
    Copy
    + Clone
    + std::fmt::Debug
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::Neg<Output = Self>
    + std::cmp::PartialEq
    + std::cmp::PartialOrd
    + num_traits::Zero
    + num_traits::One
    + num_traits::Float
{
    /// Machine epsilon for this precision type
    fn epsilon() -> Self;

    /// Square root function
    fn sqrt(self) -> Self;

    /// Absolute value function
    fn abs(self) -> Self;
}

impl Precision for f64 {
    fn epsilon() -> f64 {
        f64::EPSILON
    }

    #[inline]
    fn sqrt(self) -> f64 {
        self.sqrt()
    }

    #[inline]
    fn abs(self) -> f64 {
        self.abs()
    }
}
