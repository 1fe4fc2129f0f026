use core::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// Floating point sample type the transform operates on.
///
/// Implemented for `f32` and `f64`. With the `no_std` feature the math routines are
/// provided by `libm`.
pub trait Float:
    Copy
    + Default
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    /// `1/√2`, the component magnitude of the 45° rotation used by the radix-8 butterfly.
    const FRAC_1_SQRT_2: Self;

    /// Narrows (or passes through) a double precision value.
    fn from_f64(value: f64) -> Self;

    fn from_usize(value: usize) -> Self;

    fn sqrt(self) -> Self;

    fn abs(self) -> Self;

    fn atan2(self, other: Self) -> Self;
}

macro_rules! impl_float {
    ($ty:ident, $sqrt:path, $fabs:path, $atan2:path) => {
        impl Float for $ty {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const FRAC_1_SQRT_2: Self = core::$ty::consts::FRAC_1_SQRT_2;

            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            #[inline(always)]
            fn from_usize(value: usize) -> Self {
                value as $ty
            }

            #[inline(always)]
            fn sqrt(self) -> Self {
                #[cfg(not(feature = "no_std"))]
                return <$ty>::sqrt(self);
                #[cfg(feature = "no_std")]
                return $sqrt(self);
            }

            #[inline(always)]
            fn abs(self) -> Self {
                #[cfg(not(feature = "no_std"))]
                return <$ty>::abs(self);
                #[cfg(feature = "no_std")]
                return $fabs(self);
            }

            #[inline(always)]
            fn atan2(self, other: Self) -> Self {
                #[cfg(not(feature = "no_std"))]
                return <$ty>::atan2(self, other);
                #[cfg(feature = "no_std")]
                return $atan2(self, other);
            }
        }
    };
}

impl_float!(f32, libm::sqrtf, libm::fabsf, libm::atan2f);
impl_float!(f64, libm::sqrt, libm::fabs, libm::atan2);

/// Returns `(sin(angle), cos(angle))` in double precision.
#[inline(always)]
pub(crate) fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(not(feature = "no_std"))]
    return angle.sin_cos();
    #[cfg(feature = "no_std")]
    return (libm::sin(angle), libm::cos(angle));
}
