use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::Float;

/// Simple complex number struct.
///
/// All arithmetic returns a new value. Equality is component-wise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

/// Single precision complex sample.
pub type Complex32 = Complex<f32>;

/// Double precision complex sample.
pub type Complex64 = Complex<f64>;

impl<T> Complex<T> {
    #[inline(always)]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: Float> Complex<T> {
    #[inline(always)]
    pub fn zero() -> Self {
        Self::new(T::ZERO, T::ZERO)
    }

    #[inline(always)]
    pub fn one() -> Self {
        Self::new(T::ONE, T::ZERO)
    }

    /// Lifts a real sample onto the real axis.
    #[inline(always)]
    pub fn from_real(re: T) -> Self {
        Self::new(re, T::ZERO)
    }

    #[inline(always)]
    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Squared magnitude.
    #[inline(always)]
    pub fn norm_sqr(&self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// Magnitude.
    #[inline(always)]
    pub fn norm(&self) -> T {
        self.norm_sqr().sqrt()
    }

    /// Phase angle in radians, in `(-π, π]`.
    #[inline(always)]
    pub fn arg(&self) -> T {
        self.im.atan2(self.re)
    }

    /// Multiplies both components by a real factor.
    #[inline(always)]
    pub fn scale(&self, f: T) -> Self {
        Self::new(self.re * f, self.im * f)
    }

    /// Divides both components by a real factor.
    #[inline(always)]
    pub fn unscale(&self, f: T) -> Self {
        Self::new(self.re / f, self.im / f)
    }

    /// Multiplication by `i`.
    #[inline(always)]
    pub fn rot90(&self) -> Self {
        Self::new(-self.im, self.re)
    }

    /// Multiplication by `-1`.
    #[inline(always)]
    pub fn rot180(&self) -> Self {
        Self::new(-self.re, -self.im)
    }

    /// Multiplication by `-i`.
    #[inline(always)]
    pub fn rot270(&self) -> Self {
        Self::new(self.im, -self.re)
    }

    /// Compares two values by magnitude.
    ///
    /// Returns `None` if either magnitude is NaN.
    pub fn cmp_magnitude(&self, other: &Self) -> Option<Ordering> {
        self.norm_sqr().partial_cmp(&other.norm_sqr())
    }

    /// Returns true if both components are finite.
    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        let finite = |v: T| v - v == T::ZERO;
        finite(self.re) && finite(self.im)
    }
}

impl<T: Float> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Self::from_real(re)
    }
}

impl<T: Float> Add for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn add(self, o: Self) -> Self {
        Self::new(self.re + o.re, self.im + o.im)
    }
}

impl<T: Float> Sub for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, o: Self) -> Self {
        Self::new(self.re - o.re, self.im - o.im)
    }
}

impl<T: Float> Mul for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, o: Self) -> Self {
        Self::new(
            self.re * o.re - self.im * o.im,
            self.re * o.im + self.im * o.re,
        )
    }
}

/// `(a * conj(b)) / |b|²`. A zero divisor yields non-finite components.
impl<T: Float> Div for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn div(self, o: Self) -> Self {
        let den = o.norm_sqr();
        Self::new(
            (self.re * o.re + self.im * o.im) / den,
            (self.im * o.re - self.re * o.im) / den,
        )
    }
}

impl<T: Float> Neg for Complex<T> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.rot180()
    }
}

impl<T: Float> AddAssign for Complex<T> {
    #[inline(always)]
    fn add_assign(&mut self, o: Self) {
        *self = *self + o;
    }
}

impl<T: Float> SubAssign for Complex<T> {
    #[inline(always)]
    fn sub_assign(&mut self, o: Self) {
        *self = *self - o;
    }
}

impl<T: Float> MulAssign for Complex<T> {
    #[inline(always)]
    fn mul_assign(&mut self, o: Self) {
        *self = *self * o;
    }
}

impl<T: Float> DivAssign for Complex<T> {
    #[inline(always)]
    fn div_assign(&mut self, o: Self) {
        *self = *self / o;
    }
}

impl<T: Float> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + i{}", self.re, self.im)
    }
}
