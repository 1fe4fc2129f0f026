/// Errors the transform functions can return.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum FftError {
    /// The buffer length is not an exact power of the radix.
    InvalidSize { len: usize, radix: usize },
    /// The radix is smaller than two.
    InvalidRadix { radix: usize },
    /// The buffer length differs from the length the plan was built for.
    LengthMismatch { expected: usize, actual: usize },
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidSize { len, radix } => {
                write!(f, "Length {len} is not a power of radix {radix}")
            }
            Self::InvalidRadix { radix } => write!(f, "Radix {radix} is smaller than 2"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Buffer length {actual} does not match plan length {expected}")
            }
        }
    }
}

impl core::fmt::Debug for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

#[cfg(not(feature = "no_std"))]
impl std::error::Error for FftError {}
