use core::{error::Error, fmt};

/// Everything that can abort a processing run. Nothing here is recoverable halfway through a run,
/// a run that fails produces no partial result.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingError
{
    /// Filter coefficients are unusable (empty, mismatched lengths, leading feedback coefficient
    /// of zero, non-finite values or an unstable steady state).
    InvalidFilterSpecification(&'static str),

    /// A configuration value outside the filter coefficients is out of range.
    InvalidConfiguration(&'static str),

    /// The recording does not extend beyond the calibration window.
    InsufficientSamples { required: usize, actual: usize },

    /// A vector or quaternion that had to be normalized had (close to) zero length.
    NumericalInstability(&'static str),

    /// Not a single complete, non-degenerate step was found.
    NoStepsDetected,
}

impl Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidFilterSpecification(reason) => write!(f, "Invalid filter specification: {}", reason),
            Self::InvalidConfiguration(reason) => write!(f, "Invalid configuration: {}", reason),
            Self::InsufficientSamples { required, actual } => write!(
                f, "Insufficient samples: need at least {} to cover calibration, got {}", required, actual
            ),
            Self::NumericalInstability(what) => write!(f, "Numerical instability: {}", what),
            Self::NoStepsDetected => write!(f, "No steps detected"),
        }
    }
}
