use thiserror::Error;

/// Errors originating from the core precision-doubling crate.
///
/// Arithmetic never fails; these only come from validating inputs that
/// describe a precision level.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid mantissa width: {0} bits (must be in 2..=104)")]
    InvalidMantissaBits(u32),
}
