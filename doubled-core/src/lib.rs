pub mod compound;
pub mod doubled;
pub mod eft;
pub mod error;
pub mod precision;
pub mod real;

// Re-export primary types for convenience.
pub use doubled::{DoubleDouble, Doubled, OctDouble, QuadDouble};
pub use error::CoreError;
pub use precision::PrecisionInfo;
pub use real::{split_constant, Real};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
