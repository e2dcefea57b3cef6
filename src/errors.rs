//! Error Types for Table Lookups
//!
//! The comfort computation itself is total and never fails: bad inputs are
//! normalized and numerical degeneracy is contained internally. The only
//! fallible surface is resolving garment and activity codes against the
//! static tables, which callers may prefer to surface to a user instead of
//! silently defaulting.
//!
//! Errors are kept small and `Copy`, with no heap allocation, so they cost
//! nothing to return from hot paths and work without `std`.

use thiserror_no_std::Error;

/// Result type for table lookup operations
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors from resolving codes against the clothing/activity tables
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// Garment code not present in the clothing table for any gender category
    #[error("garment code not present in clothing table")]
    UnknownGarment,

    /// Activity code not present in the activity table
    #[error("activity code not present in activity table")]
    UnknownActivity,
}

#[cfg(feature = "defmt")]
impl defmt::Format for LookupError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnknownGarment => defmt::write!(fmt, "unknown garment code"),
            Self::UnknownActivity => defmt::write!(fmt, "unknown activity code"),
        }
    }
}
