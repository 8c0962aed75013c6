//! Validation errors raised when building domain values

/// Error type for rejected domain input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid coordinate: lat {lat}, lng {lng} (expected lat in [-90, 90], lng in [-180, 180])")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("Invalid rating: {0} (expected 1-5)")]
    InvalidRating(u8),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
