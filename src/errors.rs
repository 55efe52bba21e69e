use thiserror::Error;

/// Form problems caught before anything is sent to the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a date and time slot")]
    MissingSlot,

    #[error("Please enter your full name")]
    MissingName,

    #[error("Please enter your email address")]
    MissingEmail,

    #[error("Please select a rating")]
    MissingRating,

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("Please select both date and time")]
    MissingDateAndTime,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Time slot {0} is not offered for the selected date")]
    UnknownSlot(String),
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Preferences error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Please sign in first")]
    NotSignedIn,

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type BookingResult<T> = Result<T, BookingError>;
