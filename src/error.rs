use derive_builder::UninitializedFieldError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    InvalidNumber,
    InvalidArgument,
}

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Invalid input. Expected format: <NoOfTravelers> <Destination> <TripType>")]
    Format,

    #[error("Invalid number of travelers: {token}")]
    InvalidNumber { token: String },

    #[error("Invalid destination: {name}")]
    UnknownDestination { name: String },

    #[error("Invalid trip type: {name}")]
    UnknownTripType { name: String },

    #[error("Number of travelers must be greater than zero.")]
    NonPositiveTravelers,

    /// Bridge for `derive_builder`'s missing-field error. `TryFrom<args::Request>` always sets
    /// every field, so only direct builder use can produce it.
    #[error("incomplete booking request: {0}")]
    IncompleteRequest(#[from] UninitializedFieldError),
}

impl BookingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookingError::Format => ErrorKind::Format,
            BookingError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            BookingError::UnknownDestination { .. }
            | BookingError::UnknownTripType { .. }
            | BookingError::NonPositiveTravelers
            | BookingError::IncompleteRequest(_) => ErrorKind::InvalidArgument,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            // 2 is clap's usage error
            ErrorKind::Format => 3,
            ErrorKind::InvalidNumber => 4,
            ErrorKind::InvalidArgument => 5,
        }
    }
}
