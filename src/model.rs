use derive_builder::Builder;

use crate::args;
use crate::error::BookingError;

mod catalog;

pub use catalog::{Destination, TripType};

/// A validated booking. Only obtainable through [`BookingRequestBuilder`], which rejects
/// non-positive traveler counts.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "BookingError"))]
pub struct BookingRequest {
    traveler_count: i32,
    destination: Destination,
    trip_type: TripType,
}

impl BookingRequest {
    pub fn traveler_count(&self) -> i32 {
        self.traveler_count
    }

    pub fn destination(&self) -> Destination {
        self.destination
    }

    pub fn trip_type(&self) -> TripType {
        self.trip_type
    }

    pub fn total_cost(&self) -> u64 {
        // traveler_count > 0 once built
        u64::from(self.traveler_count.unsigned_abs())
            * u64::from(self.destination.unit_cost())
            * u64::from(self.trip_type.multiplier())
    }
}

impl BookingRequestBuilder {
    fn validate(&self) -> Result<(), BookingError> {
        match self.traveler_count {
            Some(count) if count <= 0 => Err(BookingError::NonPositiveTravelers),
            _ => Ok(()),
        }
    }
}

impl TryFrom<args::Request> for BookingRequest {
    type Error = BookingError;

    fn try_from(request: args::Request) -> Result<Self, Self::Error> {
        let args::Request {
            traveler_count,
            destination_name,
            trip_type_name,
        } = request;

        BookingRequestBuilder::default()
            .traveler_count(traveler_count)
            .destination(destination_name.parse()?)
            .trip_type(trip_type_name.parse()?)
            .build()
    }
}
