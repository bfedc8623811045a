use clap::Parser;
use itertools::Itertools;

#[derive(Parser, Debug)]
#[clap(
    about = "Compute the total cost of a flight booking",
    allow_hyphen_values = true,
    after_help = "Exit codes: 0 success, 2 usage error, 3 malformed booking line, \
                  4 invalid traveler count, 5 unknown destination/trip type or count <= 0."
)]
pub struct Booking {
    /// Booking as `<NoOfTravelers> <Destination> <TripType>`, e.g. "2 Paris round".
    #[clap(name = "INPUT", required = true, multiple_values = true)]
    pub input: Vec<String>,

    /// Log parsing and pricing steps to stderr.
    #[clap(short, long)]
    pub verbose: bool,
}

impl Booking {
    /// Positional words joined back into a single input line.
    pub fn input_line(&self) -> String {
        self.input.iter().join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub traveler_count: i32,
    pub destination_name: String,
    pub trip_type_name: String,
}

pub mod parser {
    use itertools::Itertools;

    use crate::args::Request;
    use crate::error::BookingError;

    pub fn parse_request(input: &str) -> Result<Request, BookingError> {
        if let [traveler_count, destination_name, trip_type_name] =
            input.split_whitespace().collect_vec()[..]
        {
            Ok(Request {
                traveler_count: traveler_count
                    .parse()
                    .map_err(|_| BookingError::InvalidNumber {
                        token: traveler_count.to_string(),
                    })?,
                destination_name: destination_name.to_string(),
                trip_type_name: trip_type_name.to_string(),
            })
        } else {
            Err(BookingError::Format)
        }
    }
}
