use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod error;
pub mod model;

use error::BookingError;
use model::BookingRequest;

fn main() -> Result<()> {
    let booking_args = args::Booking::parse();
    init_tracing(booking_args.verbose)?;

    match handle(&booking_args.input_line()) {
        Ok(total_cost) => {
            println!("Total Flight Cost: {total_cost}");
            Ok(())
        }
        Err(error) => {
            warn!(kind = ?error.kind(), "booking rejected: {error}");
            println!("{error}");
            std::process::exit(error.exit_code())
        }
    }
}

fn handle(input: &str) -> Result<u64, BookingError> {
    let request = args::parser::parse_request(input)?;
    debug!(?request, "parsed booking input");

    let booking = BookingRequest::try_from(request)?;
    debug!(
        travelers = booking.traveler_count(),
        destination = %booking.destination(),
        trip_type = %booking.trip_type(),
        "resolved booking"
    );

    let total_cost = booking.total_cost();
    info!(total_cost, "computed flight cost");

    Ok(total_cost)
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")
}
