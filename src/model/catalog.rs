use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, IntoStaticStr)]
pub enum Destination {
    Paris,
    Tokyo,
    Cairo,
}

impl Destination {
    pub fn display_name(self) -> &'static str {
        self.into()
    }

    /// Base fare for a single traveler, one way.
    pub fn unit_cost(self) -> u32 {
        match self {
            Destination::Paris => 250,
            Destination::Tokyo => 450,
            Destination::Cairo => 300,
        }
    }
}

impl FromStr for Destination {
    type Err = BookingError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        find_by_name(name).ok_or_else(|| BookingError::UnknownDestination {
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, IntoStaticStr)]
pub enum TripType {
    #[strum(serialize = "one-way")]
    OneWay,
    #[strum(serialize = "round")]
    Round,
}

impl TripType {
    pub fn display_name(self) -> &'static str {
        self.into()
    }

    pub fn multiplier(self) -> u32 {
        match self {
            TripType::OneWay => 1,
            TripType::Round => 2,
        }
    }
}

impl FromStr for TripType {
    type Err = BookingError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        find_by_name(name).ok_or_else(|| BookingError::UnknownTripType {
            name: name.to_string(),
        })
    }
}

fn find_by_name<T>(name: &str) -> Option<T>
where
    T: IntoEnumIterator + Into<&'static str> + Copy,
{
    T::iter().find(|member| {
        let display_name: &'static str = (*member).into();
        fold_case(display_name).eq(fold_case(name))
    })
}

/// Upper then lower per char, so `ı` matches `i` and the Kelvin sign matches `k`.
fn fold_case(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
}

#[cfg(test)]
pub mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn destination_lookup_ignores_case() {
        for name in ["Paris", "paris", "PARIS", "pArIs"] {
            assert_eq!(name.parse::<Destination>().unwrap(), Destination::Paris);
        }
    }

    #[test]
    fn every_member_resolves_from_its_display_name() {
        for destination in Destination::iter() {
            assert_eq!(
                destination.to_string().parse::<Destination>().unwrap(),
                destination
            );
        }

        for trip_type in TripType::iter() {
            assert_eq!(
                trip_type.to_string().to_uppercase().parse::<TripType>().unwrap(),
                trip_type
            );
        }
    }

    #[test]
    fn lookup_folds_case_beyond_ascii() {
        assert_eq!("Par\u{131}s".parse::<Destination>().unwrap(), Destination::Paris);
        assert_eq!("To\u{212A}yo".parse::<Destination>().unwrap(), Destination::Tokyo);
        assert_eq!("ROUND".parse::<TripType>().unwrap(), TripType::Round);
    }

    #[test]
    fn display_matches_lookup_names() {
        assert_eq!(TripType::OneWay.to_string(), "one-way");
        assert_eq!(TripType::Round.display_name(), "round");
        assert_eq!(Destination::Cairo.to_string(), "Cairo");
    }

    #[test]
    fn unknown_destination() {
        let error = "Berlin".parse::<Destination>().unwrap_err();

        assert_eq!(error.to_string(), "Invalid destination: Berlin");
    }

    #[test]
    fn unknown_trip_type() {
        let error = "oneway".parse::<TripType>().unwrap_err();

        assert_eq!(error.to_string(), "Invalid trip type: oneway");
    }

    #[test]
    fn fixed_prices() {
        let prices = Destination::iter()
            .map(|destination| (destination.display_name(), destination.unit_cost()))
            .collect_vec();

        assert_eq!(prices, vec![("Paris", 250), ("Tokyo", 450), ("Cairo", 300)]);
        assert_eq!(TripType::OneWay.multiplier(), 1);
        assert_eq!(TripType::Round.multiplier(), 2);
    }
}
