//! Journey aggregate.
//!
//! A `Journey` is one complete candidate itinerary from origin to
//! destination, composed of ordered legs.

use super::{DomainError, GeoPoint, Leg, instruction, path};

/// A complete candidate itinerary.
///
/// Owns its legs exclusively. The instruction list and map path are
/// derived from the legs on every call, so they can never drift from the
/// stored sequence.
///
/// # Invariants
///
/// - At least one leg
/// - Leg order matches the raw response, and fixes both the instruction
///   order and the map-path concatenation order
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    start_date_time: String,
    legs: Vec<Leg>,
}

impl Journey {
    /// Constructs a journey from parsed legs.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `legs` is empty.
    pub fn new(start_date_time: impl Into<String>, legs: Vec<Leg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyJourney);
        }

        Ok(Journey {
            start_date_time: start_date_time.into(),
            legs,
        })
    }

    /// Returns the journey start time exactly as the service sent it.
    ///
    /// The value is carried as text and is not validated beyond that;
    /// callers parse it if they need a timestamp.
    pub fn start_date_time(&self) -> &str {
        &self.start_date_time
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Renders one instruction per leg, in travel order.
    pub fn instructions(&self) -> Vec<String> {
        self.legs.iter().map(instruction::format).collect()
    }

    /// Returns the flattened geographic path for map display.
    pub fn map_path(&self) -> Vec<GeoPoint> {
        path::assemble(&self.legs)
    }

    /// Returns the total distance across all legs, in metres.
    pub fn total_distance_metres(&self) -> f64 {
        self.legs.iter().map(Leg::distance_metres).sum()
    }

    /// Returns the total duration across all legs, in seconds.
    pub fn total_duration_seconds(&self) -> u64 {
        self.legs
            .iter()
            .map(|leg| u64::from(leg.duration_seconds()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mode;

    fn p(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude)
    }

    fn walk(street: &str, distance: f64, duration: u32, path: Vec<GeoPoint>) -> Leg {
        let mode = Mode::Walking {
            street_name: street.to_string(),
            turn_direction: None,
        };
        Leg::new(mode, distance, duration, path).unwrap()
    }

    fn bus(path: Vec<GeoPoint>) -> Leg {
        let mode = Mode::Bus {
            line_name: "H25".to_string(),
            destination: "Bedfont Library".to_string(),
            towards: "Hatton Cross".to_string(),
        };
        Leg::new(mode, 1200.0, 300, path).unwrap()
    }

    #[test]
    fn journey_must_have_legs() {
        let result = Journey::new("2016-02-01T07:30:00", vec![]);

        assert!(matches!(result, Err(DomainError::EmptyJourney)));
    }

    #[test]
    fn one_instruction_per_leg_in_order() {
        let legs = vec![
            walk("Fruen Road", 143.0, 128, vec![p(51.0, -0.1), p(51.1, -0.2)]),
            bus(vec![p(51.2, -0.3)]),
            walk("Staines Road", 64.0, 57, vec![p(51.3, -0.4), p(51.4, -0.5)]),
        ];
        let journey = Journey::new("2016-02-01T07:30:00", legs).unwrap();

        let instructions = journey.instructions();
        assert_eq!(instructions.len(), journey.leg_count());
        assert!(instructions[0].starts_with("Continue along Fruen Road"));
        assert!(instructions[1].starts_with("H25 bus to Bedfont Library"));
        assert!(instructions[2].starts_with("Continue along Staines Road"));
    }

    #[test]
    fn map_path_concatenates_leg_paths() {
        let a = p(51.0, -0.1);
        let b = p(51.1, -0.2);
        let c = p(51.2, -0.3);
        let legs = vec![
            walk("Fruen Road", 143.0, 128, vec![a, b]),
            bus(vec![b, c]),
        ];
        let journey = Journey::new("2016-02-01T07:30:00", legs).unwrap();

        assert_eq!(journey.map_path(), vec![a, b, b, c]);
    }

    #[test]
    fn start_date_time_is_returned_verbatim() {
        let legs = vec![bus(vec![p(51.0, -0.1)])];
        let journey = Journey::new("not a timestamp at all", legs).unwrap();

        assert_eq!(journey.start_date_time(), "not a timestamp at all");
    }

    #[test]
    fn totals_sum_over_legs() {
        let legs = vec![
            walk("Fruen Road", 143.0, 128, vec![p(51.0, -0.1), p(51.1, -0.2)]),
            walk("Bedfont Lane", 172.0, 153, vec![p(51.2, -0.3), p(51.3, -0.4)]),
        ];
        let journey = Journey::new("2016-02-01T07:30:00", legs).unwrap();

        assert_eq!(journey.total_distance_metres(), 315.0);
        assert_eq!(journey.total_duration_seconds(), 281);
    }

    #[test]
    fn derived_views_are_stable_across_calls() {
        let legs = vec![bus(vec![p(51.0, -0.1), p(51.1, -0.2)])];
        let journey = Journey::new("2016-02-01T07:30:00", legs).unwrap();

        assert_eq!(journey.instructions(), journey.instructions());
        assert_eq!(journey.map_path(), journey.map_path());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Mode;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn arb_point() -> impl Strategy<Value = GeoPoint> {
        (-90.0f64..90.0, -180.0f64..180.0)
            .prop_map(|(latitude, longitude)| GeoPoint::new(latitude, longitude))
    }

    fn arb_turn() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            Just(Some("left".to_string())),
            Just(Some("right".to_string())),
        ]
    }

    fn arb_walk_leg() -> impl Strategy<Value = Leg> {
        (
            "[A-Za-z]{1,12}",
            arb_turn(),
            0.0f64..5000.0,
            0u32..7200,
            vec(arb_point(), 2..12),
        )
            .prop_map(|(street, turn, distance, duration, path)| {
                let mode = Mode::Walking {
                    street_name: street,
                    turn_direction: turn,
                };
                Leg::new(mode, distance, duration, path).unwrap()
            })
    }

    fn arb_ride_leg() -> impl Strategy<Value = Leg> {
        (
            "[A-Z][0-9]{1,3}",
            "[A-Za-z]{1,12}",
            "[A-Za-z]{1,12}",
            0.0f64..50000.0,
            0u32..7200,
            vec(arb_point(), 1..12),
        )
            .prop_map(|(line, destination, towards, distance, duration, path)| {
                let mode = Mode::Bus {
                    line_name: line,
                    destination,
                    towards,
                };
                Leg::new(mode, distance, duration, path).unwrap()
            })
    }

    fn arb_leg() -> impl Strategy<Value = Leg> {
        prop_oneof![arb_walk_leg(), arb_ride_leg()]
    }

    proptest! {
        /// Property: one instruction per leg, never fewer or more.
        #[test]
        fn instruction_count_matches_leg_count(legs in vec(arb_leg(), 1..8)) {
            let journey = Journey::new("2016-02-01T07:30:00", legs).unwrap();

            prop_assert_eq!(journey.instructions().len(), journey.leg_count());
        }

        /// Property: the map path is the exact concatenation of the leg
        /// paths, shared boundary points included.
        #[test]
        fn map_path_is_exact_concatenation(legs in vec(arb_leg(), 1..8)) {
            let journey = Journey::new("2016-02-01T07:30:00", legs.clone()).unwrap();

            let expected: Vec<GeoPoint> = legs
                .iter()
                .flat_map(|leg| leg.path().iter().copied())
                .collect();
            prop_assert_eq!(journey.map_path(), expected);
        }

        /// Property: instruction order follows leg order.
        #[test]
        fn instructions_follow_leg_order(legs in vec(arb_leg(), 1..8)) {
            let journey = Journey::new("2016-02-01T07:30:00", legs.clone()).unwrap();

            let expected: Vec<String> = legs.iter().map(instruction::format).collect();
            prop_assert_eq!(journey.instructions(), expected);
        }

        /// Property: a walking instruction renders `duration / 60` whole
        /// minutes and `duration % 60` leftover seconds.
        #[test]
        fn duration_split_uses_integer_division(duration in 0u32..36000) {
            let mode = Mode::Walking {
                street_name: "Fruen Road".to_string(),
                turn_direction: None,
            };
            let path = vec![GeoPoint::new(51.0, -0.4), GeoPoint::new(51.1, -0.4)];
            let leg = Leg::new(mode, 100.0, duration, path).unwrap();

            let minutes = duration / 60;
            let seconds = duration % 60;
            prop_assert_eq!(minutes * 60 + seconds, duration);

            let text = instruction::format(&leg);
            let minute_needle = format!("({} minute", minutes);
            let second_needle = format!(", {} second", seconds);
            prop_assert!(text.contains(&minute_needle));
            prop_assert!(text.contains(&second_needle));
        }
    }
}
