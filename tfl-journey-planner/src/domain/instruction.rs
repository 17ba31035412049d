//! Instruction text for a single leg.
//!
//! One sentence per leg, built from the leg alone with no neighbour
//! context. Walks say how far and for how long; rides name the line, the
//! stop to get off at, and the direction the service is heading.

use super::{Leg, Mode};

/// Renders the human-readable instruction for one leg.
pub fn format(leg: &Leg) -> String {
    // f64 Display drops a trailing ".0", so whole-metre distances render
    // as plain integers ("143 metres").
    let distance = leg.distance_metres();
    let duration = duration_phrase(leg.duration_seconds());

    match leg.mode() {
        Mode::Walking {
            street_name,
            turn_direction: None,
        } => {
            format!("Continue along {street_name} for {distance} metres ({duration}).")
        }
        Mode::Walking {
            street_name,
            turn_direction: Some(turn),
        } => {
            format!("Turn {turn} on to {street_name}, continue for {distance} metres ({duration}).")
        }
        Mode::Bus {
            line_name,
            destination,
            towards,
        } => ride(line_name, "bus", destination, towards),
        Mode::Rail {
            line_name,
            destination,
            towards,
        } => ride(line_name, "train", destination, towards),
        Mode::OtherVehicle {
            mode_word,
            line_name,
            destination,
            towards,
        } => ride(line_name, mode_word, destination, towards),
    }
}

fn ride(line: &str, mode_word: &str, destination: &str, towards: &str) -> String {
    format!("{line} {mode_word} to {destination} / {line} {mode_word} towards {towards}")
}

/// Splits a duration into whole minutes and leftover seconds.
fn duration_phrase(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}, {}", counted(minutes, "minute"), counted(seconds, "second"))
}

fn counted(n: u32, singular: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {singular}s")
    }
}
