//! The three independent sub-scores.
//!
//! Space and climate scores stay within `0..=100`. The sun score reaches 115
//! when the orientation bonus applies.

use balcony_core::{EnvironmentReading, PlantProfile, SpaceDescriptor};

/// Overhead clearance assumed for every balcony, in metres.
pub const CLEARANCE_HEIGHT_M: f64 = 2.5;
/// Bonus added to close sun matches when the balcony faces a preferred way.
pub const ORIENTATION_BONUS: u8 = 15;

const SPACE_TOO_SMALL: u8 = 20;
const SPACE_TOO_TALL: u8 = 40;
const SPACE_UNDERUSED: u8 = 60;
const SPACE_IDEAL: u8 = 100;
const SPACE_TIGHT: u8 = 80;
const SPACE_OVERCROWDED: u8 = 30;

const SUN_TOO_LITTLE: u8 = 30;
const SUN_TOO_MUCH: u8 = 50;
const SUN_FLOOR: f64 = 40.0;

const CLIMATE_FULL: u8 = 100;
const TEMPERATURE_PENALTY: u8 = 40;
const HUMIDITY_PENALTY: u8 = 20;

/// Score how well the plant's footprint suits the floor area.
#[expect(
    clippy::float_arithmetic,
    reason = "utilisation is the ratio of required to available area"
)]
pub(crate) fn space_score(plant: &PlantProfile, space: &SpaceDescriptor) -> u8 {
    let needs = &plant.space;
    if space.floor_area < needs.min_area {
        return SPACE_TOO_SMALL;
    }
    if needs.max_height > CLEARANCE_HEIGHT_M {
        return SPACE_TOO_TALL;
    }
    let utilisation = needs.min_area / space.floor_area;
    if utilisation < 0.10 {
        SPACE_UNDERUSED
    } else if utilisation <= 0.50 {
        SPACE_IDEAL
    } else if utilisation <= 1.00 {
        SPACE_TIGHT
    } else {
        SPACE_OVERCROWDED
    }
}

/// Score how close the balcony's peak sun is to the plant's ideal.
///
/// Matches within three hours of the ideal earn [`ORIENTATION_BONUS`] when
/// the balcony faces a preferred direction. Matches further away do not.
#[expect(
    clippy::float_arithmetic,
    reason = "distance from the ideal drives the score"
)]
pub(crate) fn sun_score(plant: &PlantProfile, space: &SpaceDescriptor) -> u8 {
    let sunlight = &plant.sunlight;
    let hours = space.peak_sun_hours;
    if hours < sunlight.min_hours {
        return SUN_TOO_LITTLE;
    }
    if hours > sunlight.max_hours {
        return SUN_TOO_MUCH;
    }

    let diff = (hours - sunlight.ideal_hours()).abs();
    let bonus = if sunlight.prefers(space.orientation) {
        ORIENTATION_BONUS
    } else {
        0
    };
    if diff <= 1.0 {
        100 + bonus
    } else if diff <= 2.0 {
        85 + bonus
    } else if diff <= 3.0 {
        70 + bonus
    } else {
        to_score(SUN_FLOOR.max(100.0 - diff * 10.0))
    }
}

/// Score the current reading against the plant's climate tolerance.
pub(crate) fn climate_score(plant: &PlantProfile, environment: &EnvironmentReading) -> u8 {
    let climate = &plant.climate;
    let mut score = CLIMATE_FULL;
    if !climate.tolerates_temperature(environment.temperature) {
        score = score.saturating_sub(TEMPERATURE_PENALTY);
    }
    if !climate.humidity_range.contains(environment.humidity) {
        score = score.saturating_sub(HUMIDITY_PENALTY);
    }
    score
}

/// Round a raw score half away from zero into the `u8` range.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is rounded and clamped into the u8 range before the cast"
)]
pub(crate) fn to_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, f64::from(u8::MAX)) as u8
}
