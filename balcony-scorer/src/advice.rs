//! Warnings, tips and reasoning text attached to each recommendation.
//!
//! Generation is independent of scoring; both read the same inputs. The order
//! in which advisories are pushed is part of the contract.

use balcony_core::{
    CareLevel, EnvironmentReading, Orientation, PlantProfile, SoilType, SpaceDescriptor, Tip,
    Warning, WaterNeeds,
};

/// Pots larger than this, in litres, earn an explicit pot-size tip.
const LARGE_POT_LITRES: f64 = 10.0;

const GOOD_TIER: u8 = 80;
const FAIR_TIER: u8 = 60;

/// Detect incompatibilities in a fixed order.
///
/// The wind check only fires for west-facing balconies.
pub(crate) fn warnings(
    plant: &PlantProfile,
    space: &SpaceDescriptor,
    environment: &EnvironmentReading,
) -> Vec<Warning> {
    let mut found = Vec::new();
    if space.floor_area < plant.space.min_area {
        found.push(Warning::OutgrowsSpace {
            required_area: plant.space.min_area,
            available_area: space.floor_area,
        });
    }
    if space.peak_sun_hours < plant.sunlight.min_hours {
        found.push(Warning::InsufficientLight {
            required_hours: plant.sunlight.min_hours,
            available_hours: space.peak_sun_hours,
        });
    }
    if environment.temperature < plant.climate.min_temp {
        found.push(Warning::TooCold {
            min_temp: plant.climate.min_temp,
        });
    }
    if environment.temperature > plant.climate.max_temp {
        found.push(Warning::TooHot {
            max_temp: plant.climate.max_temp,
        });
    }
    if !plant.climate.wind_tolerant && space.orientation == Orientation::West {
        found.push(Warning::WindExposure);
    }
    found
}

/// Collect cultivation tips in a fixed order.
pub(crate) fn tips(plant: &PlantProfile) -> Vec<Tip> {
    let mut found = Vec::new();
    if plant.container.min_pot_size > LARGE_POT_LITRES {
        found.push(Tip::PotSize {
            min_litres: plant.container.min_pot_size,
        });
    }
    if plant.container.needs_staking {
        found.push(Tip::Staking);
    }
    match plant.care.water_needs {
        WaterNeeds::High => found.push(Tip::DailyMoistureCheck),
        WaterNeeds::Low => found.push(Tip::DroughtTolerant),
        WaterNeeds::Moderate => {}
    }
    if plant.care.care_level == CareLevel::Easy {
        found.push(Tip::BeginnerFriendly);
    }
    if plant.care.soil_type == SoilType::WellDraining {
        found.push(Tip::PottingMix);
    }
    found
}

/// Summarise the three sub-scores in one sentence.
pub(crate) fn reasoning(plant: &PlantProfile, space: u8, sun: u8, climate: u8) -> String {
    let space_clause = tiered(
        space,
        "fits your balcony comfortably",
        "fits with some careful placement",
        "will struggle for room",
    );
    let sun_clause = tiered(
        sun,
        "gets ideal sunlight",
        "gets workable sunlight",
        "gets the wrong amount of sun",
    );
    let climate_clause = tiered(
        climate,
        "suits your current climate",
        "copes with your current climate",
        "is stressed by your current climate",
    );
    format!(
        "{} {space_clause}, {sun_clause} and {climate_clause}.",
        plant.common_name
    )
}

const fn tiered(
    score: u8,
    good: &'static str,
    fair: &'static str,
    poor: &'static str,
) -> &'static str {
    if score >= GOOD_TIER {
        good
    } else if score >= FAIR_TIER {
        fair
    } else {
        poor
    }
}
