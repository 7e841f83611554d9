//! Data-authoring checks applied to every catalog entry.

use std::collections::HashSet;

use balcony_core::PlantProfile;

use crate::CatalogError;

const MAX_DAILY_HOURS: f64 = 24.0;
const MAX_HUMIDITY: f64 = 100.0;

/// Check every profile in order; the first failure wins.
pub(crate) fn validate_profiles(profiles: &[PlantProfile]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(profiles.len());
    for (index, profile) in profiles.iter().enumerate() {
        if profile.id.trim().is_empty() {
            return Err(CatalogError::EmptyId { index });
        }
        if !seen.insert(profile.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                id: profile.id.clone(),
            });
        }
        validate_profile(profile)?;
    }
    Ok(())
}

fn validate_profile(profile: &PlantProfile) -> Result<(), CatalogError> {
    for (field, value) in numeric_fields(profile) {
        if !value.is_finite() {
            return Err(CatalogError::NonFinite {
                id: profile.id.clone(),
                field,
            });
        }
    }
    if profile.space.min_area <= 0.0 {
        return Err(CatalogError::NonPositiveArea {
            id: profile.id.clone(),
        });
    }

    let sunlight = &profile.sunlight;
    let climate = &profile.climate;
    let humidity = climate.humidity_range;
    let ranges = [
        (
            "sun hours",
            ordered_within(sunlight.min_hours, sunlight.max_hours, 0.0, MAX_DAILY_HOURS),
        ),
        ("temperature", climate.min_temp <= climate.max_temp),
        (
            "humidity",
            ordered_within(humidity.min, humidity.max, 0.0, MAX_HUMIDITY),
        ),
    ];
    match ranges.into_iter().find(|(_, valid)| !valid) {
        Some((field, _)) => Err(CatalogError::InvalidRange {
            id: profile.id.clone(),
            field,
        }),
        None => Ok(()),
    }
}

fn ordered_within(min: f64, max: f64, floor: f64, ceiling: f64) -> bool {
    floor <= min && min <= max && max <= ceiling
}

fn numeric_fields(profile: &PlantProfile) -> [(&'static str, f64); 13] {
    [
        ("minimum area", profile.space.min_area),
        ("maximum height", profile.space.max_height),
        ("spread width", profile.space.spread_width),
        ("minimum container volume", profile.space.min_container_volume),
        ("minimum sun hours", profile.sunlight.min_hours),
        ("maximum sun hours", profile.sunlight.max_hours),
        ("minimum temperature", profile.climate.min_temp),
        ("maximum temperature", profile.climate.max_temp),
        ("minimum humidity", profile.climate.humidity_range.min),
        ("maximum humidity", profile.climate.humidity_range.max),
        ("mature height", profile.growth.mature_height),
        ("mature width", profile.growth.mature_width),
        ("minimum pot size", profile.container.min_pot_size),
    ]
}
