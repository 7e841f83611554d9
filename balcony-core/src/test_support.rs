//! Fixtures shared by unit and behaviour tests across the workspace.

use crate::{
    CareLevel, CareProfile, ClimateTolerance, ContainerSuitability, EnvironmentError,
    EnvironmentProvider, EnvironmentReading, FloorMaterial, GrowthProfile, GrowthRate,
    HumidityRange, LightType, Orientation, PlantCategory, PlantProfile, ScoredRecommendation,
    SoilType, SpaceDescriptor, SpaceRequirements, SunlightNeeds, WaterNeeds,
};

/// Build a well-formed, basil-like profile keyed by `id`.
///
/// The common name is `id` with its first letter upper-cased. Tests adjust
/// individual fields as needed.
#[must_use]
pub fn sample_profile(id: &str) -> PlantProfile {
    PlantProfile {
        id: id.to_owned(),
        common_name: capitalise(id),
        scientific_name: format!("Planta {id}"),
        category: PlantCategory::Herb,
        space: SpaceRequirements {
            min_area: 0.2,
            max_height: 0.6,
            spread_width: 0.3,
            min_container_volume: 5.0,
        },
        sunlight: SunlightNeeds {
            min_hours: 6.0,
            max_hours: 10.0,
            light_type: LightType::FullSun,
            best_orientation: vec![Orientation::South, Orientation::East, Orientation::West],
        },
        climate: ClimateTolerance {
            min_temp: 10.0,
            max_temp: 28.0,
            humidity_range: HumidityRange::new(40.0, 60.0),
            drought_tolerant: false,
            wind_tolerant: false,
        },
        growth: GrowthProfile {
            mature_height: 0.6,
            mature_width: 0.3,
            growth_rate: GrowthRate::Fast,
            bloom_season: Vec::new(),
            bloom_colors: Vec::new(),
        },
        container: ContainerSuitability {
            suitable: true,
            min_pot_size: 5.0,
            needs_staking: false,
            spreading: false,
        },
        care: CareProfile {
            care_level: CareLevel::Easy,
            water_needs: WaterNeeds::High,
            soil_type: SoilType::WellDraining,
        },
    }
}

/// A ten square metre, south-facing balcony with six hours of sun.
#[must_use]
pub const fn sample_space() -> SpaceDescriptor {
    SpaceDescriptor {
        floor_area: 10.0,
        railing_height: 1.1,
        orientation: Orientation::South,
        peak_sun_hours: 6.0,
        floor_material: FloorMaterial::Tile,
    }
}

/// Wrap `plant` in a recommendation with every score set to `score`.
#[must_use]
pub const fn recommendation_for(plant: &PlantProfile, score: u8) -> ScoredRecommendation<'_> {
    ScoredRecommendation {
        plant,
        overall_score: score,
        space_score: score,
        sun_score: score,
        climate_score: score,
        reasoning: String::new(),
        warnings: Vec::new(),
        tips: Vec::new(),
    }
}

/// Provider that is never reachable.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableEnvironment;

impl EnvironmentProvider for UnavailableEnvironment {
    fn current_reading(&self) -> Result<EnvironmentReading, EnvironmentError> {
        Err(EnvironmentError::Unavailable {
            reason: "no weather source reachable".to_owned(),
        })
    }
}

fn capitalise(id: &str) -> String {
    let mut chars = id.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
