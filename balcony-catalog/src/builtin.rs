//! The built-in catalog shipped with the engine.
//!
//! One entry per [`PlantCategory`], in a fixed order that doubles as the
//! tie-break order when scores are equal.

use balcony_core::{
    CareLevel, CareProfile, ClimateTolerance, ContainerSuitability, GrowthProfile, GrowthRate,
    HumidityRange, LightType, Orientation, PlantCategory, PlantProfile, Season, SoilType,
    SpaceRequirements, SunlightNeeds, WaterNeeds,
};

/// Every built-in profile, in catalog order.
pub(crate) fn profiles() -> Vec<PlantProfile> {
    vec![
        basil(),
        cherry_tomato(),
        petunia(),
        boston_fern(),
        echeveria(),
        jasmine_vine(),
        lavender(),
    ]
}

/// Sun-loving culinary herb; the classic first balcony plant.
fn basil() -> PlantProfile {
    PlantProfile {
        id: "basil".to_owned(),
        common_name: "Basil".to_owned(),
        scientific_name: "Ocimum basilicum".to_owned(),
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
            bloom_season: vec![Season::Summer],
            bloom_colors: vec!["white".to_owned()],
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

/// Heavy-cropping vine tomato; needs a deep pot and a stake.
fn cherry_tomato() -> PlantProfile {
    PlantProfile {
        id: "cherry-tomato".to_owned(),
        common_name: "Cherry Tomato".to_owned(),
        scientific_name: "Solanum lycopersicum var. cerasiforme".to_owned(),
        category: PlantCategory::Vegetable,
        space: SpaceRequirements {
            min_area: 0.5,
            max_height: 1.8,
            spread_width: 0.6,
            min_container_volume: 20.0,
        },
        sunlight: SunlightNeeds {
            min_hours: 6.0,
            max_hours: 12.0,
            light_type: LightType::FullSun,
            best_orientation: vec![
                Orientation::South,
                Orientation::Southeast,
                Orientation::Southwest,
            ],
        },
        climate: ClimateTolerance {
            min_temp: 12.0,
            max_temp: 32.0,
            humidity_range: HumidityRange::new(40.0, 70.0),
            drought_tolerant: false,
            wind_tolerant: false,
        },
        growth: GrowthProfile {
            mature_height: 1.5,
            mature_width: 0.6,
            growth_rate: GrowthRate::Fast,
            bloom_season: vec![Season::Summer],
            bloom_colors: vec!["yellow".to_owned()],
        },
        container: ContainerSuitability {
            suitable: true,
            min_pot_size: 20.0,
            needs_staking: true,
            spreading: false,
        },
        care: CareProfile {
            care_level: CareLevel::Moderate,
            water_needs: WaterNeeds::High,
            soil_type: SoilType::WellDraining,
        },
    }
}

/// Long-flowering trailing annual for railings and window boxes.
fn petunia() -> PlantProfile {
    PlantProfile {
        id: "petunia".to_owned(),
        common_name: "Petunia".to_owned(),
        scientific_name: "Petunia x atkinsiana".to_owned(),
        category: PlantCategory::Flowering,
        space: SpaceRequirements {
            min_area: 0.15,
            max_height: 0.4,
            spread_width: 0.45,
            min_container_volume: 4.0,
        },
        sunlight: SunlightNeeds {
            min_hours: 5.0,
            max_hours: 10.0,
            light_type: LightType::FullSun,
            best_orientation: vec![Orientation::South, Orientation::West, Orientation::Southwest],
        },
        climate: ClimateTolerance {
            min_temp: 7.0,
            max_temp: 32.0,
            humidity_range: HumidityRange::new(30.0, 70.0),
            drought_tolerant: false,
            wind_tolerant: true,
        },
        growth: GrowthProfile {
            mature_height: 0.3,
            mature_width: 0.45,
            growth_rate: GrowthRate::Medium,
            bloom_season: vec![Season::Spring, Season::Summer, Season::Autumn],
            bloom_colors: vec!["purple".to_owned(), "pink".to_owned(), "white".to_owned()],
        },
        container: ContainerSuitability {
            suitable: true,
            min_pot_size: 4.0,
            needs_staking: false,
            spreading: true,
        },
        care: CareProfile {
            care_level: CareLevel::Easy,
            water_needs: WaterNeeds::Moderate,
            soil_type: SoilType::WellDraining,
        },
    }
}

/// Shade-loving fern for north-facing balconies.
fn boston_fern() -> PlantProfile {
    PlantProfile {
        id: "boston-fern".to_owned(),
        common_name: "Boston Fern".to_owned(),
        scientific_name: "Nephrolepis exaltata".to_owned(),
        category: PlantCategory::Foliage,
        space: SpaceRequirements {
            min_area: 0.3,
            max_height: 0.9,
            spread_width: 0.9,
            min_container_volume: 10.0,
        },
        sunlight: SunlightNeeds {
            min_hours: 0.0,
            max_hours: 3.0,
            light_type: LightType::FullShade,
            best_orientation: vec![Orientation::North, Orientation::Northeast],
        },
        climate: ClimateTolerance {
            min_temp: 13.0,
            max_temp: 30.0,
            humidity_range: HumidityRange::new(50.0, 80.0),
            drought_tolerant: false,
            wind_tolerant: false,
        },
        growth: GrowthProfile {
            mature_height: 0.9,
            mature_width: 0.9,
            growth_rate: GrowthRate::Medium,
            bloom_season: Vec::new(),
            bloom_colors: Vec::new(),
        },
        container: ContainerSuitability {
            suitable: true,
            min_pot_size: 10.0,
            needs_staking: false,
            spreading: false,
        },
        care: CareProfile {
            care_level: CareLevel::Moderate,
            water_needs: WaterNeeds::High,
            soil_type: SoilType::Moist,
        },
    }
}

/// Compact rosette succulent that tolerates neglect.
fn echeveria() -> PlantProfile {
    PlantProfile {
        id: "echeveria".to_owned(),
        common_name: "Echeveria".to_owned(),
        scientific_name: "Echeveria elegans".to_owned(),
        category: PlantCategory::Succulent,
        space: SpaceRequirements {
            min_area: 0.05,
            max_height: 0.15,
            spread_width: 0.2,
            min_container_volume: 1.0,
        },
        sunlight: SunlightNeeds {
            min_hours: 4.0,
            max_hours: 12.0,
            light_type: LightType::FullSun,
            best_orientation: vec![Orientation::South, Orientation::East, Orientation::Southeast],
        },
        climate: ClimateTolerance {
            min_temp: 5.0,
            max_temp: 35.0,
            humidity_range: HumidityRange::new(10.0, 50.0),
            drought_tolerant: true,
            wind_tolerant: true,
        },
        growth: GrowthProfile {
            mature_height: 0.15,
            mature_width: 0.2,
            growth_rate: GrowthRate::Slow,
            bloom_season: vec![Season::Summer],
            bloom_colors: vec!["coral".to_owned(), "pink".to_owned()],
        },
        container: ContainerSuitability {
            suitable: true,
            min_pot_size: 1.0,
            needs_staking: false,
            spreading: false,
        },
        care: CareProfile {
            care_level: CareLevel::Easy,
            water_needs: WaterNeeds::Low,
            soil_type: SoilType::Sandy,
        },
    }
}

/// Fragrant evergreen climber; taller than a standard balcony.
fn jasmine_vine() -> PlantProfile {
    PlantProfile {
        id: "jasmine-vine".to_owned(),
        common_name: "Jasmine Vine".to_owned(),
        scientific_name: "Trachelospermum jasminoides".to_owned(),
        category: PlantCategory::Vine,
        space: SpaceRequirements {
            min_area: 0.3,
            max_height: 3.0,
            spread_width: 1.0,
            min_container_volume: 15.0,
        },
        sunlight: SunlightNeeds {
            min_hours: 4.0,
            max_hours: 8.0,
            light_type: LightType::PartialShade,
            best_orientation: vec![Orientation::South, Orientation::East, Orientation::West],
        },
        climate: ClimateTolerance {
            min_temp: -5.0,
            max_temp: 35.0,
            humidity_range: HumidityRange::new(40.0, 70.0),
            drought_tolerant: false,
            wind_tolerant: false,
        },
        growth: GrowthProfile {
            mature_height: 3.0,
            mature_width: 1.0,
            growth_rate: GrowthRate::Medium,
            bloom_season: vec![Season::Spring, Season::Summer],
            bloom_colors: vec!["white".to_owned()],
        },
        container: ContainerSuitability {
            suitable: true,
            min_pot_size: 15.0,
            needs_staking: true,
            spreading: true,
        },
        care: CareProfile {
            care_level: CareLevel::Moderate,
            water_needs: WaterNeeds::Moderate,
            soil_type: SoilType::WellDraining,
        },
    }
}

/// Hardy aromatic shrub that thrives on hot, windy balconies.
fn lavender() -> PlantProfile {
    PlantProfile {
        id: "lavender".to_owned(),
        common_name: "Lavender".to_owned(),
        scientific_name: "Lavandula angustifolia".to_owned(),
        category: PlantCategory::Shrub,
        space: SpaceRequirements {
            min_area: 0.25,
            max_height: 0.6,
            spread_width: 0.6,
            min_container_volume: 10.0,
        },
        sunlight: SunlightNeeds {
            min_hours: 6.0,
            max_hours: 12.0,
            light_type: LightType::FullSun,
            best_orientation: vec![Orientation::South, Orientation::Southwest, Orientation::West],
        },
        climate: ClimateTolerance {
            min_temp: -10.0,
            max_temp: 35.0,
            humidity_range: HumidityRange::new(20.0, 50.0),
            drought_tolerant: true,
            wind_tolerant: true,
        },
        growth: GrowthProfile {
            mature_height: 0.6,
            mature_width: 0.6,
            growth_rate: GrowthRate::Medium,
            bloom_season: vec![Season::Summer],
            bloom_colors: vec!["purple".to_owned()],
        },
        container: ContainerSuitability {
            suitable: true,
            min_pot_size: 12.0,
            needs_staking: false,
            spreading: false,
        },
        care: CareProfile {
            care_level: CareLevel::Easy,
            water_needs: WaterNeeds::Low,
            soil_type: SoilType::WellDraining,
        },
    }
}
