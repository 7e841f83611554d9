#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for ranking the built-in catalog.

use std::cell::{Cell, RefCell};

use balcony_catalog::PlantCatalog;
use balcony_core::{
    EnvironmentReading, FloorMaterial, Orientation, RecommendError, ScoredRecommendation,
    SpaceDescriptor, Warning,
};
use balcony_scorer::score_all;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

type Ranking = Result<Vec<ScoredRecommendation<'static>>, RecommendError>;

#[derive(Default)]
struct RankingWorld {
    space: Cell<Option<SpaceDescriptor>>,
    environment: Cell<EnvironmentReading>,
    outcome: RefCell<Option<Ranking>>,
}

#[fixture]
fn world() -> RankingWorld {
    RankingWorld::default()
}

#[given("a south-facing balcony of {area} square metres with {hours} hours of sun")]
fn south_balcony(#[from(world)] world: &RankingWorld, area: f64, hours: f64) {
    world.space.set(Some(SpaceDescriptor {
        floor_area: area,
        railing_height: 1.1,
        orientation: Orientation::South,
        peak_sun_hours: hours,
        floor_material: FloorMaterial::Tile,
    }));
}

#[given("a temperature of {temperature} degrees and {humidity} percent humidity")]
fn reading(#[from(world)] world: &RankingWorld, temperature: f64, humidity: f64) {
    world
        .environment
        .set(EnvironmentReading::new(temperature, humidity));
}

#[when("I rank the built-in catalog")]
fn rank_builtin(#[from(world)] world: &RankingWorld) {
    let space = world.space.get().expect("balcony described");
    let outcome = score_all(
        &space,
        &world.environment.get(),
        PlantCatalog::builtin().as_slice(),
    );
    world.outcome.replace(Some(outcome));
}

fn with_basil(world: &RankingWorld, check: impl FnOnce(&ScoredRecommendation<'static>)) {
    let borrowed = world.outcome.borrow();
    let ranked = borrowed
        .as_ref()
        .expect("ranking recorded")
        .as_ref()
        .expect("ranking succeeded");
    let basil = ranked
        .iter()
        .find(|rec| rec.plant.id == "basil")
        .expect("basil ranked");
    check(basil);
}

#[then("every catalog plant is ranked")]
fn every_plant_ranked(#[from(world)] world: &RankingWorld) {
    let borrowed = world.outcome.borrow();
    let ranked = borrowed
        .as_ref()
        .expect("ranking recorded")
        .as_ref()
        .expect("ranking succeeded");
    assert_eq!(ranked.len(), PlantCatalog::builtin().len());
}

#[then("basil scores {score} overall")]
fn basil_scores(#[from(world)] world: &RankingWorld, score: u8) {
    with_basil(world, |basil| assert_eq!(basil.overall_score, score));
}

#[then("basil has no warnings")]
fn basil_no_warnings(#[from(world)] world: &RankingWorld) {
    with_basil(world, |basil| assert!(basil.warnings.is_empty()));
}

#[then("basil is warned that it is too cold")]
fn basil_too_cold(#[from(world)] world: &RankingWorld) {
    with_basil(world, |basil| {
        assert!(
            basil
                .warnings
                .iter()
                .any(|warning| matches!(warning, Warning::TooCold { .. })),
            "{:?}",
            basil.warnings
        );
    });
}

#[then("the request is rejected as invalid input")]
fn rejected(#[from(world)] world: &RankingWorld) {
    let borrowed = world.outcome.borrow();
    let outcome = borrowed.as_ref().expect("ranking recorded");
    assert!(matches!(
        outcome,
        Err(RecommendError::InvalidInput { field: "floor area", .. })
    ));
}

#[scenario(path = "tests/features/recommendation.feature", index = 0)]
fn sunny_balcony_favours_basil(world: RankingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/recommendation.feature", index = 1)]
fn frost_warns_tender_plants(world: RankingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/recommendation.feature", index = 2)]
fn rejects_zero_floor_area(world: RankingWorld) {
    let _ = world;
}
