//! Behavioural coverage for turning balcony measurements into a space
//! descriptor.

use std::cell::{Cell, RefCell};

use balcony_core::{BalconyDimensions, FloorMaterial, Orientation, SpaceDescriptor, SpaceError};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct SpaceWorld {
    length: Cell<f64>,
    width: Cell<f64>,
    sun_hours: Cell<f64>,
    outcome: RefCell<Option<Result<SpaceDescriptor, SpaceError>>>,
}

#[fixture]
fn world() -> SpaceWorld {
    SpaceWorld::default()
}

#[given("a balcony measuring {length} by {width} metres")]
fn balcony_measuring(#[from(world)] world: &SpaceWorld, length: f64, width: f64) {
    world.length.set(length);
    world.width.set(width);
}

#[given("the balcony receives {hours} hours of peak sun")]
fn balcony_sun(#[from(world)] world: &SpaceWorld, hours: f64) {
    world.sun_hours.set(hours);
}

#[when("I describe the space")]
fn describe_space(#[from(world)] world: &SpaceWorld) {
    let dimensions = BalconyDimensions {
        length: world.length.get(),
        width: world.width.get(),
        railing_height: 1.1,
    };
    let outcome = SpaceDescriptor::from_dimensions(
        dimensions,
        Orientation::South,
        world.sun_hours.get(),
        FloorMaterial::Concrete,
    );
    world.outcome.replace(Some(outcome));
}

#[then("the floor area is {area} square metres")]
fn floor_area_is(#[from(world)] world: &SpaceWorld, area: f64) {
    let borrowed = world.outcome.borrow();
    let space = borrowed
        .as_ref()
        .expect("outcome recorded")
        .as_ref()
        .expect("space accepted");
    assert!((space.floor_area - area).abs() < 1e-9);
}

#[then("the space is rejected because the width is not positive")]
fn rejected_width(#[from(world)] world: &SpaceWorld) {
    let borrowed = world.outcome.borrow();
    let err = borrowed
        .as_ref()
        .expect("outcome recorded")
        .as_ref()
        .expect_err("space rejected");
    assert_eq!(*err, SpaceError::NonPositiveDimension { field: "width" });
}

#[then("the space is rejected because the sun hours are out of range")]
fn rejected_sun(#[from(world)] world: &SpaceWorld) {
    let borrowed = world.outcome.borrow();
    let err = borrowed
        .as_ref()
        .expect("outcome recorded")
        .as_ref()
        .expect_err("space rejected");
    assert!(matches!(err, SpaceError::PeakSunOutOfRange { .. }));
}

#[scenario(path = "tests/features/space_input.feature", index = 0)]
fn derives_floor_area(world: SpaceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/space_input.feature", index = 1)]
fn rejects_zero_width(world: SpaceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/space_input.feature", index = 2)]
fn rejects_implausible_sun(world: SpaceWorld) {
    let _ = world;
}
