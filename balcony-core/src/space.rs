//! Balcony geometry and sun exposure supplied by the caller.
//!
//! [`SpaceDescriptor`] is what the recommendation engine consumes. Form-style
//! input arrives as [`BalconyDimensions`] and is validated by
//! [`SpaceDescriptor::from_dimensions`], which also derives the floor area.

use thiserror::Error;

use crate::{FloorMaterial, Orientation};

/// Upper bound for peak sun hours accepted from user input.
pub const MAX_PEAK_SUN_HOURS: f64 = 14.0;

/// Physical description of a balcony.
///
/// Fields are public so callers can build raw descriptors; only
/// [`SpaceDescriptor::new`] and [`SpaceDescriptor::from_dimensions`] apply
/// input validation.
///
/// # Examples
/// ```
/// use balcony_core::{BalconyDimensions, FloorMaterial, Orientation, SpaceDescriptor};
///
/// # fn main() -> Result<(), balcony_core::SpaceError> {
/// let space = SpaceDescriptor::from_dimensions(
///     BalconyDimensions { length: 4.0, width: 2.5, railing_height: 1.1 },
///     Orientation::South,
///     6.0,
///     FloorMaterial::Tile,
/// )?;
/// assert_eq!(space.floor_area, 10.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SpaceDescriptor {
    /// Usable horizontal area in square metres.
    pub floor_area: f64,
    /// Railing height in metres. Not used for scoring.
    pub railing_height: f64,
    /// Direction the balcony faces.
    pub orientation: Orientation,
    /// Hours of direct, high-intensity sun per day.
    pub peak_sun_hours: f64,
    /// Floor surface. Not used for scoring.
    pub floor_material: FloorMaterial,
}

/// Raw balcony measurements as entered by a user, in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct BalconyDimensions {
    /// Length along the building facade.
    pub length: f64,
    /// Depth away from the facade.
    pub width: f64,
    /// Height of the railing or parapet.
    pub railing_height: f64,
}

/// Errors returned when validating space input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpaceError {
    /// A measurement was zero or negative.
    #[error("{field} must be greater than zero")]
    NonPositiveDimension {
        /// Name of the offending measurement.
        field: &'static str,
    },
    /// A measurement was NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Name of the offending measurement.
        field: &'static str,
    },
    /// Peak sun hours fell outside `0..=14`.
    #[error("peak sun hours must be between 0 and 14, got {hours}")]
    PeakSunOutOfRange {
        /// Value supplied by the caller.
        hours: f64,
    },
}

impl SpaceDescriptor {
    /// Validate a pre-computed floor area and construct a descriptor.
    ///
    /// # Errors
    /// Returns [`SpaceError`] when `floor_area` or `railing_height` are not
    /// finite and positive, or when `peak_sun_hours` lies outside `0..=14`.
    pub fn new(
        floor_area: f64,
        railing_height: f64,
        orientation: Orientation,
        peak_sun_hours: f64,
        floor_material: FloorMaterial,
    ) -> Result<Self, SpaceError> {
        Ok(Self {
            floor_area: positive(floor_area, "floor area")?,
            railing_height: positive(railing_height, "railing height")?,
            orientation,
            peak_sun_hours: peak_sun(peak_sun_hours)?,
            floor_material,
        })
    }

    /// Validate raw measurements and derive the floor area.
    ///
    /// # Errors
    /// Returns [`SpaceError`] when any dimension is not finite and positive,
    /// or when `peak_sun_hours` lies outside `0..=14`.
    #[expect(
        clippy::float_arithmetic,
        reason = "floor area is length multiplied by width"
    )]
    pub fn from_dimensions(
        dimensions: BalconyDimensions,
        orientation: Orientation,
        peak_sun_hours: f64,
        floor_material: FloorMaterial,
    ) -> Result<Self, SpaceError> {
        let length = positive(dimensions.length, "length")?;
        let width = positive(dimensions.width, "width")?;
        Self::new(
            length * width,
            dimensions.railing_height,
            orientation,
            peak_sun_hours,
            floor_material,
        )
    }
}

fn positive(value: f64, field: &'static str) -> Result<f64, SpaceError> {
    if !value.is_finite() {
        return Err(SpaceError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(SpaceError::NonPositiveDimension { field });
    }
    Ok(value)
}

fn peak_sun(hours: f64) -> Result<f64, SpaceError> {
    if !hours.is_finite() {
        return Err(SpaceError::NonFinite {
            field: "peak sun hours",
        });
    }
    if !(0.0..=MAX_PEAK_SUN_HOURS).contains(&hours) {
        return Err(SpaceError::PeakSunOutOfRange { hours });
    }
    Ok(hours)
}
