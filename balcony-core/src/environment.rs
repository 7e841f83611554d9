//! Ambient climate readings and the sources that supply them.
//!
//! A reading that cannot be fetched is never fatal: callers use
//! [`reading_or_default`] to fall back to [`EnvironmentReading::default`].

use thiserror::Error;

/// Temperature substituted when no weather source is reachable, in °C.
pub const DEFAULT_TEMPERATURE_C: f64 = 20.0;
/// Relative humidity substituted when no weather source is reachable, in %.
pub const DEFAULT_HUMIDITY_PCT: f64 = 50.0;

/// Ambient conditions at the balcony.
///
/// # Examples
/// ```
/// use balcony_core::EnvironmentReading;
///
/// let reading = EnvironmentReading::default();
/// assert_eq!(reading.temperature, 20.0);
/// assert_eq!(reading.humidity, 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct EnvironmentReading {
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent, `0..=100`.
    pub humidity: f64,
}

impl EnvironmentReading {
    /// Construct a reading.
    #[must_use]
    pub const fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
        }
    }
}

impl Default for EnvironmentReading {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPERATURE_C, DEFAULT_HUMIDITY_PCT)
    }
}

/// Errors from [`EnvironmentProvider::current_reading`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvironmentError {
    /// No source could produce a reading.
    #[error("environment reading unavailable: {reason}")]
    Unavailable {
        /// Human-readable cause reported by the source.
        reason: String,
    },
}

/// Supply the current ambient conditions for a balcony.
///
/// Providers must be `Send + Sync` so a single instance can serve concurrent
/// requests.
///
/// # Examples
/// ```
/// use balcony_core::{EnvironmentProvider, EnvironmentReading, FixedEnvironment};
///
/// let provider = FixedEnvironment::new(EnvironmentReading::new(18.0, 65.0));
/// let reading = provider.current_reading()?;
/// assert_eq!(reading.humidity, 65.0);
/// # Ok::<(), balcony_core::EnvironmentError>(())
/// ```
pub trait EnvironmentProvider: Send + Sync {
    /// Return the latest reading.
    ///
    /// # Errors
    /// Returns [`EnvironmentError::Unavailable`] when the source cannot be
    /// reached.
    fn current_reading(&self) -> Result<EnvironmentReading, EnvironmentError>;
}

/// Provider that always returns the same reading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedEnvironment {
    reading: EnvironmentReading,
}

impl FixedEnvironment {
    /// Wrap a constant reading.
    #[must_use]
    pub const fn new(reading: EnvironmentReading) -> Self {
        Self { reading }
    }
}

impl EnvironmentProvider for FixedEnvironment {
    fn current_reading(&self) -> Result<EnvironmentReading, EnvironmentError> {
        Ok(self.reading)
    }
}

/// Fetch a reading, substituting the default when the provider fails.
///
/// # Examples
/// ```
/// use balcony_core::{
///     EnvironmentError, EnvironmentProvider, EnvironmentReading, reading_or_default,
/// };
///
/// struct Offline;
///
/// impl EnvironmentProvider for Offline {
///     fn current_reading(&self) -> Result<EnvironmentReading, EnvironmentError> {
///         Err(EnvironmentError::Unavailable { reason: "offline".to_owned() })
///     }
/// }
///
/// assert_eq!(reading_or_default(&Offline), EnvironmentReading::default());
/// ```
#[must_use]
pub fn reading_or_default(provider: &dyn EnvironmentProvider) -> EnvironmentReading {
    provider.current_reading().unwrap_or_else(|err| {
        let fallback = EnvironmentReading::default();
        log::warn!(
            "{err}; using default reading of {}°C and {}% humidity",
            fallback.temperature,
            fallback.humidity
        );
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::UnavailableEnvironment;
    use rstest::rstest;

    #[rstest]
    fn default_matches_documented_fallback() {
        let reading = EnvironmentReading::default();
        assert_eq!(reading.temperature, DEFAULT_TEMPERATURE_C);
        assert_eq!(reading.humidity, DEFAULT_HUMIDITY_PCT);
    }

    #[rstest]
    fn fixed_provider_returns_its_reading() {
        let reading = EnvironmentReading::new(-3.0, 80.0);
        let provider = FixedEnvironment::new(reading);
        assert_eq!(reading_or_default(&provider), reading);
    }

    #[rstest]
    fn failing_provider_falls_back_to_default() {
        let provider = UnavailableEnvironment;
        assert!(provider.current_reading().is_err());
        assert_eq!(reading_or_default(&provider), EnvironmentReading::default());
    }
}
