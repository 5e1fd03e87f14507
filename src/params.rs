//! Signal generator parameters
//!
//! Parameters for the harmonic signal model, loadable from TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::SignalError;

/// Parameters for the harmonic signal generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalGeneratorConfig {
    /// Constant offset of the signal
    pub intercept: f64,
    /// Linear trend per minute
    pub slope: f64,
    /// Sine amplitude before 18:00
    pub amplitude_day: f64,
    /// Sine amplitude from 18:00 to midnight
    pub amplitude_evening: f64,
    /// Cosine amplitude, shared by day and evening
    pub secondary_amplitude: f64,
    /// Period of the harmonic, in minutes
    pub period_minutes: f64,
    /// Standard deviation of the additive Gaussian noise
    pub noise_std: f64,
}

impl SignalGeneratorConfig {
    /// Create new generator parameters
    pub fn new(
        intercept: f64,
        slope: f64,
        amplitude_day: f64,
        amplitude_evening: f64,
        secondary_amplitude: f64,
        period_minutes: f64,
        noise_std: f64,
    ) -> Self {
        Self {
            intercept,
            slope,
            amplitude_day,
            amplitude_evening,
            secondary_amplitude,
            period_minutes,
            noise_std,
        }
    }

    /// Create default parameters: a 30-minute cycle around 10.0
    pub fn default_params() -> Self {
        Self {
            intercept: 10.0,
            slope: 0.0,
            amplitude_day: 1.0,
            amplitude_evening: 1.4,
            secondary_amplitude: 0.5,
            period_minutes: 30.0,
            noise_std: 0.3,
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, SignalError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, SignalError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), SignalError> {
        if !self.period_minutes.is_finite() || self.period_minutes == 0.0 {
            return Err(SignalError::InvalidConfig(
                "period_minutes must be finite and non-zero".to_string(),
            ));
        }

        if !self.noise_std.is_finite() || self.noise_std < 0.0 {
            return Err(SignalError::InvalidConfig(
                "noise_std must be finite and >= 0".to_string(),
            ));
        }

        let coefficients = [
            self.intercept,
            self.slope,
            self.amplitude_day,
            self.amplitude_evening,
            self.secondary_amplitude,
        ];
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(SignalError::InvalidConfig(
                "intercept, slope and amplitudes must be finite".to_string(),
            ));
        }

        Ok(())
    }

    /// Angular frequency of the harmonic, in radians per minute
    pub fn omega(&self) -> f64 {
        2.0 * std::f64::consts::PI / self.period_minutes
    }
}

impl Default for SignalGeneratorConfig {
    fn default() -> Self {
        Self::default_params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SignalGeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.intercept, 10.0);
        assert_eq!(config.amplitude_evening, 1.4);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = SignalGeneratorConfig::from_toml_str(
            "slope = 0.01\nperiod_minutes = 1440.0\n",
        )
        .expect("config should parse");
        assert_eq!(config.slope, 0.01);
        assert_eq!(config.period_minutes, 1440.0);
        assert_eq!(config.noise_std, 0.3);
        assert_eq!(config.secondary_amplitude, 0.5);
    }

    #[test]
    fn rejects_zero_period() {
        let config = SignalGeneratorConfig {
            period_minutes: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SignalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_negative_noise() {
        let err = SignalGeneratorConfig::from_toml_str("noise_std = -1.0").unwrap_err();
        assert!(matches!(err, SignalError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = SignalGeneratorConfig::from_toml_str("slope = \"steep\"").unwrap_err();
        assert!(matches!(err, SignalError::Toml(_)));
    }

    #[test]
    fn omega_matches_period() {
        let config = SignalGeneratorConfig {
            period_minutes: 60.0,
            ..Default::default()
        };
        assert!((config.omega() - std::f64::consts::PI / 30.0).abs() < 1e-12);
    }
}
