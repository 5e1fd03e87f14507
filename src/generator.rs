//! Harmonic signal generator
//!
//! Produces synthetic samples of
//! `intercept + slope*t + a1*sin(wt) + b1*cos(wt) + noise`, where `a1`
//! switches from the day amplitude to the evening amplitude at 18:00.

use std::ops::Range;

use chrono::{Local, Timelike};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde_json::Value;
use tracing::debug;

use crate::params::SignalGeneratorConfig;
use crate::SignalError;

/// Minutes in one day
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Minute of day at which the evening amplitude takes over (18:00)
pub const EVENING_START_MINUTE: f64 = 1080.0;

/// When to sample the signal
#[derive(Debug, Clone, PartialEq)]
pub enum SampleTime {
    /// Current local wall-clock minute of day
    Now,
    /// Explicit minute timestamps, sampled in order
    Minutes(Vec<f64>),
}

impl From<Vec<f64>> for SampleTime {
    fn from(minutes: Vec<f64>) -> Self {
        Self::Minutes(minutes)
    }
}

impl From<&[f64]> for SampleTime {
    fn from(minutes: &[f64]) -> Self {
        Self::Minutes(minutes.to_vec())
    }
}

impl From<Range<i64>> for SampleTime {
    fn from(range: Range<i64>) -> Self {
        Self::Minutes(range.map(|m| m as f64).collect())
    }
}

impl TryFrom<Value> for SampleTime {
    type Error = SignalError;

    /// `null` samples now, an array of numbers samples each minute.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Self::Now),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(idx, item)| {
                    item.as_f64().ok_or_else(|| {
                        SignalError::InvalidArgument(format!(
                            "element {idx} of t must be a number, got {item}"
                        ))
                    })
                })
                .collect::<Result<Vec<f64>, SignalError>>()
                .map(Self::Minutes),
            other => Err(SignalError::InvalidArgument(format!(
                "t must be null or an array of minutes, got {other}"
            ))),
        }
    }
}

/// Output of [`SignalGenerator::sample`]
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    Single(f64),
    Series(Vec<f64>),
}

impl Sample {
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Series(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_single(&self) -> Option<f64> {
        match self {
            Self::Single(value) => Some(*value),
            Self::Series(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<f64> {
        match self {
            Self::Single(value) => vec![value],
            Self::Series(values) => values,
        }
    }
}

/// Minutes since midnight (`hour * 60 + minute`)
pub fn minute_of_day<T: Timelike>(time: &T) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Harmonic signal generator with Gaussian noise
#[derive(Debug, Clone)]
pub struct SignalGenerator {
    config: SignalGeneratorConfig,
    noise: Normal<f64>,
}

impl SignalGenerator {
    /// Create a generator from validated parameters
    pub fn new(config: SignalGeneratorConfig) -> Result<Self, SignalError> {
        config.validate()?;
        let noise = Normal::new(0.0, config.noise_std)
            .map_err(|err| SignalError::InvalidConfig(err.to_string()))?;

        debug!(
            period_minutes = config.period_minutes,
            noise_std = config.noise_std,
            "signal generator ready"
        );

        Ok(Self { config, noise })
    }

    pub fn config(&self) -> &SignalGeneratorConfig {
        &self.config
    }

    /// Sine amplitude in effect at minute `tm`.
    ///
    /// Only the selection wraps at day boundaries; negative minutes wrap
    /// into `[0, 1440)`.
    pub fn amplitude_for(&self, tm: f64) -> f64 {
        if tm.rem_euclid(MINUTES_PER_DAY) < EVENING_START_MINUTE {
            self.config.amplitude_day
        } else {
            self.config.amplitude_evening
        }
    }

    /// Noise-free signal value at minute `tm`
    pub fn deterministic_component(&self, tm: f64) -> f64 {
        let a1 = self.amplitude_for(tm);
        let omega = self.config.omega();
        let periodic =
            a1 * (omega * tm).sin() + self.config.secondary_amplitude * (omega * tm).cos();

        // trend uses the raw, unwrapped minute count
        self.config.intercept + self.config.slope * tm + periodic
    }

    /// Draw one sample at minute `tm`
    pub fn sample_at<R: Rng + ?Sized>(&self, tm: f64, rng: &mut R) -> f64 {
        self.deterministic_component(tm) + self.noise.sample(rng)
    }

    /// Draw one sample at the minute of day of `time`
    pub fn sample_at_time<T: Timelike, R: Rng + ?Sized>(&self, time: &T, rng: &mut R) -> f64 {
        self.sample_at(f64::from(minute_of_day(time)), rng)
    }

    /// Sample now or at each requested minute, one independent draw apiece
    pub fn sample<R: Rng + ?Sized>(&self, t: SampleTime, rng: &mut R) -> Sample {
        match t {
            SampleTime::Now => Sample::Single(self.sample_at_time(&Local::now(), rng)),
            SampleTime::Minutes(minutes) => {
                debug!(count = minutes.len(), "sampling signal series");
                Sample::Series(
                    minutes
                        .iter()
                        .map(|&tm| self.sample_at(tm, &mut *rng))
                        .collect(),
                )
            }
        }
    }
}
