//! Property-based tests for regressor matrices and signal sampling.

use approx::assert_abs_diff_eq;
use harmonic_signal::{
    build_regressor_matrix, SampleTime, SignalGenerator, SignalGeneratorConfig,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Finite index values in a range that keeps trig arguments well-behaved.
fn index_strategy(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-500.0..500.0_f64, 1..max_len)
}

proptest! {
    #[test]
    fn matrix_shape_is_n_by_two_plus_two_m(index in index_strategy(64), m in 0usize..8) {
        let n = index.len();
        let matrix = build_regressor_matrix(&index, m, n).unwrap();
        prop_assert_eq!(matrix.shape(), (n, 2 + 2 * m));
    }

    #[test]
    fn intercept_is_one_and_trend_is_index(index in index_strategy(64), m in 0usize..5) {
        let matrix = build_regressor_matrix(&index, m, index.len()).unwrap();
        for (row, &t) in index.iter().enumerate() {
            prop_assert_eq!(matrix[(row, 0)], 1.0);
            prop_assert_eq!(matrix[(row, 1)], t);
        }
    }

    #[test]
    fn harmonic_pairs_lie_on_unit_circle(index in index_strategy(32), m in 1usize..5) {
        let matrix = build_regressor_matrix(&index, m, index.len()).unwrap();
        for row in 0..index.len() {
            for k in 0..m {
                let c = matrix[(row, 2 + 2 * k)];
                let s = matrix[(row, 3 + 2 * k)];
                prop_assert!((c * c + s * s - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn declared_length_must_match(index in index_strategy(16), extra in 1usize..4) {
        prop_assert!(build_regressor_matrix(&index, 2, index.len() + extra).is_err());
    }

    #[test]
    fn series_sampling_returns_one_value_per_minute(minutes in prop::collection::vec(0.0..5000.0_f64, 0..50), seed in any::<u64>()) {
        let generator = SignalGenerator::new(SignalGeneratorConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let sample = generator.sample(SampleTime::Minutes(minutes.clone()), &mut rng);
        prop_assert_eq!(sample.len(), minutes.len());
    }
}

#[test]
fn noiseless_day_follows_day_then_evening_amplitude() {
    let generator = SignalGenerator::new(SignalGeneratorConfig {
        intercept: 0.0,
        slope: 0.0,
        amplitude_day: 2.0,
        amplitude_evening: 5.0,
        secondary_amplitude: 0.0,
        period_minutes: 60.0,
        noise_std: 0.0,
    })
    .unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let values = generator.sample(SampleTime::from(0..1440), &mut rng).into_vec();
    let peak_day = values[..1080].iter().cloned().fold(f64::MIN, f64::max);
    let peak_evening = values[1080..].iter().cloned().fold(f64::MIN, f64::max);
    assert_abs_diff_eq!(peak_day, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(peak_evening, 5.0, epsilon = 1e-9);
}
