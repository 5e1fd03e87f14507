//! Daily Signal Example
//!
//! Samples one day of the harmonic signal, persists it to SQLite and builds a
//! seasonal regressor matrix.
//!
//! Usage: `cargo run --example daily_signal [config.toml]`

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use chrono::{Duration, Local};
use harmonic_signal::{
    build_regressor_matrix, regressor_column_names, SampleTime, SignalGenerator,
    SignalGeneratorConfig, SignalRecord, SignalStore, DEFAULT_DB_PATH,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Running harmonic signal generation...\n");

    fs::create_dir_all("out")?;

    let config = match std::env::args().nth(1) {
        Some(path) => SignalGeneratorConfig::from_toml_file(Path::new(&path))
            .with_context(|| format!("failed to load config: {path}"))?,
        None => SignalGeneratorConfig::default(),
    };

    println!("Configuration:");
    println!("  Intercept:          {}", config.intercept);
    println!("  Slope:              {}", config.slope);
    println!("  Day amplitude:      {}", config.amplitude_day);
    println!("  Evening amplitude:  {}", config.amplitude_evening);
    println!("  Cosine amplitude:   {}", config.secondary_amplitude);
    println!("  Period (minutes):   {}", config.period_minutes);
    println!("  Noise sigma:        {}", config.noise_std);
    println!();

    let generator = SignalGenerator::new(config)?;
    let mut rng = StdRng::seed_from_u64(42);

    let values = generator
        .sample(SampleTime::from(0..1440), &mut rng)
        .into_vec();
    let now = generator.sample(SampleTime::Now, &mut rng);

    let day_mean = values[..1080].iter().sum::<f64>() / 1080.0;
    let evening_mean = values[1080..].iter().sum::<f64>() / 360.0;

    println!("SIGNAL SUMMARY");
    println!("==============");
    println!("  Day mean:           {:.6}", day_mean);
    println!("  Evening mean:       {:.6}", evening_mean);
    if let Some(value) = now.as_single() {
        println!("  Sample now:         {:.6}", value);
    }

    // Persist the day, keyed by minute timestamps from today's midnight
    let db_path = Path::new("out").join(DEFAULT_DB_PATH);
    let store = SignalStore::open(&db_path)?;
    store.ensure_schema()?;

    let midnight = Local::now()
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .context("midnight is always a valid time")?;
    let mut written = 0_usize;
    for (minute, &value) in values.iter().enumerate() {
        let record = SignalRecord::at(midnight + Duration::minutes(minute as i64), value);
        if let Err(err) = store.append(&record) {
            // signal_data is append-only, so a rerun on the same day stops here
            tracing::warn!(timestamp = %record.timestamp, %err, "stopping append");
            break;
        }
        written += 1;
    }
    println!("\n{} records written to: {}", written, db_path.display());

    // Two years of monthly index values with two yearly harmonics
    let months: Vec<f64> = (0..24).map(f64::from).collect();
    let harmonics = 2;
    let matrix = build_regressor_matrix(&months, harmonics, months.len())?;

    let csv_path = "out/regressors.csv";
    let mut file = File::create(csv_path)?;
    writeln!(file, "{}", regressor_column_names(harmonics).join(","))?;
    for row in matrix.row_iter() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:.6}")).collect();
        writeln!(file, "{}", cells.join(","))?;
    }

    println!(
        "Regressor matrix ({} x {}) written to: {}",
        matrix.nrows(),
        matrix.ncols(),
        csv_path
    );
    println!("Done!");

    Ok(())
}
