//! DishaOrient replay tool
//!
//! Feeds recorded gravity samples through an orientation classifier and
//! prints each confirmed classification change. Input is CSV, one `x,y,z`
//! line per sample, read from a file or stdin. Useful for checking the
//! transition tables against traces captured on a real device.

use disha_orient::{
    ClassifierConfig, Error, GravitySample, OrientationClassifier, Platform, Result,
};
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Parse command line arguments.
///
/// Supports:
/// - `disha-orient <trace.csv>` (positional input; stdin when omitted)
/// - `disha-orient --config <path>` / `-c <path>` (TOML configuration)
/// - `disha-orient --platform <ios|android>` / `-p <ios|android>`
///
/// Defaults to the iOS table when neither a config file nor a platform flag
/// is given.
fn parse_args() -> (Option<String>, Option<String>, Option<String>) {
    let args: Vec<String> = env::args().collect();
    let mut config_path = None;
    let mut platform = None;
    let mut input_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" if i + 1 < args.len() => {
                config_path = Some(args[i + 1].clone());
                i += 2;
            }
            "--platform" | "-p" if i + 1 < args.len() => {
                platform = Some(args[i + 1].clone());
                i += 2;
            }
            arg if !arg.starts_with('-') && input_path.is_none() => {
                input_path = Some(arg.to_string());
                i += 1;
            }
            _ => {
                i += 1;
            }
        }
    }

    (config_path, platform, input_path)
}

fn parse_line(line: &str) -> Option<GravitySample> {
    let mut parts = line.split(',').map(str::trim);
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    let z = parts.next()?.parse().ok()?;
    Some(GravitySample::new(x, y, z))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config_path, platform, input_path) = parse_args();

    let config = match (config_path, platform.as_deref()) {
        (Some(path), _) => ClassifierConfig::from_file(path)?,
        (None, Some("android")) => ClassifierConfig::new(Platform::Android),
        (None, Some("ios")) | (None, None) => ClassifierConfig::new(Platform::Ios),
        (None, Some(other)) => {
            return Err(Error::InvalidParameter(format!(
                "unknown platform '{}', expected ios or android",
                other
            )));
        }
    };

    let mut classifier = OrientationClassifier::with_config(config)?;

    let reader: Box<dyn BufRead> = match &input_path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut last_reported = None;
    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some(sample) = parse_line(trimmed) else {
            log::warn!("line {}: not an x,y,z sample, skipped", line_number + 1);
            continue;
        };

        if let Some((orientation, rotation_z)) = classifier.process(sample) {
            if last_reported != Some(orientation) {
                println!(
                    "{}  rotation_z={:.1}  counter_rotation={:.0}",
                    orientation.as_str(),
                    rotation_z,
                    orientation.counter_rotation_degrees()
                );
                last_reported = Some(orientation);
            }
        }
    }

    Ok(())
}
