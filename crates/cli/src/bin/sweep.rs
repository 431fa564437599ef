use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use overpass_predictor::config::{TargetConfig, load_platforms, load_targets};
use overpass_predictor::export::{passes, summary};
use overpass_predictor::geodesy::GeoPoint;
use overpass_predictor::intercept::{self, InterceptRequest, NearMissPolicy};
use overpass_predictor::track::platform;

/// Generate pass-sweep data (CSV) by sampling the ground track at fixed offsets.
#[derive(Parser, Debug)]
#[command(author, version, about = "Pass-sweep CSV generator")]
struct Cli {
    /// Platform name from the catalog (defaults to the first entry)
    #[arg(long)]
    platform: Option<String>,

    /// Target site name from the catalog
    #[arg(long)]
    target: String,

    /// Sweep window length in hours
    #[arg(long, default_value_t = 384.0)]
    window_hours: f64,

    /// Grid step in hours
    #[arg(long, default_value_t = 0.25)]
    step_hours: f64,

    /// Report closest-approach arc times for aligned near misses
    #[arg(long, default_value_t = false)]
    interpolate: bool,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/passes.csv")]
    output: PathBuf,

    /// Also write a JSON summary sidecar next to the CSV
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Platform catalog (YAML file or directory of TOML records)
    #[arg(long, default_value = "data/scenarios/platforms.yaml")]
    platforms: PathBuf,

    /// Target catalog (YAML file or directory of TOML records)
    #[arg(long, default_value = "data/scenarios/targets.yaml")]
    targets: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let platform_catalog = load_platforms(&cli.platforms)?;
    let target_catalog = load_targets(&cli.targets)?;

    let mut platform = platform::select(&platform_catalog, cli.platform.as_deref())?;
    let target_cfg = find_target(&target_catalog, &cli.target)?;
    let target = GeoPoint::new(target_cfg.lat_deg, target_cfg.lon_deg);

    let platform_name = platform.name.clone();
    let revisit_interval_hours = platform.track().revisit_interval_hours;
    let epoch_utc = platform.track().epoch.to_rfc3339();
    let near_miss = if cli.interpolate {
        NearMissPolicy::Interpolate
    } else {
        NearMissPolicy::RepeatCycle
    };
    let step_hours = cli.step_hours.max(0.01);

    let mut writer = passes::writer_for_path(&cli.output)?;
    passes::write_header(writer.as_mut())?;

    let mut samples = Vec::new();
    let mut offset_hours = 0.0;
    while offset_hours <= cli.window_hours + 1e-9 {
        platform.refresh(offset_hours);
        let state = platform.state()?;
        let estimate = intercept::estimate(&InterceptRequest {
            state,
            target,
            revisit_interval_hours,
            near_miss,
        })?;

        passes::Record {
            offset_hours,
            platform: &platform_name,
            target: &target_cfg.name,
            lat_deg: state.position.lat_deg,
            lon_deg: state.position.lon_deg,
            ground_distance_km: estimate.ground_distance_km,
            heading_offset_deg: estimate.heading_offset_deg,
            aligned: estimate.aligned,
            overhead: estimate.overhead,
            wait_hours: estimate.wait_hours,
        }
        .write_to(writer.as_mut())?;

        if cli.summary {
            samples.push(summary::Sample {
                offset_hours,
                ground_distance_km: estimate.ground_distance_km,
                wait_hours: estimate.wait_hours,
                aligned: estimate.aligned,
            });
        }

        offset_hours += step_hours;
    }

    writer.flush()?;

    if cli.summary {
        if cli.output.as_os_str() == "-" {
            eprintln!("Skipping summary sidecar: output went to stdout");
        } else {
            let meta = summary::Metadata {
                platform: &platform_name,
                target: &target_cfg.name,
                epoch_utc: &epoch_utc,
                step_hours,
                window_hours: cli.window_hours,
            };
            summary::write_sidecar(&cli.output, &meta, &summary::summarize(samples))?;
        }
    }

    Ok(())
}

fn find_target(targets: &[TargetConfig], name: &str) -> anyhow::Result<TargetConfig> {
    let upper = name.to_uppercase();
    targets
        .iter()
        .find(|t| t.name.to_uppercase() == upper)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Target '{}' not found in catalog", name))
}
