use std::path::PathBuf;

use clap::Parser;
use overpass_predictor::config::{TargetConfig, load_platforms, load_targets, parse_epoch};
use overpass_predictor::geodesy::GeoPoint;
use overpass_predictor::intercept::{self, InterceptRequest, NearMissPolicy};
use overpass_predictor::track::platform;

#[derive(Parser)]
#[command(author, version, about = "Overpass wait-time estimator")]
struct Cli {
    /// Platform name from the catalog (defaults to the first entry)
    #[arg(long)]
    platform: Option<String>,

    /// Target site name from the catalog
    #[arg(long)]
    target: String,

    /// Hours elapsed since the platform's track epoch
    #[arg(long, default_value_t = 0.0)]
    elapsed_hours: f64,

    /// Query instant (RFC 3339); overrides --elapsed-hours
    #[arg(long)]
    at: Option<String>,

    /// Report the closest-approach arc time for aligned near misses
    #[arg(long, default_value_t = false)]
    interpolate: bool,

    /// Override the platform's catalog cloud cover percentage
    #[arg(long)]
    cloud_cover: Option<u8>,

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

    if let Some(pct) = cli.cloud_cover {
        platform.set_cloud_cover(pct);
    }

    let elapsed_hours = match &cli.at {
        Some(at) => platform.track().hours_since_epoch(parse_epoch(at)?),
        None => cli.elapsed_hours,
    };
    platform.refresh(elapsed_hours);
    let state = platform.state()?;

    let request = InterceptRequest {
        state,
        target,
        revisit_interval_hours: platform.track().revisit_interval_hours,
        near_miss: if cli.interpolate {
            NearMissPolicy::Interpolate
        } else {
            NearMissPolicy::RepeatCycle
        },
    };
    let estimate = intercept::estimate(&request)?;

    let (d, h, m) = format_duration(estimate.wait_hours);

    println!("=== Overpass Estimate ===");
    println!(
        "Platform        : {} (cloud cover {}%)",
        platform.name,
        platform.cloud_cover()
    );
    println!(
        "Target          : {} (lat {:.4}, lon {:.4})",
        target_cfg.name, target.lat_deg, target.lon_deg
    );
    println!(
        "Ground position : lat {:.4}, lon {:.4} at {:+.2} h from epoch",
        state.position.lat_deg, state.position.lon_deg, elapsed_hours
    );
    println!(
        "Approach        : distance = {:.2} km, heading offset = {:.3} deg",
        estimate.ground_distance_km, estimate.heading_offset_deg
    );
    println!(
        "Gates           : aligned = {}, overhead = {}",
        estimate.aligned, estimate.overhead
    );
    println!(
        "Estimated wait  : {:.2} h ({}d {}h {}m)",
        estimate.wait_hours, d, h, m
    );

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

fn format_duration(hours: f64) -> (i64, i64, i64) {
    let total_hours = hours.max(0.0);
    let days = (total_hours / 24.0).floor() as i64;
    let remaining = total_hours - days as f64 * 24.0;
    let whole_hours = remaining.floor() as i64;
    let minutes = ((remaining - whole_hours as f64) * 60.0).floor() as i64;
    (days, whole_hours, minutes)
}
