use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::io::Write;

#[test]
fn sweep_plot_renders_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("passes.csv");
    let png_path = dir.path().join("passes.png");

    let mut file = File::create(&csv_path).expect("csv create");
    writeln!(
        file,
        "offset_hours,platform,target,lat_deg,lon_deg,ground_distance_km,heading_offset_deg,aligned,overhead,wait_hours"
    )
    .unwrap();
    for i in 0..4 {
        writeln!(
            file,
            "{:.4},LANDSAT-8,MAUNA-LOA,{:.6},{:.6},{:.3},{:.4},false,false,384.000000",
            i as f64 * 0.25,
            0.0 - i as f64 * 1.2,
            -21.5 - i as f64 * 5.0,
            14_000.0 - i as f64 * 250.0,
            120.0 - i as f64,
        )
        .unwrap();
    }

    Command::cargo_bin("sweep_plot")
        .expect("sweep_plot bin")
        .args([
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            png_path.to_str().unwrap(),
            "--metric",
            "distance",
            "--width",
            "400",
            "--height",
            "300",
        ])
        .assert()
        .success();

    let metadata = fs::metadata(png_path).expect("png metadata");
    assert!(metadata.len() > 0, "PNG output should not be empty");
}

#[test]
fn sweep_plot_rejects_unknown_metrics() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("passes.csv");
    std::fs::write(&csv_path, "offset_hours,wait_hours\n0.0,384.0\n").expect("csv");

    Command::cargo_bin("sweep_plot")
        .expect("sweep_plot bin")
        .args([
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            dir.path().join("out.png").to_str().unwrap(),
            "--metric",
            "bogus_metric",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing metric column"));
}
