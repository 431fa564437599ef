use assert_cmd::Command;
use predicates::prelude::*;

fn scenario(name: &str) -> String {
    format!(
        "{}/../../data/scenarios/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    )
}

#[test]
fn predict_reports_the_repeat_cycle_for_a_distant_target() {
    Command::cargo_bin("predict")
        .expect("predict bin")
        .args([
            "--platform",
            "LANDSAT-8",
            "--target",
            "MAUNA-LOA",
            "--platforms",
            &scenario("platforms.yaml"),
            "--targets",
            &scenario("targets.yaml"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Overpass Estimate ==="))
        .stdout(predicate::str::contains(
            "Platform        : LANDSAT-8 (cloud cover 12%)",
        ))
        .stdout(predicate::str::contains("aligned = false, overhead = false"))
        .stdout(predicate::str::contains(
            "Estimated wait  : 384.00 h (16d 0h 0m)",
        ));
}

#[test]
fn predict_rejects_unknown_targets() {
    Command::cargo_bin("predict")
        .expect("predict bin")
        .args([
            "--target",
            "ATLANTIS",
            "--platforms",
            &scenario("platforms.yaml"),
            "--targets",
            &scenario("targets.yaml"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Target 'ATLANTIS' not found in catalog",
        ));
}

#[test]
fn at_flag_overrides_elapsed_hours() {
    Command::cargo_bin("predict")
        .expect("predict bin")
        .args([
            "--platform",
            "LANDSAT-8",
            "--target",
            "QUITO",
            "--at",
            "2026-03-01T06:00:00Z",
            "--elapsed-hours",
            "99.0",
            "--platforms",
            &scenario("platforms.yaml"),
            "--targets",
            &scenario("targets.yaml"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("at +6.00 h from epoch"));
}

#[test]
fn interpolate_flag_reports_the_arc_time_for_near_misses() {
    let dir = tempfile::tempdir().expect("tempdir");
    let platforms = dir.path().join("platforms.yaml");
    let targets = dir.path().join("targets.yaml");
    // A platform at the equator heading due east at a target ~11 km away
    std::fs::write(
        &platforms,
        "- name: HEADON\n  epoch: \"2026-03-01T00:00:00Z\"\n  lat_deg: 0.0\n  lon_deg: 0.0\n  heading_deg: 90.0\n  ground_speed_km_h: 24000.0\n",
    )
    .expect("platforms yaml");
    std::fs::write(&targets, "- name: NEARBY\n  lat_deg: 0.0\n  lon_deg: 0.1\n")
        .expect("targets yaml");

    let base = [
        "--target",
        "NEARBY",
        "--platforms",
        platforms.to_str().unwrap(),
        "--targets",
        targets.to_str().unwrap(),
    ];

    Command::cargo_bin("predict")
        .expect("predict bin")
        .args(base)
        .assert()
        .success()
        .stdout(predicate::str::contains("aligned = true, overhead = false"))
        .stdout(predicate::str::contains("Estimated wait  : 384.00 h"));

    Command::cargo_bin("predict")
        .expect("predict bin")
        .args(base)
        .arg("--interpolate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated wait  : 0.00 h"));
}
