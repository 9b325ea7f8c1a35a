//! End-to-end scenario tests: YAML file in, run result out.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tt_app::{IntegratorType, Scenario, load_scenario, run_scenario, to_csv};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

#[test]
fn load_run_export_roundtrip() {
    let dir = unique_temp_dir("tt_app_scenario");
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    let path = dir.join("scenario.yaml");
    fs::write(
        &path,
        "name: Short heating burst\nduration_s: 600.0\nsample_count: 100\nheater_off_start_s: null\nheater_off_end_s: null\n",
    )
    .expect("failed to write scenario file");

    let scenario = load_scenario(&path).expect("failed to load scenario");
    assert_eq!(scenario.name, "Short heating burst");
    assert_eq!(scenario.sample_count, 100);
    // Untouched fields keep reference defaults
    assert_eq!(scenario.heater_full_power_w, 5000.0);

    let result = run_scenario(&scenario, IntegratorType::RK4).expect("run failed");
    assert_eq!(result.temp_c.len(), 100);
    assert_eq!(result.time_s[99], 600.0);

    // Heater never turns off in this scenario
    assert!(result.heater_power_w.iter().all(|&p| p == 5000.0));
    for i in 1..result.temp_c.len() {
        assert!(result.temp_c[i] > result.temp_c[i - 1]);
    }

    let csv = to_csv(&result);
    assert_eq!(csv.lines().count(), 101);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn default_scenario_matches_reference_shape() {
    let result = run_scenario(&Scenario::default(), IntegratorType::RK4).expect("run failed");

    // Coolest sample is the start; ambient losses are small against the
    // heater, so the warmest sample is the final one despite the off-window.
    assert_eq!(result.summary.min_temp_c, 25.0);
    assert_eq!(result.summary.max_temp_c, result.summary.final_temp_c);

    // The off-window still leaves a visible dip: the last sample inside the
    // window is cooler than the last heated sample before it.
    let last_before_window = result
        .time_s
        .iter()
        .rposition(|&t| t < 900.0)
        .expect("grid covers the pre-window phase");
    let last_in_window = result
        .time_s
        .iter()
        .rposition(|&t| t < 1200.0)
        .expect("grid covers the window");
    assert!(result.temp_c[last_in_window] < result.temp_c[last_before_window]);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = unique_temp_dir("tt_app_missing");
    let err = load_scenario(&dir.join("nope.yaml")).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("Failed to read scenario file"));
}
