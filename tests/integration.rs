//! Integration tests for the minard CLI

mod common;

use std::process::Command;
use tempfile::TempDir;

/// Get the path to the minard binary
fn minard_bin() -> std::path::PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("minard");
    path
}

/// Run minard with the given arguments
fn run_minard(args: &[&str]) -> std::process::Output {
    Command::new(minard_bin())
        .args(args)
        .output()
        .expect("failed to execute minard")
}

/// Centre of the retreat band's dot at the Niemen in the default layout
const NIEMEN_RETREAT: &str = "52,143";
/// Centre of the advance band's dot at Moscow in the default layout
const MOSCOW_ADVANCE: &str = "736,121";

// =============================================================================
// Basic functionality tests
// =============================================================================

#[test]
fn test_help_flag() {
    let output = run_minard(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Flow-band charts"));
    assert!(stdout.contains("--tab"));
    assert!(stdout.contains("--anchor"));
    assert!(stdout.contains("--pointer"));
    assert!(stdout.contains("--image"));
}

#[test]
fn test_version_flag() {
    let output = run_minard(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("minard"));
}

// =============================================================================
// Tab tables
// =============================================================================

#[test]
fn test_default_army_size_table() {
    let output = run_minard(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[Army Size]"));
    assert!(stdout.contains("Dataset: built-in"));
    assert!(stdout.contains("422,000"));
    assert!(stdout.contains("Smolensk↩"));
    assert!(stdout.contains("Niemen↩"));
    assert!(!stdout.contains("Moscow↩"));
}

#[test]
fn test_every_tab_prints_a_table() {
    for (tab, heading) in [
        ("army-size", "[Army Size]"),
        ("route", "[Route]"),
        ("temperature", "[Temperature]"),
        ("combined", "[Combined]"),
        ("modern-minard", "[Modern Minard]"),
    ] {
        let output = run_minard(&["-q", "-t", tab]);
        assert!(output.status.success(), "tab {tab} failed");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(heading), "missing {heading}");
    }
}

#[test]
fn test_temperature_table_converts_reaumur() {
    let output = run_minard(&["-q", "--no-color", "-t", "temperature"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Dec 6"));
    assert!(stdout.contains("-30.0"));
    assert!(stdout.contains("-37.50"));
}

#[test]
fn test_flow_table_and_points() {
    let output = run_minard(&["-q", "-t", "modern-minard", "--points"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("HEIGHT"));
    assert!(stdout.contains("[advance polygon] 10 points"));
    assert!(stdout.contains("[retreat polygon] 10 points"));
}

#[test]
fn test_shared_anchor_layout() {
    let output = run_minard(&["-t", "modern-minard", "-a", "shared"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SharedCenterline"));
    assert!(stdout.contains("Ordinal"));
}

// =============================================================================
// Hover simulation
// =============================================================================

#[test]
fn test_hover_retreat_end() {
    let output = run_minard(&["-t", "modern-minard", "--pointer", NIEMEN_RETREAT]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Niemen - Retreat"));
    assert!(stdout.contains("Troops: 10,000"));
    assert!(stdout.contains("Temp: -30°Ré (-37.5°C)"));
    assert!(stdout.contains("hover -> Niemen (retreat)"));
    assert!(stdout.contains("hover -> none"));
}

#[test]
fn test_hover_sequence() {
    let output = run_minard(&[
        "-t",
        "modern-minard",
        "-p",
        MOSCOW_ADVANCE,
        "-p",
        "400,20",
        "-p",
        NIEMEN_RETREAT,
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Moscow - Advance"));
    assert!(stdout.contains("(no waypoint)"));
    assert!(stdout.contains("Niemen - Retreat"));
    assert_eq!(stdout.matches("hover -> none").count(), 2);
}

#[test]
fn test_hover_quiet_hides_transitions() {
    let output = run_minard(&["-q", "-t", "modern-minard", "-p", NIEMEN_RETREAT]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Niemen - Retreat"));
    assert!(!stdout.contains("hover ->"));
}

#[test]
fn test_hover_nearest_x() {
    let output = run_minard(&[
        "-q",
        "-t",
        "modern-minard",
        "-p",
        "730,5",
        "--strategy",
        "nearest-x",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Moscow - Retreat"));
}

// =============================================================================
// Images
// =============================================================================

#[test]
fn test_flow_chart_image() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("flow.svg");

    let output = run_minard(&[
        "-q",
        "-t",
        "modern-minard",
        "--theme",
        "parchment",
        "--image",
        image_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let svg = std::fs::read_to_string(&image_path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Niemen - Retreat"));
}

#[test]
fn test_panel_chart_image() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("army.svg");

    let output = run_minard(&["-q", "--image", image_path.to_str().unwrap()]);
    assert!(output.status.success());

    // Check that the image file was created
    assert!(image_path.exists(), "Image file should be created");
    assert!(
        std::fs::metadata(&image_path).unwrap().len() > 0,
        "Image file should not be empty"
    );
}

// =============================================================================
// Dataset files
// =============================================================================

#[test]
fn test_dataset_file() {
    let variant = common::demo_path("retreat-variant.toml");
    let output = run_minard(&["--no-color", variant.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Dataset: retreat-variant.toml"));
    assert!(stdout.contains("Minsk↩"));
    assert!(stdout.contains("12,000"));
}

#[test]
fn test_compare_datasets() {
    let temp_dir = TempDir::new().unwrap();
    let a = common::write_file(temp_dir.path(), "a.toml", &common::small_dataset(100)).unwrap();
    let b = common::write_file(temp_dir.path(), "b.toml", &common::small_dataset(2100)).unwrap();

    let output = run_minard(&["--no-color", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Comparison (base: [A])"));
    assert!(stdout.contains("B-A"));
    assert!(stdout.contains("+2,000"));
    assert!(stdout.contains("Max troops: [A] 1,000  [B] 2,100"));
}

#[test]
fn test_compare_variant_against_itself() {
    let variant = common::demo_path("retreat-variant.toml");
    let path = variant.to_str().unwrap();
    let output = run_minard(&["-q", "--no-color", path, path]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains('+'));
}

// =============================================================================
// Error cases
// =============================================================================

#[test]
fn test_too_many_files_error() {
    let output = run_minard(&["a.toml", "b.toml", "c.toml"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Too many files specified (max 2)"));
}

#[test]
fn test_nonexistent_file_error() {
    let output = run_minard(&["/nonexistent/path/dataset.toml"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"));
}

#[test]
fn test_unknown_temperature_label_error() {
    let temp_dir = TempDir::new().unwrap();
    let text = common::small_dataset(100) + "\n[[temperature]]\nat = \"Nowhere\"\nreaumur = -5\n";
    let path = common::write_file(temp_dir.path(), "bad.toml", &text).unwrap();

    let output = run_minard(&[path.to_str().unwrap()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown retreat waypoint 'Nowhere'"));
}

#[test]
fn test_single_stop_phase_error() {
    let temp_dir = TempDir::new().unwrap();
    let text = r#"
[[advance]]
label = "Only"
position = 0.0
magnitude = 10
timestamp = "Jun"

[[retreat]]
label = "Only"
position = 0.0
magnitude = 5
timestamp = "Dec"
"#;
    let path = common::write_file(temp_dir.path(), "single.toml", text).unwrap();

    let output = run_minard(&["-t", "modern-minard", path.to_str().unwrap()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least 2 waypoints"));
}

#[test]
fn test_pointer_requires_flow_tab_error() {
    let output = run_minard(&["--pointer", NIEMEN_RETREAT]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--pointer can only be used with --tab modern-minard"));
}

#[test]
fn test_points_requires_flow_tab_error() {
    let output = run_minard(&["--points"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--points can only be used with --tab modern-minard"));
}

#[test]
fn test_strategy_without_pointer_error() {
    let output = run_minard(&["-t", "modern-minard", "--strategy", "nearest-x"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--strategy can only be used with --pointer"));
}

#[test]
fn test_gap_with_shared_anchor_error() {
    let output = run_minard(&["-a", "shared", "--gap", "4"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--gap can only be used with --anchor stacked"));
}

#[test]
fn test_invalid_pointer_error() {
    let output = run_minard(&["-t", "modern-minard", "--pointer", "north"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected X,Y"));
}

#[test]
fn test_image_invalid_directory_error() {
    let output = run_minard(&["-q", "--image", "/nonexistent/dir/chart.svg"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Directory does not exist"));
}

#[test]
fn test_flow_chart_png_error() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("flow.png");

    let output = run_minard(&[
        "-t",
        "modern-minard",
        "--image",
        image_path.to_str().unwrap(),
    ]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must be an .svg file"));
}

// =============================================================================
// Output format tests
// =============================================================================

#[test]
fn test_theme_without_image_warning() {
    let output = run_minard(&["-q", "--theme", "parchment"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning"));
    assert!(stderr.contains("--theme only affects --image output"));
}

#[test]
fn test_no_color_option() {
    let output = run_minard(&["--no-color", "-t", "combined"]);
    assert!(output.status.success());

    // Output should not contain ANSI escape codes
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains("\x1b["),
        "Should not contain ANSI escape codes"
    );
}

#[test]
fn test_quiet_mode_reduces_output() {
    let verbose_output = run_minard(&["-t", "temperature"]);
    let quiet_output = run_minard(&["-q", "-t", "temperature"]);

    let verbose_stdout = String::from_utf8_lossy(&verbose_output.stdout);
    let quiet_stdout = String::from_utf8_lossy(&quiet_output.stdout);
    assert!(quiet_stdout.len() < verbose_stdout.len());
    assert!(verbose_stdout.contains("°C = °Ré x 1.25"));
    assert!(!quiet_stdout.contains("Dataset:"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let output = run_minard(&["-v", "--no-color", "-q", "-t", "modern-minard"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("built flow chart"));
}
