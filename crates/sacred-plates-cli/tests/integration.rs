//! Integration tests for sacred-plates CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sacred-plates"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// A scratch path unique to this test process.
fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sacred-plates-{}-{}", std::process::id(), name))
}

#[test]
fn plates_command_lists_the_catalog() {
    let output = run(&["plates"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("flower-of-life"), "Should list 'flower-of-life'");
    assert!(stdout.contains("metatrons-cube"), "Should list 'metatrons-cube'");
    assert!(stdout.contains("Sri Yantra"), "Should show titles");
    assert!(stdout.starts_with("14 plates:"), "Got header: {:?}", stdout.lines().next());
}

#[test]
fn plates_json_is_parseable() {
    let output = run(&["plates", "--json"]);
    assert!(output.status.success());
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let entries = entries.as_array().expect("array of entries");
    assert_eq!(entries.len(), 14);
    assert_eq!(entries[0]["slug"], "flower-of-life");
    assert_eq!(entries[0]["generator"], "flower-of-life");
}

#[test]
fn render_command_produces_svg() {
    let output = run(&["render", "flower-of-life"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.starts_with("<?xml"), "Should have XML declaration");
    assert!(stdout.contains("<svg"), "Should have SVG element");
    assert_eq!(stdout.matches("<circle").count(), 19, "Flower of life has 19 circles");
    assert!(stdout.contains("</svg>"), "Should close SVG element");
}

#[test]
fn render_is_reproducible_across_runs() {
    let a = run(&["render", "sri-yantra", "--variant", "full"]);
    let b = run(&["render", "sri-yantra", "--variant", "full"]);
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
    assert!(String::from_utf8_lossy(&a.stdout).contains(r#"width="960""#));
}

#[test]
fn unknown_slug_renders_placeholder() {
    let output = run(&["render", "not-a-real-pattern"]);
    assert!(output.status.success(), "placeholder is not a failure");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"data-plate-fallback="true""#));
    assert!(stdout.contains("not-a-real-pattern"));
}

#[test]
fn unknown_variant_is_rejected() {
    let output = run(&["render", "torus", "--variant", "poster"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("poster"));
}

#[test]
fn lineset_command_produces_closed_rings() {
    let output = run(&["lineset", "seed-of-life", "--variant", "thumbnail"]);
    assert!(output.status.success());
    let set: Vec<Vec<serde_json::Value>> = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(set.len(), 7);
    for ring in &set {
        assert_eq!(ring.len(), 49, "thumbnail detail is 48");
        assert_eq!(ring.first(), ring.last());
        assert_eq!(ring[0]["z"], 0.0);
    }
}

#[test]
fn lineset_unknown_slug_fails() {
    let output = run(&["lineset", "not-a-real-pattern"]);
    assert!(!output.status.success());
}

#[test]
fn sheet_writes_every_plate() {
    let path = scratch("sheet.svg");
    let output = run(&["sheet", "-o", path.to_str().unwrap(), "--columns", "5"]);
    assert!(output.status.success());

    let sheet = fs::read_to_string(&path).expect("sheet written");
    assert_eq!(sheet.matches("<g id=\"plate-").count(), 14);
    assert!(sheet.contains("Tree of Life"));
    let _ = fs::remove_file(path);
}

#[test]
fn render_png_export() {
    let svg = scratch("torus.svg");
    let png = scratch("torus.png");
    let output = run(&[
        "render",
        "torus",
        "-o",
        svg.to_str().unwrap(),
        "--png",
        png.to_str().unwrap(),
        "--png-scale",
        "1",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let bytes = fs::read(&png).expect("png written");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let _ = fs::remove_file(svg);
    let _ = fs::remove_file(png);
}

#[test]
fn config_file_overrides_profiles() {
    let config = scratch("config.yaml");
    fs::write(&config, "thumbnail:\n  width: 500\n  height: 500\n").unwrap();

    let output = run(&["--config", config.to_str().unwrap(), "render", "hexagram"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"viewBox="0 0 500 500""#));
    let _ = fs::remove_file(config);
}

#[test]
fn bad_config_file_is_an_error() {
    let config = scratch("bad.yaml");
    fs::write(&config, "size: [not, a, number]\n").unwrap();
    let output = run(&["--config", config.to_str().unwrap(), "plates"]);
    assert!(!output.status.success());
    let _ = fs::remove_file(config);
}
