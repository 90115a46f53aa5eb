//! Integration tests for the installcheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const INSTALLED_LAYOUT: &[&str] = &[
    "tools/planners/ff/ff",
    "tools/planners/downward/fast-downward.py",
    "tools/planners/val/validate",
    "tools/alloy.jar",
];

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

/// A manifest, outside the verification root, whose interpreter is `sh` running
/// a script that exits with `code` for every import.
fn interpreter_manifest(dir: &TempDir, code: i32) -> std::path::PathBuf {
    let script = dir.path().join("fake-python.sh");
    fs::write(&script, format!("exit {}\n", code)).unwrap();
    let manifest = dir.path().join("manifest.yml");
    fs::write(
        &manifest,
        format!(
            "libraries:\n  interpreter: sh\n  interpreter_args: [\"{}\"]\n",
            script.display()
        ),
    )
    .unwrap();
    manifest
}

fn installcheck(root: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("installcheck"));
    cmd.current_dir(root)
        .env_remove("INSTALLCHECK_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_no_args_completes_in_empty_tree() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    installcheck(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Ledger Threat Modeling - Installation Test\n",
        ))
        .stdout(predicate::str::contains("❌ Fast Downward not found"))
        .stdout(predicate::str::ends_with("\nTest complete!\n"));
    Ok(())
}

#[test]
fn cli_empty_tree_report_order() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    let config_dir = TempDir::new()?;
    let manifest = interpreter_manifest(&config_dir, 1);

    let output = installcheck(root.path())
        .env("INSTALLCHECK_CONFIG", &manifest)
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let rule = "=".repeat(50);
    let expected = [
        "Ledger Threat Modeling - Installation Test",
        rule.as_str(),
        "Testing PDDL planners...",
        "⚠️  FF planner not found (Fast Downward will be used)",
        "❌ Fast Downward not found",
        "⚠️  VAL validator not found (plan validation will be limited)",
        "",
        "Testing Alloy...",
        "❌ Alloy Analyzer not found",
        "",
        "Testing Python dependencies...",
        "❌ networkx not available",
        "❌ matplotlib not available",
        "❌ yaml not available",
        "❌ click not available",
        "",
        "Test complete!",
    ];
    assert_eq!(stdout.lines().collect::<Vec<_>>(), expected);
    Ok(())
}

#[test]
fn cli_installed_tree_reports_only_successes() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    for rel in INSTALLED_LAYOUT {
        touch(root.path(), rel);
    }
    let config_dir = TempDir::new()?;
    let manifest = interpreter_manifest(&config_dir, 0);

    installcheck(root.path())
        .args(["--config"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ FF planner found"))
        .stdout(predicate::str::contains("✅ VAL validator found"))
        .stdout(predicate::str::contains("✅ Alloy Analyzer found"))
        .stdout(predicate::str::contains("✅ click imported successfully"))
        .stdout(predicate::str::contains("⚠️").not())
        .stdout(predicate::str::contains("❌").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_interpreter_path_with_space() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    let venv_bin = root.path().join("my venv").join("bin");
    fs::create_dir_all(&venv_bin)?;
    let python = venv_bin.join("python");
    std::os::unix::fs::symlink("/bin/true", &python)?;
    fs::write(
        root.path().join(".installcheck.yml"),
        format!("libraries:\n  interpreter: \"{}\"\n", python.display()),
    )?;

    installcheck(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ networkx imported successfully"))
        .stdout(predicate::str::contains("not available").not());
    Ok(())
}

#[test]
fn cli_misspelled_manifest_key_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    fs::write(
        root.path().join(".installcheck.yml"),
        "planners:\n  - name: FF planner\n    paths: [tools/planners/ff/ff]\n    on_mising: degrade\n",
    )?;
    installcheck(root.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("on_mising"));
    Ok(())
}

#[test]
fn cli_root_flag_overrides_current_dir() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    touch(root.path(), "tools/alloy.jar");
    let elsewhere = TempDir::new()?;

    installcheck(elsewhere.path())
        .arg("--root")
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Alloy Analyzer found"));
    Ok(())
}

#[test]
fn cli_reads_manifest_from_root() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    fs::write(
        root.path().join(".installcheck.yml"),
        "title: Custom Toolchain Check\nlibraries:\n  modules: []\n",
    )?;

    installcheck(root.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Custom Toolchain Check\n"))
        .stdout(predicate::str::contains("imported").not());
    Ok(())
}

#[test]
fn cli_strict_fails_on_missing_required_tool() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    let config_dir = TempDir::new()?;
    let manifest = interpreter_manifest(&config_dir, 0);

    installcheck(root.path())
        .arg("--strict")
        .arg("--config")
        .arg(&manifest)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Test complete!"));
    Ok(())
}

#[test]
fn cli_strict_passes_when_installed() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    for rel in INSTALLED_LAYOUT {
        touch(root.path(), rel);
    }
    let config_dir = TempDir::new()?;
    let manifest = interpreter_manifest(&config_dir, 0);

    installcheck(root.path())
        .arg("--strict")
        .arg("--config")
        .arg(&manifest)
        .assert()
        .success();
    Ok(())
}

#[test]
fn cli_missing_config_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    installcheck(root.path())
        .args(["--config", "does-not-exist.yml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Manifest not found"));
    Ok(())
}

#[test]
fn cli_invalid_manifest_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    fs::write(
        root.path().join(".installcheck.yml"),
        "libraries:\n  modules: [\"os; import sys\"]\n",
    )?;
    installcheck(root.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid manifest"));
    Ok(())
}

#[test]
fn cli_debug_logs_to_stderr_only() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    let config_dir = TempDir::new()?;
    let manifest = interpreter_manifest(&config_dir, 0);

    installcheck(root.path())
        .arg("--debug")
        .arg("--config")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("DEBUG"));
    Ok(())
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("installcheck"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--strict"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("installcheck"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}
