// CLASSIFICATION: COMMUNITY
// Filename: resume_config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use cohesix_resume::config::{load_active, ConfigError, ResumeConfig, BUILTIN_DEFAULT_DEVICE};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

const ENV_VARS: [&str; 5] = [
    "COH_RESUME_CONF",
    "COH_RESUME_DEVICE",
    "COH_SYS_POWER",
    "COH_PROC_CMDLINE",
    "COH_SYS_ROOT",
];

fn clear_env() {
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

#[test]
fn defaults_point_at_live_kernel() {
    let cfg = ResumeConfig::default();
    assert_eq!(cfg.default_device, BUILTIN_DEFAULT_DEVICE);
    assert_eq!(cfg.power_dir, PathBuf::from("/sys/power"));
    assert_eq!(cfg.cmdline_path, PathBuf::from("/proc/cmdline"));
}

#[test]
fn partial_file_keeps_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("resume.toml");
    fs::write(&path, "default_device = \"/dev/vda3\"\n").unwrap();
    let cfg = ResumeConfig::from_file(&path).unwrap();
    assert_eq!(cfg.default_device, "/dev/vda3");
    assert_eq!(cfg.power_dir, PathBuf::from("/sys/power"));
}

#[test]
fn unknown_key_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("resume.toml");
    fs::write(&path, "retries = 3\n").unwrap();
    assert!(matches!(
        ResumeConfig::from_file(&path),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("resume.toml");
    fs::write(
        &path,
        "default_device = \"/dev/vda3\"\npower_dir = \"/tmp/power\"\n",
    )
    .unwrap();
    std::env::set_var("COH_RESUME_CONF", &path);
    std::env::set_var("COH_RESUME_DEVICE", "8:3");
    let cfg = load_active();
    clear_env();
    assert_eq!(cfg.default_device, "8:3");
    assert_eq!(cfg.power_dir, PathBuf::from("/tmp/power"));
}

#[test]
#[serial]
fn broken_file_falls_back_to_defaults() {
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("resume.toml");
    fs::write(&path, "default_device = [").unwrap();
    std::env::set_var("COH_RESUME_CONF", &path);
    std::env::set_var("COH_PROC_CMDLINE", "/tmp/cmdline");
    let cfg = load_active();
    clear_env();
    assert_eq!(cfg.default_device, BUILTIN_DEFAULT_DEVICE);
    assert_eq!(cfg.cmdline_path, PathBuf::from("/tmp/cmdline"));
}

#[test]
#[serial]
fn missing_file_is_fine() {
    clear_env();
    let dir = tempdir().unwrap();
    std::env::set_var("COH_RESUME_CONF", dir.path().join("absent.toml"));
    let cfg = load_active();
    clear_env();
    assert_eq!(cfg, ResumeConfig::default());
}
