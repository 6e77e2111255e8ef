// ABOUTME: Integration tests for environment-based configuration loading
// ABOUTME: Covers defaults, model override, and prompt template file overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use std::env;
use std::io::Write;

use serial_test::serial;
use tempfile::NamedTempFile;

use procoach::config::AppConfig;
use procoach::constants::{defaults, env_config};
use procoach::prompts::DEFAULT_INITIAL_PLAN_TEMPLATE;

fn clear_env() {
    env::remove_var(env_config::GEMINI_API_KEY);
    env::remove_var(env_config::MODEL);
    env::remove_var(env_config::INITIAL_PLAN_TEMPLATE_FILE);
    env::remove_var(env_config::ITERATE_PLAN_TEMPLATE_FILE);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = AppConfig::from_env().unwrap();
    assert!(config.api_key.is_empty());
    assert!(!config.has_credential());
    assert_eq!(config.model, defaults::MODEL);
    assert!(config.initial_plan_template.is_none());
    assert_eq!(config.initial_template(), DEFAULT_INITIAL_PLAN_TEMPLATE);
}

#[test]
#[serial]
fn test_from_env_reads_credential_and_model() {
    clear_env();
    env::set_var(env_config::GEMINI_API_KEY, "env-key");
    env::set_var(env_config::MODEL, "gemini-1.5-pro");

    let config = AppConfig::from_env().unwrap();
    assert!(config.has_credential());
    assert_eq!(config.api_key, "env-key");
    assert_eq!(config.model, "gemini-1.5-pro");

    clear_env();
}

#[test]
#[serial]
fn test_template_file_override_is_loaded() {
    clear_env();

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "Custom plan for {{{{SPORT}}}}").unwrap();
    env::set_var(env_config::INITIAL_PLAN_TEMPLATE_FILE, file.path());

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.initial_template(), "Custom plan for {{SPORT}}");

    clear_env();
}

#[test]
#[serial]
fn test_missing_template_file_is_a_config_error() {
    clear_env();
    env::set_var(
        env_config::ITERATE_PLAN_TEMPLATE_FILE,
        "/nonexistent/template.md",
    );

    let error = AppConfig::from_env().unwrap_err();
    assert!(error.message.contains("/nonexistent/template.md"));

    clear_env();
}
