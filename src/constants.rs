// ABOUTME: System-wide constants and environment variable names for procoach
// ABOUTME: Contains generation defaults and retry policy baseline values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors

//! # Constants Module
//!
//! Application constants and environment variable names. Runtime overrides
//! come exclusively from the environment; there is no configuration file.

/// Environment variable names read by [`crate::config::AppConfig::from_env`]
pub mod env_config {
    /// API credential for the Gemini completion endpoint
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

    /// Model identifier override
    pub const MODEL: &str = "PROCOACH_MODEL";

    /// Path to a custom initial-generation prompt template
    pub const INITIAL_PLAN_TEMPLATE_FILE: &str = "PROCOACH_INITIAL_PLAN_TEMPLATE_FILE";

    /// Path to a custom iteration prompt template
    pub const ITERATE_PLAN_TEMPLATE_FILE: &str = "PROCOACH_ITERATE_PLAN_TEMPLATE_FILE";
}

/// Generation and retry defaults
pub mod defaults {
    /// Default Gemini model for plan generation
    pub const MODEL: &str = "gemini-2.5-flash";

    /// Retry attempts beyond the initial one
    pub const MAX_RETRIES: u32 = 3;

    /// Backoff before the first retry, in milliseconds
    pub const INITIAL_BACKOFF_MS: u64 = 1000;

    /// Multiplier applied to the backoff after each retry
    pub const BACKOFF_FACTOR: f64 = 1.5;
}

/// Service identity
pub mod service {
    /// Service name for structured logging
    pub const SERVICE_NAME: &str = "procoach";

    /// Service version from Cargo.toml
    pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
}
