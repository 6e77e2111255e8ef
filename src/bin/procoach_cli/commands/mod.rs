// ABOUTME: CLI command implementations for the procoach binary
// ABOUTME: Groups subcommand handlers by domain area
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors

/// Plan generation and iteration commands
pub mod plan;
