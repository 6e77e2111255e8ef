// ABOUTME: ProCoach CLI - command-line driver for plan generation and iteration
// ABOUTME: Reads profile/plan/feedback JSON documents and prints the resulting plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors
//!
//! Usage:
//! ```bash
//! # Generate the first weekly plan from an athlete profile
//! procoach-cli plan generate --profile athlete.json
//!
//! # Iterate a plan using the week's feedback
//! procoach-cli plan iterate --plan week3.json --feedback feedback.json \
//!     --profile athlete.json --output week4.json
//! ```
//!
//! The Gemini credential comes from `GEMINI_API_KEY`; `PROCOACH_MODEL`
//! overrides the default model.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use procoach::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "procoach-cli",
    about = "ProCoach training plan CLI",
    long_about = "Command-line driver for the ProCoach engine: generates and iterates \
                  AI-authored weekly training microcycles from JSON documents."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Training plan commands
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// Generate the first weekly plan from an athlete profile
    Generate {
        /// Path to the athlete profile JSON document
        #[arg(long)]
        profile: PathBuf,

        /// Write the plan JSON to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Iterate a plan into the next week using daily feedback
    Iterate {
        /// Path to the current plan JSON document
        #[arg(long)]
        plan: PathBuf,

        /// Path to the feedback list JSON document
        #[arg(long)]
        feedback: PathBuf,

        /// Path to the athlete profile JSON document
        #[arg(long)]
        profile: PathBuf,

        /// Write the plan JSON to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    match cli.command {
        Command::Plan { action } => match action {
            PlanCommand::Generate { profile, output } => {
                commands::plan::generate(&profile, output.as_deref()).await
            }
            PlanCommand::Iterate {
                plan,
                feedback,
                profile,
                output,
            } => commands::plan::iterate(&plan, &feedback, &profile, output.as_deref()).await,
        },
    }
}
