// ABOUTME: Run Coach CLI - one-shot coaching commands and an interactive screen wizard
// ABOUTME: Loads configuration, initializes logging, and drives the screen controller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Training plan from a run screenshot
//! run-coach plan-from-image --image run.png --goal "sub-50 10k" --weeks 8
//!
//! # Training plan from manual stats
//! run-coach plan --age 32 --height 175 --weight 70 --fitness-level intermediate \
//!     --recent-run "10k in 55 minutes" --goal "sub-2-hour half marathon" --weeks 8
//!
//! # Recovery routine
//! run-coach recovery --area "Lower Legs" --muscle "left calf"
//!
//! # Progress across several runs, oldest first
//! run-coach progress week1.png week2.png week3.png
//!
//! # Feedback on one run, printed as JSON
//! run-coach --json recent-run today.jpg
//!
//! # Menu-driven mode
//! run-coach interactive
//! ```

mod commands;
mod interactive;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use run_coach::coaching::CoachingService;
use run_coach::config::CoachConfig;
use run_coach::logging;
use run_coach::models::FitnessLevel;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "run-coach",
    about = "Rochys Run Coach",
    long_about = "AI generated training plans, recovery routines and run analysis from screenshots or manual stats."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Print the decoded result as JSON instead of text panels
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Create a training plan from a run screenshot
    PlanFromImage {
        /// Screenshot of a run (PNG, JPEG or WEBP, up to 10 MB)
        #[arg(long)]
        image: String,

        /// Your next running goal
        #[arg(long)]
        goal: String,

        /// Weeks until the race (1-52)
        #[arg(long)]
        weeks: String,
    },

    /// Create a training plan from your stats
    Plan {
        /// Age in years
        #[arg(long)]
        age: String,

        /// Height in cm
        #[arg(long)]
        height: String,

        /// Weight in kg
        #[arg(long)]
        weight: String,

        /// beginner, intermediate or advanced
        #[arg(long)]
        fitness_level: FitnessLevel,

        /// Recent race or best effort, e.g. "10k in 55 minutes"
        #[arg(long)]
        recent_run: String,

        /// Your next running goal
        #[arg(long)]
        goal: String,

        /// Weeks until the race (1-52)
        #[arg(long)]
        weeks: String,
    },

    /// Generate a recovery and stretching routine
    Recovery {
        /// Body area: Neck, Arms, Upper Body, Core, Hips, Upper Legs, Lower Legs
        #[arg(long)]
        area: String,

        /// Specific muscle or area
        #[arg(long)]
        muscle: Option<String>,
    },

    /// Analyze progress across two or more run screenshots, oldest first
    Progress {
        /// Screenshots in chronological order
        #[arg(required = true)]
        images: Vec<String>,
    },

    /// Get feedback on a single recent run screenshot
    RecentRun {
        /// Screenshot of the run
        image: String,
    },

    /// Walk through the screens interactively
    Interactive,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    logging::init_from_env(cli.verbose)?;

    // A missing credential is fatal before any screen is shown
    let config = CoachConfig::from_env()?;
    config.log_summary();
    let service = CoachingService::from_config(&config)?;

    info!(provider = service.provider_name(), "Run Coach ready");

    let options = output::OutputOptions { json: cli.json };

    match cli.command {
        Command::PlanFromImage { image, goal, weeks } => {
            commands::plan_from_image(&service, options, &image, goal, weeks).await
        }
        Command::Plan {
            age,
            height,
            weight,
            fitness_level,
            recent_run,
            goal,
            weeks,
        } => {
            let data = run_coach::models::ManualData {
                age,
                height,
                weight,
                fitness_level,
                recent_run,
            };
            commands::plan_manually(&service, options, data, goal, weeks).await
        }
        Command::Recovery { area, muscle } => {
            commands::recovery(&service, options, &area, muscle.unwrap_or_default()).await
        }
        Command::Progress { images } => commands::progress(&service, options, &images).await,
        Command::RecentRun { image } => commands::recent_run(&service, options, &image).await,
        Command::Interactive => interactive::run(&service, options).await,
    }
}
