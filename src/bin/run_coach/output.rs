// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output helpers for the run-coach binary
// ABOUTME: Prints results as text panels or JSON and maps submit outcomes to exit codes

use std::process::ExitCode;

use anyhow::Result;
use run_coach::controller::{AppController, SubmitOutcome};
use run_coach::display;

/// Exit code when submission was inert because inputs were missing
pub const EXIT_INCOMPLETE: u8 = 2;

/// How results are printed
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Print JSON instead of text panels
    pub json: bool,
}

/// Print the current result (if any) in the selected format
pub fn print_result(controller: &AppController, options: OutputOptions) -> Result<()> {
    let Some(result) = controller.result() else {
        println!("No plan generated.");
        return Ok(());
    };
    if options.json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", display::render_result(result));
        println!("{}", display::disclaimer());
    }
    Ok(())
}

/// Print the error banner to stderr
pub fn print_error_banner(controller: &AppController) {
    if let Some(message) = controller.error() {
        eprintln!("{}", display::render_error_banner(message));
    }
}

/// Report an outcome and turn it into a process exit code
pub fn finish(
    controller: &AppController,
    outcome: &SubmitOutcome,
    options: OutputOptions,
) -> Result<ExitCode> {
    match outcome {
        SubmitOutcome::Completed(_) => {
            print_result(controller, options)?;
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Failed(_) => {
            print_error_banner(controller);
            Ok(ExitCode::FAILURE)
        }
        SubmitOutcome::Inert => {
            eprintln!("submit is disabled until all fields are filled");
            Ok(ExitCode::from(EXIT_INCOMPLETE))
        }
    }
}
