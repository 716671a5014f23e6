// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: One-shot subcommands that walk the controller like the screens would
// ABOUTME: select, fill the form, submit once, then print the result or the error banner

use std::process::ExitCode;

use anyhow::Result;
use run_coach::coaching::CoachingService;
use run_coach::controller::{AppController, ScreenChoice};
use run_coach::display;
use run_coach::images::ImagePayload;
use run_coach::models::{BodyArea, ManualData};
use tracing::debug;

use crate::output::{self, OutputOptions};

async fn submit_and_report(
    controller: &mut AppController,
    service: &CoachingService,
    options: OutputOptions,
) -> Result<ExitCode> {
    if let Some(request) = controller.screen().pending_request() {
        eprintln!("{}", display::render_generating(request.kind()));
    }
    let outcome = controller.submit(service).await;
    debug!(?outcome, "submit finished");
    output::finish(controller, &outcome, options)
}

/// `plan-from-image`
pub async fn plan_from_image(
    service: &CoachingService,
    options: OutputOptions,
    image: &str,
    goal: String,
    weeks: String,
) -> Result<ExitCode> {
    let payload = ImagePayload::from_path(image).await?;

    let mut controller = AppController::new();
    controller.select(ScreenChoice::PlanFromImage);
    if let Some(form) = controller.image_form_mut() {
        form.image = Some(payload);
        form.goal = goal;
        form.weeks_to_race = weeks;
    }
    submit_and_report(&mut controller, service, options).await
}

/// `plan`
pub async fn plan_manually(
    service: &CoachingService,
    options: OutputOptions,
    data: ManualData,
    goal: String,
    weeks: String,
) -> Result<ExitCode> {
    let mut controller = AppController::new();
    controller.select(ScreenChoice::PlanManually);
    if let Some(form) = controller.manual_form_mut() {
        form.data = data;
        form.goal = goal;
        form.weeks_to_race = weeks;
    }
    submit_and_report(&mut controller, service, options).await
}

/// `recovery`
pub async fn recovery(
    service: &CoachingService,
    options: OutputOptions,
    area: &str,
    muscle: String,
) -> Result<ExitCode> {
    let mut controller = AppController::new();
    controller.select(ScreenChoice::Recovery);
    if let Some(form) = controller.recovery_form_mut() {
        form.focus_area = Some(BodyArea::from_label(area));
        form.specific_muscle = muscle;
    }
    submit_and_report(&mut controller, service, options).await
}

/// `progress`
pub async fn progress(
    service: &CoachingService,
    options: OutputOptions,
    images: &[String],
) -> Result<ExitCode> {
    let mut controller = AppController::new();
    controller.select(ScreenChoice::Progress);
    for path in images {
        let payload = ImagePayload::from_path(path).await?;
        if let Some(form) = controller.progress_form_mut() {
            form.add_image(payload);
        }
    }
    submit_and_report(&mut controller, service, options).await
}

/// `recent-run`
pub async fn recent_run(
    service: &CoachingService,
    options: OutputOptions,
    image: &str,
) -> Result<ExitCode> {
    let payload = ImagePayload::from_path(image).await?;

    let mut controller = AppController::new();
    controller.select(ScreenChoice::RecentRun);
    if let Some(form) = controller.recent_run_form_mut() {
        form.image = Some(payload);
    }
    submit_and_report(&mut controller, service, options).await
}
