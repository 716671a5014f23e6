// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Interactive line-based wizard mirroring the welcome menu and input screens
// ABOUTME: Reads answers from stdin and keeps one controller alive across rounds

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use run_coach::coaching::CoachingService;
use run_coach::controller::{AppController, Screen, ScreenChoice, ScreenKind, SubmitOutcome};
use run_coach::display;
use run_coach::images::ImagePayload;
use run_coach::models::{BodyArea, FitnessLevel};
use tokio::io::{stdin, AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::output::{self, OutputOptions};

struct Prompter {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompter {
    fn new() -> Self {
        Self {
            lines: BufReader::new(stdin()).lines(),
        }
    }

    /// Ask one question; `None` on end of input
    async fn ask(&mut self, label: &str) -> Result<Option<String>> {
        print!("{label}: ");
        std::io::stdout().flush()?;
        Ok(self
            .lines
            .next_line()
            .await?
            .map(|line| line.trim().to_owned()))
    }
}

enum Step {
    Continue,
    Quit,
}

/// Run the wizard until the user quits or input ends
pub async fn run(service: &CoachingService, options: OutputOptions) -> Result<ExitCode> {
    let mut prompter = Prompter::new();
    let mut controller = AppController::new();

    loop {
        let step = match controller.screen().kind() {
            ScreenKind::Welcome => welcome(&mut prompter, &mut controller).await?,
            ScreenKind::PlanReady => plan_ready(&mut prompter, &mut controller, options).await?,
            kind if kind.is_input() => {
                fill_form(&mut prompter, &mut controller).await?;
                submit_or_back(&mut prompter, &mut controller, service).await?
            }
            _ => Step::Continue,
        };
        if matches!(step, Step::Quit) {
            return Ok(ExitCode::SUCCESS);
        }
    }
}

async fn welcome(prompter: &mut Prompter, controller: &mut AppController) -> Result<Step> {
    println!();
    output::print_error_banner(controller);
    println!("{}", display::render_welcome());
    let label = if controller.error().is_some() {
        "Choose 1-5 (x to dismiss the error, q to quit)"
    } else {
        "Choose 1-5 (q to quit)"
    };
    let Some(answer) = prompter.ask(label).await? else {
        return Ok(Step::Quit);
    };
    if answer.eq_ignore_ascii_case("q") {
        return Ok(Step::Quit);
    }
    // The banner stays up until dismissed here or the next generation starts
    if answer.eq_ignore_ascii_case("x") {
        controller.dismiss_error();
        return Ok(Step::Continue);
    }
    match answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| ScreenChoice::ALL.get(i))
    {
        Some(choice) => {
            controller.select(*choice);
            println!("\n{}", choice.title());
        }
        None => println!("Please pick a number between 1 and 5."),
    }
    Ok(Step::Continue)
}

async fn read_image(prompter: &mut Prompter, label: &str) -> Result<Option<ImagePayload>> {
    let Some(path) = prompter.ask(label).await? else {
        return Ok(None);
    };
    if path.is_empty() {
        return Ok(None);
    }
    match ImagePayload::from_path(&path).await {
        Ok(payload) => {
            println!("  loaded {} ({})", payload.source_name, payload.format);
            Ok(Some(payload))
        }
        Err(e) => {
            println!("  {}", e.message);
            Ok(None)
        }
    }
}

async fn fill_form(prompter: &mut Prompter, controller: &mut AppController) -> Result<()> {
    match controller.screen().kind() {
        ScreenKind::ImageUpload => {
            let image = read_image(prompter, "Run data screenshot path").await?;
            let goal = prompter.ask("What is your next running goal?").await?;
            let weeks = prompter.ask("Weeks to race (1-52)").await?;
            if let Some(form) = controller.image_form_mut() {
                form.image = image;
                form.goal = goal.unwrap_or_default();
                form.weeks_to_race = weeks.unwrap_or_default();
            }
        }
        ScreenKind::ManualInput => {
            let age = prompter.ask("Age").await?.unwrap_or_default();
            let height = prompter.ask("Height (cm)").await?.unwrap_or_default();
            let weight = prompter.ask("Weight (kg)").await?.unwrap_or_default();
            for level in FitnessLevel::SELECTABLE {
                println!("  {} - {}", level.as_str(), level.description());
            }
            let level = prompter
                .ask("Fitness level")
                .await?
                .and_then(|raw| raw.parse::<FitnessLevel>().ok())
                .unwrap_or_default();
            let recent_run = prompter
                .ask("Recent race or best effort")
                .await?
                .unwrap_or_default();
            let goal = prompter.ask("Goal").await?.unwrap_or_default();
            let weeks = prompter.ask("Weeks to race (1-52)").await?.unwrap_or_default();
            if let Some(form) = controller.manual_form_mut() {
                form.data.age = age;
                form.data.height = height;
                form.data.weight = weight;
                form.data.fitness_level = level;
                form.data.recent_run = recent_run;
                form.goal = goal;
                form.weeks_to_race = weeks;
            }
        }
        ScreenKind::Recovery => {
            for area in &BodyArea::SELECTABLE {
                println!("  - {area}");
            }
            let area = prompter.ask("Focus area").await?.unwrap_or_default();
            let muscle = prompter
                .ask("Specific muscle (optional)")
                .await?
                .unwrap_or_default();
            if let Some(form) = controller.recovery_form_mut() {
                form.focus_area = Some(BodyArea::from_label(&area));
                form.specific_muscle = muscle;
            }
        }
        ScreenKind::Progress => {
            println!("Add screenshots oldest first; leave blank when done.");
            loop {
                let label = match controller.screen() {
                    Screen::Progress(form) => format!("Screenshot #{}", form.images.len() + 1),
                    _ => break,
                };
                let Some(image) = read_image(prompter, &label).await? else {
                    break;
                };
                if let Some(form) = controller.progress_form_mut() {
                    form.add_image(image);
                }
            }
        }
        ScreenKind::RecentRunUpload => {
            let image = read_image(prompter, "Recent run screenshot path").await?;
            if let Some(form) = controller.recent_run_form_mut() {
                form.image = image;
            }
        }
        ScreenKind::Welcome | ScreenKind::Generating | ScreenKind::PlanReady => {}
    }
    Ok(())
}

async fn submit_or_back(
    prompter: &mut Prompter,
    controller: &mut AppController,
    service: &CoachingService,
) -> Result<Step> {
    if !controller.can_submit() {
        println!("submit is disabled until all fields are filled");
        let answer = prompter.ask("[r]etry or [b]ack").await?;
        match answer.as_deref() {
            None => return Ok(Step::Quit),
            Some(a) if a.eq_ignore_ascii_case("b") => controller.back(),
            Some(_) => {}
        }
        return Ok(Step::Continue);
    }

    if let Some(request) = controller.screen().pending_request() {
        println!("\n{}", display::render_generating(request.kind()));
    }
    // A failure lands on Welcome, which shows the banner
    if let SubmitOutcome::Inert = controller.submit(service).await {
        println!("submit is disabled until all fields are filled");
    }
    Ok(Step::Continue)
}

async fn plan_ready(
    prompter: &mut Prompter,
    controller: &mut AppController,
    options: OutputOptions,
) -> Result<Step> {
    println!();
    output::print_result(controller, options)?;
    let answer = prompter.ask("Press Enter to start over (q to quit)").await?;
    match answer.as_deref() {
        None => Ok(Step::Quit),
        Some(a) if a.eq_ignore_ascii_case("q") => Ok(Step::Quit),
        Some(_) => {
            controller.back();
            Ok(Step::Continue)
        }
    }
}
