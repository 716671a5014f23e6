// ABOUTME: Plain-text renderers for coaching results, the welcome menu, and status banners
// ABOUTME: Renders plan, routine, insight and metric cards as terminal text panels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{messages, service_names};
use crate::controller::ScreenChoice;
use crate::models::{
    CoachingResult, ProgressAnalysis, ProgressTrend, RecentRunAnalysis, RecoveryPlan,
    RequestKind, TrainingPlan,
};

const RULE_WIDTH: usize = 72;

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

fn header(lines: &mut Vec<String>, title: &str, intro: &str) {
    lines.push(rule('='));
    lines.push(title.to_owned());
    lines.push(rule('='));
    lines.push(intro.to_owned());
    lines.push(String::new());
}

/// Render whichever result is current
#[must_use]
pub fn render_result(result: &CoachingResult) -> String {
    match result {
        CoachingResult::TrainingPlan(plan) => render_training_plan(plan),
        CoachingResult::RecoveryPlan(plan) => render_recovery_plan(plan),
        CoachingResult::ProgressAnalysis(analysis) => render_progress_analysis(analysis),
        CoachingResult::RecentRunAnalysis(analysis) => render_recent_run_analysis(analysis),
    }
}

/// Training plan: one block per week, one card per day, rest days marked
#[must_use]
pub fn render_training_plan(plan: &TrainingPlan) -> String {
    let mut lines = Vec::new();
    header(&mut lines, &plan.title, &plan.overview);

    for week in &plan.weeks {
        lines.push(format!("Week {}", week.week));
        lines.push(format!("  {}", week.summary));
        lines.push(rule('-'));
        for day in &week.days {
            let marker = if day.is_rest_day() { "[rest]" } else { "[run] " };
            lines.push(format!("  {marker} {}: {}", day.day, day.activity));
            lines.push(format!("         {}", day.details));
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Recovery routine: one card per exercise with its duration
#[must_use]
pub fn render_recovery_plan(plan: &RecoveryPlan) -> String {
    let mut lines = Vec::new();
    header(&mut lines, &plan.title, &plan.overview);

    for (index, routine) in plan.routines.iter().enumerate() {
        lines.push(format!("{}. {} ({})", index + 1, routine.name, routine.duration));
        lines.push(format!("   {}", routine.description));
        lines.push(String::new());
    }
    lines.join("\n")
}

const fn trend_marker(trend: ProgressTrend) -> &'static str {
    match trend {
        ProgressTrend::Improvement => "(+)",
        ProgressTrend::Decline => "(-)",
        ProgressTrend::Stagnation => "(=)",
        ProgressTrend::Mixed => "(~)",
    }
}

/// Progress analysis: insight cards labelled by trend
#[must_use]
pub fn render_progress_analysis(analysis: &ProgressAnalysis) -> String {
    let mut lines = Vec::new();
    header(&mut lines, &analysis.title, &analysis.summary);
    lines.push("Key Insights & Recommendations".to_owned());
    lines.push(rule('-'));

    for insight in &analysis.insights {
        lines.push(format!(
            "{} {}",
            trend_marker(insight.trend),
            insight.trend.as_str().to_uppercase()
        ));
        lines.push(format!("  Observation: {}", insight.observation));
        lines.push(format!("  Recommendation: {}", insight.recommendation));
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Recent-run analysis: metric cards with value and feedback
#[must_use]
pub fn render_recent_run_analysis(analysis: &RecentRunAnalysis) -> String {
    let mut lines = Vec::new();
    header(&mut lines, &analysis.title, &analysis.overall_summary);
    lines.push("Metrics Breakdown".to_owned());
    lines.push(rule('-'));

    for metric in &analysis.metrics {
        lines.push(format!("{}: {}", metric.metric, metric.value));
        lines.push(format!("  {}", metric.feedback));
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Welcome screen with numbered menu choices
#[must_use]
pub fn render_welcome() -> String {
    let mut lines = vec![
        format!("Welcome to {}", service_names::COACH_BRAND),
        "Get instant feedback on your last run, create a personalized training plan, track your performance, or generate a custom recovery routine.".to_owned(),
        String::new(),
    ];
    for (index, choice) in ScreenChoice::ALL.iter().enumerate() {
        lines.push(format!("  {}) {}", index + 1, choice.title()));
        lines.push(format!("     {}", choice.description()));
    }
    lines.join("\n")
}

/// Text shown while a request is outstanding
#[must_use]
pub fn render_generating(kind: RequestKind) -> String {
    format!("{} ({kind})", messages::GENERATING)
}

/// Error banner
#[must_use]
pub fn render_error_banner(message: &str) -> String {
    format!("Error\n{message}")
}

/// Footer disclaimer
#[must_use]
pub const fn disclaimer() -> &'static str {
    messages::DISCLAIMER
}
