// ABOUTME: Response shapes returned by the AI coach for each request kind
// ABOUTME: Training plan, recovery plan, progress analysis, and recent-run analysis records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// One day of a training week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingDay {
    /// Day label, e.g. "Monday"
    pub day: String,
    /// Activity type, e.g. "Easy Run", "Intervals", "Rest"
    pub activity: String,
    /// Workout specifics, e.g. "6x400m at 5k pace with 400m recovery jogs"
    pub details: String,
}

impl TrainingDay {
    /// Whether this day is a rest day
    #[must_use]
    pub fn is_rest_day(&self) -> bool {
        self.activity.to_lowercase().contains("rest")
    }
}

/// One week of a training plan
///
/// `week` is whatever label the model assigned; it is not checked against
/// the requested number of weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingWeek {
    /// Week number
    pub week: u32,
    /// Focus of the week
    pub summary: String,
    /// Days in the order returned
    pub days: Vec<TrainingDay>,
}

/// Personalized training plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPlan {
    /// Plan title, e.g. "8-Week Half Marathon Training Plan for Sub-2 Hours"
    pub title: String,
    /// Philosophy of the plan and what to expect
    pub overview: String,
    /// Weeks in the order returned
    pub weeks: Vec<TrainingWeek>,
}

/// Single stretch or recovery exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryRoutine {
    /// Exercise name, e.g. "Cat-Cow Stretch"
    pub name: String,
    /// How to perform it
    pub description: String,
    /// e.g. "2 sets of 30 seconds"
    pub duration: String,
}

/// Recovery and stretching routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryPlan {
    /// Routine title
    pub title: String,
    /// Benefits and when to perform it
    pub overview: String,
    /// Exercises in order
    pub routines: Vec<RecoveryRoutine>,
}

/// Direction of a performance trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressTrend {
    /// Performance got better
    Improvement,
    /// Performance got worse
    Decline,
    /// No meaningful change
    Stagnation,
    /// Some metrics better, some worse
    Mixed,
}

impl ProgressTrend {
    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Improvement => "improvement",
            Self::Decline => "decline",
            Self::Stagnation => "stagnation",
            Self::Mixed => "mixed",
        }
    }
}

impl Display for ProgressTrend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// One observed trend with a recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressInsight {
    /// Trend direction
    pub trend: ProgressTrend,
    /// Data-driven observation
    pub observation: String,
    /// Actionable recommendation
    pub recommendation: String,
}

/// Trend analysis across several runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressAnalysis {
    /// Analysis title
    pub title: String,
    /// Overall progress summary
    pub summary: String,
    /// Insights in order
    pub insights: Vec<ProgressInsight>,
}

/// Feedback on a single extracted metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetricFeedback {
    /// Metric name, e.g. "Pace"
    pub metric: String,
    /// Value read from the screenshot, e.g. "5:30 min/km"
    pub value: String,
    /// Constructive feedback
    pub feedback: String,
}

/// Feedback on one recent run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentRunAnalysis {
    /// Analysis title
    pub title: String,
    /// Summary combining all metrics
    pub overall_summary: String,
    /// Metrics in order
    pub metrics: Vec<RunMetricFeedback>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_day_detection_is_case_insensitive() {
        let day = TrainingDay {
            day: "Sunday".into(),
            activity: "Active REST".into(),
            details: "Walk".into(),
        };
        assert!(day.is_rest_day());
    }

    #[test]
    fn test_recent_run_uses_camel_case_summary() {
        let json = r#"{"title":"t","overallSummary":"s","metrics":[]}"#;
        let analysis: RecentRunAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.overall_summary, "s");
    }

    #[test]
    fn test_unknown_trend_is_rejected() {
        let json = r#"{"trend":"sideways","observation":"o","recommendation":"r"}"#;
        assert!(serde_json::from_str::<ProgressInsight>(json).is_err());
    }
}
