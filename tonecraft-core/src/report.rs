//! Output records and rendering
//!
//! Global invariants enforced:
//! - Records are plain serializable data with no behavior
//! - Byte-for-byte identical output for identical input

use crate::timing::PhaseBreakdown;
use crate::tone::TonerAdvice;
use serde::{Deserialize, Serialize};

/// Complete single-session formulation recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct FormulationRecommendation {
    pub developer_volume: u32,
    pub processing_time_minutes: u32,
    pub phases: PhaseBreakdown,
    pub mixing_ratio: String,
    pub undertone: String,
    pub toner: TonerAdvice,
    pub reasoning: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub considerations: Vec<String>,
}

/// One safely-bounded stage within a session plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Session {
    pub stage_level: u8,
    pub undertone: String,
    pub time_required_minutes: u32,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<String>,
    pub phases: PhaseBreakdown,
}

/// Journey plan: the next actionable session's stages plus aggregates.
///
/// Only the first session is materialized; callers re-invoke the engine
/// after each completed session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct SessionPlan {
    pub sessions: Vec<Session>,
    pub total_time_minutes: u32,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<String>,
    pub number_of_sessions: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_between_sessions: Option<u32>,
}

/// Render any output record as JSON
pub fn render_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Render a recommendation as text output
pub fn render_text(recommendation: &FormulationRecommendation) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<16} {} volume\n",
        "Developer:", recommendation.developer_volume
    ));
    output.push_str(&format!(
        "{:<16} {} minutes\n",
        "Processing:", recommendation.processing_time_minutes
    ));
    output.push_str(&format!(
        "{:<16} {}\n",
        "Mixing ratio:", recommendation.mixing_ratio
    ));
    output.push_str(&format!("{:<16} {}\n", "Undertone:", recommendation.undertone));

    match (&recommendation.toner.toner_type, &recommendation.toner.reason) {
        (Some(toner_type), Some(reason)) => {
            output.push_str(&format!("{:<16} {} ({})\n", "Toner:", toner_type, reason));
        }
        (Some(toner_type), None) => {
            output.push_str(&format!("{:<16} {}\n", "Toner:", toner_type));
        }
        _ => output.push_str(&format!("{:<16} not needed\n", "Toner:")),
    }

    output.push_str("\nPhases:\n");
    output.push_str(&format!(
        "  {:<14} {} min\n",
        "application", recommendation.phases.application
    ));
    output.push_str(&format!(
        "  {:<14} {} min\n",
        "processing", recommendation.phases.processing
    ));
    if let Some(toning) = recommendation.phases.toning {
        output.push_str(&format!("  {:<14} {} min\n", "toning", toning));
    }

    push_list(&mut output, "Reasoning", &recommendation.reasoning);
    push_list(&mut output, "Warnings", &recommendation.warnings);
    push_list(&mut output, "Considerations", &recommendation.considerations);

    output
}

/// Render a session plan as text output
pub fn render_plan_text(plan: &SessionPlan) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<16} {}\n",
        "Sessions:", plan.number_of_sessions
    ));
    if let Some(days) = plan.days_between_sessions {
        output.push_str(&format!("{:<16} {} days\n", "Cooldown:", days));
    }
    output.push_str(&format!(
        "{:<16} {} minutes\n",
        "Session time:", plan.total_time_minutes
    ));

    output.push_str("\nStages:\n");
    output.push_str(&format!(
        "{:<8} {:<18} {:<8} {}\n",
        "LEVEL", "UNDERTONE", "TIME", "RECOMMENDATIONS"
    ));
    for stage in &plan.sessions {
        let time_str = format!("{} min", stage.time_required_minutes);
        output.push_str(&format!(
            "{:<8} {:<18} {:<8} {}\n",
            stage.stage_level,
            stage.undertone,
            time_str,
            stage.recommendations.join("; ")
        ));
    }

    push_list(&mut output, "Warnings", &plan.warnings);

    output
}

fn push_list(output: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    output.push_str(&format!("\n{}:\n", heading));
    for item in items {
        output.push_str(&format!("  - {}\n", item));
    }
}
