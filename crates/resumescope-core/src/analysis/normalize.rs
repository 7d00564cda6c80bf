//! Reshapes a sanitized backend payload into a [`NormalizedAnalysis`].
//!
//! Responsibilities:
//! - Resolve a single score and mirror it into both score fields
//! - Default the two scorecard metrics
//! - Turn loosely shaped skill/job lists into fully shaped records
//! - Pass through entities, breakdown and summary when they have the right type
//!
//! Non-responsibilities:
//! - Removing reserved keys (handled in `payload::sanitize`)
//! - Talking to the backend
//!
//! `normalize` is total: every JSON value, including `null` and top-level
//! scalars or arrays, yields a complete record. Shape problems become
//! defaults, never errors.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::analysis::model::{
    DEFAULT_JOB_REASON, DEFAULT_JOB_SCORE, DEFAULT_SKILL_CONFIDENCE, JobRecommendation,
    KeyMetrics, NormalizedAnalysis, SkillProficiency,
};
use crate::payload::coerce::{as_label, as_number, label_field, number_field};

/// Score fields in resolution order.
const SCORE_FIELDS: &[&str] = &["ats_score", "overall_score"];
const METRICS_FIELD: &str = "key_metrics";
const SKILLS_FIELD: &str = "skills_proficiency";
const JOBS_FIELD: &str = "job_recommendations";
const ENTITIES_FIELD: &str = "entities";
const BREAKDOWN_FIELD: &str = "ats_breakdown";
const SUMMARY_FIELD: &str = "summary";

const SKILL_LABEL_FIELDS: &[&str] = &["skill", "name"];
const JOB_LABEL_FIELDS: &[&str] = &["role"];

pub fn normalize(payload: &Value) -> NormalizedAnalysis {
    let score = resolve_score(payload);

    NormalizedAnalysis {
        ats_score: score,
        overall_score: score,
        key_metrics: resolve_metrics(payload.get(METRICS_FIELD)),
        skills_proficiency: reshape_list(payload.get(SKILLS_FIELD), reshape_skill),
        job_recommendations: reshape_list(payload.get(JOBS_FIELD), reshape_job),
        entities: payload
            .get(ENTITIES_FIELD)
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_else(Map::new),
        ats_breakdown: resolve_breakdown(payload.get(BREAKDOWN_FIELD)),
        summary: payload
            .get(SUMMARY_FIELD)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_default(),
    }
}

/// First numeric score field, rounded and clamped to a percentage.
fn resolve_score(payload: &Value) -> u8 {
    number_field(payload, SCORE_FIELDS)
        .map(to_percent)
        .unwrap_or(0)
}

fn to_percent(value: f64) -> u8 {
    // Clamped first, so the cast cannot truncate.
    value.round().clamp(0.0, 100.0) as u8
}

fn to_ratio(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

fn resolve_metrics(metrics: Option<&Value>) -> KeyMetrics {
    let defaults = KeyMetrics::default();
    let Some(metrics) = metrics.filter(|m| m.is_object()) else {
        return defaults;
    };

    let read = |field: &str, fallback: f64| {
        metrics
            .get(field)
            .and_then(as_number)
            .map(to_ratio)
            .unwrap_or(fallback)
    };

    KeyMetrics {
        keyword_density: read("keyword_density", defaults.keyword_density),
        formatting_clarity: read("formatting_clarity", defaults.formatting_clarity),
    }
}

/// Maps every element of a JSON array; anything else is an empty list.
fn reshape_list<T>(list: Option<&Value>, reshape: fn(&Value) -> T) -> Vec<T> {
    match list {
        Some(Value::Array(items)) => items.iter().map(reshape).collect(),
        _ => vec![],
    }
}

fn reshape_skill(item: &Value) -> SkillProficiency {
    SkillProficiency {
        skill: label_field(item, SKILL_LABEL_FIELDS)
            .or_else(|| as_label(item))
            .unwrap_or_default(),
        confidence: number_field(item, &["confidence"]).unwrap_or(DEFAULT_SKILL_CONFIDENCE),
    }
}

fn reshape_job(item: &Value) -> JobRecommendation {
    JobRecommendation {
        role: label_field(item, JOB_LABEL_FIELDS)
            .or_else(|| as_label(item))
            .unwrap_or_default(),
        score: number_field(item, &["score"]).unwrap_or(DEFAULT_JOB_SCORE),
        reason: item
            .get("reason")
            .and_then(Value::as_str)
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(DEFAULT_JOB_REASON)
            .to_owned(),
    }
}

/// Keeps numeric breakdown entries only, clamped to ratios.
fn resolve_breakdown(breakdown: Option<&Value>) -> BTreeMap<String, f64> {
    breakdown
        .and_then(Value::as_object)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|(key, value)| as_number(value).map(|n| (key.clone(), to_ratio(n))))
                .collect()
        })
        .unwrap_or_default()
}
