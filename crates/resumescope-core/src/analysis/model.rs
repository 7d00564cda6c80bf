use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_KEYWORD_DENSITY: f64 = 0.5;
pub const DEFAULT_FORMATTING_CLARITY: f64 = 0.8;
pub const DEFAULT_SKILL_CONFIDENCE: f64 = 75.0;
pub const DEFAULT_JOB_SCORE: f64 = 80.0;
pub const DEFAULT_JOB_REASON: &str = "Good match based on your skills";

/// Skills above this confidence (percent) count as strong matches.
pub const STRONG_SKILL_THRESHOLD: f64 = 10.0;

/// UI-safe analysis record.
///
/// Every field is always present with its declared type, whatever the
/// backend sent. `ats_score` and `overall_score` always hold the same value.
/// Instances are built once per completed upload and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedAnalysis {
    /// Percentage in 0..=100.
    pub ats_score: u8,
    /// Mirror of `ats_score`.
    pub overall_score: u8,
    pub key_metrics: KeyMetrics,
    pub skills_proficiency: Vec<SkillProficiency>,
    pub job_recommendations: Vec<JobRecommendation>,
    pub entities: Map<String, Value>,
    /// Ratios in 0..=1, keyed by breakdown category.
    pub ats_breakdown: BTreeMap<String, f64>,
    pub summary: String,
}

impl NormalizedAnalysis {
    /// Skills whose confidence is strictly above [`STRONG_SKILL_THRESHOLD`].
    pub fn strong_skills(&self) -> impl Iterator<Item = &SkillProficiency> {
        self.skills_proficiency
            .iter()
            .filter(|s| s.confidence > STRONG_SKILL_THRESHOLD)
    }
}

impl Default for NormalizedAnalysis {
    fn default() -> Self {
        Self {
            ats_score: 0,
            overall_score: 0,
            key_metrics: KeyMetrics::default(),
            skills_proficiency: vec![],
            job_recommendations: vec![],
            entities: Map::new(),
            ats_breakdown: BTreeMap::new(),
            summary: String::new(),
        }
    }
}

/// The two metrics the scorecard always shows. Ratios in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    pub keyword_density: f64,
    pub formatting_clarity: f64,
}

impl Default for KeyMetrics {
    fn default() -> Self {
        Self {
            keyword_density: DEFAULT_KEYWORD_DENSITY,
            formatting_clarity: DEFAULT_FORMATTING_CLARITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillProficiency {
    pub skill: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub role: String,
    pub score: f64,
    pub reason: String,
}
