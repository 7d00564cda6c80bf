use crate::TOOL_NAME;
use crate::analysis::model::STRONG_SKILL_THRESHOLD;
use crate::report::model::Report;

pub fn render_text(report: &Report) -> String {
    let analysis = &report.analysis;
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", TOOL_NAME, report.tool.version));
    out.push_str(&format!(
        "Resume: {} ({} bytes)\n",
        report.artifact.file_name, report.artifact.size_bytes
    ));

    out.push_str("\nScorecard\n");
    out.push_str(&format!("  ATS score: {}/100\n", analysis.ats_score));
    out.push_str(&format!(
        "  Keyword density: {}%\n",
        percent(analysis.key_metrics.keyword_density)
    ));
    out.push_str(&format!(
        "  Formatting clarity: {}%\n",
        percent(analysis.key_metrics.formatting_clarity)
    ));
    if !analysis.ats_breakdown.is_empty() {
        out.push_str("  Breakdown:\n");
        for (category, ratio) in &analysis.ats_breakdown {
            out.push_str(&format!("    - {}: {}%\n", category, percent(*ratio)));
        }
    }

    out.push_str("\nSkills\n");
    if analysis.skills_proficiency.is_empty() {
        out.push_str("  No skills detected.\n");
    }
    for s in &analysis.skills_proficiency {
        out.push_str(&format!("  - {} (confidence {}%)\n", s.skill, s.confidence));
    }

    out.push_str("\nJob Matches\n");
    let strong: Vec<&str> = analysis.strong_skills().map(|s| s.skill.as_str()).collect();
    if strong.is_empty() {
        out.push_str(
            "  Not enough strong skills detected. Improve skill keywords in your CV \
             to get job recommendations.\n",
        );
    } else {
        out.push_str(&format!(
            "  Strong skills (>{}% match): {}\n",
            STRONG_SKILL_THRESHOLD,
            strong.join(", ")
        ));
        for job in &analysis.job_recommendations {
            out.push_str(&format!("  - {} [{}%] {}\n", job.role, job.score, job.reason));
        }
    }

    if !analysis.summary.is_empty() {
        out.push_str(&format!("\nSummary\n  {}\n", analysis.summary));
    }

    out
}

/// Ratio in 0..=1 as a whole percentage.
fn percent(ratio: f64) -> f64 {
    (ratio * 100.0).round()
}
