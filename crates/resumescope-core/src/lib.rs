pub mod analysis;
pub mod client;
pub mod payload;
pub mod report;
pub mod upload;

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::analysis::model::NormalizedAnalysis;
use crate::analysis::normalize::normalize;
use crate::client::BackendClient;
use crate::payload::sanitize::sanitize;
use crate::report::model::{ArtifactHash, ArtifactInfo, Report, ToolInfo};
use crate::upload::read::{fingerprint, read_resume};
use crate::upload::session::AnalysisSession;

pub const TOOL_NAME: &str = "resumescope";

/// JSON schema version of resumescope reports.
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Production analysis backend.
pub const DEFAULT_BACKEND_URL: &str = "https://resume-analyzer-g4sr.onrender.com";

/// Turns a raw backend payload into a render-safe analysis.
///
/// Total over every JSON value; `raw` is not modified.
pub fn interpret(raw: &Value) -> NormalizedAnalysis {
    tracing::debug!(payload = %raw, "raw backend payload");
    let analysis = normalize(&sanitize(raw));
    tracing::debug!(
        ats_score = analysis.ats_score,
        skills = analysis.skills_proficiency.len(),
        jobs = analysis.job_recommendations.len(),
        "normalized analysis"
    );
    analysis
}

/// Builds a report from a backend payload saved to disk (or piped in).
///
/// Invalid JSON text is an error; any valid JSON value yields a report.
pub fn report_from_payload(
    file_name: &str,
    path: Option<String>,
    bytes: &[u8],
    tool: ToolInfo,
) -> Result<Report> {
    let raw: Value = serde_json::from_slice(bytes)
        .with_context(|| format!("payload is not valid JSON: {file_name}"))?;

    let artifact = ArtifactInfo {
        path,
        file_name: file_name.to_string(),
        content_type: Some("application/json".to_string()),
        size_bytes: bytes.len() as u64,
        hash: ArtifactHash {
            algorithm: "sha256".to_string(),
            value: fingerprint(bytes),
        },
    };

    Ok(Report::new(tool, artifact, None, interpret(&raw)))
}

/// Drives the upload workflow against one backend.
///
/// Holds the session so a caller reusing the analyzer keeps the
/// single-request-in-flight rule and can reset between analyses.
pub struct Analyzer {
    client: BackendClient,
    session: AnalysisSession,
    tool: ToolInfo,
}

impl Analyzer {
    pub fn new(client: BackendClient, tool: ToolInfo) -> Self {
        Self {
            client,
            session: AnalysisSession::new(),
            tool,
        }
    }

    pub fn session(&self) -> &AnalysisSession {
        &self.session
    }

    /// Validate, upload and normalize one resume.
    ///
    /// Validation failures never reach the network or the session. Transport
    /// and status failures leave the session in `Failed`.
    pub async fn analyze(&mut self, path: &Path, content_type: Option<&str>) -> Result<Report> {
        let resume = read_resume(path, content_type)?;
        self.session.begin(resume.file_name.clone())?;

        let raw = match self.client.analyze_resume(&resume).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!(file = %resume.file_name, error = %err, "resume analysis failed");
                self.session.fail(err.to_string())?;
                return Err(anyhow::Error::from(err)
                    .context(format!("Failed to analyze resume {}", resume.file_name)));
            }
        };

        let analysis = self.session.complete(interpret(&raw))?.clone();
        tracing::info!(
            file = %resume.file_name,
            ats_score = analysis.ats_score,
            "resume analyzed"
        );

        Ok(Report::new(
            self.tool.clone(),
            resume.into_artifact(),
            Some(self.client.config().base_url.clone()),
            analysis,
        ))
    }

    /// Start over: discards any result or failure.
    pub fn reset(&mut self) {
        self.session.reset();
    }
}
