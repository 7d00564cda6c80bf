use serde::{Deserialize, Serialize};

use crate::SCHEMA_VERSION;
use crate::analysis::model::NormalizedAnalysis;

/// Top-level resumescope report.
///
/// Wraps one normalized analysis with the metadata needed to tell which
/// file, which backend and which tool build produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub artifact: ArtifactInfo,
    /// Backend base URL; `None` for offline normalization of a saved payload.
    pub backend: Option<String>,
    pub analysis: NormalizedAnalysis,
}

impl Report {
    pub fn new(
        tool: ToolInfo,
        artifact: ArtifactInfo,
        backend: Option<String>,
        analysis: NormalizedAnalysis,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            artifact,
            backend,
            analysis,
        }
    }
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
    pub commit: Option<String>,
}

/// The file this report was produced from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactInfo {
    pub path: Option<String>,
    pub file_name: String,
    pub content_type: Option<String>,
    pub size_bytes: u64,
    pub hash: ArtifactHash,
}

/// Cryptographic artifact fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactHash {
    pub algorithm: String,
    pub value: String,
}
