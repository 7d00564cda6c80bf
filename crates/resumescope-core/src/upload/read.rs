use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::{fs, path::Path};

use crate::report::model::{ArtifactHash, ArtifactInfo};
use crate::upload::validate::{content_type_for, is_accepted_mime, validate_file};

/// Fallback content type for files accepted on an explicit MIME override.
const OCTET_STREAM: &str = "application/octet-stream";

/// A resume file that passed validation and is ready to upload.
#[derive(Debug, Clone)]
pub struct ResumeArtifact {
    /// Optional source path (informational only).
    pub path: Option<String>,

    /// File name sent in the multipart part.
    pub file_name: String,

    /// Content type sent in the multipart part.
    pub content_type: String,

    /// Exact bytes read from disk.
    pub bytes: Vec<u8>,

    pub size_bytes: u64,

    pub hash_alg: String,

    /// Hex-encoded hash of the file bytes.
    pub hash_hex: String,
}

impl ResumeArtifact {
    /// Convert into the report-facing artifact metadata, dropping the bytes.
    pub fn into_artifact(self) -> ArtifactInfo {
        ArtifactInfo {
            path: self.path,
            file_name: self.file_name,
            content_type: Some(self.content_type),
            size_bytes: self.size_bytes,
            hash: ArtifactHash {
                algorithm: self.hash_alg,
                value: self.hash_hex,
            },
        }
    }
}

/// Validate and read a resume from disk.
///
/// Type and size are checked against file metadata before the contents are
/// read, so oversized files are never loaded. Validation failures surface as
/// [`ValidationError`](crate::upload::validate::ValidationError) inside the
/// returned error.
pub fn read_resume(path: &Path, content_type: Option<&str>) -> Result<ResumeArtifact> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("not a file path: {}", path.display()))?;

    let metadata = fs::metadata(path)
        .with_context(|| format!("failed to read resume: {}", path.display()))?;

    validate_file(&file_name, content_type, metadata.len())?;

    let bytes =
        fs::read(path).with_context(|| format!("failed to read resume: {}", path.display()))?;

    // Size limit is re-checked on the bytes actually read.
    validate_file(&file_name, content_type, bytes.len() as u64)?;

    // A declared type that is not accepted only passed on the suffix, so the
    // suffix decides what is sent.
    let content_type = content_type
        .filter(|declared| is_accepted_mime(declared))
        .or_else(|| content_type_for(&file_name))
        .unwrap_or(OCTET_STREAM)
        .to_string();

    Ok(ResumeArtifact {
        path: Some(path.display().to_string()),
        file_name,
        content_type,
        size_bytes: bytes.len() as u64,
        hash_hex: fingerprint(&bytes),
        hash_alg: "sha256".to_string(),
        bytes,
    })
}

/// Hex SHA-256 digest of `bytes`.
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
