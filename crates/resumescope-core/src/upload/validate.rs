use thiserror::Error;

/// Largest resume accepted for upload (5 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

pub const PDF_MIME: &str = "application/pdf";
pub const DOC_MIME: &str = "application/msword";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const ACCEPTED_MIME_TYPES: &[&str] = &[PDF_MIME, DOC_MIME, DOCX_MIME];

/// Suffixes accepted when the declared content type is not recognized.
pub const ACCEPTED_SUFFIXES: &[&str] = &[".pdf", ".doc", ".docx"];

/// Rejections raised before any network call is made.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unsupported file type. Use PDF or DOCX.")]
    UnsupportedType { file_name: String },

    #[error("File too large. Max {} MB.", MAX_UPLOAD_BYTES / (1024 * 1024))]
    TooLarge { size_bytes: u64 },
}

/// Checks a candidate upload against the accepted types and size limit.
///
/// The type passes if either the declared content type is accepted or the
/// file name ends with an accepted suffix. Type is checked before size.
pub fn validate_file(
    file_name: &str,
    content_type: Option<&str>,
    size_bytes: u64,
) -> Result<(), ValidationError> {
    let type_ok = content_type.is_some_and(is_accepted_mime) || has_accepted_suffix(file_name);
    if !type_ok {
        return Err(ValidationError::UnsupportedType {
            file_name: file_name.to_string(),
        });
    }

    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge { size_bytes });
    }

    Ok(())
}

/// Content type implied by the file name suffix, if it is an accepted one.
pub fn content_type_for(file_name: &str) -> Option<&'static str> {
    let lowered = file_name.to_lowercase();
    if lowered.ends_with(".pdf") {
        Some(PDF_MIME)
    } else if lowered.ends_with(".docx") {
        Some(DOCX_MIME)
    } else if lowered.ends_with(".doc") {
        Some(DOC_MIME)
    } else {
        None
    }
}

/// Whether a declared content type is one of the accepted MIME types.
pub fn is_accepted_mime(content_type: &str) -> bool {
    // Ignore parameters such as `; charset=binary`.
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    ACCEPTED_MIME_TYPES
        .iter()
        .any(|accepted| essence.eq_ignore_ascii_case(accepted))
}

fn has_accepted_suffix(file_name: &str) -> bool {
    let lowered = file_name.to_lowercase();
    ACCEPTED_SUFFIXES
        .iter()
        .any(|suffix| lowered.ends_with(suffix))
}
