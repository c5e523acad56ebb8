/// Multipart file upload
///
/// One file per attempt: validate locally (size cap, extension allow list),
/// read it, POST it as multipart form field "file" and interpret the JSON
/// reply. The server signals failure in-band with an `{"error": ...}` body,
/// so the HTTP status code is deliberately not checked — an error reply on
/// a 400 renders exactly like one on a 200.

use reqwest::multipart;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::format::format_file_size;

/// Parsed success reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadInfo {
    pub filename: String,
    /// Size in bytes as reported by the server
    pub filesize: u64,
    pub filetype: String,
}

/// Local limits applied before any network I/O
#[derive(Debug, Clone, Default)]
pub struct UploadLimits {
    /// Maximum file size in bytes; 0 disables the check
    pub max_bytes: u64,
    /// Allowed extensions (lowercase, no dots); empty disables the check
    pub allowed_extensions: Vec<String>,
}

/// Ways an upload attempt can fail. Payloads are owned strings so results
/// stay cloneable as message data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The server reported an error in its reply body
    #[error("{0}")]
    Server(String),
    /// The file was refused locally before any request was made
    #[error("{0}")]
    Rejected(String),
    /// The request itself failed
    #[error("Upload failed: {0}")]
    Transport(String),
    /// The reply body was not the expected JSON
    #[error("Upload failed: unexpected response: {0}")]
    Malformed(String),
}

/// Raw reply shape; success and error fields never appear together
#[derive(Debug, Deserialize)]
struct ServerReply {
    error: Option<String>,
    filename: Option<String>,
    filesize: Option<u64>,
    filetype: Option<String>,
}

/// Upload one file to the endpoint
pub async fn upload_file(
    endpoint: String,
    path: PathBuf,
    limits: UploadLimits,
) -> Result<UploadInfo, UploadError> {
    let filename = display_name(&path);

    validate(&path, &limits).await?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| UploadError::Transport(format!("cannot read {}: {e}", path.display())))?;

    let part = multipart::Part::bytes(bytes).file_name(filename);
    let form = multipart::Form::new().part("file", part);

    let response = reqwest::Client::new()
        .post(endpoint.as_str())
        .multipart(form)
        .send()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    let body = response
        .text()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    parse_reply(&body)
}

/// Filename shown to the user and sent in the form part
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Apply the local limits; no request is made for a rejected file
async fn validate(path: &Path, limits: &UploadLimits) -> Result<(), UploadError> {
    if let Some(allowed) = disallowed_extension(path, &limits.allowed_extensions) {
        return Err(UploadError::Rejected(format!(
            "File type not allowed: {allowed}"
        )));
    }

    if limits.max_bytes > 0 {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| UploadError::Transport(format!("cannot read {}: {e}", path.display())))?;
        if metadata.len() > limits.max_bytes {
            return Err(UploadError::Rejected(format!(
                "File is too large ({}, limit {})",
                format_file_size(metadata.len()),
                format_file_size(limits.max_bytes)
            )));
        }
    }

    Ok(())
}

/// Returns a description of the offending extension when the file fails
/// the allow list, None when it passes (or the list is empty)
fn disallowed_extension(path: &Path, allowed: &[String]) -> Option<String> {
    if allowed.is_empty() {
        return None;
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            let lowered = ext.to_ascii_lowercase();
            if allowed.iter().any(|candidate| *candidate == lowered) {
                None
            } else {
                Some(format!(".{lowered}"))
            }
        }
        None => Some("files without an extension".to_string()),
    }
}

fn parse_reply(body: &str) -> Result<UploadInfo, UploadError> {
    let reply: ServerReply =
        serde_json::from_str(body).map_err(|e| UploadError::Malformed(e.to_string()))?;

    if let Some(message) = reply.error {
        return Err(UploadError::Server(message));
    }

    match (reply.filename, reply.filesize, reply.filetype) {
        (Some(filename), Some(filesize), Some(filetype)) => Ok(UploadInfo {
            filename,
            filesize,
            filetype,
        }),
        _ => Err(UploadError::Malformed(
            "missing fields in server reply".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn success_reply_parses_all_three_fields() {
        let info =
            parse_reply(r#"{"filename": "a.txt", "filesize": 10, "filetype": "text/plain"}"#)
                .unwrap();
        assert_eq!(
            info,
            UploadInfo {
                filename: "a.txt".to_string(),
                filesize: 10,
                filetype: "text/plain".to_string(),
            }
        );
    }

    #[test]
    fn error_field_beats_everything_else() {
        let result = parse_reply(r#"{"error": "too large", "filename": "a.txt"}"#);
        assert_eq!(result, Err(UploadError::Server("too large".to_string())));
    }

    #[test]
    fn unknown_extra_fields_are_ignored() {
        let info = parse_reply(
            r#"{"filename": "a.txt", "filesize": 10, "filetype": "text/plain", "id": 7}"#,
        )
        .unwrap();
        assert_eq!(info.filename, "a.txt");
    }

    #[test]
    fn non_json_body_is_malformed() {
        assert!(matches!(
            parse_reply("<html>502 Bad Gateway</html>"),
            Err(UploadError::Malformed(_))
        ));
    }

    #[test]
    fn success_reply_missing_fields_is_malformed() {
        assert!(matches!(
            parse_reply(r#"{"filename": "a.txt"}"#),
            Err(UploadError::Malformed(_))
        ));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let allowed = vec!["txt".to_string(), "png".to_string()];
        assert!(disallowed_extension(Path::new("notes.TXT"), &allowed).is_none());
        assert_eq!(
            disallowed_extension(Path::new("tool.exe"), &allowed),
            Some(".exe".to_string())
        );
        assert!(disallowed_extension(Path::new("README"), &allowed).is_some());
    }

    #[test]
    fn empty_allow_list_disables_the_extension_check() {
        assert!(disallowed_extension(Path::new("tool.exe"), &[]).is_none());
    }

    #[tokio::test]
    async fn oversized_file_is_rejected_without_a_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"0123456789").unwrap();

        let limits = UploadLimits {
            max_bytes: 5,
            allowed_extensions: Vec::new(),
        };
        let result = validate(&path, &limits).await;
        assert!(matches!(result, Err(UploadError::Rejected(message))
            if message.contains("too large")));
    }

    #[tokio::test]
    async fn file_within_limits_passes_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.txt");
        std::fs::write(&path, b"hi").unwrap();

        let limits = UploadLimits {
            max_bytes: 1024,
            allowed_extensions: vec!["txt".to_string()],
        };
        assert!(validate(&path, &limits).await.is_ok());
    }

    #[tokio::test]
    async fn invalid_endpoint_is_a_transport_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, b"hi").unwrap();

        let result = upload_file(
            "not a url".to_string(),
            path,
            UploadLimits::default(),
        )
        .await;
        assert!(matches!(result, Err(UploadError::Transport(_))));
    }
}
