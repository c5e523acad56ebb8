/// Network access module
///
/// This module handles:
/// - Fetching and validating animal pictures (fetch.rs)
/// - Multipart uploads to the configured endpoint (upload.rs)

pub mod fetch;
pub mod upload;
