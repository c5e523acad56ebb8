/// State management module
///
/// This module handles all application state, including:
/// - The static animal catalog (catalog.rs)
/// - The selector widget state machine (viewer.rs)
/// - The uploader widget state machine and session history (uploader.rs)

pub mod catalog;
pub mod uploader;
pub mod viewer;
