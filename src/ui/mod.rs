/// Widget-level view code
///
/// View builders only; all state lives in the state module and every
/// interaction comes back as a Message.

pub mod gallery;
pub mod uploader;
