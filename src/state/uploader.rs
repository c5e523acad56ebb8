/// Uploader widget state machine
///
/// Tracks the drop zone phase, the outcome of the most recent attempt, and
/// a session-only history of resolved uploads (newest first). One upload at
/// a time: a file acquired while an attempt is in flight is refused and the
/// in-flight attempt is unaffected. `finish` unconditionally returns the
/// drop zone to its idle prompt.

use chrono::{DateTime, Local};

use crate::net::upload::UploadInfo;

/// History entries kept for the session
const MAX_HISTORY: usize = 20;

/// Drop zone presentation phase
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DropZone {
    /// Resting prompt, ready for a click or a drop
    #[default]
    Idle,
    /// A file is hovering over the window
    DragOver,
    /// Upload in flight
    Uploading { filename: String },
}

/// Result of one resolved upload attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(UploadInfo),
    Error(String),
}

#[derive(Debug, Clone)]
pub struct UploadRecord {
    pub filename: String,
    pub outcome: Outcome,
    pub at: DateTime<Local>,
}

#[derive(Debug, Default)]
pub struct Uploader {
    zone: DropZone,
    last: Option<Outcome>,
    history: Vec<UploadRecord>,
}

impl Uploader {
    pub fn zone(&self) -> &DropZone {
        &self.zone
    }

    /// Outcome of the most recent attempt, if any
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last.as_ref()
    }

    /// Resolved attempts this session, newest first
    pub fn history(&self) -> &[UploadRecord] {
        &self.history
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.zone, DropZone::Uploading { .. })
    }

    /// A file is hovering over the window; mark the zone as an active
    /// drop target unless an upload is already running.
    pub fn drag_entered(&mut self) {
        if self.zone == DropZone::Idle {
            self.zone = DropZone::DragOver;
        }
    }

    /// The hover left the window (or the file was dropped)
    pub fn drag_left(&mut self) {
        if self.zone == DropZone::DragOver {
            self.zone = DropZone::Idle;
        }
    }

    /// Accept a file for upload.
    /// Returns false when an attempt is already in flight.
    pub fn begin(&mut self, filename: String) -> bool {
        if self.is_busy() {
            return false;
        }
        self.zone = DropZone::Uploading { filename };
        true
    }

    /// Record the outcome of the in-flight attempt and restore the idle
    /// prompt. Runs on every resolution path.
    pub fn finish(&mut self, filename: String, outcome: Outcome) {
        self.last = Some(outcome.clone());
        self.history.insert(
            0,
            UploadRecord {
                filename,
                outcome,
                at: Local::now(),
            },
        );
        self.history.truncate(MAX_HISTORY);
        self.zone = DropZone::Idle;
    }
}
