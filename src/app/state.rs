//! Application state types
//!
//! All state types live here to maintain clean dependency:
//! UI layer imports from app layer, not vice versa.

use std::path::PathBuf;
use std::time::Instant;

use ratatui::layout::Rect;

use crate::classify::PromptTemplate;
use crate::constants::ERROR_TTL_SECS;
use crate::input::KeybindingEntry;
use crate::session::{ResultPhase, Session};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    ApiKey,
    Email,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::ApiKey => Self::Email,
            Self::Email => Self::ApiKey,
        }
    }

    pub fn prev(self) -> Self {
        // Two fields: previous and next coincide
        self.next()
    }
}

/// Error and status message state
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub error: Option<String>,
    pub error_time: Option<Instant>,
    pub message: String,
}

impl StatusState {
    pub fn set_error(&mut self, error: impl ToString) {
        self.error = Some(error.to_string());
        self.error_time = Some(Instant::now());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        self.error_time = None;
    }

    /// Clear error if TTL expired. Returns true if error was cleared.
    pub fn clear_error_if_expired(&mut self) -> bool {
        if let Some(time) = self.error_time
            && time.elapsed().as_secs() >= ERROR_TTL_SECS
        {
            self.clear_error();
            true
        } else {
            false
        }
    }

    pub fn set_message(&mut self, msg: impl ToString) {
        self.message = msg.to_string();
    }
}

/// Snapshot of everything the form renders. Cloned for the render thread.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: Session,
    pub focus: FormField,
    pub template: PromptTemplate,
    pub model: String,

    pub status: StatusState,

    /// Vertical scroll of the report pane
    pub report_scroll: u16,
    /// Terminal area last reported by the backend
    pub screen: Rect,
    /// When the in-flight request was dispatched (drives the spinner)
    pub pending_since: Option<Instant>,
    pub last_export: Option<PathBuf>,

    /// Help overlay entries, `Some` while the overlay is open
    pub help: Option<Vec<KeybindingEntry>>,
}

impl AppState {
    pub fn new(template: PromptTemplate, model: String) -> Self {
        Self {
            template,
            model,
            ..Default::default()
        }
    }

    pub fn set_status(&mut self, msg: impl ToString) {
        self.status.set_message(msg);
    }

    pub fn set_error(&mut self, error: impl ToString) {
        self.status.set_error(error);
    }

    /// Show the session's failure, if it has one, in the error bar.
    pub fn surface_failure(&mut self) {
        if let ResultPhase::Failure(message) = self.session.phase() {
            let message = message.clone();
            self.status.set_error(message);
        }
    }

    /// Dismiss the displayed error and the failure behind it.
    pub fn dismiss_error(&mut self) {
        self.status.clear_error();
        self.session.acknowledge_failure();
    }

    /// Expire the error bar. A failure is shown once, then dropped.
    pub fn clear_error_if_expired(&mut self) -> bool {
        if self.status.clear_error_if_expired() {
            self.session.acknowledge_failure();
            true
        } else {
            false
        }
    }

    pub fn is_help_open(&self) -> bool {
        self.help.is_some()
    }

    /// Frame index for the pending spinner
    pub fn spinner_frame(&self) -> usize {
        use crate::constants::SPINNER_FRAME_MS;

        self.pending_since
            .map(|since| (since.elapsed().as_millis() / SPINNER_FRAME_MS) as usize)
            .unwrap_or(0)
    }
}
