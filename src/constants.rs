//! Application-wide constants for tuning and configuration
//!
//! Centralizes magic numbers and fixed names to make them discoverable.

/// Base URL of the OpenAI-compatible completion API (Groq).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Instruction-tuned model used for classification.
pub const DEFAULT_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

/// File name offered by the export action.
pub const REPORT_FILE_NAME: &str = "email_classification_report.txt";

/// MIME type of the exported report.
pub const REPORT_MIME: &str = "text/plain";

/// Error message display duration in seconds before auto-dismiss.
pub const ERROR_TTL_SECS: u64 = 5;

/// Spinner animation frame duration in milliseconds.
pub const SPINNER_FRAME_MS: u128 = 80;

/// Event poll timeout while a classification is pending (keeps the spinner moving).
pub const POLL_PENDING_MS: u64 = 50;

/// Event poll timeout while idle.
pub const POLL_IDLE_MS: u64 = 150;

/// Height of the API key input field, including borders.
pub const KEY_FIELD_HEIGHT: u16 = 3;

/// Minimum terminal width to show the email and report panes side by side.
/// Below this width, the panes are stacked.
pub const MIN_SPLIT_VIEW_WIDTH: u16 = 100;

/// Lines moved per PgUp/PgDn in the report pane.
pub const REPORT_SCROLL_STEP: u16 = 5;
