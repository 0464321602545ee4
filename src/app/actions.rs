//! Action handlers for user input

use std::time::Instant;

use crate::app::state::FormField;
use crate::classify::{ClassifyCommand, ClassifyError, CompletionResult};
use crate::constants::REPORT_SCROLL_STEP;
use crate::input::Action;
use crate::report::ReportExport;
use crate::ui::max_report_scroll;

use super::App;

impl App {
    pub(crate) async fn handle_action(&mut self, action: Action) {
        match action {
            // Form
            Action::NextField => self.state.focus = self.state.focus.next(),
            Action::PrevField => self.state.focus = self.state.focus.prev(),
            Action::ClearField => match self.state.focus {
                FormField::ApiKey => self.state.session.api_key.clear(),
                FormField::Email => self.state.session.email_text.clear(),
            },
            Action::LoadSample(sample) => {
                self.state.session.email_text = sample.text().to_string();
                self.state.focus = FormField::Email;
                self.state
                    .set_status(format!("Loaded {} sample", sample.label().to_lowercase()));
            }
            Action::CycleTemplate => {
                let template = self.classifier.template().next();
                self.classifier.set_template(template);
                self.state.template = template;
                self.state.set_status(format!("Template: {}", template.label()));
            }

            // Classification
            Action::Classify => self.start_classification().await,
            Action::ClearResult => self.clear_result(),
            Action::Export => self.export_report(),

            // Report pane
            Action::ScrollUp => {
                self.state.report_scroll =
                    self.state.report_scroll.saturating_sub(REPORT_SCROLL_STEP);
            }
            Action::ScrollDown => {
                let max = max_report_scroll(&self.state, self.state.screen);
                self.state.report_scroll = self
                    .state
                    .report_scroll
                    .saturating_add(REPORT_SCROLL_STEP)
                    .min(max);
            }

            Action::Dismiss => self.state.dismiss_error(),
            Action::Quit => {} // Handled in event loop
            Action::Help => {
                self.state.help = match self.state.help {
                    Some(_) => None,
                    None => Some(self.bindings.all_bindings()),
                };
            }
        }
    }

    /// Validate the form and hand the request to the classification actor
    async fn start_classification(&mut self) {
        // A new attempt replaces whatever failure is on screen
        self.state.dismiss_error();

        let request = match self.classifier.start(&mut self.state.session) {
            Ok(request) => request,
            Err(ClassifyError::AlreadyPending) => {
                self.state
                    .set_status("Still waiting for the previous classification");
                return;
            }
            Err(_) => {
                self.state.surface_failure();
                return;
            }
        };

        self.state.pending_since = Some(Instant::now());
        self.state.set_status("Classifying...");

        if self
            .classify_actor
            .cmd_tx
            .send(ClassifyCommand::Classify(request))
            .await
            .is_err()
        {
            tracing::error!("Classify actor is not running");
            self.state.session.finish(&CompletionResult::Failure {
                message: "classification worker is not running".to_string(),
            });
            self.state.pending_since = None;
            self.state.surface_failure();
        }
    }

    fn clear_result(&mut self) {
        if self.state.session.is_pending() {
            self.state
                .set_status("Classification in progress, nothing cleared");
            return;
        }

        self.state.session.clear();
        self.state.report_scroll = 0;
        self.state.last_export = None;
        self.state.status.clear_error();
        self.state.set_status("Report cleared");
    }

    fn export_report(&mut self) {
        let Some(export) = ReportExport::from_session(&self.state.session) else {
            self.state.set_error("No report to export yet");
            return;
        };

        let dir = self.config.export.resolved_dir();
        match export.write_to(&dir) {
            Ok(path) => {
                self.state.set_status(format!("Saved {}", path.display()));
                self.state.last_export = Some(path);
            }
            Err(e) => {
                tracing::error!("Export failed: {:#}", e);
                self.state.set_error(format!("Export failed: {}", e));
            }
        }
    }

    pub(crate) fn handle_char(&mut self, c: char) {
        match self.state.focus {
            // Enter in the key field moves on to the email
            FormField::ApiKey if c == '\n' => self.state.focus = FormField::Email,
            FormField::ApiKey => {
                let mut buf = [0; 4];
                self.state.session.api_key.push_str(c.encode_utf8(&mut buf));
            }
            FormField::Email => self.state.session.email_text.push(c),
        }
    }

    pub(crate) fn handle_backspace(&mut self) {
        match self.state.focus {
            FormField::ApiKey => self.state.session.api_key.pop_char(),
            FormField::Email => {
                self.state.session.email_text.pop();
            }
        }
    }

    pub(crate) fn handle_paste(&mut self, text: &str) {
        match self.state.focus {
            FormField::ApiKey => self.state.session.api_key.push_str(text.trim()),
            FormField::Email => {
                let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
                self.state.session.email_text.push_str(&normalized);
            }
        }
    }
}
