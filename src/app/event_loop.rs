//! Main event loop and classification event processing

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::layout::Rect;
use std::time::Duration;

use crate::classify::{ClassifyEvent, CompletionResult};
use crate::constants::{POLL_IDLE_MS, POLL_PENDING_MS};
use crate::input::{InputResult, handle_input};

use super::App;
use super::render_thread::RenderThread;

impl App {
    pub(crate) async fn event_loop(&mut self, render_thread: &RenderThread) -> Result<()> {
        loop {
            // Process classification results first (non-blocking)
            if self.process_classify_events() {
                self.dirty = true;
            }

            if self.state.clear_error_if_expired() {
                self.dirty = true;
            }

            // Keep the spinner moving
            let pending = self.state.session.is_pending();
            if pending {
                self.dirty = true;
            }

            // Render only when dirty (non-blocking - sends to render thread)
            if self.dirty {
                render_thread.render(self.state.clone());
                self.dirty = false;
            }

            let poll_timeout = if pending { POLL_PENDING_MS } else { POLL_IDLE_MS };
            if event::poll(Duration::from_millis(poll_timeout))? {
                let evt = event::read()?;
                // Any input event (including resize) requires re-render
                self.dirty = true;
                if let Event::Resize(width, height) = evt {
                    self.state.screen = Rect::new(0, 0, width, height);
                }
                match handle_input(evt, &self.state, &self.bindings) {
                    InputResult::Quit => break,
                    InputResult::Action(action) => self.handle_action(action).await,
                    InputResult::Char(c) => self.handle_char(c),
                    InputResult::Backspace => self.handle_backspace(),
                    InputResult::Paste(text) => self.handle_paste(&text),
                    InputResult::Continue => {}
                }
            }
        }

        Ok(())
    }

    /// Drain events from the classification actor. Returns true if any were processed.
    pub(crate) fn process_classify_events(&mut self) -> bool {
        let mut had_events = false;
        while let Ok(event) = self.classify_actor.event_rx.try_recv() {
            had_events = true;
            self.handle_classify_event(event);
        }
        had_events
    }

    pub(crate) fn handle_classify_event(&mut self, event: ClassifyEvent) {
        match event {
            ClassifyEvent::Completed(result) => {
                self.state.session.finish(&result);
                self.state.pending_since = None;
                match result {
                    CompletionResult::Success { text } => {
                        tracing::info!("Classification complete ({} chars)", text.len());
                        self.state.report_scroll = 0;
                        self.state.last_export = None;
                        self.state.set_status("Classification complete");
                    }
                    CompletionResult::Failure { message } => {
                        tracing::warn!("Classification failed: {}", message);
                        self.state.set_status("Classification failed");
                        self.state.surface_failure();
                    }
                }
            }
        }
    }
}
