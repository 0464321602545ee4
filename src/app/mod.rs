//! Application core - owns the form state and coordinates the classifier

mod actions;
mod event_loop;
pub mod render_thread;
pub mod state;

use anyhow::Result;
use std::sync::Arc;

use render_thread::RenderThread;

use crate::classify::{
    ClassifyActorHandle, ClassifyCommand, Classifier, CompletionClient, spawn_classify_actor,
};
use crate::config::Config;
use crate::input::KeyBindings;
use state::AppState;

pub struct App {
    pub(crate) config: Config,
    pub(crate) state: AppState,
    pub(crate) bindings: KeyBindings,
    pub(crate) classifier: Classifier,
    /// Runs completion calls off the event loop
    pub(crate) classify_actor: ClassifyActorHandle,
    /// Dirty flag: when true, UI needs re-render. Skips renders when nothing changed.
    pub(crate) dirty: bool,
}

impl App {
    /// Build the app around a completion client. Must be called inside a
    /// Tokio runtime (spawns the classification actor).
    pub fn new(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        let classifier = Classifier::new(
            client,
            config.completion.template,
            config.completion.model.clone(),
        );
        let classify_actor = spawn_classify_actor(classifier.client());

        let mut state = AppState::new(classifier.template(), classifier.model().to_string());
        state.set_status("Enter your API key, then the email. F1 for help");

        Self {
            config,
            state,
            bindings: KeyBindings::new(),
            classifier,
            classify_actor,
            dirty: true, // Start dirty for initial render
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Spawn background render thread (owns terminal setup/teardown)
        let render_thread = RenderThread::spawn()?;
        let (width, height) = crossterm::terminal::size()?;
        self.state.screen = ratatui::layout::Rect::new(0, 0, width, height);

        let result = self.event_loop(&render_thread).await;

        render_thread.shutdown();

        self.classify_actor
            .cmd_tx
            .send(ClassifyCommand::Shutdown)
            .await
            .ok();

        result
    }
}
