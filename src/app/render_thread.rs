//! Render thread owning the terminal
//!
//! The event loop sends cloned `AppState` snapshots; only the newest one is
//! drawn. Bracketed paste is switched on so a pasted key or email arrives as
//! one event.

use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::state::AppState;

type FormTerminal = Terminal<CrosstermBackend<Stdout>>;

pub struct RenderThread {
    frame_tx: SyncSender<Option<Box<AppState>>>,
    handle: Option<JoinHandle<()>>,
}

impl RenderThread {
    pub fn spawn() -> io::Result<Self> {
        // `None` asks the thread to restore the terminal and exit
        let (frame_tx, frame_rx) = mpsc::sync_channel(1);
        let handle = thread::spawn(move || match open_terminal() {
            Ok(mut terminal) => {
                draw_frames(&mut terminal, frame_rx);
                close_terminal(&mut terminal);
            }
            Err(e) => {
                disable_raw_mode().ok();
                tracing::error!("Failed to set up terminal: {}", e);
            }
        });

        Ok(Self {
            frame_tx,
            handle: Some(handle),
        })
    }

    /// Queue a frame. Dropped if the previous one is still being drawn.
    pub fn render(&self, state: AppState) {
        match self.frame_tx.try_send(Some(Box::new(state))) {
            Ok(()) | Err(TrySendError::Full(_)) => {}
            Err(TrySendError::Disconnected(_)) => tracing::error!("Render thread disconnected"),
        }
    }

    pub fn shutdown(mut self) {
        self.frame_tx.send(None).ok();
        if let Some(handle) = self.handle.take() {
            handle.join().ok();
        }
    }
}

fn open_terminal() -> io::Result<FormTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn draw_frames(terminal: &mut FormTerminal, frame_rx: Receiver<Option<Box<AppState>>>) {
    while let Ok(Some(state)) = frame_rx.recv() {
        if let Err(e) = terminal.draw(|f| crate::ui::render(f, &state)) {
            tracing::error!("Render error: {}", e);
        }
    }
}

fn close_terminal(terminal: &mut FormTerminal) {
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )
    .ok();
}
