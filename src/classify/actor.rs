//! Classification actor for running completion calls off the UI loop

use std::sync::Arc;
use tokio::sync::mpsc;

use super::client::CompletionClient;
use super::request::{CompletionRequest, CompletionResult};

/// Commands that can be sent to the classification actor
#[derive(Debug)]
pub enum ClassifyCommand {
    /// Send one request to the completion service
    Classify(CompletionRequest),
    /// Shutdown the actor
    Shutdown,
}

/// Events emitted by the classification actor
#[derive(Debug, Clone)]
pub enum ClassifyEvent {
    Completed(CompletionResult),
}

/// Handle for communicating with the classification actor
pub struct ClassifyActorHandle {
    pub cmd_tx: mpsc::Sender<ClassifyCommand>,
    pub event_rx: mpsc::Receiver<ClassifyEvent>,
}

/// Spawn the classification actor task
pub fn spawn_classify_actor(client: Arc<dyn CompletionClient>) -> ClassifyActorHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel(4);
    let (event_tx, event_rx) = mpsc::channel(4);

    tokio::spawn(classify_actor_loop(client, cmd_rx, event_tx));

    ClassifyActorHandle { cmd_tx, event_rx }
}

async fn classify_actor_loop(
    client: Arc<dyn CompletionClient>,
    mut cmd_rx: mpsc::Receiver<ClassifyCommand>,
    event_tx: mpsc::Sender<ClassifyEvent>,
) {
    // Requests are handled one at a time, in order
    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            ClassifyCommand::Classify(request) => {
                let result = client.invoke(&request).await;
                if event_tx.send(ClassifyEvent::Completed(result)).await.is_err() {
                    tracing::warn!("Classify actor: event receiver dropped");
                    break;
                }
            }
            ClassifyCommand::Shutdown => {
                break;
            }
        }
    }
    tracing::debug!("Classify actor stopped");
}
