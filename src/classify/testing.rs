//! In-memory completion client for tests

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use super::client::CompletionClient;
use super::request::{CompletionRequest, CompletionResult};

/// Replays canned results in order and records every prompt it receives
pub struct ScriptedClient {
    script: Mutex<VecDeque<CompletionResult>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new(script: Vec<CompletionResult>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn invoke(&self, request: &CompletionRequest) -> CompletionResult {
        self.prompts.lock().unwrap().push(request.prompt.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(CompletionResult::Failure {
                message: "no scripted response".to_string(),
            })
    }
}
