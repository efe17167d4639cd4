//! Multi-turn chat sessions.
//!
//! The Generative Language API is stateless, so a [`ChatSession`] owns the
//! ordered turn history for the current session and replays it on every
//! request. Roles are `user` and `model` (the API has no `assistant` role);
//! the system instruction travels as a top-level `systemInstruction` field,
//! never as a turn.

use serde_json::{json, Value};

use crate::client::GeminiClient;
use crate::prompts::CHAT_PERSONA;
use crate::text::NO_RESPONSE_SENTINEL;
use crate::Result;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One (role, text) entry in a session transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

/// A stateful multi-turn exchange.
///
/// Held only in memory for the lifetime of the session; nothing is
/// persisted. `send` takes `&mut self`, so at most one turn is in flight per
/// session by construction.
#[derive(Debug, Clone)]
pub struct ChatSession {
    client: GeminiClient,
    system_instruction: String,
    history: Vec<Turn>,
}

impl GeminiClient {
    /// Open a chat session with an optional persona/system instruction.
    ///
    /// Defaults to the generic assistant persona when none is given.
    pub fn start_chat(&self, system_instruction: Option<&str>) -> ChatSession {
        ChatSession {
            client: self.clone(),
            system_instruction: system_instruction.unwrap_or(CHAT_PERSONA).to_string(),
            history: Vec::new(),
        }
    }
}

impl ChatSession {
    /// Append one user turn and return the model's reply.
    ///
    /// The transcript is updated only after the provider responds: a failed
    /// send leaves the history exactly as it was, so the session can be
    /// retried without corrupting state. An empty reply payload yields the
    /// [`NO_RESPONSE_SENTINEL`] as content, never an error.
    pub async fn send(&mut self, text: &str) -> Result<String> {
        let body = json!({
            "contents": contents_with(&self.history, text),
            "systemInstruction": { "parts": [{ "text": self.system_instruction }] },
        });

        let url = self
            .client
            .model_url(&self.client.config().chat_model, "generateContent");
        let response = self.client.post_json(&url, &body).await?;

        let reply = crate::client::first_candidate_text(&response)
            .unwrap_or_else(|| NO_RESPONSE_SENTINEL.to_string());

        self.history.push(Turn {
            role: Role::User,
            text: text.to_string(),
        });
        self.history.push(Turn {
            role: Role::Model,
            text: reply.clone(),
        });
        tracing::debug!(turns = self.history.len(), "chat turn recorded");

        Ok(reply)
    }

    /// The transcript accumulated so far, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }
}

/// Serialize the history plus the pending user message into the `contents`
/// array the API expects.
fn contents_with(history: &[Turn], next_user_text: &str) -> Vec<Value> {
    let mut contents: Vec<Value> = history
        .iter()
        .map(|turn| {
            json!({
                "role": turn.role.as_str(),
                "parts": [{ "text": turn.text }],
            })
        })
        .collect();
    contents.push(json!({
        "role": "user",
        "parts": [{ "text": next_user_text }],
    }));
    contents
}
