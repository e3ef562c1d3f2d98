// src/client.rs
//! Client-side conversation state for the chat page.
//!
//! [`ChatView`] owns the message list, the input box text and the pending
//! flag. It never surfaces an error: a failed round trip becomes a fixed
//! assistant message and the view returns to a ready state.

use thiserror::Error;

use crate::message::{ChatRequest, ChatResponse, Message};

pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("could not decode reply: {0}")]
    Decode(String),
}

/// Sends the full history and yields the assistant reply.
pub trait ChatTransport {
    fn send(&self, history: &[Message])
    -> impl Future<Output = Result<String, ClientError>> + Send;
}

#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// `base_url` is the server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/api/chat", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ChatTransport for HttpTransport {
    async fn send(&self, history: &[Message]) -> Result<String, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&ChatRequest { messages: history })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(body.message)
    }
}

#[derive(Debug)]
pub struct ChatView<T> {
    transport: T,
    messages: Vec<Message>,
    input: String,
    pending: bool,
}

impl<T: ChatTransport> ChatView<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            messages: Vec::new(),
            input: String::new(),
            pending: false,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Mirrors the send button's enabled state.
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.input.trim().is_empty()
    }

    /// Appends the user message and returns the history to send, or `None`
    /// when the input is blank or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<Vec<Message>> {
        if !self.can_submit() {
            return None;
        }
        let content = std::mem::take(&mut self.input);
        self.messages.push(Message::user(content));
        self.pending = true;
        Some(self.messages.clone())
    }

    /// Appends exactly one assistant message and clears the pending flag.
    pub fn complete_submit(&mut self, result: Result<String, ClientError>) {
        let content = match result {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("chat request failed: {e}");
                FALLBACK_REPLY.to_string()
            }
        };
        self.messages.push(Message::assistant(content));
        self.pending = false;
    }

    /// Returns `false` when nothing was sent.
    pub async fn submit(&mut self) -> bool {
        let Some(history) = self.begin_submit() else {
            return false;
        };
        let result = self.transport.send(&history).await;
        self.complete_submit(result);
        true
    }

    /// Clears the conversation and input. No confirmation, no undo.
    pub fn new_chat(&mut self) {
        self.messages.clear();
        self.input.clear();
    }
}
