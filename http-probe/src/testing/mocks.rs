use crate::error::{Result, TransportError};
use crate::transport::Transport;
use crate::types::{Request, Response};
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum Reply {
    Respond(Response),
    Fail(String),
}

/// Transport that replays a fixed script of replies in order.
///
/// Each call to `respond` consumes the next scripted entry and records the
/// request it saw. An exhausted script fails like a dead connection rather
/// than panicking, so an over-long run surfaces in test output instead of
/// aborting it.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Reply>>,
    seen: Mutex<Vec<Request>>,
}

impl ScriptedTransport {
    /// Create a transport with an empty script
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Append a prebuilt response to the script
    pub fn with_response(self, response: Response) -> Self {
        self.push(Reply::Respond(response));
        self
    }

    /// Append a status/body reply to the script
    pub fn with_status(self, status: u16, body: impl Into<String>) -> Self {
        self.with_response(Response::new(status, body))
    }

    /// Append a failure below the status layer to the script
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.push(Reply::Fail(message.into()));
        self
    }

    /// The requests answered so far, in order
    pub fn requests(&self) -> Vec<Request> {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of scripted replies not yet consumed
    pub fn remaining(&self) -> usize {
        self.script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    fn push(&self, reply: Reply) {
        self.script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(reply);
    }
}

impl Default for ScriptedTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ScriptedTransport {
    async fn respond(&self, request: &Request) -> Result<Response> {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request.clone());

        let next = self
            .script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();

        match next {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Fail(message)) => Err(TransportError::connection(message).into()),
            None => Err(TransportError::connection("script exhausted").into()),
        }
    }
}
