//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use futures::future::BoxFuture;

use crate::clients::transport::{Transport, TransportError, TransportRequest, TransportResponse};

/// Replays queued responses in order and records every request it sees.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(self, status: u16, body: &serde_json::Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(TransportResponse {
            status,
            body: serde_json::to_vec(body).unwrap(),
        }));
        self
    }

    pub fn push_network_error(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                message.to_string(),
            ))));
        self
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn send(
        &self,
        request: TransportRequest,
    ) -> BoxFuture<'_, Result<TransportResponse, TransportError>> {
        self.requests.lock().unwrap().push(request);
        let next = self.responses.lock().unwrap().pop_front();
        Box::pin(async move {
            next.unwrap_or_else(|| {
                Err(TransportError::new(std::io::Error::new(
                    std::io::ErrorKind::NotConnected,
                    "no scripted response left",
                )))
            })
        })
    }
}
