//! Network actor - runs breed fetches in the Tokio async runtime

use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, fetch_breeds};

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: reqwest::Client,
    breeds_url: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(
        breeds_url: impl Into<String>,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> Self {
        NetworkActor {
            client: create_client(),
            breeds_url: breeds_url.into(),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchBreeds { id }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let url = self.breeds_url.clone();

                            // Fire-and-forget: no cancellation handle is kept
                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %url, "executing breed fetch");
                                let start = Instant::now();
                                let result = fetch_breeds(&client, &url).await;
                                let time_ms = start.elapsed().as_millis() as u64;
                                tracing::info!(id, time_ms, ok = result.is_ok(), "breed fetch finished");
                                let _ = response_tx.send(NetworkResponse::Completed { id, result, time_ms });
                            });
                        }

                        // In-flight fetches run to completion; their sends
                        // just land on a closed channel.
                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {
                    // Task completed - cleanup is handled by the tasks themselves
                }
            }
        }
    }
}
