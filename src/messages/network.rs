//! Network messages - communication between App and Network layers

use crate::error::FetchError;
use crate::models::BreedsResponse;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the full breed list
    FetchBreeds { id: u64 },

    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// A fetch finished, successfully or not
    Completed {
        id: u64,
        result: Result<BreedsResponse, FetchError>,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Completed { id, .. } => *id,
        }
    }
}
