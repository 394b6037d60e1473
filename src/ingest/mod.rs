//! Ingestion adapters
//!
//! Convert already-parsed JSON documents into calls against a
//! [`TransportNetwork`](crate::network::TransportNetwork):
//! - `layout`: the network layout document (stations, lines, travel times)
//! - `feed`: live passenger event messages
//!
//! Fetching the documents and reading raw bytes is left to the caller.

pub mod feed;
pub mod layout;

pub use feed::PassengerEventMessage;
pub use layout::{NetworkLayout, TravelTimeEntry};

use crate::network::NetworkError;
use thiserror::Error;

/// Ingestion errors
#[derive(Error, Debug)]
pub enum IngestError {
    /// The document does not have the expected shape
    #[error("Malformed document: {0}")]
    Shape(#[from] serde_json::Error),

    /// The network rejected an item of the document
    #[error("Network rejected document item: {0}")]
    Network(#[from] NetworkError),
}

pub type IngestResult<T> = Result<T, IngestError>;
