//! Node-layer errors.

use textrender_raster::RequestError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NodeError {
    /// Inputs that do not decode: wrong types, unknown enum strings.
    #[error("Invalid node input: {0}")]
    InvalidInput(#[from] serde_json::Error),

    /// Decoded inputs outside their allowed ranges.
    #[error("Invalid render request: {0}")]
    Request(#[from] RequestError),

    #[error("No node registered as '{0}'")]
    UnknownNode(String),
}
