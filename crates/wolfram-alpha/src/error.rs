/// Error types for the Wolfram|Alpha client.
///
/// These cover the failure paths only: an answer-less response ("No solution
/// found.") is a normal return value of the extractor, never an error.
use crate::transport::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum WolframError {
    /// An input was empty where a value is required (expression, response
    /// text). Raised before any transport call is attempted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The underlying network call failed. Never retried internally.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The response text could not be decoded into the expected schema, or
    /// violated the pod/sub-pod title uniqueness rule.
    #[error("failed to decode query result: {0}")]
    Decode(#[from] quick_xml::DeError),

    /// Producing XML from a result tree failed or yielded empty output.
    #[error("failed to serialize query result: {0}")]
    Serialize(String),
}
