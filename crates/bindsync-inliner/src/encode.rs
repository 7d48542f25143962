/// Payload encoding
///
/// The wasm binary is opaque to the pipeline; it is only turned into
/// embeddable text here. Standard base64, one contiguous string, no
/// chunking — any compliant decoder on the consuming side reproduces
/// the bytes exactly.

use base64::Engine;

/// Encode the wasm payload for embedding in a string literal.
/// An empty payload encodes to the empty string.
pub fn encode(payload: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(payload)
}
