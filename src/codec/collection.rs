//! Collection codec
//!
//! Encoding and decoding functions for the durable collection.

use tracing::warn;

use crate::error::{BrewError, Result};
use crate::model::Coffee;

// =============================================================================
// Encoding
// =============================================================================

/// Encode the collection as compact JSON
pub fn encode(records: &[Coffee]) -> Result<String> {
    encode_with(records, false)
}

/// Encode the collection, optionally indented
///
/// Output is deterministic for a given input: field order follows the
/// struct and array order follows the collection.
pub fn encode_with(records: &[Coffee], pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(text)
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode strictly, reporting malformed or structurally invalid input
pub fn try_decode(text: &str) -> Result<Vec<Coffee>> {
    serde_json::from_str(text)
        .map_err(|e| BrewError::Serialization(format!("Invalid coffee collection: {}", e)))
}

/// Decode, substituting an empty collection for unusable input
pub fn decode(text: &str) -> Vec<Coffee> {
    try_decode(text).unwrap_or_else(recover_empty)
}

/// Recovery path for undecodable content
///
/// Logs the cause and hands back an empty collection.
pub fn recover_empty(err: BrewError) -> Vec<Coffee> {
    warn!(error = %err, "Discarding undecodable coffee collection");
    Vec::new()
}
