//! JSON entry codec.

use crate::error::{CacheError, StoreResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serializes a value for storage.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> StoreResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| CacheError::Encode(e.to_string()))
}

/// Deserializes a stored entry.
///
/// Any mismatch between the bytes and `T` is a [`CacheError::Decode`], which
/// callers treat as a miss.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> StoreResult<T> {
    serde_json::from_slice(bytes).map_err(|e| CacheError::Decode(e.to_string()))
}
