//! Serialization helpers for pagination data
//!
//! JSON is the wire format consumed by the rendering layer; MessagePack is
//! used where a compact binary form is preferred.

use crate::errors::Result;
use serde::{de::DeserializeOwned, Serialize};

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn from_json<T: DeserializeOwned>(source: &str) -> Result<T> {
    Ok(serde_json::from_str(source)?)
}

/// Encode with named fields so the payload stays self-describing.
pub fn to_msgpack<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(rmp_serde::to_vec_named(value)?)
}

pub fn from_msgpack<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(rmp_serde::from_slice(bytes)?)
}
