//! Value serialization boundary
//!
//! Values are copied into the store as JSON trees on write and decoded into
//! fresh instances on read, so nothing a caller holds aliases stored state.

use crate::errors::CacheError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Serialize a caller value into its stored form
pub fn encode<T>(value: &T) -> Result<Value, CacheError>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_value(value)?)
}

/// Decode a stored value into the caller's type
pub fn decode<T>(value: &Value) -> Result<T, CacheError>
where
    T: DeserializeOwned,
{
    Ok(T::deserialize(value)?)
}
