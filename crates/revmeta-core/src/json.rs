use serde::de::DeserializeOwned;

use crate::CoreError;

/// Prefix the REST API prepends to every JSON body.
pub const XSSI_PREFIX: &str = ")]}'";

/// Decode a REST JSON body, with or without the anti-XSSI prefix line.
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, CoreError> {
    let trimmed = body.trim_start();
    let json = trimmed.strip_prefix(XSSI_PREFIX).unwrap_or(trimmed);
    Ok(serde_json::from_str(json)?)
}
