use std::collections::BTreeMap;

use crate::error::{Error, ModelResult};
use error_stack::{ResultExt, report};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::value::Value;
use tracing::error;

/// Converts a JSON object into a URL query string with parameters sorted
/// alphabetically by key.
///
/// `Null` members are skipped. String values are embedded verbatim, other
/// values through their JSON rendering. No percent-encoding is applied; the
/// caller owns the values it puts in.
///
/// # Errors
///
/// Returns `Error::ParseError` if `value` is not a JSON object.
pub fn value_to_sorted_querystring(value: &Value) -> ModelResult<String> {
    let Value::Object(map) = value else {
        return Err(
            report!(Error::ParseError).attach_printable(format!("Invalid JSON Object: {value:?}"))
        );
    };

    let pairs: BTreeMap<&String, String> = map
        .iter()
        .filter(|(_, v)| !matches!(v, Value::Null))
        .map(|(k, v)| {
            let value_str = match v {
                Value::String(s) => s.to_string(),
                _ => v.to_string(),
            };
            (k, value_str)
        })
        .collect();

    Ok(pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<String>>()
        .join("&"))
}

/// Deserializes a successful JSON response into `T`.
///
/// Non-success statuses are returned as [`Error::ResponseStatus`] with the
/// upstream body preserved, so the caller decides how to surface them.
pub async fn handle_reqwest_response<T: DeserializeOwned>(response: Response) -> ModelResult<T> {
    let response_code: u16 = response.status().as_u16();
    match response_code {
        0..=399 => response.json().await.change_context(Error::SerdeDeserialize(
            "Failed to deserialize JSON response".to_string(),
        )),
        _ => {
            let error_body = response.text().await.change_context(Error::ReqwestError(
                "Failed to get text from response".to_string(),
            ))?;

            error!("Error Body: {}", &error_body);

            Err(report!(Error::ResponseStatus {
                status: response_code,
                body: error_body,
            }))
        }
    }
}
