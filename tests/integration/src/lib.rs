//! Integration tests for the RustStack ElastiCache model.
//!
//! These exercise the model the way an SDK runtime does: build requests
//! fluently, encode them, decode canned service responses and inspect the
//! results. No server is needed.
//!
//! Run them with:
//! ```text
//! cargo test -p ruststack-elasticache-integration
//! ```
//!
//! Set `RUST_LOG=debug` to see every encoded and decoded record.

use std::sync::Once;

use anyhow::Context;
use ruststack_elasticache_model::{Shape, Timestamp};
use serde::Serialize;
use serde::de::DeserializeOwned;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Generate a unique, valid ElastiCache identifier for a test.
///
/// Identifiers must start with a letter and contain only lowercase letters,
/// digits and hyphens.
#[must_use]
pub fn test_resource_id(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// Parse an RFC 3339 timestamp used in fixtures.
pub fn timestamp(value: &str) -> anyhow::Result<Timestamp> {
    let parsed = chrono::DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("invalid fixture timestamp {value:?}"))?;
    Ok(parsed.with_timezone(&chrono::Utc))
}

/// Encode a record to its JSON wire form.
pub fn encode<T: Shape + Serialize>(record: &T) -> anyhow::Result<serde_json::Value> {
    init_tracing();

    let value = serde_json::to_value(record)
        .with_context(|| format!("failed to encode {}", T::SHAPE_NAME))?;
    tracing::debug!(shape = T::SHAPE_NAME, %record, "encoded record");
    Ok(value)
}

/// Decode a record from a canned JSON response body.
pub fn decode<T: Shape + DeserializeOwned>(body: &str) -> anyhow::Result<T> {
    init_tracing();

    let record: T =
        serde_json::from_str(body).with_context(|| format!("failed to decode {}", T::SHAPE_NAME))?;
    tracing::debug!(shape = T::SHAPE_NAME, %record, "decoded record");
    Ok(record)
}

/// Names of the members present in an encoded record, sorted by name.
#[must_use]
pub fn present_members(encoded: &serde_json::Value) -> Vec<String> {
    encoded
        .as_object()
        .map(|members| members.keys().cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod test_cache_cluster;
#[cfg(test)]
mod test_errors;
#[cfg(test)]
mod test_parameters;
