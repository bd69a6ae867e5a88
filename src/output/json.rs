//! JSON output formatting
//!
//! Everything the CLI emits as JSON goes through one envelope so
//! scripted consumers get a stable shape.

use chrono::Utc;
use serde::Serialize;

/// Envelope wrapping every JSON payload: the data itself plus metadata
/// identifying when and by which version it was produced.
#[derive(Debug, Serialize)]
pub struct JsonEnvelope<T> {
    pub data: T,
    pub meta: EnvelopeMeta,
}

/// Envelope metadata
#[derive(Debug, Serialize)]
pub struct EnvelopeMeta {
    /// RFC 3339 generation timestamp
    pub timestamp: String,

    /// CLI version that produced the payload
    pub version: &'static str,
}

impl<T: Serialize> JsonEnvelope<T> {
    pub fn wrap(data: T) -> Self {
        Self {
            data,
            meta: EnvelopeMeta {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION"),
            },
        }
    }
}

/// Pretty-print data inside the JSON envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonEnvelope::wrap(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize)]
    struct TestItem {
        full_name: String,
    }

    #[test]
    fn test_envelope_carries_metadata() {
        let envelope = JsonEnvelope::wrap(vec!["a", "b"]);

        assert_eq!(envelope.data, vec!["a", "b"]);
        assert_eq!(envelope.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!envelope.meta.timestamp.is_empty());
    }

    #[test]
    fn test_format_json_envelope() {
        let items = vec![TestItem {
            full_name: "maxime/folio".to_string(),
        }];

        let result = format_json(&items).unwrap();

        assert!(result.contains("\"data\""));
        assert!(result.contains("\"meta\""));
        assert!(result.contains("\"full_name\": \"maxime/folio\""));
        assert!(result.contains("\"timestamp\""));
    }

    #[test]
    fn test_format_json_empty_collection() {
        let items: Vec<TestItem> = vec![];
        let result = format_json(&items).unwrap();
        assert!(result.contains("\"data\": []"));
    }
}
