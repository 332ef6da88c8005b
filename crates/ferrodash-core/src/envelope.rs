use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::ValidationError;

/// Schema version stamped on every API payload.
pub const SCHEMA_VERSION: &str = "v1.0.0";

/// Standard response envelope for every `ferrodash` API payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub meta: EnvelopeMeta,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn success(meta: EnvelopeMeta, data: T) -> Self {
        Self { meta, data }
    }
}

/// Metadata attached to every envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeMeta {
    pub request_id: String,
    pub schema_version: String,
    pub generated_at: String,
    pub latency_ms: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl EnvelopeMeta {
    /// Fresh metadata with a UUID v4 request id and the current schema version.
    pub fn for_request(latency_ms: u64) -> Self {
        Self {
            request_id: Uuid::new_v4().hyphenated().to_string(),
            schema_version: String::from(SCHEMA_VERSION),
            generated_at: now_rfc3339(),
            latency_ms,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    /// Check metadata of a received envelope against the schema contract.
    pub fn validate_schema_compliance(&self) -> Result<(), ValidationError> {
        if self.request_id.trim().len() < 8 {
            return Err(ValidationError::InvalidRequestId);
        }

        if !is_valid_schema_version(&self.schema_version) {
            return Err(ValidationError::InvalidSchemaVersion {
                value: self.schema_version.clone(),
            });
        }

        Ok(())
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| String::from("1970-01-01T00:00:00Z"))
}

fn is_valid_schema_version(value: &str) -> bool {
    let Some(version) = value.strip_prefix('v') else {
        return false;
    };

    let mut parts = version.split('.');
    let major = parts.next();
    let minor = parts.next();
    let patch = parts.next();

    if parts.next().is_some() {
        return false;
    }

    [major, minor, patch].iter().all(|part| {
        part.is_some_and(|segment| {
            !segment.is_empty() && segment.chars().all(|ch| ch.is_ascii_digit())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_meta_is_compliant() {
        let meta = EnvelopeMeta::for_request(3);
        meta.validate_schema_compliance().expect("compliant");
        assert_eq!(Uuid::parse_str(&meta.request_id).expect("uuid").get_version_num(), 4);
        assert!(OffsetDateTime::parse(&meta.generated_at, &Rfc3339).is_ok());
    }

    #[test]
    fn rejects_bad_schema_version() {
        let mut meta = EnvelopeMeta::for_request(1);
        meta.schema_version = String::from("1.0.0");
        let err = meta.validate_schema_compliance().expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidSchemaVersion { .. }));
    }

    #[test]
    fn rejects_short_request_id() {
        let mut meta = EnvelopeMeta::for_request(1);
        meta.request_id = String::from("abc");
        let err = meta.validate_schema_compliance().expect_err("must fail");
        assert_eq!(err, ValidationError::InvalidRequestId);
    }

    #[test]
    fn warnings_are_omitted_when_empty() {
        let envelope = Envelope::success(EnvelopeMeta::for_request(0), 1);
        let value = serde_json::to_value(&envelope).expect("serializes");
        assert!(value["meta"].get("warnings").is_none());

        let warned = Envelope::success(
            EnvelopeMeta::for_request(0).with_warnings(vec![String::from("w")]),
            1,
        );
        let value = serde_json::to_value(&warned).expect("serializes");
        assert_eq!(value["meta"]["warnings"][0], "w");
    }
}
