//! Import file-format detection.

use serde_json::Value;

/// The recognized import file formats.
///
/// Detection is duck-typed over the parsed JSON but centralized here as
/// a closed enum so the predicates stay unit-testable in isolation
/// from the import logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Postman Collection v2.1 (`info` + `item`)
    Postman,
    /// OpenAPI 3.0 or legacy Swagger (`openapi` or `swagger` key)
    OpenApi,
    /// A raw array of pre-shaped collection records
    BulkArray,
    /// None of the above
    Unknown,
}

impl FileFormat {
    /// Detects the format of a parsed JSON value.
    ///
    /// Checked in priority order: Postman first (both `info` and `item`
    /// present), then OpenAPI (`openapi` or `swagger`), then a bare
    /// array. Anything else is unknown.
    #[must_use]
    pub fn detect(value: &Value) -> Self {
        if value.get("info").is_some() && value.get("item").is_some() {
            return Self::Postman;
        }
        if value.get("openapi").is_some() || value.get("swagger").is_some() {
            return Self::OpenApi;
        }
        if value.is_array() {
            return Self::BulkArray;
        }
        Self::Unknown
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_detect_postman() {
        let value = json!({"info": {"name": "Test"}, "item": []});
        assert_eq!(FileFormat::detect(&value), FileFormat::Postman);
    }

    #[test]
    fn test_detect_openapi() {
        let value = json!({"openapi": "3.0.0", "paths": {}});
        assert_eq!(FileFormat::detect(&value), FileFormat::OpenApi);
    }

    #[test]
    fn test_detect_legacy_swagger() {
        let value = json!({"swagger": "2.0"});
        assert_eq!(FileFormat::detect(&value), FileFormat::OpenApi);
    }

    #[test]
    fn test_detect_bulk_array() {
        let value = json!([{"name": "A", "data": {"requests": []}}]);
        assert_eq!(FileFormat::detect(&value), FileFormat::BulkArray);
    }

    #[test]
    fn test_postman_wins_over_openapi_like_keys() {
        // `info` + `item` is checked first even if an `openapi` key exists.
        let value = json!({"info": {}, "item": [], "openapi": "3.0.0"});
        assert_eq!(FileFormat::detect(&value), FileFormat::Postman);
    }

    #[test]
    fn test_unknown_format() {
        assert_eq!(FileFormat::detect(&json!({"foo": 1})), FileFormat::Unknown);
        assert_eq!(FileFormat::detect(&json!("just a string")), FileFormat::Unknown);
    }
}
