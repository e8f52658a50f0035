//! OpenAPI 3.0 to native model.

use std::collections::BTreeMap;

use relay_domain::{Collection, QueryParam, Request, generate_request_id};
use serde_json::Value;

use super::types::{OpenApiDocument, Operation};

const DEFAULT_NAME: &str = "Imported Collection";

/// Imports an OpenAPI 3.0 document.
///
/// Emits one request per (path, method) operation. The request URL is
/// `servers[0].url + path` by plain concatenation, with no slash
/// deduplication. Documents without `paths` yield an empty collection
/// named from `info.title`.
#[must_use]
pub fn import_openapi(doc: &OpenApiDocument) -> Collection {
    let name = doc
        .info
        .title
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string());

    let collection = Collection::new(name).with_description(doc.info.description.clone());

    let Some(paths) = &doc.paths else {
        return collection;
    };

    let base_url = doc.servers.first().map(|s| s.url.as_str()).unwrap_or("");

    let mut requests = Vec::new();
    for (path, path_item) in paths {
        for (method, operation) in path_item.operations() {
            requests.push(import_operation(base_url, path, &method, operation));
        }
    }

    Collection {
        requests,
        ..collection
    }
}

fn import_operation(base_url: &str, path: &str, method: &str, operation: &Operation) -> Request {
    let name = operation
        .summary
        .clone()
        .or_else(|| operation.operation_id.clone())
        .unwrap_or_else(|| format!("{method} {path}"));

    // Content-Type is seeded unconditionally, body or not.
    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    let body = operation
        .request_body
        .as_ref()
        .and_then(|rb| rb.content.get("application/json"))
        .and_then(|media| match (&media.example, &media.schema) {
            (Some(Value::String(s)), _) => Some(s.clone()),
            (Some(example), _) => serde_json::to_string_pretty(example).ok(),
            (None, Some(_)) => Some("{}".to_string()),
            (None, None) => None,
        });

    // Parameter values are not carried by the documents this importer
    // reads; query params arrive empty and enabled.
    let query_params = operation
        .parameters
        .iter()
        .filter(|p| p.location == "query")
        .map(|p| QueryParam::new(p.name.clone(), ""))
        .collect();

    Request {
        id: generate_request_id(),
        name,
        method: method.to_string(),
        url: format!("{base_url}{path}"),
        headers,
        body,
        query_params,
        folder_id: None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> OpenApiDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_paths_yields_empty_collection() {
        let doc = parse(r#"{"openapi": "3.0.0", "info": {"title": "Empty API"}, "paths": {}}"#);
        let collection = import_openapi(&doc);

        assert_eq!(collection.name, "Empty API");
        assert_eq!(collection.requests.len(), 0);
    }

    #[test]
    fn test_missing_paths_and_title_use_defaults() {
        let doc = parse(r#"{"openapi": "3.0.0"}"#);
        let collection = import_openapi(&doc);

        assert_eq!(collection.name, "Imported Collection");
        assert!(collection.requests.is_empty());
    }

    #[test]
    fn test_url_is_base_plus_path_concatenation() {
        let doc = parse(
            r#"{
            "openapi": "3.0.0",
            "info": {"title": "Users"},
            "servers": [{"url": "https://api.example.com/v1"}],
            "paths": {"/users": {"get": {"summary": "List users"}}}
        }"#,
        );

        let collection = import_openapi(&doc);
        assert_eq!(collection.requests[0].url, "https://api.example.com/v1/users");
        assert_eq!(collection.requests[0].method, "GET");
        assert_eq!(collection.requests[0].name, "List users");
    }

    #[test]
    fn test_uppercase_method_keys_imported() {
        let doc = parse(
            r#"{
            "openapi": "3.0.0",
            "info": {"title": "Shouty"},
            "paths": {"/users": {"GET": {"summary": "List users"}}}
        }"#,
        );

        let collection = import_openapi(&doc);
        assert_eq!(collection.requests.len(), 1);
        assert_eq!(collection.requests[0].method, "GET");
        assert_eq!(collection.requests[0].name, "List users");
    }

    #[test]
    fn test_content_type_seeded_without_body() {
        let doc = parse(
            r#"{
            "openapi": "3.0.0",
            "info": {"title": "Users"},
            "paths": {"/users": {"get": {}}}
        }"#,
        );

        let request = &import_openapi(&doc).requests[0];
        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_name_falls_back_to_operation_id_then_synthesized() {
        let doc = parse(
            r#"{
            "openapi": "3.0.0",
            "info": {"title": "Users"},
            "paths": {
                "/users": {
                    "post": {"operationId": "createUser"},
                    "delete": {}
                }
            }
        }"#,
        );

        let collection = import_openapi(&doc);
        let names: Vec<&str> = collection.requests.iter().map(|r| r.name.as_str()).collect();
        assert!(names.contains(&"createUser"));
        assert!(names.contains(&"DELETE /users"));
    }

    #[test]
    fn test_body_prefers_example_over_schema() {
        let doc = parse(
            r#"{
            "openapi": "3.0.0",
            "info": {"title": "Users"},
            "paths": {
                "/users": {
                    "post": {
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": {"type": "object"},
                                    "example": {"name": "John"}
                                }
                            }
                        }
                    }
                }
            }
        }"#,
        );

        let request = &import_openapi(&doc).requests[0];
        let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "John");
    }

    #[test]
    fn test_schema_only_body_is_empty_object() {
        let doc = parse(
            r#"{
            "openapi": "3.0.0",
            "info": {"title": "Users"},
            "paths": {
                "/users": {
                    "post": {
                        "requestBody": {
                            "content": {"application/json": {"schema": {"type": "object"}}}
                        }
                    }
                }
            }
        }"#,
        );

        assert_eq!(import_openapi(&doc).requests[0].body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_query_parameters_without_values() {
        let doc = parse(
            r#"{
            "openapi": "3.0.0",
            "info": {"title": "Users"},
            "paths": {
                "/users": {
                    "get": {
                        "parameters": [
                            {"name": "page", "in": "query", "schema": {"type": "string"}},
                            {"name": "id", "in": "path", "required": true}
                        ]
                    }
                }
            }
        }"#,
        );

        let request = &import_openapi(&doc).requests[0];
        assert_eq!(request.query_params.len(), 1);
        assert_eq!(request.query_params[0].key, "page");
        assert_eq!(request.query_params[0].value, "");
        assert!(request.query_params[0].enabled);
    }
}
