//! Postman Collection v2.1 to native model.

use std::collections::BTreeMap;

use relay_domain::{Collection, QueryParam, Request, generate_folder_id, generate_request_id};

use super::types::{PostmanBody, PostmanCollection, PostmanFormParam, PostmanItem};
use crate::html::decode_html_entities;

/// Result of importing a Postman collection.
#[derive(Debug, Clone)]
pub struct PostmanImport {
    /// The imported collection with its flattened request list
    pub collection: Collection,
    /// Collection-level variables, passed through verbatim. The caller
    /// decides whether to offer creating an environment from them.
    pub variables: Vec<super::types::PostmanVariable>,
}

/// Imports a Postman Collection v2.1 document.
///
/// The item tree is flattened into a single request list. Each
/// top-level folder gets one synthetic folder id attached to all of its
/// descendant requests; nested sub-folders collapse onto the same id
/// because the native model has only a flat folder tag, not a
/// hierarchy. This is an intentional lossy simplification.
#[must_use]
pub fn import_postman(doc: &PostmanCollection) -> PostmanImport {
    let mut requests = Vec::new();
    walk_items(&doc.item, None, &mut requests);

    let collection = Collection::new(doc.info.name.clone())
        .with_description(doc.info.description.clone());
    let collection = Collection {
        requests,
        ..collection
    };

    PostmanImport {
        collection,
        variables: doc.variable.clone(),
    }
}

fn walk_items(items: &[PostmanItem], folder_id: Option<&str>, out: &mut Vec<Request>) {
    for item in items {
        if let Some(request) = &item.request {
            let url = decode_html_entities(&request.url.resolve());

            let mut headers = BTreeMap::new();
            for header in &request.header {
                // Values are decoded, keys are not.
                headers.insert(header.key.clone(), decode_html_entities(&header.value));
            }

            let body = request.body.as_ref().and_then(map_body);

            let query_params = request
                .url
                .query_params()
                .iter()
                .map(|q| QueryParam {
                    key: decode_html_entities(&q.key),
                    value: decode_html_entities(q.value.as_deref().unwrap_or_default()),
                    enabled: !q.disabled,
                })
                .collect();

            out.push(Request {
                id: generate_request_id(),
                name: item.name.clone(),
                method: request.method.clone(),
                url,
                headers,
                body,
                query_params,
                folder_id: folder_id.map(ToString::to_string),
            });
        } else if let Some(children) = &item.item {
            // One flat tag per top-level folder; sub-folders reuse it.
            let id = folder_id.map_or_else(generate_folder_id, ToString::to_string);
            walk_items(children, Some(&id), out);
        }
    }
}

fn map_body(body: &PostmanBody) -> Option<String> {
    match body.mode.as_str() {
        "raw" => body
            .raw
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(decode_html_entities),
        "formdata" => serialize_params(&body.formdata),
        "urlencoded" => serialize_params(&body.urlencoded),
        _ => None,
    }
}

/// Form-data and urlencoded bodies lose their structure: they become a
/// JSON object of decoded key/value pairs serialized to text.
fn serialize_params(params: &[PostmanFormParam]) -> Option<String> {
    if params.is_empty() {
        return None;
    }

    let map: BTreeMap<String, String> = params
        .iter()
        .map(|p| {
            (
                decode_html_entities(&p.key),
                decode_html_entities(p.value.as_deref().unwrap_or_default()),
            )
        })
        .collect();

    serde_json::to_string(&map).ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> PostmanCollection {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_import_folder_with_one_request() {
        let doc = parse(
            r#"{
            "info": {"name": "My API"},
            "item": [{
                "name": "Users",
                "item": [{
                    "name": "Get Users",
                    "request": {"method": "GET", "url": "https://api.example.com/users"}
                }]
            }]
        }"#,
        );

        let imported = import_postman(&doc);
        let requests = &imported.collection.requests;

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].url, "https://api.example.com/users");
        assert!(requests[0].folder_id.as_deref().unwrap().starts_with("folder-"));
    }

    #[test]
    fn test_nested_folders_collapse_to_one_tag() {
        let doc = parse(
            r#"{
            "info": {"name": "Nested"},
            "item": [{
                "name": "Outer",
                "item": [
                    {"name": "Direct", "request": {"method": "GET", "url": "https://x.test/a"}},
                    {"name": "Inner", "item": [
                        {"name": "Deep", "request": {"method": "GET", "url": "https://x.test/b"}}
                    ]}
                ]
            }]
        }"#,
        );

        let imported = import_postman(&doc);
        let requests = &imported.collection.requests;

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].folder_id, requests[1].folder_id);
    }

    #[test]
    fn test_root_requests_have_no_folder() {
        let doc = parse(
            r#"{
            "info": {"name": "Flat"},
            "item": [{"name": "Ping", "request": {"method": "GET", "url": "https://x.test/"}}]
        }"#,
        );

        let imported = import_postman(&doc);
        assert!(imported.collection.requests[0].folder_id.is_none());
    }

    #[test]
    fn test_html_entities_decoded_in_url_headers_and_body() {
        let doc = parse(
            r#"{
            "info": {"name": "Encoded"},
            "item": [{
                "name": "Create",
                "request": {
                    "method": "POST",
                    "url": "https://api.example.com/search?q=a&amp;b",
                    "header": [{"key": "X-Note", "value": "&lt;test&gt;"}],
                    "body": {"mode": "raw", "raw": "{&quot;name&quot;: &quot;John&quot;}"}
                }
            }]
        }"#,
        );

        let request = &import_postman(&doc).collection.requests[0];
        assert_eq!(request.url, "https://api.example.com/search?q=a&b");
        assert_eq!(request.headers.get("X-Note").map(String::as_str), Some("<test>"));
        assert_eq!(request.body.as_deref(), Some(r#"{"name": "John"}"#));
    }

    #[test]
    fn test_formdata_body_is_json_serialized() {
        let doc = parse(
            r#"{
            "info": {"name": "Form"},
            "item": [{
                "name": "Upload",
                "request": {
                    "method": "POST",
                    "url": "https://x.test/upload",
                    "body": {
                        "mode": "formdata",
                        "formdata": [
                            {"key": "name", "value": "john"},
                            {"key": "role", "value": "admin"}
                        ]
                    }
                }
            }]
        }"#,
        );

        let request = &import_postman(&doc).collection.requests[0];
        let body: BTreeMap<String, String> =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body.get("name").map(String::as_str), Some("john"));
        assert_eq!(body.get("role").map(String::as_str), Some("admin"));
    }

    #[test]
    fn test_unknown_body_mode_dropped() {
        let doc = parse(
            r#"{
            "info": {"name": "GraphQL"},
            "item": [{
                "name": "Query",
                "request": {
                    "method": "POST",
                    "url": "https://x.test/graphql",
                    "body": {"mode": "graphql"}
                }
            }]
        }"#,
        );

        assert!(import_postman(&doc).collection.requests[0].body.is_none());
    }

    #[test]
    fn test_query_params_from_structured_url() {
        let doc = parse(
            r#"{
            "info": {"name": "Query"},
            "item": [{
                "name": "Search",
                "request": {
                    "method": "GET",
                    "url": {
                        "raw": "https://x.test/search?q=rust&debug=1",
                        "query": [
                            {"key": "q", "value": "rust"},
                            {"key": "debug", "value": "1", "disabled": true}
                        ]
                    }
                }
            }]
        }"#,
        );

        let request = &import_postman(&doc).collection.requests[0];
        assert_eq!(request.query_params.len(), 2);
        assert!(request.query_params[0].enabled);
        assert!(!request.query_params[1].enabled);
    }

    #[test]
    fn test_variables_passed_through() {
        let doc = parse(
            r#"{
            "info": {"name": "Vars"},
            "item": [],
            "variable": [{"key": "baseUrl", "value": "https://api.example.com"}]
        }"#,
        );

        let imported = import_postman(&doc);
        assert_eq!(imported.variables.len(), 1);
        assert_eq!(imported.variables[0].key, "baseUrl");
    }
}
