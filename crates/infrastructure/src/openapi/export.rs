//! Native model to OpenAPI 3.0.

use std::collections::BTreeMap;

use relay_domain::{Collection, Request};
use url::Url;

use super::types::{
    ApiInfo, MediaType, OpenApiDocument, Operation, Parameter, PathItem, RequestBody, Response,
    Schema,
};

/// Exports a collection to an OpenAPI 3.0 document.
///
/// Requests are grouped by URL pathname, then by lowercased method.
/// Requests whose URL does not parse are silently omitted. Two requests
/// landing on the same (pathname, method) pair overwrite each other,
/// last one wins; there is no merge and no warning.
#[must_use]
pub fn export_openapi(collection: &Collection) -> OpenApiDocument {
    let mut paths: BTreeMap<String, PathItem> = BTreeMap::new();

    for request in &collection.requests {
        let Ok(parsed) = Url::parse(&request.url) else {
            continue;
        };

        let path = if parsed.path().is_empty() {
            "/".to_string()
        } else {
            parsed.path().to_string()
        };
        let method = request.method.to_lowercase();

        let operation = export_operation(request, &method);
        paths.entry(path).or_default().set(&method, operation);
    }

    OpenApiDocument {
        openapi: "3.0.0".to_string(),
        info: ApiInfo {
            title: Some(collection.name.clone()),
            description: Some(collection.description.clone().unwrap_or_default()),
            version: Some("1.0.0".to_string()),
        },
        servers: Vec::new(),
        paths: Some(paths),
    }
}

fn export_operation(request: &Request, method: &str) -> Operation {
    // No response data is ever captured by the app, so every operation
    // gets the same synthesized 200.
    let mut responses = BTreeMap::new();
    responses.insert(
        "200".to_string(),
        Response {
            description: "Successful response".to_string(),
            content: Some(json_content(Some(Schema::object()), None)),
        },
    );

    let request_body = request
        .body
        .as_deref()
        .filter(|body| !body.is_empty() && matches!(method, "post" | "put" | "patch"))
        .map(|body| RequestBody {
            // The body text rides along verbatim in `example`, parsed or not.
            content: json_content(
                Some(Schema::object()),
                Some(serde_json::Value::String(body.to_string())),
            ),
        });

    let parameters = request
        .query_params
        .iter()
        .filter(|p| p.enabled && !p.key.is_empty())
        .map(|p| Parameter {
            name: p.key.clone(),
            location: "query".to_string(),
            required: false,
            schema: Some(Schema::string()),
        })
        .collect();

    Operation {
        summary: Some(request.name.clone()),
        description: Some(request.name.clone()),
        operation_id: None,
        parameters,
        request_body,
        responses,
    }
}

fn json_content(
    schema: Option<Schema>,
    example: Option<serde_json::Value>,
) -> BTreeMap<String, MediaType> {
    let mut content = BTreeMap::new();
    content.insert(
        "application/json".to_string(),
        MediaType { schema, example },
    );
    content
}
