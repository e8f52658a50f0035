//! Native model to Postman Collection v2.1.

use relay_domain::{Collection, Request};
use url::Url;

use super::types::{
    POSTMAN_SCHEMA_V21, PostmanBody, PostmanCollection, PostmanHeader, PostmanInfo, PostmanItem,
    PostmanQueryParam, PostmanRequest, PostmanUrl, PostmanUrlStructured,
};

/// Exports a collection to Postman Collection v2.1.
///
/// Folder tags are not reconstructed into a folder tree; every request
/// becomes a top-level item. Disabled and empty-key query params are
/// dropped, which is not reversible.
#[must_use]
pub fn export_postman(collection: &Collection) -> PostmanCollection {
    let items = collection.requests.iter().map(export_item).collect();

    PostmanCollection {
        info: PostmanInfo {
            name: collection.name.clone(),
            description: collection.description.clone(),
            schema: Some(POSTMAN_SCHEMA_V21.to_string()),
        },
        item: items,
        variable: Vec::new(),
    }
}

fn export_item(request: &Request) -> PostmanItem {
    let mut url = PostmanUrlStructured {
        raw: Some(request.url.clone()),
        ..Default::default()
    };

    // Structured fields only when the URL actually parses; relative or
    // malformed URLs keep just `raw`.
    if let Ok(parsed) = Url::parse(&request.url) {
        url.protocol = Some(parsed.scheme().to_string());
        if let Some(host) = parsed.host_str() {
            url.host = vec![host.to_string()];
        }
        url.path = parsed
            .path()
            .split('/')
            .filter(|p| !p.is_empty())
            .map(ToString::to_string)
            .collect();
    }

    url.query = request
        .query_params
        .iter()
        .filter(|p| p.enabled && !p.key.is_empty())
        .map(|p| PostmanQueryParam {
            key: p.key.clone(),
            value: Some(p.value.clone()),
            disabled: false,
        })
        .collect();

    let header = request
        .headers
        .iter()
        .map(|(key, value)| PostmanHeader {
            key: key.clone(),
            value: value.clone(),
        })
        .collect();

    // Bodies are always exported in raw mode, valid JSON or not.
    let body = request.body.as_ref().map(|raw| PostmanBody {
        mode: "raw".to_string(),
        raw: Some(raw.clone()),
        urlencoded: Vec::new(),
        formdata: Vec::new(),
    });

    PostmanItem {
        name: request.name.clone(),
        description: None,
        item: None,
        request: Some(PostmanRequest {
            method: request.method.clone(),
            url: PostmanUrl::Structured(url),
            header,
            body,
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::postman::import::import_postman;
    use pretty_assertions::assert_eq;

    fn sample_collection() -> Collection {
        let mut request = Request::new("Create User");
        request.method = "POST".to_string();
        request.url = "https://api.example.com/users".to_string();
        request
            .headers
            .insert("X-Test".to_string(), "v".to_string());
        request.body = Some(r#"{"a":1}"#.to_string());

        let mut collection = Collection::new("Test API");
        collection.add_request(request);
        collection
    }

    #[test]
    fn test_export_stamps_v21_schema() {
        let exported = export_postman(&sample_collection());
        assert_eq!(
            exported.info.schema.as_deref(),
            Some("https://schema.getpostman.com/json/collection/v2.1.0/collection.json")
        );
    }

    #[test]
    fn test_export_builds_structured_url() {
        let exported = export_postman(&sample_collection());
        let request = exported.item[0].request.as_ref().unwrap();

        let PostmanUrl::Structured(url) = &request.url else {
            panic!("expected structured url");
        };
        assert_eq!(url.raw.as_deref(), Some("https://api.example.com/users"));
        assert_eq!(url.protocol.as_deref(), Some("https"));
        assert_eq!(url.host, vec!["api.example.com"]);
        assert_eq!(url.path, vec!["users"]);
    }

    #[test]
    fn test_malformed_url_keeps_only_raw() {
        let mut collection = sample_collection();
        collection.requests[0].url = "/relative/path".to_string();

        let exported = export_postman(&collection);
        let PostmanUrl::Structured(url) = &exported.item[0].request.as_ref().unwrap().url else {
            panic!("expected structured url");
        };
        assert_eq!(url.raw.as_deref(), Some("/relative/path"));
        assert!(url.protocol.is_none());
        assert!(url.host.is_empty());
    }

    #[test]
    fn test_disabled_and_empty_key_params_dropped() {
        let mut collection = sample_collection();
        collection.requests[0].query_params = vec![
            relay_domain::QueryParam::new("page", "1"),
            relay_domain::QueryParam::disabled("debug", "true"),
            relay_domain::QueryParam::new("", "orphan"),
        ];

        let exported = export_postman(&collection);
        let PostmanUrl::Structured(url) = &exported.item[0].request.as_ref().unwrap().url else {
            panic!("expected structured url");
        };
        assert_eq!(url.query.len(), 1);
        assert_eq!(url.query[0].key, "page");
    }

    #[test]
    fn test_headers_render_in_name_order() {
        let mut collection = sample_collection();
        let headers = &mut collection.requests[0].headers;
        headers.insert("Zulu".to_string(), "z".to_string());
        headers.insert("Alpha".to_string(), "a".to_string());

        let exported = export_postman(&collection);
        let keys: Vec<&str> = exported.item[0]
            .request
            .as_ref()
            .unwrap()
            .header
            .iter()
            .map(|h| h.key.as_str())
            .collect();
        assert_eq!(keys, vec!["Alpha", "X-Test", "Zulu"]);
    }

    #[test]
    fn test_non_json_body_still_raw_mode() {
        let mut collection = sample_collection();
        collection.requests[0].body = Some("plain text, not json".to_string());

        let exported = export_postman(&collection);
        let body = exported.item[0].request.as_ref().unwrap().body.as_ref().unwrap();
        assert_eq!(body.mode, "raw");
        assert_eq!(body.raw.as_deref(), Some("plain text, not json"));
    }

    #[test]
    fn test_round_trip_preserves_request() {
        let collection = sample_collection();
        let imported = import_postman(&export_postman(&collection));
        let request = &imported.collection.requests[0];
        let original = &collection.requests[0];

        assert_eq!(request.method, original.method);
        assert_eq!(request.url, original.url);
        assert_eq!(request.headers, original.headers);
        assert_eq!(request.body, original.body);
    }
}
