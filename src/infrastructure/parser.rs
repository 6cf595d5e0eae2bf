use serde_json::Value;

use crate::{SearchError, SearchResult};

/// Parses a raw search response body into an ordered list of results.
///
/// The document must be a JSON object whose `items` field is an array;
/// anything else is a [SearchError::Parse]. Individual items are mapped
/// leniently: a missing or wrong-typed field becomes `None`, never an
/// error, so a well-formed-but-sparse payload always yields a full-length
/// sequence in the order the remote source returned it.
pub fn parse_search_payload(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    let document: Value =
        serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))?;
    let items = document
        .as_object()
        .ok_or_else(|| SearchError::Parse("document is not an object".to_string()))?
        .get("items")
        .ok_or_else(|| SearchError::Parse("missing 'items' field".to_string()))?
        .as_array()
        .ok_or_else(|| SearchError::Parse("'items' is not an array".to_string()))?;

    Ok(items.iter().map(parse_item).collect())
}

fn parse_item(item: &Value) -> SearchResult {
    SearchResult::new(
        string_field(item, "full_name"),
        string_field(item, "description"),
        string_field(item, "html_url"),
    )
}

fn string_field(item: &Value, field: &str) -> Option<String> {
    item.get(field)
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parse_full_items() {
        let body = json!({
            "total_count": 2,
            "items": [
                {
                    "full_name": "apple/swift",
                    "html_url": "https://github.com/apple/swift",
                    "description": "The Swift Programming Language"
                },
                {
                    "full_name": "apple/darwin-xnu",
                    "html_url": "https://github.com/apple/darwin-xnu",
                    "description": "Kernel sources"
                }
            ]
        })
        .to_string();

        let results = parse_search_payload(&body).unwrap();

        assert_eq!(
            vec![
                SearchResult::new(
                    Some("apple/swift".to_string()),
                    Some("The Swift Programming Language".to_string()),
                    Some("https://github.com/apple/swift".to_string()),
                ),
                SearchResult::new(
                    Some("apple/darwin-xnu".to_string()),
                    Some("Kernel sources".to_string()),
                    Some("https://github.com/apple/darwin-xnu".to_string()),
                ),
            ],
            results
        );
    }

    #[test]
    fn parse_preserves_item_order_and_length() {
        let items = (0..10)
            .map(|i| json!({"full_name": format!("org/repo-{i}")}))
            .collect::<Vec<_>>();
        let body = json!({ "items": items }).to_string();

        let results = parse_search_payload(&body).unwrap();

        assert_eq!(10, results.len());
        for (i, result) in results.iter().enumerate() {
            assert_eq!(Some(format!("org/repo-{i}")).as_deref(), result.name());
        }
    }

    #[test]
    fn parse_sparse_item_maps_missing_fields_to_none() {
        let body = json!({
            "items": [
                { "full_name": "org/repo" },
                {}
            ]
        })
        .to_string();

        let results = parse_search_payload(&body).unwrap();

        assert_eq!(2, results.len());
        assert_eq!(Some("org/repo"), results[0].name());
        assert_eq!(None, results[0].description());
        assert_eq!(None, results[0].url());
        assert_eq!(None, results[1].name());
    }

    #[test]
    fn parse_wrong_typed_field_maps_to_none() {
        let body = json!({
            "items": [
                { "full_name": 42, "description": null, "html_url": ["x"] }
            ]
        })
        .to_string();

        let results = parse_search_payload(&body).unwrap();

        assert_eq!(1, results.len());
        assert_eq!(None, results[0].name());
        assert_eq!(None, results[0].description());
        assert_eq!(None, results[0].url());
    }

    #[test]
    fn parse_fails_if_items_is_not_an_array() {
        let body = json!({ "items": 3 }).to_string();

        parse_search_payload(&body).expect_err("Parser should fail on non-array 'items'");
    }

    #[test]
    fn parse_fails_if_items_is_missing() {
        let body = json!({ "total_count": 0 }).to_string();

        parse_search_payload(&body).expect_err("Parser should fail on missing 'items'");
    }

    #[test]
    fn parse_fails_if_document_is_not_an_object() {
        parse_search_payload("[1, 2, 3]").expect_err("Parser should fail on non-object document");
        parse_search_payload("not json at all").expect_err("Parser should fail on invalid JSON");
    }
}
