//! Dot-path navigation over arbitrarily shaped JSON documents

use serde_json::Value;

/// Extract the value at a dot-delimited `path` inside `doc`.
///
/// Returns `None` ("absent") when any segment names a missing key, when a
/// segment is applied to a non-object, or when the resolved value is JSON
/// null. Absent is a first-class outcome distinct from an empty string.
///
/// An empty path resolves to the document itself, which lets providers whose
/// response root is already the results array use an empty results path.
/// Segments never index into arrays by position; arrays are only reached when
/// the path resolves to one, after which each element becomes the root
/// document for per-item paths.
pub fn extract<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = doc;

    if !path.is_empty() {
        for segment in path.split('.') {
            match current {
                Value::Object(map) => match map.get(segment) {
                    Some(next) => current = next,
                    None => return None,
                },
                _ => return None,
            }
        }
    }

    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// Resolve an item path to the string form used for result fields.
///
/// Strings pass through unchanged; numbers and booleans render with their
/// JSON display form so a path can point at a score or an id. Absent values,
/// arrays, and objects all coerce to the empty string.
pub fn extract_field(item: &Value, path: &str) -> String {
    match extract(item, path) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_path_returns_document() {
        let doc = json!([{"score": 0.9, "show": {"name": "X"}}]);
        assert_eq!(extract(&doc, ""), Some(&doc));
    }

    #[test]
    fn descends_nested_objects() {
        let doc = json!({"data": {"children": [{"data": {"title": "X"}}]}});

        let children = extract(&doc, "data.children").unwrap();
        let items = children.as_array().unwrap();
        assert_eq!(items.len(), 1);

        assert_eq!(extract(&items[0], "data.title"), Some(&json!("X")));
    }

    #[test]
    fn missing_intermediate_key_is_absent() {
        let doc = json!({"data": {"title": "X"}});
        assert_eq!(extract(&doc, "data.missing.title"), None);
    }

    #[test]
    fn absent_differs_from_empty_string() {
        let doc = json!({"title": ""});
        assert_eq!(extract(&doc, "title"), Some(&json!("")));
        assert_eq!(extract(&doc, "other"), None);
    }

    #[test]
    fn null_values_are_absent() {
        let doc = json!({"title": null});
        assert_eq!(extract(&doc, "title"), None);
        assert_eq!(extract(&Value::Null, ""), None);
    }

    #[test]
    fn path_into_scalar_is_absent() {
        let doc = json!({"title": "X"});
        assert_eq!(extract(&doc, "title.inner"), None);
    }

    #[test]
    fn no_implicit_array_indexing() {
        let doc = json!({"items": [{"title": "X"}]});
        assert_eq!(extract(&doc, "items.0"), None);
        assert_eq!(extract(&doc, "items.title"), None);
    }

    #[test]
    fn field_coercion() {
        let item = json!({"title": "X", "score": 42, "ok": true, "tags": ["a"]});
        assert_eq!(extract_field(&item, "title"), "X");
        assert_eq!(extract_field(&item, "score"), "42");
        assert_eq!(extract_field(&item, "ok"), "true");
        assert_eq!(extract_field(&item, "tags"), "");
        assert_eq!(extract_field(&item, "missing"), "");
    }
}
