#![deny(missing_docs)]

//! # Pointer Resolution
//!
//! Resolves local `#/...` references against the root document.
//!
//! Resolution is a pure lookup: no caching, no cycle detection. Callers
//! that recurse into resolved fragments are responsible for bounding their
//! own descent. References that point outside the current document are out
//! of scope and resolve to `None`, as do dangling pointers; callers treat
//! `None` as "drop this field" rather than failing the parse.

use percent_encoding::percent_decode_str;
use serde_json::Value;

/// Returns the fragment itself when it carries no `$ref`, or the referenced
/// fragment looked up in `doc`.
///
/// A dangling, external, or non-string reference yields `None`.
pub fn resolve_fragment<'a>(doc: &'a Value, fragment: &'a Value) -> Option<&'a Value> {
    match fragment.get("$ref") {
        None => Some(fragment),
        Some(reference) => lookup_pointer(doc, reference.as_str()?),
    }
}

/// Walks `doc` along a `#`-prefixed JSON Pointer, segment by segment.
///
/// Objects are entered by key, arrays by numeric index. Any missing segment
/// yields `None`. The bare pointer `#` addresses the whole document.
pub fn lookup_pointer<'a>(doc: &'a Value, reference: &str) -> Option<&'a Value> {
    let pointer = reference.strip_prefix('#')?;
    if pointer.is_empty() {
        return Some(doc);
    }
    if !pointer.starts_with('/') {
        return None;
    }

    let mut current = doc;
    for segment in pointer.split('/').skip(1) {
        let segment = decode_pointer_segment(segment);
        current = match current {
            Value::Object(map) => map.get(&segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Decodes a JSON Pointer segment (handles `~1`, `~0` and `%`-escapes).
fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn doc() -> Value {
        json!({
            "components": {
                "schemas": {
                    "User": {"type": "object"},
                    "odd/name": {"type": "string"},
                }
            },
            "list": ["zero", "one"],
        })
    }

    #[test]
    fn test_passthrough_without_ref() {
        let root = doc();
        let fragment = json!({"type": "string"});
        let resolved = resolve_fragment(&root, &fragment).unwrap();
        assert_eq!(resolved, &fragment);
    }

    #[test]
    fn test_resolves_local_reference() {
        let root = doc();
        let fragment = json!({"$ref": "#/components/schemas/User"});
        let resolved = resolve_fragment(&root, &fragment).unwrap();
        assert_eq!(resolved, &json!({"type": "object"}));
    }

    #[test]
    fn test_dangling_reference_is_none() {
        let root = doc();
        let fragment = json!({"$ref": "#/components/schemas/Missing"});
        assert!(resolve_fragment(&root, &fragment).is_none());
    }

    #[test]
    fn test_external_reference_is_none() {
        let root = doc();
        let fragment = json!({"$ref": "./other.yaml#/components/schemas/User"});
        assert!(resolve_fragment(&root, &fragment).is_none());
    }

    #[test]
    fn test_escaped_segment() {
        let root = doc();
        let resolved = lookup_pointer(&root, "#/components/schemas/odd~1name").unwrap();
        assert_eq!(resolved, &json!({"type": "string"}));
    }

    #[test]
    fn test_array_index_segment() {
        let root = doc();
        assert_eq!(lookup_pointer(&root, "#/list/1").unwrap(), &json!("one"));
        assert!(lookup_pointer(&root, "#/list/9").is_none());
        assert!(lookup_pointer(&root, "#/list/x").is_none());
    }

    #[test]
    fn test_bare_hash_is_whole_document() {
        let root = doc();
        assert_eq!(lookup_pointer(&root, "#").unwrap(), &root);
    }
}
