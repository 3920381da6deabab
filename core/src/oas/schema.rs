#![deny(missing_docs)]

//! # Schema Normalization
//!
//! Turns resolved schema fragments into [`NormalizedField`] trees.
//!
//! Two mutually recursive branches mirror the shape of JSON Schema:
//! the array branch unwraps `items` one dimension per level, the object
//! branch flattens `properties` in declaration order. Required-ness is
//! declared at the parent level as a list of child names, so each branch
//! threads that list downward exactly one level: a child is `required`
//! iff its own parent's list names it, regardless of anything declared on
//! the child itself.
//!
//! Fragments are normalized structurally, with no identity caching: a
//! fragment reachable through several references is normalized once per
//! occurrence, each time with the required-ness its call site propagates.
//! Descent is bounded by [`ParseOptions::max_depth`]; a self-referential
//! schema graph truncates to an `any` leaf instead of recursing forever.

use crate::oas::models::{FieldKind, FieldShape, NormalizedField, ParseOptions};
use crate::oas::pointer::resolve_fragment;
use serde_json::Value;

/// Stateless normalizer over one document.
#[derive(Debug, Clone, Copy)]
pub struct SchemaNormalizer<'a> {
    doc: &'a Value,
    max_depth: usize,
}

impl<'a> SchemaNormalizer<'a> {
    /// Creates a normalizer resolving references against `doc`.
    pub fn new(doc: &'a Value, options: &ParseOptions) -> Self {
        Self {
            doc,
            max_depth: options.max_depth,
        }
    }

    /// Normalizes a resolved schema fragment into a field.
    ///
    /// `required` is the verdict of the caller's required-name list.
    /// `fallback_description` is used when the schema itself carries no
    /// `description` (parameters pass their own description here).
    pub fn normalize(
        &self,
        name: &str,
        schema: &Value,
        required: bool,
        fallback_description: Option<String>,
    ) -> NormalizedField {
        self.normalize_at(name, schema, required, fallback_description, 0)
    }

    fn normalize_at(
        &self,
        name: &str,
        schema: &Value,
        required: bool,
        fallback_description: Option<String>,
        depth: usize,
    ) -> NormalizedField {
        if depth >= self.max_depth {
            tracing::debug!(field = name, depth, "max schema depth reached; truncating");
            return NormalizedField {
                name: name.to_string(),
                description: text(schema, "description").or(fallback_description),
                required,
                title_ref: text(schema, "title"),
                shape: FieldShape::Any,
            };
        }

        let kind = FieldKind::from_schema_type(schema.get("type").and_then(Value::as_str));
        if kind == FieldKind::Array {
            self.parse_array(name, schema, required, fallback_description, depth)
        } else {
            self.parse_object(name, schema, kind, required, fallback_description, depth)
        }
    }

    /// Array branch: resolves `items` and either nests (array-of-array) or
    /// merges the element into this field (array-of-object).
    fn parse_array(
        &self,
        name: &str,
        schema: &Value,
        required: bool,
        fallback_description: Option<String>,
        depth: usize,
    ) -> NormalizedField {
        let description = text(schema, "description").or(fallback_description);
        let title_ref = text(schema, "title");

        let items = schema
            .get("items")
            .and_then(|items| resolve_fragment(self.doc, items));
        let Some(items) = items else {
            tracing::debug!(field = name, "array items missing or unresolvable");
            return NormalizedField {
                name: name.to_string(),
                description,
                required,
                title_ref,
                shape: FieldShape::Array {
                    items: FieldKind::Any,
                    children: Vec::new(),
                },
            };
        };

        // The element schema merges into this field; its description and
        // title win over the outer ones, matching the reference merge order.
        let description = text(items, "description").or(description);
        let title_ref = text(items, "title").or(title_ref);

        let items_kind = FieldKind::from_schema_type(items.get("type").and_then(Value::as_str));
        if items_kind == FieldKind::Array {
            // One wrapper per dimension, unwrapping until a non-array element.
            let nested = self.normalize_at(name, items, false, None, depth + 1);
            return NormalizedField {
                name: name.to_string(),
                description,
                required,
                title_ref,
                shape: FieldShape::Array {
                    items: FieldKind::Array,
                    children: vec![nested],
                },
            };
        }

        // An object element flattens its properties into this field, with
        // the element's own required list marking the children. The field
        // keeps its own kind (`array`) through the object branch.
        let shape = match self.object_children(items, depth) {
            Some(children) => FieldShape::Object {
                kind: FieldKind::Array,
                children,
            },
            None => FieldShape::Array {
                items: items_kind,
                children: Vec::new(),
            },
        };

        NormalizedField {
            name: name.to_string(),
            description,
            required,
            title_ref,
            shape,
        }
    }

    /// Object branch: flattens `properties` when present, otherwise returns
    /// the field as a leaf.
    fn parse_object(
        &self,
        name: &str,
        schema: &Value,
        kind: FieldKind,
        required: bool,
        fallback_description: Option<String>,
        depth: usize,
    ) -> NormalizedField {
        let shape = match self.object_children(schema, depth) {
            Some(children) => FieldShape::Object { kind, children },
            None if kind == FieldKind::Any => FieldShape::Any,
            None => FieldShape::Leaf(kind),
        };

        NormalizedField {
            name: name.to_string(),
            description: text(schema, "description").or(fallback_description),
            required,
            title_ref: text(schema, "title"),
            shape,
        }
    }

    /// Builds the ordered child list for a property-bearing schema, marking
    /// each child against the schema's own required-name list.
    ///
    /// Returns `None` when the schema declares no properties. Children whose
    /// reference does not resolve are dropped.
    fn object_children(&self, schema: &Value, depth: usize) -> Option<Vec<NormalizedField>> {
        let properties = schema.get("properties")?.as_object()?;
        let required_names = required_names(schema);

        let mut children = Vec::with_capacity(properties.len());
        for (prop_name, raw) in properties {
            let Some(resolved) = resolve_fragment(self.doc, raw) else {
                tracing::debug!(
                    property = prop_name.as_str(),
                    "property reference did not resolve; dropping"
                );
                continue;
            };
            let child_required = required_names.iter().any(|n| *n == prop_name);
            children.push(self.normalize_at(prop_name, resolved, child_required, None, depth + 1));
        }
        Some(children)
    }
}

/// The schema's own `required` list (names of mandatory direct properties).
fn required_names(schema: &Value) -> Vec<&str> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

fn text(schema: &Value, key: &str) -> Option<String> {
    schema.get(key).and_then(Value::as_str).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn normalize(doc: &Value, schema: &Value, required: bool) -> NormalizedField {
        SchemaNormalizer::new(doc, &ParseOptions::default()).normalize(
            "root",
            schema,
            required,
            None,
        )
    }

    #[test]
    fn test_required_comes_from_parent_list_only() {
        let doc = json!({});
        let schema = json!({
            "type": "object",
            "required": ["a"],
            "properties": {
                "a": {"type": "string"},
                "b": {"type": "string", "required": true},
            }
        });
        let field = normalize(&doc, &schema, false);

        let FieldShape::Object { children, .. } = &field.shape else {
            panic!("expected object shape");
        };
        assert_eq!(children[0].name, "a");
        assert!(children[0].required);
        assert_eq!(children[1].name, "b");
        assert!(!children[1].required, "own flag must not count");
    }

    #[test]
    fn test_nested_object_uses_its_own_required_list() {
        let doc = json!({});
        let schema = json!({
            "type": "object",
            "properties": {
                "address": {
                    "type": "object",
                    "required": ["city"],
                    "properties": {
                        "city": {"type": "string"},
                        "zip": {"type": "string"},
                    }
                }
            }
        });
        let field = normalize(&doc, &schema, false);

        let FieldShape::Object { children, .. } = &field.shape else {
            panic!("expected object shape");
        };
        let address = &children[0];
        assert!(!address.required);
        let FieldShape::Object { children, .. } = &address.shape else {
            panic!("expected nested object shape");
        };
        assert!(children[0].required);
        assert!(!children[1].required);
    }

    #[test]
    fn test_two_dimensional_array_unwraps_one_level_per_field() {
        let doc = json!({});
        let schema = json!({
            "type": "array",
            "items": {"type": "array", "items": {"type": "string"}}
        });
        let field = normalize(&doc, &schema, false);

        assert_eq!(field.kind(), FieldKind::Array);
        assert_eq!(field.items_kind(), Some(FieldKind::Array));
        let nested = &field.children().unwrap()[0];
        assert_eq!(nested.kind(), FieldKind::Array);
        assert_eq!(nested.items_kind(), Some(FieldKind::String));
        assert!(nested.children().is_none());
    }

    #[test]
    fn test_array_of_object_merges_element_properties() {
        let doc = json!({});
        let schema = json!({
            "type": "array",
            "items": {
                "type": "object",
                "required": ["id"],
                "properties": {
                    "id": {"type": "integer"},
                    "label": {"type": "string"},
                }
            }
        });
        let field = normalize(&doc, &schema, false);

        // The merged field keeps its own kind through the object branch.
        assert_eq!(field.kind(), FieldKind::Array);
        assert_eq!(field.items_kind(), Some(FieldKind::Array));
        let children = field.children().unwrap();
        assert_eq!(children[0].name, "id");
        assert!(children[0].required);
        assert_eq!(children[0].kind(), FieldKind::Number);
        assert!(!children[1].required);
    }

    #[test]
    fn test_typeless_schema_is_an_any_leaf() {
        let doc = json!({});
        let schema = json!({"description": "opaque"});
        let field = normalize(&doc, &schema, false);
        assert_eq!(field.shape, FieldShape::Any);
        assert_eq!(field.description.as_deref(), Some("opaque"));
    }

    #[test]
    fn test_dangling_property_reference_is_dropped() {
        let doc = json!({"components": {"schemas": {}}});
        let schema = json!({
            "type": "object",
            "properties": {
                "gone": {"$ref": "#/components/schemas/Missing"},
                "kept": {"type": "string"},
            }
        });
        let field = normalize(&doc, &schema, false);
        let children = field.children().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "kept");
    }

    #[test]
    fn test_shared_fragment_normalized_per_occurrence() {
        let doc = json!({
            "components": {"schemas": {"Id": {"type": "string"}}}
        });
        let schema = json!({
            "type": "object",
            "required": ["first"],
            "properties": {
                "first": {"$ref": "#/components/schemas/Id"},
                "second": {"$ref": "#/components/schemas/Id"},
            }
        });
        let field = normalize(&doc, &schema, false);
        let children = field.children().unwrap();
        assert!(children[0].required);
        assert!(!children[1].required);
    }

    #[test]
    fn test_self_referential_schema_truncates() {
        let doc = json!({
            "components": {
                "schemas": {
                    "Node": {
                        "type": "object",
                        "properties": {
                            "value": {"type": "string"},
                            "children": {
                                "type": "array",
                                "items": {"$ref": "#/components/schemas/Node"},
                            },
                        }
                    }
                }
            }
        });
        let schema = doc["components"]["schemas"]["Node"].clone();
        let options = ParseOptions {
            max_depth: 6,
            ..ParseOptions::default()
        };
        let field = SchemaNormalizer::new(&doc, &options).normalize("tree", &schema, false, None);

        // Descend to the guard and verify the subtree ends in an `any` leaf.
        let mut current = field;
        let mut saw_truncation = false;
        for _ in 0..8 {
            if current.shape == FieldShape::Any {
                saw_truncation = true;
                break;
            }
            let Some(children) = current.children() else {
                break;
            };
            let next = children[children.len() - 1].clone();
            current = next;
        }
        assert!(saw_truncation, "expected an any leaf at the depth limit");
    }

    #[test]
    fn test_array_with_missing_items_is_untyped_container() {
        let doc = json!({});
        let schema = json!({"type": "array"});
        let field = normalize(&doc, &schema, false);
        assert_eq!(field.kind(), FieldKind::Array);
        assert_eq!(field.items_kind(), Some(FieldKind::Any));
        assert!(field.children().is_none());
    }
}
