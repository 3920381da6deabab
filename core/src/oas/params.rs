#![deny(missing_docs)]

//! # Parameter Parsing
//!
//! Resolves an operation's declared parameters into normalized fields.
//!
//! A local `ShimParameter` acts as the intermediate deserialization layer:
//! fragments are resolved against the document first, then deserialized
//! leniently, so a malformed entry drops that parameter instead of failing
//! the document parse.

use crate::oas::models::{NormalizedField, ParseOptions};
use crate::oas::pointer::resolve_fragment;
use crate::oas::schema::SchemaNormalizer;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// A local shim for Parameter objects, tolerant of partial documents.
///
/// Carries the OAS 3.x `schema` plus legacy Swagger 2.0 inline type fields
/// (`type`/`items` directly on the parameter).
#[derive(Debug, Clone, Deserialize)]
pub struct ShimParameter {
    /// Name of the parameter.
    pub name: String,
    /// Location of the parameter (query, path, header, cookie).
    #[serde(rename = "in", default)]
    pub parameter_in: Option<String>,
    /// A brief description of the parameter.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the parameter is required.
    #[serde(default)]
    pub required: bool,
    /// Schema definition (OAS 3.x).
    #[serde(default)]
    pub schema: Option<Value>,
    /// Legacy inline primitive type.
    #[serde(rename = "type", default)]
    pub schema_type: Option<String>,
    /// Legacy inline array item schema.
    #[serde(default)]
    pub items: Option<Value>,
}

/// Resolves and flattens an operation's parameter list.
///
/// Declaration order is kept. Header parameters are excluded from the tree.
/// Duplicate names keep the first occurrence. Parameters whose reference
/// does not resolve are dropped.
pub fn parse_parameters(
    doc: &Value,
    parameters: Option<&Value>,
    options: &ParseOptions,
) -> Vec<NormalizedField> {
    let Some(list) = parameters.and_then(Value::as_array) else {
        return Vec::new();
    };

    let normalizer = SchemaNormalizer::new(doc, options);
    let mut seen: HashSet<String> = HashSet::new();
    let mut result = Vec::new();

    for raw in list {
        let Some(resolved) = resolve_fragment(doc, raw) else {
            tracing::debug!("parameter reference did not resolve; dropping");
            continue;
        };
        let Ok(param) = serde_json::from_value::<ShimParameter>(resolved.clone()) else {
            tracing::debug!("fragment is not a parameter object; dropping");
            continue;
        };
        if param.parameter_in.as_deref() == Some("header") {
            continue; // headers are not modeled in the tree
        }
        if !seen.insert(param.name.clone()) {
            continue; // duplicate name, first occurrence wins
        }

        let schema = parameter_schema(doc, &param);
        result.push(normalizer.normalize(
            &param.name,
            &schema,
            param.required,
            param.description.clone(),
        ));
    }

    result
}

/// Picks the parameter's value schema: the resolved `schema` object when
/// present, a fragment synthesized from legacy inline fields otherwise.
///
/// A dangling schema reference degrades to an untyped fragment so the
/// parameter itself survives as an `any` field.
fn parameter_schema(doc: &Value, param: &ShimParameter) -> Value {
    if let Some(schema) = &param.schema {
        if let Some(resolved) = resolve_fragment(doc, schema) {
            return resolved.clone();
        }
        tracing::debug!(
            parameter = param.name.as_str(),
            "schema reference did not resolve; treating as untyped"
        );
        return Value::Object(Map::new());
    }

    if let Some(ty) = &param.schema_type {
        let mut fragment = Map::new();
        fragment.insert("type".to_string(), Value::String(ty.clone()));
        if let Some(items) = &param.items {
            fragment.insert("items".to_string(), items.clone());
        }
        return Value::Object(fragment);
    }

    Value::Object(Map::new())
}
