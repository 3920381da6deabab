#![deny(missing_docs)]

//! # Response Parsing
//!
//! Extracts and flattens the success-response body of an operation.
//!
//! The body schema runs through the same normalizer as parameters, so a
//! structured response yields the same recursive field shape the tree view
//! renders for inputs. Anything that cannot be resolved degrades to the
//! `any` marker; a missing success response is treated the same way.

use crate::oas::models::{FieldKind, ParseOptions, ParsedResponse};
use crate::oas::pointer::resolve_fragment;
use crate::oas::schema::SchemaNormalizer;
use serde_json::Value;

/// Looks up the 200 response, extracts the first declared media type's
/// schema, and flattens it.
///
/// Scalar bodies return a bare type marker; structured bodies (objects
/// with properties, arrays) return a flattened root field.
pub fn parse_response(
    doc: &Value,
    responses: Option<&Value>,
    options: &ParseOptions,
) -> ParsedResponse {
    let Some(success) = responses.and_then(|responses| responses.get("200")) else {
        return ParsedResponse::Kind(FieldKind::Any);
    };
    let Some(success) = resolve_fragment(doc, success) else {
        tracing::debug!("response reference did not resolve");
        return ParsedResponse::Kind(FieldKind::Any);
    };
    let Some(schema) = first_media_schema(success) else {
        return ParsedResponse::Kind(FieldKind::Any);
    };
    let Some(schema) = resolve_fragment(doc, schema) else {
        tracing::debug!("response schema reference did not resolve");
        return ParsedResponse::Kind(FieldKind::Any);
    };

    let kind = FieldKind::from_schema_type(schema.get("type").and_then(Value::as_str));
    let has_properties = schema.get("properties").is_some_and(Value::is_object);
    if !has_properties && kind != FieldKind::Array {
        return ParsedResponse::Kind(kind);
    }

    let normalizer = SchemaNormalizer::new(doc, options);
    ParsedResponse::Field(normalizer.normalize("", schema, false, None))
}

/// The first declared media type's schema under `content`.
fn first_media_schema(response: &Value) -> Option<&Value> {
    let content = response.get("content")?.as_object()?;
    let (_, media) = content.iter().next()?;
    media.get("schema")
}
