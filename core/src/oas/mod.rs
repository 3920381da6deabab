#![deny(missing_docs)]

//! # Interface Tree Module
//!
//! Converts an OpenAPI v3 document into a normalized, UI-renderable
//! interface tree.
//!
//! Pipeline, leaf first:
//! - [`pointer`]: local `#/...` reference resolution against the root.
//! - [`schema`]: recursive array/object normalization with required-ness
//!   propagated from parent required-name lists.
//! - [`params`] / [`responses`]: per-operation input and output flattening.
//! - [`document`]: the aggregator walking paths and methods into tag groups.
//!
//! The parse is synchronous, allocation-only, and best-effort: malformed or
//! dangling fragments drop the affected field rather than failing the pass.

pub mod document;
pub mod keys;
pub mod models;
pub mod naming;
pub mod params;
pub mod pointer;
pub mod responses;
pub mod schema;

// Re-export public members so callers reach everything through `oas`.
pub use document::OpenApiDocument;
pub use models::{
    FieldKind, FieldShape, InterfaceNode, NormalizedField, ParseOptions, ParsedResponse, TagGroups,
};
pub use params::{parse_parameters, ShimParameter};
pub use pointer::{lookup_pointer, resolve_fragment};
pub use responses::parse_response;
pub use schema::SchemaNormalizer;
