#![deny(missing_docs)]

//! # apitree core
//!
//! Core library for flattening OpenAPI v3 documents into normalized,
//! tag-grouped interface trees for UI display.
//!
//! The caller supplies a fully-materialized document and receives the
//! grouped tree synchronously; no I/O happens during the parse.

/// Shared error types.
pub mod error;

/// OpenAPI (OAS) interface-tree parsing.
pub mod oas;

pub use error::{AppError, AppResult};
pub use oas::{
    FieldKind, FieldShape, InterfaceNode, NormalizedField, OpenApiDocument, ParseOptions,
    ParsedResponse, TagGroups,
};
