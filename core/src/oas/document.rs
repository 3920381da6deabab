#![deny(missing_docs)]

//! # Document Parsing
//!
//! Walks a fully-materialized OpenAPI document and builds the tag-grouped
//! interface tree.
//!
//! One pass over `paths` produces one [`InterfaceNode`] per path+method
//! pair, appended to every tag group the operation declares (an operation
//! with several tags appears once per group). Iteration follows the
//! document's own declaration order throughout. The pass is best-effort:
//! malformed operations are skipped and dangling references drop their
//! fields, but nothing aborts the parse.

use crate::error::AppError;
use crate::oas::keys::random_id;
use crate::oas::models::{InterfaceNode, ParseOptions, TagGroups};
use crate::oas::naming::{camel_name_from_kebab, kebab_name_from_path};
use crate::oas::params::parse_parameters;
use crate::oas::responses::parse_response;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

/// HTTP verbs recognized under a path item. Other keys (`parameters`,
/// `summary`, extensions) are not operations.
const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Title used when an operation declares neither description nor summary.
const UNTITLED: &str = "Untitled interface";

/// A fully-materialized OpenAPI document.
///
/// Owned by one parse pass at a time and never mutated; references inside
/// it resolve against its own root.
#[derive(Debug, Clone)]
pub struct OpenApiDocument {
    root: Value,
}

/// Operation fields the aggregator consumes. Everything is optional so a
/// partial document still yields a node.
#[derive(Debug, Deserialize)]
struct ShimOperation {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(rename = "operationId", default)]
    operation_id: Option<String>,
    #[serde(default)]
    parameters: Option<Value>,
    #[serde(default)]
    responses: Option<Value>,
}

impl OpenApiDocument {
    /// Wraps an already-parsed document value.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// The raw root value.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Builds the tag-grouped interface tree for this document.
    ///
    /// Each call is an independent pass producing fresh nodes; node keys
    /// are regenerated, so two passes over the same document agree on
    /// everything except `key`.
    pub fn parse(&self, options: &ParseOptions) -> TagGroups {
        let mut groups = TagGroups::new();
        let Some(paths) = self.root.get("paths").and_then(Value::as_object) else {
            return groups;
        };

        for (path, path_item) in paths {
            let Some(path_item) = path_item.as_object() else {
                continue;
            };
            for (method, operation) in path_item {
                if !HTTP_METHODS.contains(&method.as_str()) {
                    continue;
                }
                let Ok(operation) = serde_json::from_value::<ShimOperation>(operation.clone())
                else {
                    tracing::debug!(
                        path = path.as_str(),
                        method = method.as_str(),
                        "operation is not an object; skipping"
                    );
                    continue;
                };

                let node = self.build_node(path, method, &operation, options);
                if operation.tags.is_empty() {
                    groups
                        .entry(options.default_tag.clone())
                        .or_default()
                        .push(node);
                } else {
                    for tag in &operation.tags {
                        groups.entry(tag.clone()).or_default().push(node.clone());
                    }
                }
            }
        }

        groups
    }

    fn build_node(
        &self,
        path: &str,
        method: &str,
        operation: &ShimOperation,
        options: &ParseOptions,
    ) -> InterfaceNode {
        let title = operation
            .description
            .clone()
            .filter(|text| !text.is_empty())
            .or_else(|| operation.summary.clone().filter(|text| !text.is_empty()))
            .unwrap_or_else(|| UNTITLED.to_string());

        let file_name = kebab_name_from_path(path);
        let path_name = camel_name_from_kebab(&file_name);

        InterfaceNode {
            node_type: "interface",
            key: random_id(&title),
            base_path: options.base_path.clone(),
            parent_key: String::new(),
            method: method.to_string(),
            params: parse_parameters(&self.root, operation.parameters.as_ref(), options),
            response: parse_response(&self.root, operation.responses.as_ref(), options),
            title,
            sub_title: path.to_string(),
            path: path.to_string(),
            path_name,
            file_name,
            operation_id: operation.operation_id.clone(),
        }
    }
}

impl FromStr for OpenApiDocument {
    type Err = AppError;

    /// Loads a document from YAML or JSON text (YAML being a superset, one
    /// parser covers both).
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let root: Value = serde_yaml::from_str(text)?;
        Ok(Self::new(root))
    }
}
