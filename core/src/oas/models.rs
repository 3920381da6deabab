#![deny(missing_docs)]

//! # Interface Tree Models
//!
//! Definition of the Intermediate Representation (IR) structures for the
//! parsed interface tree.
//!
//! These structs transport flattened schema data from the parser to the
//! host tree-view layer. The wire shape is fixed by that consumer, so the
//! `Serialize` implementations are written by hand where the Rust shape
//! and the wire shape differ.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// The closed set of field kinds understood by the tree renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `object`
    Object,
    /// `array`
    Array,
    /// `string`
    String,
    /// `number` (also covers `integer`)
    Number,
    /// `boolean`
    Boolean,
    /// `file` (Swagger 2.0 upload parameters)
    File,
    /// Missing or unrecognized type discriminator.
    Any,
}

impl FieldKind {
    /// Maps a raw schema `type` value onto the closed kind set.
    ///
    /// `integer` collapses into [`FieldKind::Number`]; a missing or unknown
    /// type yields [`FieldKind::Any`].
    pub fn from_schema_type(raw: Option<&str>) -> Self {
        match raw {
            Some("object") => Self::Object,
            Some("array") => Self::Array,
            Some("string") => Self::String,
            Some("number") | Some("integer") => Self::Number,
            Some("boolean") => Self::Boolean,
            Some("file") => Self::File,
            _ => Self::Any,
        }
    }

    /// The wire name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::File => "file",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for FieldKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// The shape of a normalized field, keyed by element kind.
///
/// Each variant carries exactly the data relevant to it; the wire fields
/// `type`, `itemsType` and `item` are derived from the variant on
/// serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldShape {
    /// A leaf without properties (primitive, or an opaque typed schema).
    Leaf(FieldKind),
    /// A schema with no type discriminator; recursion stopped here.
    Any,
    /// An array whose element carries no properties of its own.
    ///
    /// `children` holds a single nested field when the element is itself an
    /// array (one wrapper per dimension), and is empty for scalar elements.
    Array {
        /// Element kind.
        items: FieldKind,
        /// Nested array wrapper, when the element is itself an array.
        children: Vec<NormalizedField>,
    },
    /// A property-bearing field.
    ///
    /// `kind` is the field's own declared kind: `object` for plain objects,
    /// `array` for an array whose element object was merged into this field.
    /// It is emitted as both `type` and `itemsType` on the wire.
    Object {
        /// The field's own declared kind.
        kind: FieldKind,
        /// Child fields in property-declaration order.
        children: Vec<NormalizedField>,
    },
}

/// One flattened parameter or response property, ready for tree display.
///
/// `required` is computed from the parent schema's required-name list, not
/// from anything declared on the field itself.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedField {
    /// Field name.
    pub name: String,
    /// Human description, when the schema carried one.
    pub description: Option<String>,
    /// Whether the parent declared this field mandatory.
    pub required: bool,
    /// Title of the schema this field resolved from (`titRef` on the wire).
    pub title_ref: Option<String>,
    /// Element shape.
    pub shape: FieldShape,
}

impl NormalizedField {
    /// The wire `type` of this field.
    pub fn kind(&self) -> FieldKind {
        match &self.shape {
            FieldShape::Leaf(kind) => *kind,
            FieldShape::Any => FieldKind::Any,
            FieldShape::Array { .. } => FieldKind::Array,
            FieldShape::Object { kind, .. } => *kind,
        }
    }

    /// The wire `itemsType`, present when this field is a container.
    pub fn items_kind(&self) -> Option<FieldKind> {
        match &self.shape {
            FieldShape::Array { items, .. } => Some(*items),
            FieldShape::Object { kind, .. } => Some(*kind),
            FieldShape::Leaf(_) | FieldShape::Any => None,
        }
    }

    /// Child fields, when this field has any.
    pub fn children(&self) -> Option<&[NormalizedField]> {
        match &self.shape {
            FieldShape::Array { children, .. } | FieldShape::Object { children, .. }
                if !children.is_empty() =>
            {
                Some(children.as_slice())
            }
            _ => None,
        }
    }
}

impl Serialize for NormalizedField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("type", self.kind().as_str())?;
        if let Some(description) = &self.description {
            map.serialize_entry("description", description)?;
        }
        if self.required {
            map.serialize_entry("required", &true)?;
        }
        if let Some(title_ref) = &self.title_ref {
            map.serialize_entry("titRef", title_ref)?;
        }
        if let Some(items) = self.items_kind() {
            map.serialize_entry("itemsType", items.as_str())?;
        }
        if let Some(children) = self.children() {
            map.serialize_entry("item", children)?;
        }
        map.end()
    }
}

/// The parsed success-response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedResponse {
    /// A bare type marker: the body is scalar, absent, or unresolvable.
    Kind(FieldKind),
    /// A flattened structured body.
    Field(NormalizedField),
}

impl Serialize for ParsedResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Kind(kind) => serializer.serialize_str(kind.as_str()),
            Self::Field(field) => field.serialize(serializer),
        }
    }
}

/// One interface tree node per path+method pair.
///
/// Created once per parse pass and immutable thereafter. The `key` is
/// probabilistically unique within a pass; it is not stable across passes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceNode {
    /// Node discriminator consumed by the tree view, always `"interface"`.
    #[serde(rename = "type")]
    pub node_type: &'static str,
    /// Display key: title text plus a random alphanumeric suffix.
    pub key: String,
    /// Caller-configured base path, prepended by downstream consumers.
    pub base_path: String,
    /// Parent node key; empty at the interface level.
    pub parent_key: String,
    /// HTTP verb as declared in the document.
    pub method: String,
    /// Flattened request parameters in first-acceptance order.
    pub params: Vec<NormalizedField>,
    /// Flattened success response body.
    pub response: ParsedResponse,
    /// Human description (operation description, falling back to summary).
    pub title: String,
    /// Raw path template, shown next to the title.
    pub sub_title: String,
    /// Raw path template.
    pub path: String,
    /// lowerCamelCase identifier derived from the path, for codegen.
    pub path_name: String,
    /// kebab-case file stem derived from the path, for codegen.
    pub file_name: String,
    /// Declared `operationId`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
}

/// Interface nodes grouped by tag, in first-appearance order.
pub type TagGroups = IndexMap<String, Vec<InterfaceNode>>;

/// Caller-supplied knobs for one parse pass.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Base path stamped onto every interface node.
    pub base_path: String,
    /// Group label for operations that declare no tags.
    pub default_tag: String,
    /// Maximum schema recursion depth before a subtree truncates to `any`.
    ///
    /// Guards against self-referential schema graphs, which would otherwise
    /// recurse without bound.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            default_tag: "ungrouped".to_string(),
            max_depth: 64,
        }
    }
}
