#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helper functions for deriving display/codegen identifiers from OpenAPI
//! path templates.

use heck::{ToKebabCase, ToLowerCamelCase};

/// Converts a path template into a kebab-case file stem.
///
/// e.g. `/api/userInfo/{userId}` -> `api-user-info-user-id`
pub fn kebab_name_from_path(path: &str) -> String {
    path.replace(['{', '}'], "").replace('/', " ").to_kebab_case()
}

/// Converts a kebab-case stem into a lowerCamelCase identifier.
///
/// e.g. `api-user-info-user-id` -> `apiUserInfoUserId`
pub fn camel_name_from_kebab(kebab: &str) -> String {
    kebab.to_lower_camel_case()
}
