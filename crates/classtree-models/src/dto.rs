//! Request DTOs for creating and editing hierarchy nodes.
//!
//! The same shapes serve levels, grades, sub-grades and combinations; the
//! parent is passed separately to the service call.

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNodeDto {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    /// Display order; appended after the last sibling when omitted.
    pub order: Option<i32>,
}

impl CreateNodeDto {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            order: None,
        }
    }
}

/// Partial update merged into an existing node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct NodePatch {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
    pub order: Option<i32>,
}

impl NodePatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            order: None,
        }
    }

    pub fn reorder(order: i32) -> Self {
        Self {
            name: None,
            order: Some(order),
        }
    }

    /// Merge this patch into a node's fields.
    pub fn apply(&self, name: &mut String, order: &mut i32) {
        if let Some(new_name) = &self.name {
            name.clone_from(new_name);
        }
        if let Some(new_order) = self.order {
            *order = new_order;
        }
    }
}
