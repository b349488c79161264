//! Typed sidebar fields
//!
//! The source treats sidebar fields as an open-ended dictionary; here the
//! scalar-vs-list distinction is explicit at the type level, and field
//! order from the source template is preserved.

use crate::Category;
use indexmap::IndexMap;

/// A single normalized field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single value
    Scalar(String),
    /// A multi-valued field (split from a known separator set)
    List(Vec<String>),
}

impl FieldValue {
    /// The value as a scalar, if it is one.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    /// The value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::Scalar(_) => None,
            FieldValue::List(items) => Some(items),
        }
    }

    /// True for an empty scalar or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Scalar(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Scalar(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

/// A parsed sidebar template: the category tag plus the normalized fields
/// in source order.
///
/// Produced once per unit by the extractor + normalizer, consumed once by a
/// record builder, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    /// Which category template this sidebar came from
    pub category: Category,
    /// Field name → value, insertion-ordered
    pub fields: IndexMap<String, FieldValue>,
}

impl Sidebar {
    /// Create an empty sidebar for a category.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            fields: IndexMap::new(),
        }
    }

    /// Get a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Get a field's scalar value by name.
    pub fn scalar(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(FieldValue::as_scalar)
    }

    /// Insert a field, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }
}
