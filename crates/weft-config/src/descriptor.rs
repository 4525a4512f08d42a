//! Static shapes of configuration types.
//!
//! A descriptor is configuration data in its own right: constructed once
//! (the builtin remap tables in `weft-types` hold them as process-wide
//! static state), compared, printed, and handed to a resolver. Nothing
//! mutates a descriptor after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unresolved shape of a configuration type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigTypeDescriptor {
    /// Integer scalar.
    Int,
    /// Floating-point scalar.
    Float,
    /// Boolean scalar.
    Bool,
    /// String scalar.
    String,
    /// The maximally permissive config type: any document fragment.
    Any,
    /// Ordered array with a single element shape.
    Array(Box<ConfigTypeDescriptor>),
}

impl ConfigTypeDescriptor {
    /// An array of Any-typed config values: the shape an unannotated list
    /// defaults to.
    pub fn array_of_any() -> Self {
        Self::Array(Box::new(Self::Any))
    }

    /// True for scalar shapes (everything except `Any` and arrays).
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Int | Self::Float | Self::Bool | Self::String)
    }
}

impl fmt::Display for ConfigTypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "Int"),
            Self::Float => write!(f, "Float"),
            Self::Bool => write!(f, "Bool"),
            Self::String => write!(f, "String"),
            Self::Any => write!(f, "Any"),
            Self::Array(element) => write!(f, "[{element}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_of_any_shape() {
        let descriptor = ConfigTypeDescriptor::array_of_any();
        assert_eq!(
            descriptor,
            ConfigTypeDescriptor::Array(Box::new(ConfigTypeDescriptor::Any))
        );
        assert!(!descriptor.is_scalar());
        assert_eq!(descriptor.to_string(), "[Any]");
    }

    #[test]
    fn scalar_classification() {
        assert!(ConfigTypeDescriptor::Int.is_scalar());
        assert!(ConfigTypeDescriptor::String.is_scalar());
        assert!(!ConfigTypeDescriptor::Any.is_scalar());
    }

    #[test]
    fn descriptors_serialize_snake_case() {
        assert_eq!(
            serde_json::to_value(ConfigTypeDescriptor::Int).unwrap(),
            serde_json::json!("int")
        );
        assert_eq!(
            serde_json::to_value(ConfigTypeDescriptor::array_of_any()).unwrap(),
            serde_json::json!({ "array": "any" })
        );
    }
}
