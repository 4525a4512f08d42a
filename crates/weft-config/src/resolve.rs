//! Materializing config descriptors into resolved types.
//!
//! Resolution is total: every [`ConfigTypeDescriptor`] resolves, without
//! I/O and without failure. The resolver travels as a capability object,
//! so an instrumented or caching implementation can be swapped in without
//! touching the call sites.

use crate::descriptor::ConfigTypeDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique key of a resolved configuration type.
///
/// Keys are the equality anchor for the config type system: two resolved
/// types with the same key are the same type. Composite types embed their
/// element key (`Array.Any`, `Array.Int`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConfigTypeKey(pub String);

impl ConfigTypeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl fmt::Display for ConfigTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse classification of a resolved configuration type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigTypeKind {
    Scalar,
    Any,
    Array,
}

/// A fully resolved configuration type.
///
/// Produced fresh by a [`ResolveConfigType`] implementation on each
/// resolve call; this crate does not cache them. Equality is key-based.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigType {
    key: ConfigTypeKey,
    display_name: String,
    kind: ConfigTypeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    element: Option<Box<ConfigType>>,
}

impl ConfigType {
    /// A scalar config type. `name` doubles as key and display name.
    pub fn scalar(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            key: ConfigTypeKey::new(name.clone()),
            display_name: name,
            kind: ConfigTypeKind::Scalar,
            element: None,
        }
    }

    /// The resolved Any config type.
    pub fn any() -> Self {
        Self {
            key: ConfigTypeKey::new("Any"),
            display_name: "Any".to_string(),
            kind: ConfigTypeKind::Any,
            element: None,
        }
    }

    /// An array over an already-resolved element type.
    pub fn array(element: ConfigType) -> Self {
        Self {
            key: ConfigTypeKey::new(format!("Array.{}", element.key)),
            display_name: format!("[{}]", element.display_name),
            kind: ConfigTypeKind::Array,
            element: Some(Box::new(element)),
        }
    }

    pub fn key(&self) -> &ConfigTypeKey {
        &self.key
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn kind(&self) -> ConfigTypeKind {
        self.kind
    }

    /// The resolved element type, for arrays.
    pub fn element(&self) -> Option<&ConfigType> {
        self.element.as_deref()
    }

    pub fn is_any(&self) -> bool {
        matches!(self.kind, ConfigTypeKind::Any)
    }
}

impl PartialEq for ConfigType {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ConfigType {}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// Capability that materializes config descriptors into resolved types.
pub trait ResolveConfigType {
    fn resolve(&self, descriptor: &ConfigTypeDescriptor) -> ConfigType;
}

/// The canonical stateless resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigTypeResolver;

impl ResolveConfigType for ConfigTypeResolver {
    fn resolve(&self, descriptor: &ConfigTypeDescriptor) -> ConfigType {
        match descriptor {
            ConfigTypeDescriptor::Int => ConfigType::scalar("Int"),
            ConfigTypeDescriptor::Float => ConfigType::scalar("Float"),
            ConfigTypeDescriptor::Bool => ConfigType::scalar("Bool"),
            ConfigTypeDescriptor::String => ConfigType::scalar("String"),
            ConfigTypeDescriptor::Any => ConfigType::any(),
            ConfigTypeDescriptor::Array(element) => ConfigType::array(self.resolve(element)),
        }
    }
}
