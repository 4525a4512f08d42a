//! Materializing runtime descriptors into resolved types.
//!
//! Resolution is total: every [`RuntimeTypeDescriptor`] resolves, without
//! I/O and without failure. The resolver is a capability object handed to
//! the remap functions in [`crate::builtins`], so a caching or
//! instrumented implementation can be swapped in without touching call
//! sites.

use crate::descriptor::RuntimeTypeDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique key of a resolved runtime type.
///
/// Keys are the equality anchor for the runtime type system: two resolved
/// types with the same key are the same type. Composite types embed their
/// element key (`List.Any`, `List.Int`). The runtime and config key
/// spaces are independent; a runtime key never identifies a config type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RuntimeTypeKey(pub String);

impl RuntimeTypeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl fmt::Display for RuntimeTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse classification of a resolved runtime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeTypeKind {
    Scalar,
    Any,
    List,
    Tuple,
    Set,
    Mapping,
}

/// A fully resolved runtime type.
///
/// Produced fresh by a [`ResolveRuntimeType`] implementation on each
/// resolve call; this crate does not cache them. Equality is key-based.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeType {
    key: RuntimeTypeKey,
    display_name: String,
    kind: RuntimeTypeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    element: Option<Box<RuntimeType>>,
}

impl RuntimeType {
    /// A scalar runtime type. `name` doubles as key and display name.
    pub fn scalar(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            key: RuntimeTypeKey::new(name.clone()),
            display_name: name,
            kind: RuntimeTypeKind::Scalar,
            element: None,
        }
    }

    /// The resolved Any runtime type.
    pub fn any() -> Self {
        Self::container(RuntimeTypeKind::Any, "Any")
    }

    /// A list over an already-resolved element type.
    pub fn list(element: RuntimeType) -> Self {
        Self {
            key: RuntimeTypeKey::new(format!("List.{}", element.key)),
            display_name: format!("[{}]", element.display_name),
            kind: RuntimeTypeKind::List,
            element: Some(Box::new(element)),
        }
    }

    /// The untyped tuple runtime type.
    pub fn tuple() -> Self {
        Self::container(RuntimeTypeKind::Tuple, "Tuple")
    }

    /// The untyped set runtime type.
    pub fn set() -> Self {
        Self::container(RuntimeTypeKind::Set, "Set")
    }

    /// The untyped mapping runtime type.
    pub fn mapping() -> Self {
        Self::container(RuntimeTypeKind::Mapping, "Mapping")
    }

    fn container(kind: RuntimeTypeKind, name: &str) -> Self {
        Self {
            key: RuntimeTypeKey::new(name),
            display_name: name.to_string(),
            kind,
            element: None,
        }
    }

    pub fn key(&self) -> &RuntimeTypeKey {
        &self.key
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn kind(&self) -> RuntimeTypeKind {
        self.kind
    }

    /// The resolved element type, for lists.
    pub fn element(&self) -> Option<&RuntimeType> {
        self.element.as_deref()
    }

    pub fn is_any(&self) -> bool {
        matches!(self.kind, RuntimeTypeKind::Any)
    }
}

impl PartialEq for RuntimeType {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for RuntimeType {}

impl fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// Capability that materializes runtime descriptors into resolved types.
pub trait ResolveRuntimeType {
    fn resolve(&self, descriptor: &RuntimeTypeDescriptor) -> RuntimeType;
}

/// The canonical stateless resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeTypeResolver;

impl ResolveRuntimeType for RuntimeTypeResolver {
    fn resolve(&self, descriptor: &RuntimeTypeDescriptor) -> RuntimeType {
        match descriptor {
            RuntimeTypeDescriptor::Int => RuntimeType::scalar("Int"),
            RuntimeTypeDescriptor::Float => RuntimeType::scalar("Float"),
            RuntimeTypeDescriptor::Bool => RuntimeType::scalar("Bool"),
            RuntimeTypeDescriptor::String => RuntimeType::scalar("String"),
            RuntimeTypeDescriptor::Any => RuntimeType::any(),
            RuntimeTypeDescriptor::List(element) => RuntimeType::list(self.resolve(element)),
            RuntimeTypeDescriptor::Tuple => RuntimeType::tuple(),
            RuntimeTypeDescriptor::Set => RuntimeType::set(),
            RuntimeTypeDescriptor::Mapping => RuntimeType::mapping(),
        }
    }
}
