//! Static shapes of runtime types.
//!
//! The runtime system models arbitrary in-memory values, so every native
//! container kind is representable — unlike the configuration system in
//! [`weft_config`], which stops at ordered arrays. Descriptors are built
//! once and never mutated; the remap tables in [`crate::builtins`] hold
//! them as process-wide static state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unresolved shape of a runtime type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeTypeDescriptor {
    /// Integer scalar.
    Int,
    /// Floating-point scalar.
    Float,
    /// Boolean scalar.
    Bool,
    /// String scalar.
    String,
    /// The universal, maximally permissive type.
    Any,
    /// Ordered sequence with a single element shape.
    List(Box<RuntimeTypeDescriptor>),
    /// Fixed-arity sequence with unannotated contents.
    Tuple,
    /// Unordered unique collection with unannotated contents.
    Set,
    /// Keyed collection with unannotated contents.
    Mapping,
}

impl RuntimeTypeDescriptor {
    /// A list of Any-typed elements: the shape an unannotated list
    /// defaults to.
    pub fn list_of_any() -> Self {
        Self::List(Box::new(Self::Any))
    }

    /// True for scalar shapes (everything except `Any` and containers).
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Int | Self::Float | Self::Bool | Self::String)
    }
}

impl fmt::Display for RuntimeTypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "Int"),
            Self::Float => write!(f, "Float"),
            Self::Bool => write!(f, "Bool"),
            Self::String => write!(f, "String"),
            Self::Any => write!(f, "Any"),
            Self::List(element) => write!(f, "[{element}]"),
            Self::Tuple => write!(f, "Tuple"),
            Self::Set => write!(f, "Set"),
            Self::Mapping => write!(f, "Mapping"),
        }
    }
}
