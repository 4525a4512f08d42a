//! Native builtin type identities.
//!
//! The host value model ships a fixed set of builtin primitive and
//! container types. [`NativeType`] names them so they can serve as lookup
//! keys — in particular for the remap tables in [`crate::builtins`].
//! An identity is a pure key: constructed, compared, printed, never
//! mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one of the host value model's builtin types.
///
/// The set is deliberately wider than what any single remap table
/// supports. Membership predicates are total: every identity — including
/// a user-defined [`NativeType::Custom`] type — can be asked "are you
/// remappable here?" and answered with a plain `false`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeType {
    /// Signed integer.
    Int,
    /// 64-bit floating point number.
    Float,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Str,
    /// Raw byte string.
    Bytes,
    /// Fixed-point decimal scalar. Float-like, but outside both remap
    /// tables.
    Decimal,
    /// Ordered, heterogeneous sequence.
    List,
    /// Fixed-arity heterogeneous sequence.
    Tuple,
    /// Unordered collection of unique values.
    Set,
    /// Keyed collection with arbitrary keys.
    Mapping,
    /// The type of the unit/none value.
    Unit,
    /// A user-defined type, identified by its declared name.
    Custom(String),
}

impl NativeType {
    /// Identity for a user-defined type name.
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// True for the builtin container identities, regardless of whether a
    /// given remap table supports them.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::List | Self::Tuple | Self::Set | Self::Mapping)
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Bool => write!(f, "bool"),
            Self::Str => write!(f, "str"),
            Self::Bytes => write!(f, "bytes"),
            Self::Decimal => write!(f, "decimal"),
            Self::List => write!(f, "list"),
            Self::Tuple => write!(f, "tuple"),
            Self::Set => write!(f, "set"),
            Self::Mapping => write!(f, "mapping"),
            Self::Unit => write!(f, "unit"),
            Self::Custom(name) => write!(f, "custom type '{name}'"),
        }
    }
}

impl std::str::FromStr for NativeType {
    type Err = std::convert::Infallible;

    /// Parse an annotation spelling. Unknown names parse as [`Custom`],
    /// since pipeline authors name their own types.
    ///
    /// [`Custom`]: NativeType::Custom
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "int" | "integer" => Self::Int,
            "float" => Self::Float,
            "bool" | "boolean" => Self::Bool,
            "str" | "string" => Self::Str,
            "bytes" => Self::Bytes,
            "decimal" => Self::Decimal,
            "list" => Self::List,
            "tuple" => Self::Tuple,
            "set" => Self::Set,
            "map" | "mapping" => Self::Mapping,
            "unit" | "none" => Self::Unit,
            _ => Self::Custom(s.trim().to_string()),
        })
    }
}
