//! # Weft configuration type system
//!
//! Describes the *schema* of user-supplied configuration documents, as
//! opposed to the types of values flowing through a running pipeline
//! (that is `weft-types`' runtime system).
//!
//! Two layers:
//!
//! ```text
//! ConfigTypeDescriptor   ← static shape, built once, never mutated
//!     │  ResolveConfigType::resolve
//! ConfigType             ← materialized type with a unique key
//! ```
//!
//! The descriptor set is deliberately narrow. Configuration documents are
//! YAML/JSON-shaped: scalars and ordered arrays. There is no native notion
//! of tuple, set, or arbitrary mapping in authored config — structured
//! objects are modeled elsewhere as explicit named fields. The runtime
//! type system is the wider of the two; callers must not assume the two
//! systems accept the same shapes.

pub mod descriptor;
pub mod resolve;

pub use descriptor::ConfigTypeDescriptor;
pub use resolve::{
    ConfigType, ConfigTypeKey, ConfigTypeKind, ConfigTypeResolver, ResolveConfigType,
};
