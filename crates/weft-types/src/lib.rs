//! # Weft type layer
//!
//! Two sibling type systems describe a Weft pipeline:
//!
//! - the **runtime type system** (this crate) describes values flowing
//!   between pipeline steps at execution time;
//! - the **configuration type system** (`weft-config`) describes the
//!   schema of user-supplied configuration documents.
//!
//! Pipeline authors usually annotate with plain native builtins (`int`,
//! `list`, ...). The [`builtins`] module is the bridge: two read-only
//! tables remap a [`native::NativeType`] identity into the descriptor
//! each system expects, then hand it to that system's resolver.
//!
//! ```text
//! NativeType ──┬─ remap_builtin_for_runtime ──▶ RuntimeType
//!              └─ remap_builtin_for_config ───▶ ConfigType
//! ```
//!
//! The two tables are deliberately asymmetric: every native container
//! kind is runtime-remappable, while configuration schemas stop at
//! ordered lists. Remapping an identity a table does not hold is a
//! caller bug and fails fast with a [`CheckError`] naming the argument.

pub mod annotation;
pub mod builtins;
pub mod descriptor;
pub mod native;
pub mod resolve;

pub use annotation::{
    ConfigTypeAnnotation, RuntimeTypeAnnotation, resolve_config_annotation,
    resolve_runtime_annotation,
};
pub use builtins::{
    BuiltinMappingRow, builtin_mapping_rows, builtin_registry_json, config_builtin_descriptor,
    is_supported_config_builtin, is_supported_runtime_builtin, remap_builtin_for_config,
    remap_builtin_for_runtime, runtime_builtin_descriptor,
};
pub use descriptor::RuntimeTypeDescriptor;
pub use native::NativeType;
pub use resolve::{
    ResolveRuntimeType, RuntimeType, RuntimeTypeKey, RuntimeTypeKind, RuntimeTypeResolver,
};
pub use weft_check::CheckError;
