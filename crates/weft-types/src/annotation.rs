//! Type annotations as pipeline authors write them.
//!
//! At the seams of a pipeline definition an annotation is either a plain
//! native builtin or an explicit descriptor. Builtins go through the
//! remap tables in [`crate::builtins`] — and therefore through their
//! precondition check — while descriptors resolve directly.

use crate::builtins::{remap_builtin_for_config, remap_builtin_for_runtime};
use crate::descriptor::RuntimeTypeDescriptor;
use crate::native::NativeType;
use crate::resolve::{ResolveRuntimeType, RuntimeType};
use serde::{Deserialize, Serialize};
use weft_check::CheckError;
use weft_config::{ConfigType, ConfigTypeDescriptor, ResolveConfigType};

/// A runtime type annotation as authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeTypeAnnotation {
    /// A bare native builtin, e.g. `int` or `list`.
    Builtin(NativeType),
    /// An explicit runtime descriptor.
    Descriptor(RuntimeTypeDescriptor),
}

impl From<NativeType> for RuntimeTypeAnnotation {
    fn from(native: NativeType) -> Self {
        Self::Builtin(native)
    }
}

impl From<RuntimeTypeDescriptor> for RuntimeTypeAnnotation {
    fn from(descriptor: RuntimeTypeDescriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}

/// A configuration type annotation as authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigTypeAnnotation {
    /// A bare native builtin, e.g. `int` or `list`.
    Builtin(NativeType),
    /// An explicit config descriptor.
    Descriptor(ConfigTypeDescriptor),
}

impl From<NativeType> for ConfigTypeAnnotation {
    fn from(native: NativeType) -> Self {
        Self::Builtin(native)
    }
}

impl From<ConfigTypeDescriptor> for ConfigTypeAnnotation {
    fn from(descriptor: ConfigTypeDescriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}

/// Resolve a runtime annotation.
///
/// Builtins inherit the remap precondition: an identity outside the
/// runtime table fails with a precondition violation naming `native`.
pub fn resolve_runtime_annotation(
    annotation: &RuntimeTypeAnnotation,
    resolver: &dyn ResolveRuntimeType,
) -> Result<RuntimeType, CheckError> {
    match annotation {
        RuntimeTypeAnnotation::Builtin(native) => remap_builtin_for_runtime(native, resolver),
        RuntimeTypeAnnotation::Descriptor(descriptor) => Ok(resolver.resolve(descriptor)),
    }
}

/// Resolve a configuration annotation.
///
/// Same contract as [`resolve_runtime_annotation`], against the config
/// table's narrower membership set.
pub fn resolve_config_annotation(
    annotation: &ConfigTypeAnnotation,
    resolver: &dyn ResolveConfigType,
) -> Result<ConfigType, CheckError> {
    match annotation {
        ConfigTypeAnnotation::Builtin(native) => remap_builtin_for_config(native, resolver),
        ConfigTypeAnnotation::Descriptor(descriptor) => Ok(resolver.resolve(descriptor)),
    }
}
