//! Builtin-type remap layer.
//!
//! Pipeline authors may annotate values and config fields with plain
//! native builtins (`int`, `list`, ...). This module is the single
//! semantic authority for translating those identities into type
//! descriptors: one table for the runtime type system, one for the
//! configuration type system.
//!
//! The tables are asymmetric on purpose. Configuration documents are
//! YAML/JSON-shaped — ordered lists and scalars, with no native notion of
//! tuple, set, or arbitrary mapping — while runtime values are arbitrary
//! in-memory data, so every native container kind is present there. The
//! runtime table's key set is a strict superset of the config table's,
//! and the two membership predicates are not interchangeable.
//!
//! Each table is maintained by hand. Neither is derived from the other:
//! the divergence is intentional, and a future identity may legitimately
//! land in only one of them.
//!
//! Both tables are built once at first use and never mutated afterward;
//! concurrent readers need no synchronization.

use crate::descriptor::RuntimeTypeDescriptor;
use crate::native::NativeType;
use crate::resolve::{ResolveRuntimeType, RuntimeType};
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;
use weft_check::CheckError;
use weft_config::{ConfigType, ConfigTypeDescriptor, ResolveConfigType};

/// Native identities remappable into the runtime type system.
static SUPPORTED_RUNTIME_BUILTINS: LazyLock<BTreeMap<NativeType, RuntimeTypeDescriptor>> =
    LazyLock::new(|| {
        BTreeMap::from([
            (NativeType::Int, RuntimeTypeDescriptor::Int),
            (NativeType::Float, RuntimeTypeDescriptor::Float),
            (NativeType::Bool, RuntimeTypeDescriptor::Bool),
            (NativeType::Str, RuntimeTypeDescriptor::String),
            // An unannotated list defaults to maximally permissive elements.
            (NativeType::List, RuntimeTypeDescriptor::list_of_any()),
            (NativeType::Tuple, RuntimeTypeDescriptor::Tuple),
            (NativeType::Set, RuntimeTypeDescriptor::Set),
            (NativeType::Mapping, RuntimeTypeDescriptor::Mapping),
        ])
    });

/// Native identities remappable into the configuration type system.
static SUPPORTED_CONFIG_BUILTINS: LazyLock<BTreeMap<NativeType, ConfigTypeDescriptor>> =
    LazyLock::new(|| {
        BTreeMap::from([
            (NativeType::Int, ConfigTypeDescriptor::Int),
            (NativeType::Float, ConfigTypeDescriptor::Float),
            (NativeType::Bool, ConfigTypeDescriptor::Bool),
            (NativeType::Str, ConfigTypeDescriptor::String),
            (NativeType::List, ConfigTypeDescriptor::array_of_any()),
        ])
    });

/// The stored runtime descriptor for `native`, if the runtime table has
/// one.
pub fn runtime_builtin_descriptor(native: &NativeType) -> Option<&'static RuntimeTypeDescriptor> {
    SUPPORTED_RUNTIME_BUILTINS.get(native)
}

/// The stored config descriptor for `native`, if the config table has one.
pub fn config_builtin_descriptor(native: &NativeType) -> Option<&'static ConfigTypeDescriptor> {
    SUPPORTED_CONFIG_BUILTINS.get(native)
}

/// True iff `native` can stand in for a runtime type.
pub fn is_supported_runtime_builtin(native: &NativeType) -> bool {
    SUPPORTED_RUNTIME_BUILTINS.contains_key(native)
}

/// True iff `native` can stand in for a configuration type.
pub fn is_supported_config_builtin(native: &NativeType) -> bool {
    SUPPORTED_CONFIG_BUILTINS.contains_key(native)
}

/// Remap a native builtin into a resolved runtime type.
///
/// Callers are expected to have consulted [`is_supported_runtime_builtin`]
/// first. An unsupported identity is a bug in the calling code: the remap
/// fails with a precondition violation naming `native`, before any
/// resolver call is made.
pub fn remap_builtin_for_runtime(
    native: &NativeType,
    resolver: &dyn ResolveRuntimeType,
) -> Result<RuntimeType, CheckError> {
    match runtime_builtin_descriptor(native) {
        Some(descriptor) => Ok(resolver.resolve(descriptor)),
        None => Err(CheckError::param_invariant(
            "native",
            format!("{native} is not a supported runtime builtin"),
        )),
    }
}

/// Remap a native builtin into a resolved configuration type.
///
/// Same precondition discipline as [`remap_builtin_for_runtime`], scoped
/// to the config table's narrower membership set.
pub fn remap_builtin_for_config(
    native: &NativeType,
    resolver: &dyn ResolveConfigType,
) -> Result<ConfigType, CheckError> {
    match config_builtin_descriptor(native) {
        Some(descriptor) => Ok(resolver.resolve(descriptor)),
        None => Err(CheckError::param_invariant(
            "native",
            format!("{native} is not a supported config builtin"),
        )),
    }
}

/// One row of the remap surface, for registry artifacts.
///
/// A row exists for every identity at least one table supports; the
/// per-system descriptor is absent where that system does not remap the
/// identity.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuiltinMappingRow {
    pub native: NativeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_descriptor: Option<RuntimeTypeDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_descriptor: Option<ConfigTypeDescriptor>,
}

/// The remap surface as rows, ordered by native identity.
pub fn builtin_mapping_rows() -> Vec<BuiltinMappingRow> {
    let natives: BTreeSet<&NativeType> = SUPPORTED_RUNTIME_BUILTINS
        .keys()
        .chain(SUPPORTED_CONFIG_BUILTINS.keys())
        .collect();
    natives
        .into_iter()
        .map(|native| BuiltinMappingRow {
            native: native.clone(),
            runtime_descriptor: runtime_builtin_descriptor(native).cloned(),
            config_descriptor: config_builtin_descriptor(native).cloned(),
        })
        .collect()
}

/// The remap surface as a registry artifact.
pub fn builtin_registry_json() -> Value {
    json!({
        "schema": 1,
        "registryKind": "weft.builtin_remap.v1",
        "mappings": builtin_mapping_rows(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{RuntimeTypeKind, RuntimeTypeResolver};
    use weft_config::{ConfigTypeKind, ConfigTypeResolver};

    #[test]
    fn runtime_table_membership() {
        for native in [
            NativeType::Int,
            NativeType::Float,
            NativeType::Bool,
            NativeType::Str,
            NativeType::List,
            NativeType::Tuple,
            NativeType::Set,
            NativeType::Mapping,
        ] {
            assert!(is_supported_runtime_builtin(&native), "{native}");
        }
        for native in [
            NativeType::Bytes,
            NativeType::Decimal,
            NativeType::Unit,
            NativeType::custom("Widget"),
        ] {
            assert!(!is_supported_runtime_builtin(&native), "{native}");
        }
    }

    #[test]
    fn config_table_membership() {
        for native in [
            NativeType::Int,
            NativeType::Float,
            NativeType::Bool,
            NativeType::Str,
            NativeType::List,
        ] {
            assert!(is_supported_config_builtin(&native), "{native}");
        }
        for native in [
            NativeType::Tuple,
            NativeType::Set,
            NativeType::Mapping,
            NativeType::Bytes,
            NativeType::Decimal,
            NativeType::Unit,
            NativeType::custom("Widget"),
        ] {
            assert!(!is_supported_config_builtin(&native), "{native}");
        }
    }

    #[test]
    fn config_keys_are_a_subset_of_runtime_keys() {
        for native in SUPPORTED_CONFIG_BUILTINS.keys() {
            assert!(
                is_supported_runtime_builtin(native),
                "{native} is config-remappable but not runtime-remappable"
            );
        }
    }

    #[test]
    fn runtime_list_remaps_to_list_of_any() {
        let resolved = remap_builtin_for_runtime(&NativeType::List, &RuntimeTypeResolver).unwrap();
        assert_eq!(resolved.kind(), RuntimeTypeKind::List);
        assert!(resolved.element().unwrap().is_any());
    }

    #[test]
    fn config_list_remaps_to_array_of_any() {
        let resolved = remap_builtin_for_config(&NativeType::List, &ConfigTypeResolver).unwrap();
        assert_eq!(resolved.kind(), ConfigTypeKind::Array);
        assert!(resolved.element().unwrap().is_any());
    }

    #[test]
    fn unsupported_identity_fails_without_touching_the_resolver() {
        struct UnreachableResolver;

        impl ResolveRuntimeType for UnreachableResolver {
            fn resolve(&self, _descriptor: &RuntimeTypeDescriptor) -> RuntimeType {
                panic!("resolver must not be called for an unsupported builtin")
            }
        }

        impl ResolveConfigType for UnreachableResolver {
            fn resolve(&self, _descriptor: &ConfigTypeDescriptor) -> ConfigType {
                panic!("resolver must not be called for an unsupported builtin")
            }
        }

        let err =
            remap_builtin_for_runtime(&NativeType::custom("Widget"), &UnreachableResolver)
                .unwrap_err();
        assert_eq!(err.param(), Some("native"));

        let err = remap_builtin_for_config(&NativeType::Set, &UnreachableResolver).unwrap_err();
        assert_eq!(err.param(), Some("native"));
    }

    #[test]
    fn mapping_rows_cover_the_union_in_order() {
        let rows = builtin_mapping_rows();
        assert_eq!(rows.len(), SUPPORTED_RUNTIME_BUILTINS.len());
        for row in &rows {
            assert!(row.runtime_descriptor.is_some(), "{}", row.native);
        }
        let config_rows = rows
            .iter()
            .filter(|row| row.config_descriptor.is_some())
            .count();
        assert_eq!(config_rows, SUPPORTED_CONFIG_BUILTINS.len());
    }

    #[test]
    fn registry_artifact_shape() {
        let artifact = builtin_registry_json();
        assert_eq!(artifact["schema"], 1);
        assert_eq!(artifact["registryKind"], "weft.builtin_remap.v1");
        assert_eq!(
            artifact["mappings"].as_array().unwrap().len(),
            builtin_mapping_rows().len()
        );
    }
}
