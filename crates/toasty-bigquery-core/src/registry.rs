mod builtin;
mod composite;

use crate::{
    mapping::{Facets, TypeMapping, ValueConverter},
    stmt::{Type, Value},
    store, Options,
};

use dashmap::DashMap;
use indexmap::IndexMap;
use std::sync::{Arc, OnceLock};

/// Resolves [`TypeMapping`]s for host types and BigQuery store types.
///
/// Scalar mappings live in two read-only tables populated at construction:
/// one keyed by store type name (case-insensitive, aliases included) and one
/// keyed by host type. Composite and facet-specific mappings are built on
/// first use and cached for the lifetime of the source.
///
/// # Resolution order
///
/// 1. `STRUCT<...>` store types, or declared composite records without a
///    store type, resolve to a struct mapping.
/// 2. `ARRAY<...>` store types, or host sequences that are not byte
///    sequences, resolve to an array mapping.
/// 3. The store type and host type tables, including the base name of a
///    parameterized store type such as `NUMERIC(10, 2)`.
/// 4. Enums resolve through their underlying integer mapping.
///
/// `TypeMappingSource` is `Send + Sync`. Concurrent resolutions of the same
/// shape construct it once and observe the same `Arc`.
#[derive(Debug)]
pub struct TypeMappingSource {
    options: Options,

    /// Upper-cased store type name to mapping
    store_types: IndexMap<String, TypeMapping>,

    /// Host type to its default mapping
    host_types: IndexMap<Type, TypeMapping>,

    cache: DashMap<MappingKey, Arc<OnceLock<Option<Arc<TypeMapping>>>>>,

    builtins: builtin::Builtins,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MappingKey {
    ty: Option<Type>,
    store_type: Option<String>,
}

impl TypeMappingSource {
    pub fn new(options: Options) -> TypeMappingSource {
        let mut source = TypeMappingSource {
            options,
            store_types: IndexMap::new(),
            host_types: IndexMap::new(),
            cache: DashMap::new(),
            builtins: builtin::Builtins::new(),
        };

        builtin::register(&mut source);
        source
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Resolves the mapping for a host type and/or a store type.
    ///
    /// Returns `None` when no mapping exists, including when a composite store
    /// type is malformed.
    pub fn resolve(&self, ty: Option<&Type>, store_type: Option<&str>) -> Option<Arc<TypeMapping>> {
        let store_type = store_type.map(str::trim).filter(|s| !s.is_empty());

        let key = MappingKey {
            ty: ty.cloned(),
            store_type: store_type.map(str::to_string),
        };

        // The shard lock is released before building, since building recurses
        // into `resolve` for nested shapes.
        let cell = self.cache.entry(key).or_default().clone();
        cell.get_or_init(|| self.build(ty, store_type)).clone()
    }

    /// Resolves the default mapping of a host type.
    pub fn resolve_ty(&self, ty: &Type) -> Option<Arc<TypeMapping>> {
        self.resolve(Some(ty), None)
    }

    /// Resolves the mapping of a store type name.
    pub fn resolve_store_type(&self, store_type: &str) -> Option<Arc<TypeMapping>> {
        self.resolve(None, Some(store_type))
    }

    /// Resolves a mapping for an untyped value by inferring its host type.
    pub fn resolve_value(&self, value: &Value) -> Option<Arc<TypeMapping>> {
        match value.infer_ty() {
            Type::Unknown => None,
            ty => self.resolve_ty(&ty),
        }
    }

    pub fn bool_mapping(&self) -> Arc<TypeMapping> {
        self.builtins.bool.clone()
    }

    pub fn int64_mapping(&self) -> Arc<TypeMapping> {
        self.builtins.int64.clone()
    }

    pub fn float64_mapping(&self) -> Arc<TypeMapping> {
        self.builtins.float64.clone()
    }

    pub fn string_mapping(&self) -> Arc<TypeMapping> {
        self.builtins.string.clone()
    }

    pub fn date_mapping(&self) -> Arc<TypeMapping> {
        self.builtins.date.clone()
    }

    pub fn time_mapping(&self) -> Arc<TypeMapping> {
        self.builtins.time.clone()
    }

    pub fn datetime_mapping(&self) -> Arc<TypeMapping> {
        self.builtins.datetime.clone()
    }

    pub fn geography_mapping(&self) -> Arc<TypeMapping> {
        self.builtins.geography.clone()
    }

    /// Number of resolved shapes currently cached.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    fn build(&self, ty: Option<&Type>, store_type: Option<&str>) -> Option<Arc<TypeMapping>> {
        if let Some(Type::Option(inner)) = ty {
            let mapping = self.resolve(Some(inner), store_type)?;
            let facets = Facets {
                nullable: true,
                ..*mapping.facets()
            };
            return Some(Arc::new(mapping.with_facets(facets)));
        }

        self.build_composite(ty, store_type)
            .or_else(|| self.build_scalar(ty, store_type))
            .map(Arc::new)
    }

    fn build_scalar(&self, ty: Option<&Type>, store_type: Option<&str>) -> Option<TypeMapping> {
        match (ty, store_type) {
            (Some(ty), Some(store_type)) => {
                let by_store = self.find_store_type(store_type)?;

                if by_store.ty() == ty {
                    return Some(by_store);
                }

                if let Type::Enum(_) = ty {
                    return self.build_enum(ty, Some(store_type));
                }

                if matches!(by_store.kind(), crate::mapping::MappingKind::Json)
                    && (ty.is_record() || ty.is_list())
                {
                    return Some(by_store.with_ty(ty.clone()).with_converter(ValueConverter::ToJson));
                }

                // Host types sharing the store type, such as `I32` as `INT64`
                let by_ty = self.host_types.get(ty)?;
                if by_ty
                    .base_store_type()
                    .eq_ignore_ascii_case(by_store.base_store_type())
                {
                    return Some(by_ty.with_store_facets(store_type));
                }

                tracing::debug!(?ty, store_type, "host type is not storable as store type");
                None
            }
            (Some(ty), None) => match self.host_types.get(ty) {
                Some(mapping) => Some(mapping.clone()),
                None => self.build_enum(ty, None),
            },
            (None, Some(store_type)) => self.find_store_type(store_type),
            (None, None) => None,
        }
    }

    fn build_enum(&self, ty: &Type, store_type: Option<&str>) -> Option<TypeMapping> {
        let Type::Enum(ty_enum) = ty else {
            return None;
        };

        let underlying = self.resolve(Some(&ty_enum.underlying), store_type)?;

        if !underlying.ty().is_integer() {
            return None;
        }

        Some(
            underlying
                .with_ty(ty.clone())
                .with_converter(ValueConverter::EnumToNumber),
        )
    }

    /// Looks up a store type by exact name, then by base name with the
    /// facets of `store_type` applied.
    fn find_store_type(&self, store_type: &str) -> Option<TypeMapping> {
        if let Some(mapping) = self.store_types.get(&store_type.to_ascii_uppercase()) {
            return Some(mapping.clone());
        }

        let base = store::base_name(store_type);
        if base.len() == store_type.len() {
            return None;
        }

        self.store_types
            .get(&base.to_ascii_uppercase())
            .map(|mapping| mapping.with_store_facets(store_type))
    }

    fn add_store_type(&mut self, names: &[&str], mapping: &TypeMapping) {
        for name in names {
            self.store_types
                .insert(name.to_ascii_uppercase(), mapping.clone());
        }
    }

    fn add_host_type(&mut self, mapping: TypeMapping) {
        self.host_types.insert(mapping.ty().clone(), mapping);
    }
}

impl Default for TypeMappingSource {
    fn default() -> Self {
        TypeMappingSource::new(Options::default())
    }
}
