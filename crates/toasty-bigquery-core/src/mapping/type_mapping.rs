use super::{
    ArrayTypeMapping, Facets, FieldDescriptor, MappingKind, StructTypeMapping, ValueComparer,
    ValueConverter,
};
use crate::{
    stmt::{ContainerShape, Type, TypeList, Value},
    store, Result,
};

/// The pairing of one BigQuery store type with one host type.
///
/// # Store type and host type
///
/// ```text
/// store_type: "NUMERIC(10, 2)"     ty: Type::Decimal
/// store_type: "INT64"              ty: Type::I32      (widened when bound)
/// store_type: "ARRAY<STRING>"      ty: Type::list(Type::String)
/// ```
///
/// # Strategies
///
/// The [`MappingKind`] decides how literals are rendered (see
/// [`literal`](crate::literal)) and how parameters are tagged (see
/// [`param`](crate::param)). An optional [`ValueConverter`] transforms host
/// values into the representation BigQuery stores before either happens.
///
/// Mappings are never mutated. [`TypeMapping::with_facets`] and
/// [`TypeMapping::with_ty`] return siblings.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeMapping {
    store_type: String,
    ty: Type,
    kind: MappingKind,
    facets: Facets,
    converter: Option<ValueConverter>,
    comparer: ValueComparer,
}

impl TypeMapping {
    /// Creates a scalar mapping.
    pub fn scalar(store_type: impl Into<String>, ty: Type, kind: MappingKind) -> TypeMapping {
        debug_assert!(!kind.is_composite());
        let comparer = ValueComparer::for_ty(&ty);

        TypeMapping {
            store_type: store_type.into(),
            ty,
            kind,
            facets: Facets::default(),
            converter: None,
            comparer,
        }
    }

    /// Creates an array mapping owning `element`.
    ///
    /// `convention` is the concrete container used when `list` declares an
    /// abstract sequence.
    pub fn array(element: TypeMapping, list: &TypeList, convention: ContainerShape) -> TypeMapping {
        let materialized = list.shape.materialize(convention);
        let store_type = store::array_of(element.store_type());
        let comparer = ValueComparer::Sequence(Box::new(element.comparer.clone()));
        let converter = if list.shape.is_concrete() {
            None
        } else {
            Some(ValueConverter::Materialize {
                from: list.shape,
                to: materialized,
            })
        };

        TypeMapping {
            store_type,
            ty: Type::List(list.clone()),
            kind: MappingKind::Array(ArrayTypeMapping::new(element, list.shape, materialized)),
            facets: Facets::default(),
            converter,
            comparer,
        }
    }

    /// Creates a struct mapping from ordered fields.
    ///
    /// When `store_type` is `None` it is synthesized from the field names and
    /// field store types in order.
    pub fn structure(
        fields: Vec<FieldDescriptor>,
        store_type: Option<String>,
        ty: Type,
    ) -> TypeMapping {
        let store_type = store_type.unwrap_or_else(|| {
            store::struct_of(
                fields
                    .iter()
                    .map(|field| (field.name(), field.mapping().store_type())),
            )
        });

        let comparer = ValueComparer::Record(
            fields
                .iter()
                .map(|field| (field.member_name().to_string(), field.mapping().comparer.clone()))
                .collect(),
        );

        TypeMapping {
            store_type,
            ty,
            kind: MappingKind::Struct(StructTypeMapping::new(fields)),
            facets: Facets::default(),
            converter: None,
            comparer,
        }
    }

    /// The full store type, including facets.
    pub fn store_type(&self) -> &str {
        &self.store_type
    }

    /// The store type without a facet suffix.
    pub fn base_store_type(&self) -> &str {
        store::base_name(&self.store_type)
    }

    /// The store type as written inside literal constructors, where BigQuery
    /// does not accept parameterized types.
    pub fn literal_store_type(&self) -> String {
        store::strip_facets(&self.store_type)
    }

    /// The host type.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn kind(&self) -> &MappingKind {
        &self.kind
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn converter(&self) -> Option<&ValueConverter> {
        self.converter.as_ref()
    }

    pub fn comparer(&self) -> &ValueComparer {
        &self.comparer
    }

    pub fn as_array(&self) -> Option<&ArrayTypeMapping> {
        match &self.kind {
            MappingKind::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructTypeMapping> {
        match &self.kind {
            MappingKind::Struct(structure) => Some(structure),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind, MappingKind::Array(_))
    }

    pub fn is_struct(&self) -> bool {
        matches!(self.kind, MappingKind::Struct(_))
    }

    /// Returns `true` if the store type is `BIGNUMERIC` (or its `BIGDECIMAL`
    /// alias).
    pub fn is_big_numeric(&self) -> bool {
        self.store_type
            .get(..3)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("BIG"))
    }

    /// Returns a sibling mapping with different facets.
    ///
    /// Strategies, converter and comparer are shared with `self`; the store
    /// type name is re-synthesized from the base name for scalar kinds.
    pub fn with_facets(&self, facets: Facets) -> TypeMapping {
        let store_type = if self.kind.is_composite() {
            self.store_type.clone()
        } else if self.kind.is_sized() {
            store::with_facets(self.base_store_type(), facets.size, None)
        } else if matches!(self.kind, MappingKind::Decimal) {
            store::with_facets(self.base_store_type(), facets.precision, facets.scale)
        } else {
            self.base_store_type().to_string()
        };

        TypeMapping {
            store_type,
            facets,
            ..self.clone()
        }
    }

    /// Returns a sibling mapping with facets parsed from `store_type`.
    pub(crate) fn with_store_facets(&self, store_type: &str) -> TypeMapping {
        match store::facets(store_type) {
            Some((size, _)) if self.kind.is_sized() => self.with_facets(Facets {
                size: Some(size),
                ..self.facets
            }),
            Some((precision, scale)) => self.with_facets(Facets {
                precision: Some(precision),
                scale,
                ..self.facets
            }),
            None => self.clone(),
        }
    }

    /// Returns a sibling mapping for a different host type that shares the
    /// same store type, such as `I32` stored as `INT64`.
    pub fn with_ty(&self, ty: Type) -> TypeMapping {
        TypeMapping {
            comparer: ValueComparer::for_ty(&ty),
            ty,
            ..self.clone()
        }
    }

    /// Returns a sibling mapping that runs values through `converter`.
    pub fn with_converter(&self, converter: ValueConverter) -> TypeMapping {
        TypeMapping {
            converter: Some(converter),
            ..self.clone()
        }
    }

    /// Converts a host value into the representation BigQuery stores.
    pub fn to_provider(&self, value: Value) -> Result<Value> {
        match &self.converter {
            Some(converter) if !value.is_null() => converter.to_provider(value),
            _ => Ok(value),
        }
    }

    /// Converts a stored value back into the host representation.
    pub fn from_provider(&self, value: Value) -> Result<Value> {
        match &self.converter {
            Some(converter) if !value.is_null() => converter.from_provider(value, &self.ty),
            _ => Ok(value),
        }
    }
}
