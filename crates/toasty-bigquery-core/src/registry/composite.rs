use super::TypeMappingSource;
use crate::{
    mapping::{FieldDescriptor, TypeMapping},
    stmt::{ContainerShape, Type, TypeList, TypeRecord},
    store::{self, Composite, FieldToken},
};

impl TypeMappingSource {
    /// Builds struct and array mappings.
    ///
    /// Returns `None` when the shape is not composite, so the caller falls
    /// back to scalar resolution, and also when a composite shape cannot be
    /// mapped.
    pub(super) fn build_composite(
        &self,
        ty: Option<&Type>,
        store_type: Option<&str>,
    ) -> Option<TypeMapping> {
        match store_type {
            Some(store_type) => match store::parse(store_type) {
                Some(Composite::Struct(fields)) => self.build_struct(ty, store_type, &fields),
                Some(Composite::Array(element)) => self.build_array(ty, element),
                None => {
                    if store::is_composite(store_type) {
                        tracing::debug!(store_type, "malformed composite store type");
                    }
                    None
                }
            },
            None => match ty? {
                Type::Record(record) if record.composite => {
                    self.build_struct_from_record(ty?, record)
                }
                Type::List(list) if !ty?.is_byte_sequence() => {
                    let element = self.resolve(Some(&list.element), None)?;
                    self.array_of(element.as_ref().clone(), list.clone())
                }
                _ => None,
            },
        }
    }

    fn build_struct(
        &self,
        ty: Option<&Type>,
        store_type: &str,
        tokens: &[FieldToken<'_>],
    ) -> Option<TypeMapping> {
        let record = match ty {
            Some(Type::Record(record)) => Some(record),
            Some(ty) => {
                tracing::debug!(?ty, store_type, "struct store type for non-record host type");
                return None;
            }
            None => None,
        };

        let mut fields = Vec::with_capacity(tokens.len());

        for token in tokens {
            let member = record.and_then(|record| record.find_member(token.name));
            let member_ty = member.map(|member| &member.ty);

            let Some(mapping) = self.resolve(member_ty, Some(token.ty)) else {
                tracing::debug!(
                    store_type,
                    field = token.name,
                    field_type = token.ty,
                    "struct field has no mapping"
                );
                return None;
            };

            let field_ty = member_ty.unwrap_or(mapping.ty()).clone();
            let mut field = FieldDescriptor::new(token.name, mapping.as_ref().clone(), field_ty);

            if let Some(member) = member {
                if member.name != token.name {
                    field = field.with_member(&member.name);
                }
            }

            fields.push(field);
        }

        let ty = match ty {
            Some(ty) => ty.clone(),
            None => Type::record(anonymous_record(&fields)),
        };

        tracing::debug!(store_type, fields = fields.len(), "built struct mapping");
        Some(TypeMapping::structure(fields, Some(store_type.to_string()), ty))
    }

    fn build_struct_from_record(&self, ty: &Type, record: &TypeRecord) -> Option<TypeMapping> {
        let mut fields = vec![];

        for member in record.mapped_members() {
            match self.resolve_ty(&member.ty) {
                Some(mapping) => fields.push(FieldDescriptor::new(
                    &member.name,
                    mapping.as_ref().clone(),
                    member.ty.clone(),
                )),
                None => tracing::debug!(
                    record = %record.name,
                    member = %member.name,
                    "skipping unmapped member"
                ),
            }
        }

        if fields.is_empty() {
            tracing::debug!(record = %record.name, "composite record has no mapped members");
            return None;
        }

        let mapping = TypeMapping::structure(fields, None, ty.clone());
        tracing::debug!(
            record = %record.name,
            store_type = mapping.store_type(),
            "built struct mapping"
        );
        Some(mapping)
    }

    fn build_array(&self, ty: Option<&Type>, element_store_type: &str) -> Option<TypeMapping> {
        let list = match ty {
            Some(Type::List(list)) => Some(list),
            Some(ty) => {
                tracing::debug!(?ty, element_store_type, "array store type for non-list host type");
                return None;
            }
            None => None,
        };

        let element = self.resolve(
            list.map(|list| &*list.element),
            Some(element_store_type),
        )?;

        let list = match list {
            Some(list) => list.clone(),
            None => TypeList::new(element.ty().clone(), ContainerShape::List),
        };

        self.array_of(element.as_ref().clone(), list)
    }

    fn array_of(&self, element: TypeMapping, list: TypeList) -> Option<TypeMapping> {
        if element.is_array() {
            tracing::debug!(
                element = element.store_type(),
                "arrays of arrays are not supported"
            );
            return None;
        }

        if list.shape.is_multi_dimensional() {
            tracing::debug!(shape = ?list.shape, "multi-dimensional containers are not supported");
            return None;
        }

        let mapping = TypeMapping::array(element, &list, self.options.sequence_materialization);
        tracing::debug!(store_type = mapping.store_type(), "built array mapping");
        Some(mapping)
    }
}

/// Describes a struct resolved from its store type alone.
fn anonymous_record(fields: &[FieldDescriptor]) -> TypeRecord {
    fields
        .iter()
        .fold(TypeRecord::new("STRUCT").composite(), |record, field| {
            record.member(field.name(), field.ty().clone())
        })
}
