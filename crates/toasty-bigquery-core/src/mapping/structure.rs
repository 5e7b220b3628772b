use super::TypeMapping;
use crate::stmt::{Type, TypeRecord, Value, ValueRecord};

/// The struct half of a `STRUCT<...>` mapping.
///
/// Field order is fixed at construction and is the order in which struct
/// literals list their values.
#[derive(Debug, Clone, PartialEq)]
pub struct StructTypeMapping {
    fields: Vec<FieldDescriptor>,
}

/// One field of a struct mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    name: String,
    mapping: TypeMapping,

    /// Declared host type of the backing member
    ty: Type,

    /// Backing member name, when it differs from the field name
    member: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, mapping: TypeMapping, ty: Type) -> FieldDescriptor {
        FieldDescriptor {
            name: name.into(),
            mapping,
            ty,
            member: None,
        }
    }

    /// Binds the field to a backing member with a different name.
    pub fn with_member(mut self, member: impl Into<String>) -> FieldDescriptor {
        self.member = Some(member.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mapping(&self) -> &TypeMapping {
        &self.mapping
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The backing member name, defaulting to the field name.
    pub fn member_name(&self) -> &str {
        self.member.as_deref().unwrap_or(&self.name)
    }
}

impl StructTypeMapping {
    pub(crate) fn new(fields: Vec<FieldDescriptor>) -> StructTypeMapping {
        StructTypeMapping { fields }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Finds a field by name, ignoring ASCII case.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .or_else(|| {
                self.fields
                    .iter()
                    .find(|field| field.name.eq_ignore_ascii_case(name))
            })
    }

    /// Returns each field's value from `record` in declared field order.
    ///
    /// Members are matched by backing member name ignoring ASCII case;
    /// missing members yield `None`.
    pub fn extract<'a>(&self, record: &'a ValueRecord) -> Vec<Option<&'a Value>> {
        self.fields
            .iter()
            .map(|field| record.get_ignore_case(field.member_name()))
            .collect()
    }

    /// Builds a host record from positional struct values.
    ///
    /// Fields whose backing member does not exist on `record`, or exists but
    /// is not writable, are skipped.
    pub fn to_record(&self, values: Vec<Value>, record: &TypeRecord) -> ValueRecord {
        let mut ret = ValueRecord::new();

        for (field, value) in self.fields.iter().zip(values) {
            match record.find_member(field.member_name()) {
                Some(member) if member.writable => {
                    ret.insert(member.name.clone(), value);
                }
                Some(member) => {
                    tracing::debug!(
                        record = %record.name,
                        member = %member.name,
                        "skipping struct field; backing member is not writable"
                    );
                }
                None => {
                    tracing::debug!(
                        record = %record.name,
                        field = %field.name,
                        "skipping struct field; no backing member"
                    );
                }
            }
        }

        ret
    }
}
