use super::Type;

/// An enumeration stored through its underlying integer type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeEnum {
    pub name: String,

    /// Integer type the discriminants are stored as
    pub underlying: Box<Type>,

    pub variants: Vec<EnumVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumVariant {
    pub name: String,
    pub discriminant: i64,
}

impl TypeEnum {
    pub fn new(name: impl Into<String>, underlying: Type) -> TypeEnum {
        TypeEnum {
            name: name.into(),
            underlying: Box::new(underlying),
            variants: vec![],
        }
    }

    pub fn variant(mut self, name: impl Into<String>, discriminant: i64) -> TypeEnum {
        self.variants.push(EnumVariant {
            name: name.into(),
            discriminant,
        });
        self
    }

    pub fn variant_by_discriminant(&self, discriminant: i64) -> Option<&EnumVariant> {
        self.variants
            .iter()
            .find(|variant| variant.discriminant == discriminant)
    }
}

impl From<TypeEnum> for Type {
    fn from(value: TypeEnum) -> Self {
        Self::Enum(value)
    }
}
