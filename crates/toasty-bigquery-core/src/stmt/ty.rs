use super::{ContainerShape, TypeEnum, TypeList, TypeRecord};

use std::sync::Arc;

/// A host type.
///
/// `Type` is the calling side's view of a value. The registry pairs each
/// host type with a BigQuery store type; see
/// [`TypeMappingSource`](crate::TypeMappingSource).
///
/// ```text
/// Type::I64                       ->  INT64
/// Type::String                    ->  STRING
/// Type::list(Type::I32)           ->  ARRAY<INT64>
/// Type::Record(address)           ->  STRUCT<City STRING, Zip STRING>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit floating point
    F32,

    /// 64-bit floating point
    F64,

    /// Fixed-scale decimal (`rust_decimal::Decimal`)
    Decimal,

    /// Arbitrary precision decimal (`bigdecimal::BigDecimal`)
    BigDecimal,

    /// String type
    String,

    /// A single character
    Char,

    /// A byte sequence
    Bytes,

    /// 128-bit universally unique identifier
    Uuid,

    /// A civil date
    Date,

    /// A civil wall clock time
    Time,

    /// A civil date and time without an offset
    DateTime,

    /// An instant in time
    Timestamp,

    /// An instant in time carrying its offset
    Zoned,

    /// A semi-structured JSON document
    Json,

    /// A geography value
    Geography,

    /// A value of `T` that may be absent
    Option(Box<Type>),

    /// An enumeration stored as its underlying integer
    Enum(TypeEnum),

    /// A sequence container
    List(TypeList),

    /// A record with named members
    Record(Arc<TypeRecord>),

    /// A type that could not be inferred (e.g., empty list)
    Unknown,
}

impl Type {
    /// An ordered list of `ty`
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(TypeList::new(ty.into(), ContainerShape::List))
    }

    /// A fixed-length array of `ty`
    pub fn array(ty: impl Into<Self>) -> Self {
        Self::List(TypeList::new(ty.into(), ContainerShape::Array))
    }

    /// An abstract sequence of `ty`
    pub fn sequence(ty: impl Into<Self>) -> Self {
        Self::List(TypeList::new(ty.into(), ContainerShape::Sequence))
    }

    pub fn option(ty: impl Into<Self>) -> Self {
        Self::Option(Box::new(ty.into()))
    }

    pub fn record(record: TypeRecord) -> Self {
        Self::Record(Arc::new(record))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Integers narrower than the dialect's native 64-bit width.
    pub fn is_narrow_integer(&self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::U8 | Self::U16 | Self::U32
        )
    }

    pub fn is_integer(&self) -> bool {
        self.is_narrow_integer() || matches!(self, Self::I64 | Self::U64)
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    pub fn is_decimal(&self) -> bool {
        matches!(self, Self::Decimal | Self::BigDecimal)
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float() || self.is_decimal()
    }

    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::Date | Self::Time | Self::DateTime | Self::Timestamp | Self::Zoned
        )
    }

    /// A `u8` array is a byte sequence, not an array of integers.
    pub fn is_byte_sequence(&self) -> bool {
        match self {
            Self::Bytes => true,
            Self::List(list) => {
                list.shape == ContainerShape::Array && *list.element == Self::U8
            }
            _ => false,
        }
    }

    /// Strips any number of `Option` wrappers.
    pub fn unwrap_option(&self) -> &Type {
        match self {
            Self::Option(inner) => inner.unwrap_option(),
            ty => ty,
        }
    }

    pub fn as_list(&self) -> Option<&TypeList> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&TypeRecord> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl From<&Self> for Type {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl From<TypeRecord> for Type {
    fn from(value: TypeRecord) -> Self {
        Self::record(value)
    }
}
