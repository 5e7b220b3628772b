use super::{Geography, Type, ValueEnum, ValueMultiArray, ValueRecord};

use bigdecimal::BigDecimal;
use rust_decimal::Decimal;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 32-bit floating point
    F32(f32),

    /// 64-bit floating point
    F64(f64),

    /// Fixed-scale decimal
    Decimal(Decimal),

    /// Arbitrary precision decimal
    BigDecimal(BigDecimal),

    /// String value
    String(String),

    /// A single character
    Char(char),

    /// Raw bytes
    Bytes(Vec<u8>),

    /// A UUID
    Uuid(uuid::Uuid),

    /// A civil date
    Date(jiff::civil::Date),

    /// A civil wall clock time
    Time(jiff::civil::Time),

    /// A civil date and time
    DateTime(jiff::civil::DateTime),

    /// An instant in time
    Timestamp(jiff::Timestamp),

    /// An instant in time with its offset
    Zoned(jiff::Zoned),

    /// A JSON document
    Json(serde_json::Value),

    /// A geography value
    Geography(Geography),

    /// Value of an enumerated type
    Enum(ValueEnum),

    /// A single-dimensional sequence of values of the same type
    List(Vec<Value>),

    /// A rectangular multi-dimensional array
    MultiArray(ValueMultiArray),

    /// Record value keyed by member name
    Record(ValueRecord),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&ValueRecord> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the value as an `i64` when it is any integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v),
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::U64(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    /// Infers the host type of the value.
    ///
    /// Lists infer their element type from the first non-null item; records
    /// and empty lists carry no descriptor, so they infer as `Unknown`.
    pub fn infer_ty(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::I8(_) => Type::I8,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::U8(_) => Type::U8,
            Self::U16(_) => Type::U16,
            Self::U32(_) => Type::U32,
            Self::U64(_) => Type::U64,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::Decimal(_) => Type::Decimal,
            Self::BigDecimal(_) => Type::BigDecimal,
            Self::String(_) => Type::String,
            Self::Char(_) => Type::Char,
            Self::Bytes(_) => Type::Bytes,
            Self::Uuid(_) => Type::Uuid,
            Self::Date(_) => Type::Date,
            Self::Time(_) => Type::Time,
            Self::DateTime(_) => Type::DateTime,
            Self::Timestamp(_) => Type::Timestamp,
            Self::Zoned(_) => Type::Zoned,
            Self::Json(_) => Type::Json,
            Self::Geography(_) => Type::Geography,
            Self::List(items) => match items.iter().find(|item| !item.is_null()) {
                Some(item) => Type::list(item.infer_ty()),
                None => Type::list(Type::Unknown),
            },
            Self::MultiArray(_) | Self::Enum(_) | Self::Record(_) | Self::Null => Type::Unknown,
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl AsRef<Self> for Value {
    fn as_ref(&self) -> &Self {
        self
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident,)*) => {
        $(
            impl From<$ty> for Value {
                fn from(src: $ty) -> Self {
                    Self::$variant(src)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Decimal => Decimal,
    BigDecimal => BigDecimal,
    String => String,
    char => Char,
    uuid::Uuid => Uuid,
    serde_json::Value => Json,
    Geography => Geography,
    ValueEnum => Enum,
    ValueMultiArray => MultiArray,
    ValueRecord => Record,
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<Vec<Value>> for Value {
    fn from(src: Vec<Value>) -> Self {
        Self::List(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}
