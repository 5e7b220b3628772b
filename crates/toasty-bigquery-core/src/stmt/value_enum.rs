use super::Value;

/// A value of an enumerated type, identified by its discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueEnum {
    pub discriminant: i64,
}

impl ValueEnum {
    pub fn new(discriminant: i64) -> ValueEnum {
        ValueEnum { discriminant }
    }
}

impl Value {
    pub fn enum_variant(discriminant: i64) -> Value {
        Value::Enum(ValueEnum::new(discriminant))
    }
}
