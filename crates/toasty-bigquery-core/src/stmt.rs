//! Host-side type descriptions and values.
//!
//! [`Type`] describes the static shape of a host value (scalar, record or
//! container) and [`Value`] carries the value itself. Records are described
//! by explicit [`TypeRecord`] descriptors built once per shape, so mapping
//! resolution never has to discover members dynamically.

mod container;
pub use container::ContainerShape;

mod geography;
pub use geography::Geography;

mod ty;
pub use ty::Type;

mod ty_enum;
pub use ty_enum::{EnumVariant, TypeEnum};

mod ty_list;
pub use ty_list::TypeList;

mod ty_record;
pub use ty_record::{RecordMember, TypeRecord};

mod value;
pub use value::Value;

mod value_enum;
pub use value_enum::ValueEnum;

mod value_jiff;

mod value_multi_array;
pub use value_multi_array::ValueMultiArray;

mod value_record;
pub use value_record::ValueRecord;
