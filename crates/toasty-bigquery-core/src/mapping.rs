//! Pairings of host types with BigQuery store types.
//!
//! A [`TypeMapping`] is immutable once built. Scalar mappings are created
//! when the registry is constructed; composite mappings are built on demand
//! and cached by [`TypeMappingSource`](crate::TypeMappingSource).

mod array;
pub use array::ArrayTypeMapping;

mod comparer;
pub use comparer::ValueComparer;

mod converter;
pub use converter::ValueConverter;

mod facets;
pub use facets::Facets;

mod json;

mod kind;
pub use kind::MappingKind;

mod structure;
pub use structure::{FieldDescriptor, StructTypeMapping};

mod type_mapping;
pub use type_mapping::TypeMapping;
