use super::{ArrayTypeMapping, StructTypeMapping};

/// Selects how a mapping renders literals and configures parameters.
///
/// The set is closed: every store type BigQuery exposes has exactly one
/// kind, and composite kinds own their nested mappings.
#[derive(Debug, Clone, PartialEq)]
pub enum MappingKind {
    Bool,
    Int64,
    Float64,

    /// `NUMERIC` or `BIGNUMERIC`; the store type name decides which
    Decimal,

    String,
    Bytes,
    Date,
    Time,
    DateTime,
    Timestamp,
    Json,
    Geography,
    Array(ArrayTypeMapping),
    Struct(StructTypeMapping),
}

impl MappingKind {
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Struct(_))
    }

    /// Kinds whose store type accepts a `(L)` length facet.
    pub fn is_sized(&self) -> bool {
        matches!(self, Self::String | Self::Bytes)
    }
}
