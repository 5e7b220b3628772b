use crate::{stmt::ContainerShape, Result};

use serde::Deserialize;

/// Tunables for type mapping and SQL generation.
///
/// The defaults match BigQuery Standard SQL; [`Options::BIGQUERY`] is the
/// same value usable in `const` contexts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Concrete container used when a host type only declares an abstract
    /// sequence.
    pub sequence_materialization: ContainerShape,

    /// Prefix of named query parameters.
    pub parameter_prefix: String,

    /// When `true`, the SQL serializer renders constants as literals. When
    /// `false`, constants are bound as parameters.
    pub inline_constants: bool,

    /// Precision and scale bound with `NUMERIC` parameters whose mapping
    /// carries no facets.
    pub default_numeric_facets: (u32, u32),

    /// Precision and scale bound with `BIGNUMERIC` parameters whose mapping
    /// carries no facets.
    pub default_bignumeric_facets: (u32, u32),
}

impl Options {
    /// BigQuery defaults.
    pub const BIGQUERY: Options = Options {
        sequence_materialization: ContainerShape::List,
        parameter_prefix: String::new(),
        inline_constants: true,
        default_numeric_facets: (38, 9),
        default_bignumeric_facets: (76, 38),
    };

    /// Loads options from a JSON document. Missing keys keep their defaults.
    pub fn from_json(src: &str) -> Result<Options> {
        Ok(serde_json::from_str(src)?)
    }

    /// The parameter prefix, falling back to `@` when none is configured.
    pub fn parameter_prefix(&self) -> &str {
        if self.parameter_prefix.is_empty() {
            "@"
        } else {
            &self.parameter_prefix
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::BIGQUERY
    }
}
