//! BigQuery Standard SQL expressions.
//!
//! [`SqlExprFactory`] builds typed expression trees, the translators in
//! [`translate`] rewrite host-side operations into BigQuery functions, and
//! [`Serializer`] turns a tree into SQL text plus bound parameters.

pub mod expr;
pub use expr::*;

mod factory;
pub use factory::SqlExprFactory;

pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

pub mod translate;
pub use translate::{Operation, Translate, Translators};
