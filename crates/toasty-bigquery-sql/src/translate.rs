//! Rewrites host-side operations into BigQuery expressions.
//!
//! Each translator recognizes one family of operations and returns `None`
//! for anything it does not handle. [`Translators`] tries them in order.

mod geography;
pub use geography::{GeographyOp, GeographyTranslator};

mod math;
pub use math::{MathOp, MathTranslator};

mod sequence;
pub use sequence::{SequenceOp, SequenceTranslator};

mod string;
pub use string::{StringOp, StringTranslator};

use crate::{Expr, SqlExprFactory};

/// A host-side member access or method call.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Geography(GeographyOp),
    Math(MathOp),
    Sequence(SequenceOp),
    String(StringOp),
}

pub trait Translate {
    /// Translates `op` applied to `receiver` with `args`.
    ///
    /// Returns `None` when the operation is not recognized or its arguments
    /// do not fit.
    fn translate(
        &self,
        op: &Operation,
        receiver: Option<&Expr>,
        args: &[Expr],
        factory: &SqlExprFactory<'_>,
    ) -> Option<Expr>;
}

/// An ordered set of translators.
pub struct Translators {
    units: Vec<Box<dyn Translate + Send + Sync>>,
}

impl Translators {
    pub fn new() -> Translators {
        Translators { units: vec![] }
    }

    /// All built-in BigQuery translators.
    pub fn bigquery() -> Translators {
        Translators::new()
            .with(SequenceTranslator)
            .with(MathTranslator)
            .with(GeographyTranslator)
            .with(StringTranslator)
    }

    pub fn with(mut self, unit: impl Translate + Send + Sync + 'static) -> Translators {
        self.units.push(Box::new(unit));
        self
    }

    pub fn translate(
        &self,
        op: &Operation,
        receiver: Option<&Expr>,
        args: &[Expr],
        factory: &SqlExprFactory<'_>,
    ) -> Option<Expr> {
        let translated = self
            .units
            .iter()
            .find_map(|unit| unit.translate(op, receiver, args, factory));

        if translated.is_none() {
            tracing::trace!(?op, "no BigQuery translation");
        }

        translated
    }
}

impl Default for Translators {
    fn default() -> Self {
        Translators::bigquery()
    }
}

impl std::fmt::Debug for Translators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translators")
            .field("units", &self.units.len())
            .finish()
    }
}

impl From<GeographyOp> for Operation {
    fn from(value: GeographyOp) -> Self {
        Operation::Geography(value)
    }
}

impl From<MathOp> for Operation {
    fn from(value: MathOp) -> Self {
        Operation::Math(value)
    }
}

impl From<SequenceOp> for Operation {
    fn from(value: SequenceOp) -> Self {
        Operation::Sequence(value)
    }
}

impl From<StringOp> for Operation {
    fn from(value: StringOp) -> Self {
        Operation::String(value)
    }
}
