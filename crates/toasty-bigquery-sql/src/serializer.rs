#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Period};

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;

use crate::Expr;

use std::collections::HashSet;
use toasty_bigquery_core::{Error, Options, Result, TypeMappingSource};

/// Serialize an expression to BigQuery Standard SQL text
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Resolves mappings for constants that have none, and supplies the
    /// parameter prefix and constant inlining options.
    source: &'a TypeMappingSource,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// Names of the expression's own parameters. Constants bound without a
    /// name never take one of these.
    reserved: HashSet<String>,

    /// First error raised by a fragment. Later fragments still write, but
    /// the output is discarded.
    error: Option<Error>,
}

impl<'a> Serializer<'a> {
    pub fn new(source: &'a TypeMappingSource) -> Serializer<'a> {
        Serializer { source }
    }

    /// Serializes `expr`, pushing bound parameters into `params`.
    pub fn serialize(&self, expr: &Expr, params: &mut impl Params) -> Result<String> {
        let mut ret = String::new();

        let mut reserved = HashSet::new();
        expr.visit(&mut |e| {
            if let Expr::Parameter(e) = e {
                reserved.insert(e.name.clone());
            }
        });

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            reserved,
            error: None,
        };

        expr.to_sql(&mut fmt);

        match fmt.error {
            Some(err) => Err(err),
            None => Ok(ret),
        }
    }

    fn options(&self) -> &Options {
        self.source.options()
    }
}

impl<T: Params> Formatter<'_, T> {
    /// The first `p{n}` name that is neither reserved nor already bound.
    fn unused_param_name(&self) -> String {
        let mut n = 0;
        loop {
            let name = format!("p{n}");
            if !self.reserved.contains(&name) && !self.params.contains(&name) {
                return name;
            }
            n += 1;
        }
    }
}

impl<T> Formatter<'_, T> {
    fn fail(&mut self, err: Error) {
        if self.error.is_none() {
            tracing::debug!(%err, "expression failed to serialize");
            self.error = Some(err);
        }
    }
}
