use super::{Operation, Translate};
use crate::{BinaryOp, Expr, SqlExprFactory};

use std::sync::Arc;
use toasty_bigquery_core::{mapping::MappingKind, TypeMapping, TypeMappingSource};

/// Members and methods of geography values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeographyOp {
    // Members
    Area,
    Length,
    Perimeter,
    X,
    Y,
    Z,
    M,
    IsEmpty,
    /// Ring count of a polygon, as `ST_NUMGEOMETRIES(ST_BOUNDARY(x))`.
    /// Polygon receivers only: a linestring yields its two endpoints.
    NumRings,
    NumPoints,
    Dimension,
    IsClosed,
    Boundary,
    Centroid,
    ConvexHull,
    StartPoint,
    EndPoint,
    GeometryType,
    AsText,

    // Methods
    Contains,
    CoveredBy,
    Covers,
    Intersects,
    Touches,
    Within,
    Disjoint,
    EqualsTopologically,
    Overlaps,
    Buffer,
    Union,
    Difference,
    Intersection,
    Distance,
    IsWithinDistance,

    /// Zero-based point access
    PointN,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GeographyTranslator;

/// Result of a geography function.
#[derive(Clone, Copy)]
enum Returns {
    Bool,
    Float64,
    Int64,
    Geography,
    String,
}

impl Returns {
    fn mapping(self, source: &TypeMappingSource) -> Arc<TypeMapping> {
        match self {
            Returns::Bool => source.bool_mapping(),
            Returns::Float64 => source.float64_mapping(),
            Returns::Int64 => source.int64_mapping(),
            Returns::Geography => source.geography_mapping(),
            Returns::String => source.string_mapping(),
        }
    }
}

impl Translate for GeographyTranslator {
    fn translate(
        &self,
        op: &Operation,
        receiver: Option<&Expr>,
        args: &[Expr],
        factory: &SqlExprFactory<'_>,
    ) -> Option<Expr> {
        let Operation::Geography(op) = op else {
            return None;
        };

        let receiver = receiver?;
        if !matches!(receiver.mapping()?.kind(), MappingKind::Geography) {
            return None;
        }

        let call = |name: &str, extra: &[Expr], returns: Returns| {
            let args = std::iter::once(receiver).chain(extra).cloned().collect();
            factory.function(name, args, returns.mapping(factory.source()))
        };

        use GeographyOp::*;

        Some(match (op, args) {
            (Area, []) => call("ST_AREA", args, Returns::Float64),
            (Length, []) => call("ST_LENGTH", args, Returns::Float64),
            (Perimeter, []) => call("ST_PERIMETER", args, Returns::Float64),
            (X, []) => call("ST_X", args, Returns::Float64),
            (Y, []) => call("ST_Y", args, Returns::Float64),
            (IsEmpty, []) => call("ST_ISEMPTY", args, Returns::Bool),
            (IsClosed, []) => call("ST_ISCLOSED", args, Returns::Bool),
            (NumPoints, []) => call("ST_NUMPOINTS", args, Returns::Int64),
            (Dimension, []) => call("ST_DIMENSION", args, Returns::Int64),
            (NumRings, []) => factory.function(
                "ST_NUMGEOMETRIES",
                vec![call("ST_BOUNDARY", args, Returns::Geography)],
                factory.source().int64_mapping(),
            ),
            (Boundary, []) => call("ST_BOUNDARY", args, Returns::Geography),
            (Centroid, []) => call("ST_CENTROID", args, Returns::Geography),
            (ConvexHull, []) => call("ST_CONVEXHULL", args, Returns::Geography),
            (StartPoint, []) => call("ST_STARTPOINT", args, Returns::Geography),
            (EndPoint, []) => call("ST_ENDPOINT", args, Returns::Geography),
            (GeometryType, []) => call("ST_GEOMETRYTYPE", args, Returns::String),
            (AsText, []) => call("ST_ASTEXT", args, Returns::String),
            (Contains, [_]) => call("ST_CONTAINS", args, Returns::Bool),
            (CoveredBy, [_]) => call("ST_COVEREDBY", args, Returns::Bool),
            (Covers, [_]) => call("ST_COVERS", args, Returns::Bool),
            (Intersects, [_]) => call("ST_INTERSECTS", args, Returns::Bool),
            (Touches, [_]) => call("ST_TOUCHES", args, Returns::Bool),
            (Within, [_]) => call("ST_WITHIN", args, Returns::Bool),
            (Disjoint, [_]) => call("ST_DISJOINT", args, Returns::Bool),
            (EqualsTopologically, [_]) => call("ST_EQUALS", args, Returns::Bool),
            (Overlaps, [_]) => factory.and(
                call("ST_INTERSECTS", args, Returns::Bool),
                factory.not(call("ST_TOUCHES", args, Returns::Bool)),
            ),
            (Buffer, [_]) => call("ST_BUFFER", args, Returns::Geography),
            (Union, [_]) => call("ST_UNION", args, Returns::Geography),
            (Difference, [_]) => call("ST_DIFFERENCE", args, Returns::Geography),
            (Intersection, [_]) => call("ST_INTERSECTION", args, Returns::Geography),
            (Distance, [_]) => call("ST_DISTANCE", args, Returns::Float64),
            (IsWithinDistance, [_, _]) => call("ST_DWITHIN", args, Returns::Bool),
            (PointN, [index]) => {
                // ST_POINTN is one-based
                let index = factory.binary(index.clone(), BinaryOp::Add, factory.constant(1i64));
                call("ST_POINTN", &[index], Returns::Geography)
            }
            _ => return None,
        })
    }
}
