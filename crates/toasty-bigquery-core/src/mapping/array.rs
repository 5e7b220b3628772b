use super::TypeMapping;
use crate::stmt::{ContainerShape, Type};

/// The array half of an `ARRAY<...>` mapping.
///
/// Owns exactly one element mapping. BigQuery arrays are single-dimensional,
/// so the element mapping is never itself an array.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayTypeMapping {
    element: Box<TypeMapping>,

    /// Container shape declared by the host type
    shape: ContainerShape,

    /// Concrete container used to materialize values
    materialized: ContainerShape,
}

impl ArrayTypeMapping {
    pub(crate) fn new(
        element: TypeMapping,
        shape: ContainerShape,
        materialized: ContainerShape,
    ) -> ArrayTypeMapping {
        debug_assert!(!element.is_array());

        ArrayTypeMapping {
            element: Box::new(element),
            shape,
            materialized,
        }
    }

    pub fn element(&self) -> &TypeMapping {
        &self.element
    }

    /// The element's host type.
    pub fn element_ty(&self) -> &Type {
        self.element.ty()
    }

    pub fn shape(&self) -> ContainerShape {
        self.shape
    }

    pub fn materialized_shape(&self) -> ContainerShape {
        self.materialized
    }
}
