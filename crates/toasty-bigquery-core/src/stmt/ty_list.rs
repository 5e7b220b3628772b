use super::{ContainerShape, Type};

/// The element type and declared shape of a sequence container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeList {
    pub element: Box<Type>,
    pub shape: ContainerShape,
}

impl TypeList {
    pub fn new(element: Type, shape: ContainerShape) -> TypeList {
        TypeList {
            element: Box::new(element),
            shape,
        }
    }

    /// Returns the same element type in a different container shape.
    pub fn with_shape(&self, shape: ContainerShape) -> TypeList {
        TypeList {
            element: self.element.clone(),
            shape,
        }
    }
}

impl From<TypeList> for Type {
    fn from(value: TypeList) -> Self {
        Self::List(value)
    }
}
