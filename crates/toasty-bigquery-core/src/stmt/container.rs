use serde::Deserialize;

/// The declared shape of a host sequence container.
///
/// Abstract sequences have no concrete representation of their own; when a
/// value of that shape is materialized, the registry picks the container
/// configured in [`Options::sequence_materialization`](crate::Options).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerShape {
    /// A fixed-length array
    Array,

    /// A growable ordered list
    List,

    /// An abstract, read-only sequence interface
    Sequence,

    /// A rectangular array with the given number of dimensions
    #[serde(skip)]
    MultiArray(u8),
}

impl ContainerShape {
    /// Returns `true` if values of this shape can be constructed directly.
    pub fn is_concrete(self) -> bool {
        matches!(self, Self::Array | Self::List)
    }

    pub fn is_multi_dimensional(self) -> bool {
        matches!(self, Self::MultiArray(rank) if rank > 1)
    }

    /// Returns the concrete shape used to materialize values declared with
    /// this shape.
    pub fn materialize(self, convention: ContainerShape) -> ContainerShape {
        if self.is_concrete() {
            self
        } else {
            convention
        }
    }
}
