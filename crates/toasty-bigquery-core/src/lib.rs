mod error;
pub use error::Error;

pub mod literal;

pub mod mapping;
pub use mapping::TypeMapping;

mod options;
pub use options::Options;

pub mod param;

mod registry;
pub use registry::TypeMappingSource;

pub mod stmt;

pub mod store;

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
