pub use crate::pkg::internal::error::Error;

pub type Result<T> = std::result::Result<T, Error>;
