//! Dynamic parameter bags for rendering components.
//!
//! A `ParameterStore` maps string keys to values of any Rust type. Callers
//! fill it before handing it to a component; the component reads values
//! back by key with a typed accessor that fails softly on a type mismatch.

pub mod errors;
pub mod store;
pub mod value;

pub use errors::ParamError;
pub use store::ParameterStore;
pub use value::{ParamValue, NULL_TYPE_NAME};
