//! Heterogeneous named parameters with typed retrieval.

pub mod params;

pub use params::{ParamError, ParamValue, ParameterStore};
