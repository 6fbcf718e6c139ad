//! Implementations of the traits in [fieldmap_core]: output shapes and translator adapters.

mod shapes;
mod translators;

pub use shapes::*;
pub use translators::*;
