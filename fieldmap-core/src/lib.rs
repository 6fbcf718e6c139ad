//! Object-to-object field copying.
//!
//! A [Translator] (or [AsyncTranslator]) knows how to copy fields from one object into another.
//! The mappers in this crate apply it to single objects and fan it out across collections,
//! constructing every destination object from its `Default` implementation.

mod config;
mod error;
mod factory;
mod mapping;
mod shape;
mod translator;

pub mod checked;

pub use config::*;
pub use error::*;
pub(crate) use factory::Factory;
pub use mapping::*;
pub use shape::OutputShape;
pub use translator::*;
