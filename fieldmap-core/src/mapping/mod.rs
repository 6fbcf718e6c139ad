//! Mappers apply a translator to single objects and fan it out across collections.
//!
//! Every mapper shares the same contract:
//! - The output holds exactly one destination per source element, in source order.
//! - An empty source produces an empty output, never an error.
//! - Destinations are constructed by the factory, one per element, never reused.

use crate::{MapError, MapResult};

mod async_mapper;
mod spawned;
mod sync_mapper;

pub use async_mapper::*;
pub use spawned::*;
pub use sync_mapper::*;

/// Fails if a pre-sized destination cannot hold exactly one item per source element.
fn ensure_destination_len(source_len: usize, destination_len: usize) -> MapResult<()> {
    if source_len != destination_len {
        return Err(MapError::InvalidArgument {
            parameter: "destination",
            reason: format!(
                "has {destination_len} slots but the source has {source_len} elements"
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use async_trait::async_trait;

    use crate::{AsyncTranslator, BoxError, Translator};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MapFrom {
        pub property: i32,
    }

    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    pub struct MapTo {
        pub property: i32,
        pub mapped: bool,
    }

    /// Copies `property` and marks the destination as mapped.
    pub struct CopyProperty;

    impl Translator<MapFrom, MapTo> for CopyProperty {
        fn translate(&self, source: &MapFrom, destination: &mut MapTo) -> Result<(), BoxError> {
            destination.property = source.property;
            destination.mapped = true;
            Ok(())
        }
    }

    #[async_trait]
    impl AsyncTranslator<MapFrom, MapTo> for CopyProperty {
        async fn translate(
            &self,
            source: &MapFrom,
            destination: &mut MapTo,
        ) -> Result<(), BoxError> {
            tokio::task::yield_now().await;

            destination.property = source.property;
            destination.mapped = true;
            Ok(())
        }
    }

    /// Copies `property`, but fails for negative values after touching the destination.
    pub struct RejectNegative;

    impl Translator<MapFrom, MapTo> for RejectNegative {
        fn translate(&self, source: &MapFrom, destination: &mut MapTo) -> Result<(), BoxError> {
            destination.property = source.property;

            if source.property < 0 {
                return Err(format!("negative property {}", source.property).into());
            }

            destination.mapped = true;
            Ok(())
        }
    }

    /// Contains equal values, so a shape that merges or sorts items shows up as a wrong result.
    pub const REPEATED: [i32; 6] = [3, 1, 3, 2, 1, 3];

    pub fn sources(properties: &[i32]) -> Vec<MapFrom> {
        properties
            .iter()
            .map(|&property| MapFrom { property })
            .collect()
    }

    pub fn properties<'a>(destinations: impl IntoIterator<Item = &'a MapTo>) -> Vec<i32> {
        destinations.into_iter().map(|d| d.property).collect()
    }
}
