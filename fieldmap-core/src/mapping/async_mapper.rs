use std::any::type_name;

use futures_util::future::join_all;
use log::{trace, warn};

use super::ensure_destination_len;
use crate::{
    shape, AsyncTranslator, Config, ElementFailure, Factory, MapResult, MappingFailures,
    OutputShape,
};

/// Applies an [AsyncTranslator] to single objects and collections.
///
/// When mapping a collection, a mapping operation is issued for every element before any of them
/// is awaited, and the mapper then waits for all of them to finish. The operations are driven
/// concurrently by whatever runtime polls the returned future.
///
/// A failing operation does not stop the others. Once every operation has finished,
/// the failures are reported together as a [crate::MapError::MappingFailure].
/// Destinations of failed operations are left exactly as the translator left them.
pub struct AsyncMapper<T> {
    translator: T,
    config: Config,
}

impl<T> AsyncMapper<T> {
    pub fn new(translator: T) -> Self {
        Self::with_config(translator, Config::default())
    }

    pub fn with_config(translator: T, config: Config) -> Self {
        Self { translator, config }
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Maps a single source object into a new destination object.
    pub async fn map<S, D>(&self, source: &S) -> MapResult<D>
    where
        T: AsyncTranslator<S, D>,
        D: Default + 'static,
    {
        let mut destination = Factory::create::<D>();

        self.translator
            .translate(source, &mut destination)
            .await
            .map_err(|error| MappingFailures::single(0, 1, error))?;

        Ok(destination)
    }

    /// Maps every source element into a fixed-size array.
    pub async fn map_array<'s, S, D, I>(&self, source: I) -> MapResult<Box<[D]>>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
        T: AsyncTranslator<S, D>,
        D: Default + 'static,
    {
        self.map_list(source).await.map(Vec::into_boxed_slice)
    }

    /// Maps every source element into a list.
    pub async fn map_list<'s, S, D, I>(&self, source: I) -> MapResult<Vec<D>>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
        T: AsyncTranslator<S, D>,
        D: Default + 'static,
    {
        let sources = self.collect_sources(source);
        let mut destinations = construct(sources.len());

        self.join(&sources, &mut destinations).await?;

        Ok(destinations)
    }

    /// Maps every source element into a new collection of the given shape.
    pub async fn map_collection<'s, S, C, I>(&self, source: I) -> MapResult<C>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
        C: OutputShape,
        C::Item: Default + 'static,
        T: AsyncTranslator<S, C::Item>,
    {
        let destinations = self.map_list(source).await?;

        Ok(shape::assemble(destinations))
    }

    /// Maps every source element, adding the destinations to an existing collection.
    /// Returns how many destinations were added.
    ///
    /// Every destination is added, including those whose translation failed.
    pub async fn map_into<'s, S, D, C, I>(&self, source: I, destination: &mut C) -> MapResult<usize>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
        C: Extend<D>,
        T: AsyncTranslator<S, D>,
        D: Default + 'static,
    {
        let sources = self.collect_sources(source);
        let mut destinations = construct(sources.len());

        let result = self.join(&sources, &mut destinations).await;
        let count = destinations.len();

        destination.extend(destinations);

        result.map(|_| count)
    }

    /// Maps every source element into a pre-sized array, replacing its contents.
    ///
    /// The array must have exactly one slot per source element.
    pub async fn map_into_slice<'s, S, D, I>(
        &self,
        source: I,
        destination: &mut [D],
    ) -> MapResult<()>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
        T: AsyncTranslator<S, D>,
        D: Default + 'static,
    {
        let sources = self.collect_sources(source);
        ensure_destination_len(sources.len(), destination.len())?;

        let constructor = Factory::constructor::<D>();
        for slot in destination.iter_mut() {
            *slot = constructor.create();
        }

        self.join(&sources, destination).await
    }

    /// Traverses the source once, keeping the element references in source order.
    fn collect_sources<'s, S, I>(&self, source: I) -> Vec<&'s S>
    where
        I: IntoIterator<Item = &'s S>,
    {
        let source = source.into_iter();
        let mut sources = Vec::with_capacity(self.config.capacity_for(source.size_hint()));

        sources.extend(source);
        sources
    }

    /// Issues one mapping operation per element, then waits for all of them to finish.
    async fn join<S, D>(&self, sources: &[&S], destinations: &mut [D]) -> MapResult<()>
    where
        T: AsyncTranslator<S, D>,
    {
        let total = sources.len();
        trace!("Issuing {} mapping operations into {}", total, type_name::<D>());

        let operations = sources
            .iter()
            .zip(destinations.iter_mut())
            .map(|(source, destination)| self.translator.translate(*source, destination));

        let failures = join_all(operations)
            .await
            .into_iter()
            .enumerate()
            .filter_map(|(index, result)| result.err().map(|error| ElementFailure { index, error }))
            .collect();

        match MappingFailures::collect(total, failures, self.config.failure_report) {
            Some(failures) => {
                warn!(
                    "Mapping into {} failed for elements {:?}",
                    type_name::<D>(),
                    failures.indices()
                );

                Err(failures.into())
            }
            None => {
                trace!("Mapped {} elements into {}", total, type_name::<D>());
                Ok(())
            }
        }
    }
}

/// Constructs `count` blank destinations.
fn construct<D>(count: usize) -> Vec<D>
where
    D: Default + 'static,
{
    let constructor = Factory::constructor::<D>();
    (0..count).map(|_| constructor.create()).collect()
}
