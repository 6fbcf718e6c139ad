use std::any::type_name;

use log::{trace, warn};

use super::ensure_destination_len;
use crate::{Config, Factory, MapResult, MappingFailures, OutputShape, Translator};

/// Applies a [Translator] to single objects and collections.
///
/// Elements are mapped one after the other on the caller's thread.
/// The first failing translation aborts the fan-out, leaving later elements unmapped.
pub struct Mapper<T> {
    translator: T,
    config: Config,
}

impl<T> Mapper<T> {
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
    pub fn map<S, D>(&self, source: &S) -> MapResult<D>
    where
        T: Translator<S, D>,
        D: Default + 'static,
    {
        let mut destination = Factory::create::<D>();

        self.translator
            .translate(source, &mut destination)
            .map_err(|error| MappingFailures::single(0, 1, error))?;

        Ok(destination)
    }

    /// Maps every source element into a fixed-size array.
    pub fn map_array<'s, S, D, I>(&self, source: I) -> MapResult<Box<[D]>>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
        T: Translator<S, D>,
        D: Default + 'static,
    {
        self.map_list(source).map(Vec::into_boxed_slice)
    }

    /// Maps every source element into a list.
    pub fn map_list<'s, S, D, I>(&self, source: I) -> MapResult<Vec<D>>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
        T: Translator<S, D>,
        D: Default + 'static,
    {
        self.map_collection(source)
    }

    /// Maps every source element into a new collection of the given shape.
    pub fn map_collection<'s, S, C, I>(&self, source: I) -> MapResult<C>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
        C: OutputShape,
        C::Item: Default + 'static,
        T: Translator<S, C::Item>,
    {
        let source = source.into_iter();
        let mut output = C::with_expected(self.config.capacity_for(source.size_hint()));

        self.translate_each(source, |index, item| output.place(index, item))?;

        Ok(output)
    }

    /// Maps every source element, adding the destinations to an existing collection.
    /// Returns how many destinations were added.
    ///
    /// If a translation fails, its destination has already been added.
    pub fn map_into<'s, S, D, C, I>(&self, source: I, destination: &mut C) -> MapResult<usize>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
        C: Extend<D>,
        T: Translator<S, D>,
        D: Default + 'static,
    {
        self.translate_each(source, |_, item| destination.extend(Some(item)))
    }

    /// Maps every source element into a pre-sized array, replacing its contents.
    ///
    /// The array must have exactly one slot per source element.
    pub fn map_into_slice<'s, S, D, I>(&self, source: I, destination: &mut [D]) -> MapResult<()>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
        T: Translator<S, D>,
        D: Default + 'static,
    {
        let sources: Vec<_> = source.into_iter().collect();
        ensure_destination_len(sources.len(), destination.len())?;

        self.translate_each(sources, |index, item| destination[index] = item)?;

        Ok(())
    }

    /// Constructs, translates, and places one destination per source element, in order.
    fn translate_each<'s, S, D, I>(
        &self,
        source: I,
        mut place: impl FnMut(usize, D),
    ) -> MapResult<usize>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
        T: Translator<S, D>,
        D: Default + 'static,
    {
        let constructor = Factory::constructor::<D>();
        let mut count = 0;

        for (index, item) in source.into_iter().enumerate() {
            let mut destination = constructor.create();
            let result = self.translator.translate(item, &mut destination);

            place(index, destination);

            if let Err(error) = result {
                warn!(
                    "Translating element {} into {} failed: {}",
                    index,
                    type_name::<D>(),
                    error
                );

                return Err(MappingFailures::single(index, index + 1, error).into());
            }

            count += 1;
        }

        trace!("Mapped {} elements into {}", count, type_name::<D>());

        Ok(count)
    }
}
