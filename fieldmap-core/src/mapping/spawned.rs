use std::{any::type_name, sync::Arc};

use futures_util::future::join_all;
use log::{trace, warn};

use crate::{
    shape, AsyncTranslator, BoxError, Config, ElementFailure, Factory, MapResult,
    MappingFailures, OutputShape,
};

/// Fans out an [AsyncTranslator] by spawning one tokio task per element.
///
/// Unlike [crate::AsyncMapper], which drives every operation from a single future,
/// each operation here is scheduled independently by the runtime, so translations can run
/// in parallel on a multi-threaded runtime. This requires owned sources and a shared translator.
///
/// Must be called from within a tokio runtime.
pub struct SpawnedMapper<T: ?Sized> {
    translator: Arc<T>,
    config: Config,
}

impl<T> SpawnedMapper<T>
where
    T: ?Sized,
{
    pub fn new(translator: Arc<T>) -> Self {
        Self::with_config(translator, Config::default())
    }

    pub fn with_config(translator: Arc<T>, config: Config) -> Self {
        Self { translator, config }
    }

    pub fn translator(&self) -> &Arc<T> {
        &self.translator
    }

    /// Maps every source element into a fixed-size array.
    pub async fn map_array<S, D>(&self, sources: Vec<S>) -> MapResult<Box<[D]>>
    where
        T: AsyncTranslator<S, D> + 'static,
        S: Send + Sync + 'static,
        D: Default + Send + 'static,
    {
        self.map_list(sources).await.map(Vec::into_boxed_slice)
    }

    /// Maps every source element into a new collection of the given shape.
    pub async fn map_collection<S, C>(&self, sources: Vec<S>) -> MapResult<C>
    where
        C: OutputShape,
        C::Item: Default + Send + 'static,
        T: AsyncTranslator<S, C::Item> + 'static,
        S: Send + Sync + 'static,
    {
        let destinations = self.map_list(sources).await?;

        Ok(shape::assemble(destinations))
    }

    /// Maps every source element into a list.
    ///
    /// All tasks are spawned before any is awaited, and every task is awaited
    /// even after one of them failed. A panicking task is reported as a failure of its element.
    pub async fn map_list<S, D>(&self, sources: Vec<S>) -> MapResult<Vec<D>>
    where
        T: AsyncTranslator<S, D> + 'static,
        S: Send + Sync + 'static,
        D: Default + Send + 'static,
    {
        let total = sources.len();
        let constructor = Factory::constructor::<D>();

        trace!("Spawning {} mapping tasks into {}", total, type_name::<D>());

        let tasks: Vec<_> = sources
            .into_iter()
            .map(|source| {
                let translator = self.translator.clone();
                let mut destination = constructor.create();

                tokio::spawn(async move {
                    let result = translator.translate(&source, &mut destination).await;
                    (destination, result)
                })
            })
            .collect();

        let mut destinations = Vec::with_capacity(total);
        let mut failures = Vec::new();

        for (index, joined) in join_all(tasks).await.into_iter().enumerate() {
            match joined {
                Ok((destination, Ok(()))) => destinations.push(destination),
                Ok((destination, Err(error))) => {
                    destinations.push(destination);
                    failures.push(ElementFailure { index, error });
                }
                Err(join_error) => {
                    let error: BoxError = format!("mapping task failed: {join_error}").into();
                    failures.push(ElementFailure { index, error });
                }
            }
        }

        if let Some(failures) =
            MappingFailures::collect(total, failures, self.config.failure_report)
        {
            warn!(
                "Mapping into {} failed for elements {:?}",
                type_name::<D>(),
                failures.indices()
            );

            return Err(failures.into());
        }

        trace!("Mapped {} elements into {}", total, type_name::<D>());

        Ok(destinations)
    }
}

impl<T> Clone for SpawnedMapper<T>
where
    T: ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            translator: self.translator.clone(),
            config: self.config.clone(),
        }
    }
}
