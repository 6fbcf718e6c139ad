use std::sync::Arc;

use async_trait::async_trait;

use crate::BoxError;

/// Copies fields from a source object of type `S` into a destination object of type `D`.
///
/// The destination is freshly constructed by the mapper and handed to exactly one invocation.
/// The source is only borrowed, so it can neither be retained nor mutated.
pub trait Translator<S, D> {
    /// Maps the source object into the destination object.
    fn translate(&self, source: &S, destination: &mut D) -> Result<(), BoxError>;
}

/// Asynchronous version of a [Translator].
///
/// Implementors may suspend, for example to look up related data.
/// When mapping collections, invocations for every element run concurrently,
/// so any state shared between invocations must be synchronized by the implementor.
#[async_trait]
pub trait AsyncTranslator<S, D>: Send + Sync {
    /// Maps the source object into the destination object.
    async fn translate(&self, source: &S, destination: &mut D) -> Result<(), BoxError>;
}

impl<S, D, T> Translator<S, D> for &T
where
    T: Translator<S, D> + ?Sized,
{
    fn translate(&self, source: &S, destination: &mut D) -> Result<(), BoxError> {
        (**self).translate(source, destination)
    }
}

impl<S, D, T> Translator<S, D> for Box<T>
where
    T: Translator<S, D> + ?Sized,
{
    fn translate(&self, source: &S, destination: &mut D) -> Result<(), BoxError> {
        (**self).translate(source, destination)
    }
}

impl<S, D, T> Translator<S, D> for Arc<T>
where
    T: Translator<S, D> + ?Sized,
{
    fn translate(&self, source: &S, destination: &mut D) -> Result<(), BoxError> {
        (**self).translate(source, destination)
    }
}

#[async_trait]
impl<S, D, T> AsyncTranslator<S, D> for &T
where
    T: AsyncTranslator<S, D> + ?Sized,
    S: Sync,
    D: Send,
{
    async fn translate(&self, source: &S, destination: &mut D) -> Result<(), BoxError> {
        (**self).translate(source, destination).await
    }
}

#[async_trait]
impl<S, D, T> AsyncTranslator<S, D> for Box<T>
where
    T: AsyncTranslator<S, D> + ?Sized,
    S: Sync,
    D: Send,
{
    async fn translate(&self, source: &S, destination: &mut D) -> Result<(), BoxError> {
        (**self).translate(source, destination).await
    }
}

#[async_trait]
impl<S, D, T> AsyncTranslator<S, D> for Arc<T>
where
    T: AsyncTranslator<S, D> + ?Sized,
    S: Sync,
    D: Send,
{
    async fn translate(&self, source: &S, destination: &mut D) -> Result<(), BoxError> {
        (**self).translate(source, destination).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AsyncMapper, Mapper};

    struct Upper;

    impl Translator<String, String> for Upper {
        fn translate(&self, source: &String, destination: &mut String) -> Result<(), BoxError> {
            destination.push_str(&source.to_uppercase());
            Ok(())
        }
    }

    struct Length;

    #[async_trait]
    impl AsyncTranslator<String, usize> for Length {
        async fn translate(
            &self,
            source: &String,
            destination: &mut usize,
        ) -> Result<(), BoxError> {
            *destination = source.len();
            Ok(())
        }
    }

    #[test]
    fn test_boxed_dyn_translator() {
        let boxed: Box<dyn Translator<String, String>> = Box::new(Upper);
        let mapper = Mapper::new(boxed);

        let to: String = mapper.map(&"abc".to_string()).unwrap();

        assert_eq!(to, "ABC");
    }

    #[tokio::test]
    async fn test_shared_async_translator() {
        let shared: Arc<dyn AsyncTranslator<String, usize>> = Arc::new(Length);
        let mapper = AsyncMapper::new(shared.clone());

        let to: Vec<usize> = mapper
            .map_list(&["a".to_string(), "abc".to_string()])
            .await
            .unwrap();

        assert_eq!(to, vec![1, 3]);
        assert_eq!(Arc::strong_count(&shared), 2);
    }
}
