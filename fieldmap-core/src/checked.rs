//! Entry points for callers that hold the translator or the source as an [Option].
//!
//! A missing translator or source fails with [MapError::InvalidArgument] naming the
//! missing parameter, before anything is constructed or mapped.

use crate::{
    AsyncMapper, AsyncTranslator, MapError, MapResult, Mapper, OutputShape, Translator,
};

/// Returns the translator, or fails naming the `translator` parameter.
pub fn translator<T>(translator: Option<T>) -> MapResult<T> {
    translator.ok_or_else(|| MapError::missing("translator"))
}

/// Returns the source, or fails naming the `source` parameter.
pub fn source<S>(source: Option<S>) -> MapResult<S> {
    source.ok_or_else(|| MapError::missing("source"))
}

/// Maps a single source object.
pub fn map<S, D, T>(translator: Option<&T>, source: Option<&S>) -> MapResult<D>
where
    T: Translator<S, D> + ?Sized,
    D: Default + 'static,
{
    let translator = self::translator(translator)?;
    let source = self::source(source)?;

    Mapper::new(translator).map(source)
}

/// Maps every element of a source collection into a list.
pub fn map_list<'s, S, D, T, I>(translator: Option<&T>, source: Option<I>) -> MapResult<Vec<D>>
where
    I: IntoIterator<Item = &'s S>,
    S: 's,
    T: Translator<S, D> + ?Sized,
    D: Default + 'static,
{
    let translator = self::translator(translator)?;
    let source = self::source(source)?;

    Mapper::new(translator).map_list(source)
}

/// Maps every element of a source collection into a fixed-size array.
pub fn map_array<'s, S, D, T, I>(translator: Option<&T>, source: Option<I>) -> MapResult<Box<[D]>>
where
    I: IntoIterator<Item = &'s S>,
    S: 's,
    T: Translator<S, D> + ?Sized,
    D: Default + 'static,
{
    map_list(translator, source).map(Vec::into_boxed_slice)
}

/// Maps every element of a source collection into a new collection of the given shape.
pub fn map_collection<'s, S, C, T, I>(translator: Option<&T>, source: Option<I>) -> MapResult<C>
where
    I: IntoIterator<Item = &'s S>,
    S: 's,
    C: OutputShape,
    C::Item: Default + 'static,
    T: Translator<S, C::Item> + ?Sized,
{
    let translator = self::translator(translator)?;
    let source = self::source(source)?;

    Mapper::new(translator).map_collection(source)
}

/// Maps every element of a source collection, adding the destinations to `destination`.
///
/// `destination` is left untouched if an argument is missing.
pub fn map_into<'s, S, D, C, T, I>(
    translator: Option<&T>,
    source: Option<I>,
    destination: &mut C,
) -> MapResult<usize>
where
    I: IntoIterator<Item = &'s S>,
    S: 's,
    C: Extend<D>,
    T: Translator<S, D> + ?Sized,
    D: Default + 'static,
{
    let translator = self::translator(translator)?;
    let source = self::source(source)?;

    Mapper::new(translator).map_into(source, destination)
}

/// Maps every element of a source collection into a pre-sized array.
///
/// `destination` is left untouched if an argument is missing.
pub fn map_into_slice<'s, S, D, T, I>(
    translator: Option<&T>,
    source: Option<I>,
    destination: &mut [D],
) -> MapResult<()>
where
    I: IntoIterator<Item = &'s S>,
    S: 's,
    T: Translator<S, D> + ?Sized,
    D: Default + 'static,
{
    let translator = self::translator(translator)?;
    let source = self::source(source)?;

    Mapper::new(translator).map_into_slice(source, destination)
}

/// Asynchronously maps a single source object.
pub async fn map_async<S, D, T>(translator: Option<&T>, source: Option<&S>) -> MapResult<D>
where
    T: AsyncTranslator<S, D> + ?Sized,
    S: Sync,
    D: Default + Send + 'static,
{
    let translator = self::translator(translator)?;
    let source = self::source(source)?;

    AsyncMapper::new(translator).map(source).await
}

/// Asynchronously maps every element of a source collection into a list.
pub async fn map_list_async<'s, S, D, T, I>(
    translator: Option<&T>,
    source: Option<I>,
) -> MapResult<Vec<D>>
where
    I: IntoIterator<Item = &'s S>,
    S: Sync + 's,
    T: AsyncTranslator<S, D> + ?Sized,
    D: Default + Send + 'static,
{
    let translator = self::translator(translator)?;
    let source = self::source(source)?;

    AsyncMapper::new(translator).map_list(source).await
}

/// Asynchronously maps every element of a source collection into a fixed-size array.
pub async fn map_array_async<'s, S, D, T, I>(
    translator: Option<&T>,
    source: Option<I>,
) -> MapResult<Box<[D]>>
where
    I: IntoIterator<Item = &'s S>,
    S: Sync + 's,
    T: AsyncTranslator<S, D> + ?Sized,
    D: Default + Send + 'static,
{
    map_list_async(translator, source)
        .await
        .map(Vec::into_boxed_slice)
}

/// Asynchronously maps every element of a source collection into a new collection of the given
/// shape.
pub async fn map_collection_async<'s, S, C, T, I>(
    translator: Option<&T>,
    source: Option<I>,
) -> MapResult<C>
where
    I: IntoIterator<Item = &'s S>,
    S: Sync + 's,
    C: OutputShape,
    C::Item: Default + Send + 'static,
    T: AsyncTranslator<S, C::Item> + ?Sized,
{
    let translator = self::translator(translator)?;
    let source = self::source(source)?;

    AsyncMapper::new(translator).map_collection(source).await
}

/// Asynchronously maps every element of a source collection, adding the destinations to
/// `destination`.
///
/// `destination` is left untouched if an argument is missing.
pub async fn map_into_async<'s, S, D, C, T, I>(
    translator: Option<&T>,
    source: Option<I>,
    destination: &mut C,
) -> MapResult<usize>
where
    I: IntoIterator<Item = &'s S>,
    S: Sync + 's,
    C: Extend<D>,
    T: AsyncTranslator<S, D> + ?Sized,
    D: Default + Send + 'static,
{
    let translator = self::translator(translator)?;
    let source = self::source(source)?;

    AsyncMapper::new(translator).map_into(source, destination).await
}

/// Asynchronously maps every element of a source collection into a pre-sized array.
///
/// `destination` is left untouched if an argument is missing.
pub async fn map_into_slice_async<'s, S, D, T, I>(
    translator: Option<&T>,
    source: Option<I>,
    destination: &mut [D],
) -> MapResult<()>
where
    I: IntoIterator<Item = &'s S>,
    S: Sync + 's,
    T: AsyncTranslator<S, D> + ?Sized,
    D: Default + Send + 'static,
{
    let translator = self::translator(translator)?;
    let source = self::source(source)?;

    AsyncMapper::new(translator)
        .map_into_slice(source, destination)
        .await
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::mapping::tests::{properties, sources, CopyProperty, MapFrom, MapTo};

    const NO_SOURCE: Option<&Vec<MapFrom>> = None;

    fn assert_missing(result: MapResult<()>, parameter: &str) {
        assert_eq!(result.unwrap_err().parameter(), Some(parameter));
    }

    fn untouched() -> Vec<MapTo> {
        vec![MapTo {
            property: 9,
            mapped: false,
        }]
    }

    #[test]
    fn test_missing_translator() {
        let from = MapFrom { property: 1 };
        let error = map::<_, MapTo, CopyProperty>(None, Some(&from)).unwrap_err();

        assert_eq!(error.parameter(), Some("translator"));
        assert_eq!(
            error.to_string(),
            "Invalid argument `translator`: value is missing"
        );
    }

    #[test]
    fn test_missing_source() {
        let error = map::<MapFrom, MapTo, _>(Some(&CopyProperty), None).unwrap_err();

        assert_eq!(error.parameter(), Some("source"));
    }

    #[test]
    fn test_missing_collection() {
        let error = map_list::<MapFrom, MapTo, _, &Vec<MapFrom>>(Some(&CopyProperty), None)
            .unwrap_err();

        assert_eq!(error.parameter(), Some("source"));
    }

    #[test]
    fn test_present_arguments() {
        let from = sources(&[1, 2]);

        let one: MapTo = map(Some(&CopyProperty), from.first()).unwrap();
        let all: Box<[MapTo]> = map_array(Some(&CopyProperty), Some(&from)).unwrap();

        assert_eq!(one.property, 1);
        assert_eq!(properties(all.iter()), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_async_missing_arguments() {
        let from = sources(&[1]);

        let error = map_async::<_, MapTo, CopyProperty>(None, from.first())
            .await
            .unwrap_err();
        assert_eq!(error.parameter(), Some("translator"));

        let error = map_list_async::<MapFrom, MapTo, _, &Vec<MapFrom>>(Some(&CopyProperty), None)
            .await
            .unwrap_err();
        assert_eq!(error.parameter(), Some("source"));

        let to: Vec<MapTo> = map_list_async(Some(&CopyProperty), Some(&from))
            .await
            .unwrap();
        assert_eq!(properties(&to), vec![1]);
    }

    #[test]
    fn test_missing_arguments_for_collections() {
        let from = sources(&[1]);
        let mut list = untouched();
        let mut slice = untouched();

        assert_missing(
            map_collection::<_, VecDeque<MapTo>, CopyProperty, _>(None, Some(&from)).map(drop),
            "translator",
        );
        assert_missing(
            map_collection::<MapFrom, VecDeque<MapTo>, _, _>(Some(&CopyProperty), NO_SOURCE)
                .map(drop),
            "source",
        );
        assert_missing(
            map_into::<_, MapTo, _, CopyProperty, _>(None, Some(&from), &mut list).map(drop),
            "translator",
        );
        assert_missing(
            map_into::<MapFrom, MapTo, _, _, _>(Some(&CopyProperty), NO_SOURCE, &mut list)
                .map(drop),
            "source",
        );
        assert_missing(
            map_into_slice::<_, MapTo, CopyProperty, _>(None, Some(&from), &mut slice),
            "translator",
        );
        assert_missing(
            map_into_slice::<MapFrom, MapTo, _, _>(Some(&CopyProperty), NO_SOURCE, &mut slice),
            "source",
        );

        assert_eq!(list, untouched());
        assert_eq!(slice, untouched());
    }

    #[test]
    fn test_present_arguments_for_collections() {
        let from = sources(&[1, 2]);
        let mut list = untouched();
        let mut slice = vec![MapTo::default(); 2];

        let queue: VecDeque<MapTo> = map_collection(Some(&CopyProperty), Some(&from)).unwrap();
        let added = map_into(Some(&CopyProperty), Some(&from), &mut list).unwrap();
        map_into_slice(Some(&CopyProperty), Some(&from), &mut slice).unwrap();

        assert_eq!(properties(&queue), vec![1, 2]);
        assert_eq!(added, 2);
        assert_eq!(properties(&list), vec![9, 1, 2]);
        assert_eq!(properties(&slice), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_async_missing_arguments_for_collections() {
        let from = sources(&[1]);
        let mut list = untouched();
        let mut slice = untouched();

        assert_missing(
            map_array_async::<_, MapTo, CopyProperty, _>(None, Some(&from))
                .await
                .map(drop),
            "translator",
        );
        assert_missing(
            map_array_async::<MapFrom, MapTo, _, _>(Some(&CopyProperty), NO_SOURCE)
                .await
                .map(drop),
            "source",
        );
        assert_missing(
            map_collection_async::<_, VecDeque<MapTo>, CopyProperty, _>(None, Some(&from))
                .await
                .map(drop),
            "translator",
        );
        assert_missing(
            map_collection_async::<MapFrom, VecDeque<MapTo>, _, _>(Some(&CopyProperty), NO_SOURCE)
                .await
                .map(drop),
            "source",
        );
        assert_missing(
            map_into_async::<_, MapTo, _, CopyProperty, _>(None, Some(&from), &mut list)
                .await
                .map(drop),
            "translator",
        );
        assert_missing(
            map_into_async::<MapFrom, MapTo, _, _, _>(Some(&CopyProperty), NO_SOURCE, &mut list)
                .await
                .map(drop),
            "source",
        );
        assert_missing(
            map_into_slice_async::<_, MapTo, CopyProperty, _>(None, Some(&from), &mut slice).await,
            "translator",
        );
        assert_missing(
            map_into_slice_async::<MapFrom, MapTo, _, _>(
                Some(&CopyProperty),
                NO_SOURCE,
                &mut slice,
            )
            .await,
            "source",
        );

        assert_eq!(list, untouched());
        assert_eq!(slice, untouched());
    }

    #[tokio::test]
    async fn test_async_present_arguments_for_collections() {
        let from = sources(&[3, 4]);
        let mut list = untouched();
        let mut slice = vec![MapTo::default(); 2];

        let array: Box<[MapTo]> = map_array_async(Some(&CopyProperty), Some(&from))
            .await
            .unwrap();
        let queue: VecDeque<MapTo> = map_collection_async(Some(&CopyProperty), Some(&from))
            .await
            .unwrap();
        map_into_async(Some(&CopyProperty), Some(&from), &mut list)
            .await
            .unwrap();
        map_into_slice_async(Some(&CopyProperty), Some(&from), &mut slice)
            .await
            .unwrap();

        assert_eq!(properties(array.iter()), vec![3, 4]);
        assert_eq!(properties(&queue), vec![3, 4]);
        assert_eq!(properties(&list), vec![9, 3, 4]);
        assert_eq!(properties(&slice), vec![3, 4]);
    }
}
