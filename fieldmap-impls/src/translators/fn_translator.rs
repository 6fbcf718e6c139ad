use fieldmap_core::{BoxError, Translator};

/// A [Translator] backed by a closure.
pub struct FnTranslator<F>(F);

impl<F> FnTranslator<F> {
    pub fn new(translate: F) -> Self {
        Self(translate)
    }
}

impl<S, D, F> Translator<S, D> for FnTranslator<F>
where
    F: Fn(&S, &mut D) -> Result<(), BoxError>,
{
    fn translate(&self, source: &S, destination: &mut D) -> Result<(), BoxError> {
        (self.0)(source, destination)
    }
}

/// A [Translator] backed by a closure that cannot fail.
pub struct InfallibleTranslator<F>(F);

impl<S, D, F> Translator<S, D> for InfallibleTranslator<F>
where
    F: Fn(&S, &mut D),
{
    fn translate(&self, source: &S, destination: &mut D) -> Result<(), BoxError> {
        (self.0)(source, destination);
        Ok(())
    }
}

/// Wraps a fallible closure into a [Translator].
pub fn translator<S, D, F>(translate: F) -> FnTranslator<F>
where
    F: Fn(&S, &mut D) -> Result<(), BoxError>,
{
    FnTranslator(translate)
}

/// Wraps a closure that cannot fail into a [Translator].
pub fn infallible<S, D, F>(translate: F) -> InfallibleTranslator<F>
where
    F: Fn(&S, &mut D),
{
    InfallibleTranslator(translate)
}
