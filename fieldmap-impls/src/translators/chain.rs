use async_trait::async_trait;
use fieldmap_core::{AsyncTranslator, BoxError, Translator};

/// Applies two translators to the same destination, one after the other.
/// If the first one fails, the second one is not applied.
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Appends another translator to the chain.
    pub fn then<C>(self, next: C) -> Chain<Self, C> {
        Chain::new(self, next)
    }
}

impl<S, D, A, B> Translator<S, D> for Chain<A, B>
where
    A: Translator<S, D>,
    B: Translator<S, D>,
{
    fn translate(&self, source: &S, destination: &mut D) -> Result<(), BoxError> {
        self.first.translate(source, destination)?;
        self.second.translate(source, destination)
    }
}

#[async_trait]
impl<S, D, A, B> AsyncTranslator<S, D> for Chain<A, B>
where
    A: AsyncTranslator<S, D>,
    B: AsyncTranslator<S, D>,
    S: Sync,
    D: Send,
{
    async fn translate(&self, source: &S, destination: &mut D) -> Result<(), BoxError> {
        self.first.translate(source, destination).await?;
        self.second.translate(source, destination).await
    }
}
