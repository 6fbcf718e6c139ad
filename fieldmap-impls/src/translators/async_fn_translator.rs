use std::future::Future;

use async_trait::async_trait;
use fieldmap_core::{AsyncTranslator, BoxError};

/// An [AsyncTranslator] backed by a closure.
///
/// The closure receives the source and returns a future resolving to a patch,
/// which is then applied to the destination. The future owns whatever it needs from the source,
/// so it never borrows the destination while suspended.
pub struct AsyncFnTranslator<F>(F);

impl<F> AsyncFnTranslator<F> {
    pub fn new(translate: F) -> Self {
        Self(translate)
    }
}

#[async_trait]
impl<S, D, F, Fut, P> AsyncTranslator<S, D> for AsyncFnTranslator<F>
where
    F: Fn(&S) -> Fut + Send + Sync,
    Fut: Future<Output = Result<P, BoxError>> + Send + 'static,
    P: FnOnce(&mut D) + Send + 'static,
    S: Sync,
    D: Send,
{
    async fn translate(&self, source: &S, destination: &mut D) -> Result<(), BoxError> {
        let patch = (self.0)(source).await?;
        patch(destination);

        Ok(())
    }
}

/// Wraps a closure returning a patch future into an [AsyncTranslator].
pub fn async_translator<F>(translate: F) -> AsyncFnTranslator<F> {
    AsyncFnTranslator(translate)
}
