mod async_fn_translator;
mod chain;
mod fn_translator;

pub use async_fn_translator::*;
pub use chain::*;
pub use fn_translator::*;
