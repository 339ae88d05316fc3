//! Todo lifecycle handlers.

mod lifecycle;

pub use lifecycle::TodoLifecycle;
