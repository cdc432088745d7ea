//! Logging shims for the rewriter.
//!
//! With the `tracing` feature these are the `tracing` macros, so `wsvg -v`
//! (or `RUST_LOG`) shows which elements get rewritten. Without it every
//! call compiles away.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

/// Recoverable oddities in the input, such as a shape without points.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace, warn};
