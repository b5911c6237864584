//! Observability utilities.

mod subscriber;
mod tracing;

pub use subscriber::{filter_for_verbosity, init_logging};
pub use tracing::{SearchSpanAttributes, SpanTimer};
