//! HTTP middleware: session authentication, rate limiting, tracing.

pub mod rate_limit;
pub mod session;
pub mod tracing;
