//! Observability for the RybaLov storefront.
//!
//! - `SessionId` - identifier attached to every log line of a session
//! - `StructuredLogger` - structured logging with session context

mod logging;
mod session;

pub use logging::*;
pub use session::*;
