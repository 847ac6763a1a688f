//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config compilation
//!     → tracing events (debug per endpoint/backend, warn on fallbacks)
//!     → logging.rs subscriber (stdout, text or JSON)
//! ```

pub mod logging;
