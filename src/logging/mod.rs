//! Logging infrastructure for structured console and file output.
//!
//! The core never formats output itself: it receives a [`Log`] and reports
//! through it.  [`Logger`] forwards to `tracing`, where [`init_subscriber`]
//! decides how events reach the console and the log file.

mod logger;
mod memory;
mod subscriber;
mod types;
mod utils;

pub use logger::Logger;
pub use memory::{LogRecord, MemoryLog};
pub use subscriber::init_subscriber;
pub use types::{Level, Log};
