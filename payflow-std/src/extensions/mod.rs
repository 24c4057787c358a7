//! Standard gateway extensions.

pub mod logging;

pub use logging::LoggingExtension;
