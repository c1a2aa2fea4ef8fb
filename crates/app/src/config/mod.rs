//! Configuration
//!
//! Settings are read from command-line flags, falling back to environment variables (a `.env`
//! file is loaded first when present).

mod db;
mod logging;
mod quote;

pub use db::DatabaseConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use quote::QuoteConfig;
