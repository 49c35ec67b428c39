//! # Classtree Config
//!
//! Configuration types for classtree, loaded from environment variables:
//!
//! - [`store`]: Class path separator and id strategy
//! - [`logging`]: Log level, format and optional log directory
//! - [`seed`]: Mock roster generation
//!
//! Every type has a `Default`, a `from_env()` and a `from_lookup()` that
//! takes any key lookup function (handy for tests). Unparsable values fall
//! back to the default.
//!
//! # Example
//!
//! ```ignore
//! use classtree_config::{LoggingConfig, SeedConfig, StoreConfig};
//!
//! let store_config = StoreConfig::from_env();
//! let logging_config = LoggingConfig::from_env();
//! let seed_config = SeedConfig::from_env();
//! ```

pub mod logging;
pub mod seed;
pub mod store;

// Re-export commonly used types at crate root
pub use logging::{LogFormat, LoggingConfig};
pub use seed::SeedConfig;
pub use store::{IdStrategy, StoreConfig};

use std::str::FromStr;

pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
