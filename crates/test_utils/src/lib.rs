//! Shared plumbing for the trip-shop UI suites: environment configuration,
//! the persistence oracle and logging setup. The WebDriver harness itself
//! lives with the tests under `tests/ui/`.

pub mod config;
pub mod db;
pub mod error;
pub mod logger;

pub use config::TestConfig;
pub use db::StoreOracle;
pub use error::TestError;
