use crate::config::ConfigError;

/// Everything a UI test body can fail with, so scenario code is plain `?`.
/// Oracle mismatches stay `assert_eq!` panics and are caught by the harness
/// thread instead.
#[derive(Debug, thiserror::Error)]
pub enum TestError {
    #[error("webdriver: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("config: {0}")]
    Config(#[from] ConfigError),
}
