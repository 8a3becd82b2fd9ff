//! The single error slot shown to the user.

use std::fmt;

use crate::catalog::CatalogError;
use crate::core::config::ConfigError;
use crate::core::player::PlayerError;

/// Everything that can end up in `App::last_error`.
#[derive(Debug)]
pub enum AppError {
    Catalog(CatalogError),
    Config(ConfigError),
    /// The external player could not be started.
    Exec(PlayerError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Catalog(e) => write!(f, "{e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Exec(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        AppError::Catalog(e)
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<PlayerError> for AppError {
    fn from(e: PlayerError) -> Self {
        AppError::Exec(e)
    }
}
