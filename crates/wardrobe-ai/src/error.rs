use crate::account::{AccountError, StorageError};
use crate::config::ConfigError;
use crate::stylist::StylistError;
use crate::telemetry::TelemetryError;
use crate::wardrobe::{ClosetImportError, WardrobeError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Storage(StorageError),
    Account(AccountError),
    Wardrobe(WardrobeError),
    Import(ClosetImportError),
    Stylist(StylistError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Storage(err) => write!(f, "storage error: {}", err),
            AppError::Account(err) => write!(f, "account error: {}", err),
            AppError::Wardrobe(err) => write!(f, "wardrobe error: {}", err),
            AppError::Import(err) => write!(f, "import error: {}", err),
            AppError::Stylist(err) => write!(f, "stylist error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Storage(err) => Some(err),
            AppError::Account(err) => Some(err),
            AppError::Wardrobe(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::Stylist(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<StorageError> for AppError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<AccountError> for AppError {
    fn from(value: AccountError) -> Self {
        Self::Account(value)
    }
}

impl From<WardrobeError> for AppError {
    fn from(value: WardrobeError) -> Self {
        Self::Wardrobe(value)
    }
}

impl From<ClosetImportError> for AppError {
    fn from(value: ClosetImportError) -> Self {
        Self::Import(value)
    }
}

impl From<StylistError> for AppError {
    fn from(value: StylistError) -> Self {
        Self::Stylist(value)
    }
}
