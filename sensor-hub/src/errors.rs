use thiserror::Error;

use crate::hal::SensorFamily;

/// Result codes shared by every HAL operation and every driver slot.
///
/// Callers only ever need to branch on these three kinds: the sensor is
/// broken (`Fail`), the call was malformed (`InvalidArgument`), or the sensor
/// cannot do what was asked (`NotSupported`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HalError {
    #[error("sensor '{sensor}' failed: {reason}")]
    Fail { sensor: String, reason: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("operation not supported: {0}")]
    NotSupported(String),
}

impl HalError {
    pub fn fail(sensor: impl Into<String>, reason: impl Into<String>) -> Self {
        HalError::Fail {
            sensor: sensor.into(),
            reason: reason.into(),
        }
    }

    pub fn not_supported(what: impl Into<String>) -> Self {
        HalError::NotSupported(what.into())
    }

    pub fn is_not_supported(&self) -> bool {
        matches!(self, HalError::NotSupported(_))
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from '{path}': {source}")]
    LoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration format: {0}")]
    FormatError(#[from] toml::de::Error),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Registry and initialization errors
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Unknown sensor driver: '{driver}'")]
    UnknownDriver { driver: String },

    #[error("Sensor driver '{driver}' is already registered")]
    DuplicateDriver { driver: String },

    #[error("Driver '{driver}' is registered as {declared} but builds a {built} driver")]
    FamilyMismatch {
        driver: String,
        declared: SensorFamily,
        built: SensorFamily,
    },

    #[error("Bus '{bus}' not found or unavailable")]
    BusNotFound { bus: String },

    #[error("Failed to open bus '{bus}': {reason}")]
    BusInitError { bus: String, reason: String },

    #[error("Sensor '{sensor}' creation failed: {source}")]
    SensorCreation {
        sensor: String,
        #[source]
        source: HalError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<HalError> for String {
    fn from(error: HalError) -> Self {
        error.to_string()
    }
}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}

impl From<RegistryError> for String {
    fn from(error: RegistryError) -> Self {
        error.to_string()
    }
}

/// Result type aliases for convenience
pub type HalResult<T> = Result<T, HalError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type RegistryResult<T> = Result<T, RegistryError>;
