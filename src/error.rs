use thiserror::Error;

/// Errors that can occur while building or querying the signature registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Algorithm '{name}' is already registered")]
    DuplicateName { name: String },

    #[error("Algorithm '{algorithm}' declares parameter '{parameter}' more than once")]
    DuplicateParameter { algorithm: String, parameter: String },

    #[error("Cannot register an algorithm with an empty name")]
    EmptyName,

    #[error("Unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
}

/// Errors that can occur while binding a call onto a signature.
///
/// All of these are deterministic: repeating the same call reproduces the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error(
        "{algorithm}() takes at most {expected} positional arguments, but {received} were given"
    )]
    TooManyArguments {
        algorithm: String,
        expected: usize,
        received: usize,
    },

    #[error("{algorithm}() got an unexpected argument '{parameter}'")]
    UnknownParameter { algorithm: String, parameter: String },

    #[error("{algorithm}() got multiple values for argument '{parameter}'")]
    DuplicateBinding { algorithm: String, parameter: String },

    #[error("{algorithm}() is missing required argument '{parameter}'")]
    MissingRequiredArgument { algorithm: String, parameter: String },

    #[error(
        "{algorithm}() argument '{parameter}' (position {index}) follows an optional parameter and must be passed by name"
    )]
    PositionalPastOptional {
        algorithm: String,
        parameter: String,
        index: usize,
    },
}

/// Errors that can occur when loading a signature catalog from its definition source.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    Json(String),

    #[error("Could not read catalog file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Catalog entry #{index} is invalid: {message}")]
    InvalidEntry { index: usize, message: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors raised while saving or loading a binary registry snapshot.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("Snapshot error: {0}")]
    Generic(String),

    #[error("Snapshot contains an invalid registry: {0}")]
    Registry(#[from] RegistryError),
}

/// Errors raised while loading binder settings.
#[derive(Error, Debug, Clone)]
pub enum SettingsError {
    #[error("Could not read settings file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse settings: {0}")]
    Parse(String),
}

/// Umbrella error for callers that drive the whole lookup-and-bind flow.
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Bind(#[from] BindError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}
