//! Error types for launch description evaluation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Undefined launch configuration: '{0}'. Did you forget to declare it?")]
    UndefinedConfiguration(String),

    #[error(
        "Undefined environment variable: '{0}'. Make sure the variable is set in your environment."
    )]
    UndefinedEnvVar(String),
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Missing value for required launch argument '{0}'")]
    MissingArgument(String),

    #[error("Invalid value '{value}' for launch argument '{name}' (allowed: {choices:?})")]
    InvalidChoice {
        name: String,
        value: String,
        choices: Vec<String>,
    },

    #[error("Override for undeclared launch argument '{0}'")]
    UnknownOverride(String),
}

pub type Result<T> = std::result::Result<T, GenerationError>;
