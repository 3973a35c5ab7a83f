//! Deferred launch values

use crate::context::LaunchContext;
use crate::error::ResolveError;

/// A value carried by a launch description, resolved at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Plain literal text
    Text(String),
    /// Launch configuration lookup by name
    Configuration(String),
    /// Environment variable with optional fallback
    Env {
        name: String,
        default: Option<String>,
    },
}

impl Value {
    /// Create a literal value.
    pub fn literal(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Create a launch-configuration lookup.
    pub fn configuration(name: impl Into<String>) -> Self {
        Value::Configuration(name.into())
    }

    /// Resolve to a concrete string against a launch context.
    pub fn resolve(&self, context: &LaunchContext) -> Result<String, ResolveError> {
        match self {
            Value::Text(s) => Ok(s.clone()),
            Value::Configuration(name) => context
                .get_configuration(name)
                .ok_or_else(|| ResolveError::UndefinedConfiguration(name.clone())),
            Value::Env { name, default } => std::env::var(name).or_else(|_| {
                default
                    .clone()
                    .ok_or_else(|| ResolveError::UndefinedEnvVar(name.clone()))
            }),
        }
    }

    /// If this value is a literal, return it.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Text(b.to_string())
    }
}
