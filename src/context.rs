//! Launch context for managing configurations

use crate::actions::DeclareLaunchArgument;
use crate::error::{GenerationError, Result};
use std::collections::HashMap;

/// Launch context holding configuration values during evaluation.
///
/// Overrides come from the invocation environment (the external launcher's
/// `name:=value` pairs) and take precedence over declared defaults.
#[derive(Debug, Clone, Default)]
pub struct LaunchContext {
    configurations: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl LaunchContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context seeded with overrides.
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self {
            configurations: HashMap::new(),
            overrides,
        }
    }

    pub fn set_configuration(&mut self, name: String, value: String) {
        self.configurations.insert(name, value);
    }

    pub fn get_configuration(&self, name: &str) -> Option<String> {
        self.configurations.get(name).cloned()
    }

    pub fn configurations(&self) -> &HashMap<String, String> {
        &self.configurations
    }

    /// Apply a declared argument and return its effective value.
    ///
    /// An override wins over the declared default. An argument with neither
    /// is required and fails here. When the argument enumerates choices, the
    /// effective value must be one of them.
    pub fn declare_argument(&mut self, arg: &DeclareLaunchArgument) -> Result<String> {
        let value = match self.overrides.get(&arg.name) {
            Some(value) => value.clone(),
            None => match &arg.default {
                Some(default) => default.resolve(self)?,
                None => return Err(GenerationError::MissingArgument(arg.name.clone())),
            },
        };

        if let Some(choices) = &arg.choices {
            if !choices.contains(&value) {
                return Err(GenerationError::InvalidChoice {
                    name: arg.name.clone(),
                    value,
                    choices: choices.clone(),
                });
            }
        }

        self.configurations.insert(arg.name.clone(), value.clone());
        Ok(value)
    }
}
