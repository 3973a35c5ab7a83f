//! Launch argument declaration

use crate::value::Value;

/// A declared launch argument, overridable from the invocation environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclareLaunchArgument {
    pub name: String,
    pub default: Option<Value>,
    pub description: Option<String>,
    pub choices: Option<Vec<String>>,
}

impl DeclareLaunchArgument {
    /// Declare an argument with no default. Without a default the argument
    /// is required and evaluation fails unless an override supplies a value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            description: None,
            choices: None,
        }
    }

    /// Set the default value used when no override is supplied.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Restrict the argument to an enumerated set of values.
    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }
}
