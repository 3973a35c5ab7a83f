//! Condition evaluation for conditionally included actions

use crate::context::LaunchContext;
use crate::error::ResolveError;
use crate::value::Value;

/// Condition gating whether an action takes effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Take effect when the value evaluates to truthy.
    If(Value),
    /// Take effect when the value evaluates to falsy.
    Unless(Value),
}

impl Condition {
    /// Evaluate the condition against a launch context.
    pub fn evaluate(&self, context: &LaunchContext) -> Result<bool, ResolveError> {
        match self {
            Condition::If(value) => Ok(is_truthy(&value.resolve(context)?)),
            Condition::Unless(value) => Ok(!is_truthy(&value.resolve(context)?)),
        }
    }
}

/// Determine if a string value is "truthy"
pub fn is_truthy(value: &str) -> bool {
    let normalized = value.trim().to_lowercase();
    matches!(
        normalized.as_str(),
        "true" | "1" | "yes" | "y" | "on" | "enabled"
    )
}
