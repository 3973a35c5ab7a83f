//! Node descriptor

use crate::condition::Condition;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output routing mode for a spawned process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    /// Stream stdout/stderr to the console
    Screen,
    /// Route output to the orchestrator's log directory
    #[default]
    Log,
    /// Both console and log file
    Both,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Output::Screen => "screen",
            Output::Log => "log",
            Output::Both => "both",
        };
        f.write_str(s)
    }
}

impl FromStr for Output {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "screen" => Ok(Output::Screen),
            "log" => Ok(Output::Log),
            "both" => Ok(Output::Both),
            other => Err(format!("unknown output mode: {}", other)),
        }
    }
}

/// An inline parameter declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
    pub name: String,
    pub value: Value,
}

/// A topic remapping declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapDecl {
    pub from: Value,
    pub to: Value,
}

/// Descriptor for an executable the orchestrator is to spawn.
///
/// The descriptor is inert data; ownership passes to the orchestrator, which
/// handles process spawn and teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDescriptor {
    pub package: Value,
    pub executable: Value,
    pub name: Option<Value>,
    pub namespace: Option<Value>,
    pub parameters: Vec<ParamDecl>,
    pub remappings: Vec<RemapDecl>,
    pub environment: Vec<(String, String)>,
    pub output: Output,
    pub condition: Option<Condition>,
}

impl NodeDescriptor {
    pub fn new(package: impl Into<Value>, executable: impl Into<Value>) -> Self {
        Self {
            package: package.into(),
            executable: executable.into(),
            name: None,
            namespace: None,
            parameters: Vec::new(),
            remappings: Vec::new(),
            environment: Vec::new(),
            output: Output::default(),
            condition: None,
        }
    }

    /// Override the node name (defaults to the executable name).
    pub fn name(mut self, name: impl Into<Value>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn namespace(mut self, namespace: impl Into<Value>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.push(ParamDecl {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn remap(mut self, from: impl Into<Value>, to: impl Into<Value>) -> Self {
        self.remappings.push(RemapDecl {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    pub fn env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.environment.push((name.into(), value.into()));
        self
    }

    /// Gate this node on a condition evaluated at launch time.
    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }
}
