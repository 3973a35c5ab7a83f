//! record.json data structures

use crate::actions::Output;
use serde::{Deserialize, Serialize};

/// Root structure for record.json
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub arguments: Vec<ArgumentRecord>,
    pub node: Vec<NodeRecord>,
}

impl LaunchRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A declared argument with its effective value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentRecord {
    pub name: String,
    pub value: String,
}

/// A node resolved into spawnable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub package: String,
    pub executable: String,
    pub name: String,
    pub namespace: String,
    pub output: Output,
    pub params: Vec<(String, String)>,
    pub remaps: Vec<(String, String)>,
    pub env: Option<Vec<(String, String)>>,
    pub cmd: Vec<String>,
}
