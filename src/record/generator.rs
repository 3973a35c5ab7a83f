//! Record generation from a launch description

use crate::actions::NodeDescriptor;
use crate::context::LaunchContext;
use crate::description::{Action, LaunchDescription};
use crate::error::{GenerationError, Result};
use crate::record::types::{ArgumentRecord, LaunchRecord, NodeRecord};
use std::collections::HashMap;

/// Evaluate a launch description into a spawnable record manifest.
///
/// Actions apply in declaration order: each declared argument populates the
/// context (override wins over default), then each node descriptor whose
/// condition holds is resolved into a `NodeRecord`. Overrides naming no
/// declared argument are rejected.
pub fn evaluate(
    description: &LaunchDescription,
    overrides: HashMap<String, String>,
) -> Result<LaunchRecord> {
    let declared: Vec<&str> = description
        .arguments()
        .iter()
        .map(|arg| arg.name.as_str())
        .collect();
    for name in overrides.keys() {
        if !declared.contains(&name.as_str()) {
            return Err(GenerationError::UnknownOverride(name.clone()));
        }
    }

    let mut context = LaunchContext::with_overrides(overrides);
    let mut record = LaunchRecord::new();

    for action in description.actions() {
        match action {
            Action::DeclareArgument(arg) => {
                let value = context.declare_argument(arg)?;
                log::debug!("Argument {} = {}", arg.name, value);
                record.arguments.push(ArgumentRecord {
                    name: arg.name.clone(),
                    value,
                });
            }
            Action::SpawnNode(node) => {
                if let Some(condition) = &node.condition {
                    if !condition.evaluate(&context)? {
                        log::debug!("Skipping node due to condition");
                        continue;
                    }
                }
                record.node.push(generate_node_record(node, &context)?);
            }
        }
    }

    Ok(record)
}

/// Resolve a node descriptor into a record with its spawn command line.
pub fn generate_node_record(node: &NodeDescriptor, context: &LaunchContext) -> Result<NodeRecord> {
    let cmd = generate_node_command(node, context)?;

    let package = node.package.resolve(context)?;
    let executable = node.executable.resolve(context)?;

    let name = match &node.name {
        Some(name) => name.resolve(context)?,
        None => executable.clone(),
    };

    let namespace = match &node.namespace {
        Some(namespace) => namespace.resolve(context)?,
        None => "/".to_string(),
    };

    let params: Vec<(String, String)> = node
        .parameters
        .iter()
        .map(|p| Ok((p.name.clone(), p.value.resolve(context)?)))
        .collect::<Result<Vec<_>>>()?;

    let remaps: Vec<(String, String)> = node
        .remappings
        .iter()
        .map(|r| Ok((r.from.resolve(context)?, r.to.resolve(context)?)))
        .collect::<Result<Vec<_>>>()?;

    let env = if node.environment.is_empty() {
        None
    } else {
        Some(node.environment.clone())
    };

    Ok(NodeRecord {
        package,
        executable,
        name,
        namespace,
        output: node.output,
        params,
        remaps,
        env,
        cmd,
    })
}

/// Build the command line the orchestrator will spawn.
pub fn generate_node_command(
    node: &NodeDescriptor,
    context: &LaunchContext,
) -> Result<Vec<String>> {
    let package = node.package.resolve(context)?;
    let executable = node.executable.resolve(context)?;

    let mut cmd = Vec::new();

    // 1. Executable path
    cmd.push(executable_path(&package, &executable));

    // 2. ROS args delimiter
    cmd.push("--ros-args".to_string());

    // 3. Node name
    let node_name = match &node.name {
        Some(name) => name.resolve(context)?,
        None => executable.clone(),
    };
    cmd.push("-r".to_string());
    cmd.push(format!("__node:={}", node_name));

    // 4. Namespace
    let namespace = match &node.namespace {
        Some(namespace) => namespace.resolve(context)?,
        None => "/".to_string(),
    };
    cmd.push("-r".to_string());
    cmd.push(format!("__ns:={}", namespace));

    // 5. Remappings
    for remap in &node.remappings {
        let from = remap.from.resolve(context)?;
        let to = remap.to.resolve(context)?;
        cmd.push("-r".to_string());
        cmd.push(format!("{}:={}", from, to));
    }

    // 6. Parameters
    for param in &node.parameters {
        let value = param.value.resolve(context)?;
        cmd.push("-p".to_string());
        cmd.push(format!("{}:={}", param.name, value));
    }

    Ok(cmd)
}

fn executable_path(package: &str, executable: &str) -> String {
    let distro = std::env::var("ROS_DISTRO").unwrap_or_else(|_| "humble".to_string());
    format!("/opt/ros/{}/lib/{}/{}", distro, package, executable)
}
