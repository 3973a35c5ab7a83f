//! Launch description — the ordered action collection handed to the orchestrator

use crate::actions::{DeclareLaunchArgument, NodeDescriptor};

/// A single launch action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Declares a launch argument with an optional default.
    DeclareArgument(DeclareLaunchArgument),
    /// Describes a node for the orchestrator to spawn.
    SpawnNode(NodeDescriptor),
}

impl From<DeclareLaunchArgument> for Action {
    fn from(arg: DeclareLaunchArgument) -> Self {
        Action::DeclareArgument(arg)
    }
}

impl From<NodeDescriptor> for Action {
    fn from(node: NodeDescriptor) -> Self {
        Action::SpawnNode(node)
    }
}

/// Ordered collection of launch actions.
///
/// Order is preserved as given; no uniqueness constraints are enforced at
/// this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchDescription {
    actions: Vec<Action>,
}

impl LaunchDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actions(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// Append an action, preserving insertion order.
    pub fn push(&mut self, action: impl Into<Action>) {
        self.actions.push(action.into());
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// All declared arguments, in declaration order.
    pub fn arguments(&self) -> Vec<&DeclareLaunchArgument> {
        self.actions
            .iter()
            .filter_map(|action| match action {
                Action::DeclareArgument(arg) => Some(arg),
                _ => None,
            })
            .collect()
    }

    /// All node descriptors, in declaration order.
    pub fn nodes(&self) -> Vec<&NodeDescriptor> {
        self.actions
            .iter()
            .filter_map(|action| match action {
                Action::SpawnNode(node) => Some(node),
                _ => None,
            })
            .collect()
    }
}

impl FromIterator<Action> for LaunchDescription {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}
