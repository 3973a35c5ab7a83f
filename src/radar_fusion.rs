//! Launch descriptor for the radar_fusion_to_detected_object node

use crate::actions::{DeclareLaunchArgument, NodeDescriptor, Output};
use crate::description::{Action, LaunchDescription};

/// Launch argument gating radar fusion in outer launch layers.
pub const USE_RADAR_FUSION_ARG: &str = "use_radar_fusion_to_detected_object";

/// ROS package containing the fusion node.
pub const PACKAGE: &str = "radar_fusion_to_detected_object";

/// Executable name of the fusion node.
pub const EXECUTABLE: &str = "radar_fusion_to_detected_object_node";

/// Build the launch description: the gating argument followed by the node,
/// with process output streamed to the console.
pub fn generate_launch_description() -> LaunchDescription {
    let mut launch_arguments: Vec<Action> = Vec::new();
    launch_arguments.push(Action::DeclareArgument(
        DeclareLaunchArgument::new(USE_RADAR_FUSION_ARG).default_value(false),
    ));

    let mut launch_nodes: Vec<Action> = Vec::new();
    launch_nodes.push(Action::SpawnNode(
        NodeDescriptor::new(PACKAGE, EXECUTABLE).output(Output::Screen),
    ));

    launch_arguments.extend(launch_nodes);
    LaunchDescription::with_actions(launch_arguments)
}
