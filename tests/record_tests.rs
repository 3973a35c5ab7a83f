use radar_fusion_launch::{
    actions::{DeclareLaunchArgument, NodeDescriptor, Output},
    condition::Condition,
    description::{Action, LaunchDescription},
    error::GenerationError,
    generate_launch_description,
    record::{evaluate, LaunchRecord},
    value::Value,
};
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn overrides(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_evaluate_with_defaults() {
    let record = evaluate(&generate_launch_description(), HashMap::new()).unwrap();

    assert_eq!(record.arguments.len(), 1);
    assert_eq!(
        record.arguments[0].name,
        "use_radar_fusion_to_detected_object"
    );
    assert_eq!(record.arguments[0].value, "false");

    assert_eq!(record.node.len(), 1);
    assert_eq!(record.node[0].package, "radar_fusion_to_detected_object");
    assert_eq!(
        record.node[0].executable,
        "radar_fusion_to_detected_object_node"
    );
    assert_eq!(record.node[0].output, Output::Screen);
    assert_eq!(record.node[0].namespace, "/");
}

#[test]
fn test_evaluate_with_override() {
    let record = evaluate(
        &generate_launch_description(),
        overrides(&[("use_radar_fusion_to_detected_object", "true")]),
    )
    .unwrap();

    assert_eq!(record.arguments[0].value, "true");
    // The node itself is unconditional in this description
    assert_eq!(record.node.len(), 1);
}

#[test]
fn test_unknown_override_rejected() {
    let result = evaluate(
        &generate_launch_description(),
        overrides(&[("no_such_arg", "1")]),
    );
    assert!(
        matches!(result, Err(GenerationError::UnknownOverride(name)) if name == "no_such_arg")
    );
}

#[test]
fn test_node_command_layout() {
    let record = evaluate(&generate_launch_description(), HashMap::new()).unwrap();
    let cmd = &record.node[0].cmd;

    assert!(cmd[0]
        .ends_with("/lib/radar_fusion_to_detected_object/radar_fusion_to_detected_object_node"));
    assert_eq!(cmd[1], "--ros-args");
    assert!(cmd.contains(&"__node:=radar_fusion_to_detected_object_node".to_string()));
    assert!(cmd.contains(&"__ns:=/".to_string()));
}

#[test]
fn test_condition_gates_node() {
    let mut description = LaunchDescription::new();
    description.push(Action::DeclareArgument(
        DeclareLaunchArgument::new("use_fusion").default_value(false),
    ));
    description.push(Action::SpawnNode(
        NodeDescriptor::new(
            "radar_fusion_to_detected_object",
            "radar_fusion_to_detected_object_node",
        )
        .condition(Condition::If(Value::configuration("use_fusion"))),
    ));

    let record = evaluate(&description, HashMap::new()).unwrap();
    assert!(record.node.is_empty());
    assert_eq!(record.arguments.len(), 1);

    let record = evaluate(&description, overrides(&[("use_fusion", "true")])).unwrap();
    assert_eq!(record.node.len(), 1);
}

#[test]
fn test_required_argument_fails_without_override() {
    let mut description = LaunchDescription::new();
    description.push(Action::DeclareArgument(DeclareLaunchArgument::new(
        "sensor_model",
    )));

    let result = evaluate(&description, HashMap::new());
    assert!(
        matches!(result, Err(GenerationError::MissingArgument(name)) if name == "sensor_model")
    );

    let record = evaluate(&description, overrides(&[("sensor_model", "ars408")])).unwrap();
    assert_eq!(record.arguments[0].value, "ars408");
}

#[test]
fn test_choices_validated_at_evaluation() {
    let mut description = LaunchDescription::new();
    description.push(Action::DeclareArgument(
        DeclareLaunchArgument::new("mode")
            .default_value("radar")
            .choices(["radar", "lidar"]),
    ));

    assert!(evaluate(&description, HashMap::new()).is_ok());

    let result = evaluate(&description, overrides(&[("mode", "camera")]));
    assert!(matches!(
        result,
        Err(GenerationError::InvalidChoice { value, .. }) if value == "camera"
    ));
}

#[test]
fn test_params_and_remaps_resolved_in_order() {
    let mut description = LaunchDescription::new();
    description.push(Action::DeclareArgument(
        DeclareLaunchArgument::new("update_rate").default_value("10.0"),
    ));
    description.push(Action::SpawnNode(
        NodeDescriptor::new("demo", "node")
            .parameter("update_rate", Value::configuration("update_rate"))
            .remap("~/input/objects", "/perception/objects"),
    ));

    let record = evaluate(&description, HashMap::new()).unwrap();
    assert_eq!(
        record.node[0].params,
        vec![("update_rate".to_string(), "10.0".to_string())]
    );
    assert_eq!(
        record.node[0].remaps,
        vec![(
            "~/input/objects".to_string(),
            "/perception/objects".to_string()
        )]
    );
    assert!(record.node[0].cmd.contains(&"update_rate:=10.0".to_string()));
    assert!(record.node[0]
        .cmd
        .contains(&"~/input/objects:=/perception/objects".to_string()));
}

#[test]
fn test_record_json_file_round_trip() {
    let record = evaluate(&generate_launch_description(), HashMap::new()).unwrap();
    let json = record.to_json().unwrap();
    assert!(json.contains("\"output\": \"screen\""));

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();

    let content = std::fs::read_to_string(file.path()).unwrap();
    let parsed: LaunchRecord = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, record);
}
