//! Unit tests for NodeInfo building and configuration

use crate::config::*;
use crate::generator::HierarchyNodeGenerator;
use crate::naming::fix_name;
use crate::node_info::NodeInfo;
use hierarchy_node_core::SceneObject;

fn build(root: &SceneObject) -> NodeInfo {
    NodeInfo::build(root, &GeneratorConfig::default())
}

#[test]
fn test_components_are_normalized_filtered_and_sorted() {
    let root = SceneObject::new("Crate")
        .with_component("UnityEngine.Transform")
        .with_component("UnityEngine.Rigidbody")
        .with_component("Custom.Namespace.Foo");

    let info = build(&root);
    assert_eq!(info.components, vec!["Custom.Namespace.Foo", "Rigidbody"]);
}

#[test]
fn test_components_are_deduplicated_and_missing_scripts_skipped() {
    let root = SceneObject::new("Enemy")
        .with_component("UnityEngine.Transform")
        .with_component("UnityEngine.BoxCollider")
        .with_missing_component()
        .with_component("UnityEngine.BoxCollider")
        .with_component("UnityEngine.AI.NavMeshAgent")
        .with_component("Game.EnemyBrain");

    let info = build(&root);
    assert_eq!(
        info.components,
        vec!["BoxCollider", "Game.EnemyBrain", "UnityEngine.AI.NavMeshAgent"]
    );
}

#[test]
fn test_rect_transform_is_not_the_hierarchy_component() {
    let root = SceneObject::new("Panel").with_component("UnityEngine.RectTransform");
    assert_eq!(build(&root).components, vec!["RectTransform"]);
}

#[test]
fn test_child_named_like_parent_gets_child_suffix() {
    let root = SceneObject::new("Arm").with_child(SceneObject::new("arm"));

    let info = build(&root);
    let child = &info.child_nodes[0];
    assert_eq!(child.name, "Arm");
    assert_eq!(child.class_name, "ArmChild");
    assert_eq!(child.original_name, "arm");
}

#[test]
fn test_collision_check_is_single_level() {
    let root = SceneObject::new("Arm")
        .with_child(SceneObject::new("Arm").with_child(SceneObject::new("Arm")));

    let info = build(&root);
    let child = &info.child_nodes[0];
    let grandchild = &child.child_nodes[0];

    assert_eq!(info.class_name, "Arm");
    assert_eq!(child.class_name, "ArmChild");
    // compared against "ArmChild" only, so the grandparent name is reused
    assert_eq!(grandchild.class_name, "Arm");
}

#[test]
fn test_root_is_never_suffixed() {
    let info = build(&SceneObject::new("Child"));
    assert_eq!(info.class_name, "Child");
}

#[test]
fn test_siblings_sanitizing_alike_collapse_first_wins() {
    let root = SceneObject::new("Shelf")
        .with_child(SceneObject::new("Box 1").with_component("Game.First"))
        .with_child(SceneObject::new("Box_1"))
        .with_child(SceneObject::new("box-1").with_component("Game.Third"))
        .with_child(SceneObject::new("Lid"));

    let info = build(&root);
    let names: Vec<&str> = info.child_nodes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Box1", "Box_1", "Lid"]);

    let box1 = &info.child_nodes[0];
    assert_eq!(box1.original_name, "Box 1");
    assert_eq!(box1.components, vec!["Game.First"]);
}

#[test]
fn test_identical_sibling_names_collapse() {
    let root = SceneObject::new("Row")
        .with_child(SceneObject::new("Seat"))
        .with_child(SceneObject::new("Seat").with_child(SceneObject::new("Cushion")));

    let info = build(&root);
    assert_eq!(info.child_nodes.len(), 1);
    assert!(info.child_nodes[0].is_leaf());
    assert_eq!(info.node_count(), 2);
}

#[test]
fn test_node_info_equality_is_by_name() {
    let a = build(&SceneObject::new("Left Arm").with_component("Game.A"));
    let b = build(&SceneObject::new("left-arm"));
    let c = build(&SceneObject::new("Right Arm"));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_node_info_serializes_for_inspection() {
    let info = build(&SceneObject::new("Lamp").with_component("UnityEngine.Light"));
    let json = serde_json::to_value(&info).unwrap();

    assert_eq!(json["name"], "Lamp");
    assert_eq!(json["class_name"], "Lamp");
    assert_eq!(json["components"][0], "Light");
    assert!(json["child_nodes"].as_array().unwrap().is_empty());
}

#[test]
fn test_fix_name_output_is_csharp_identifier() {
    // identifier-start then identifier-part classes from the C# grammar
    let identifier = regex::Regex::new(
        r"^[\p{L}\p{Nl}_][\p{L}\p{Nl}\p{Mn}\p{Mc}\p{Nd}\p{Pc}\p{Cf}]*$",
    )
    .unwrap();

    let inputs = [
        "", "3d Model!", "left_Arm 01", "0", "a.b.c", "Mesh (12)", "already_Canonical_Name",
        "tab\tseparated", "日本語 名前", "9lives_left", "Level²", "Stage ①", "Cafe\u{301} Bar",
        "a‿b", "½ Pipe", "ßtraße", "__x__",
    ];

    for input in inputs {
        let fixed = fix_name(input);
        assert!(
            identifier.is_match(&fixed),
            "{:?} -> {:?} is not a C# identifier",
            input,
            fixed
        );
    }

    // no word characters at all
    assert_eq!(fix_name("!!! ² ①"), "");
}

#[test]
fn test_fix_name_idempotent_on_canonical_names() {
    for canonical in ["Left_Arm01", "Player", "_3dModel", "A_B_C", "Hand_R"] {
        assert_eq!(fix_name(canonical), canonical);
        assert_eq!(fix_name(&fix_name(canonical)), canonical);
    }
}

#[test]
fn test_generate_is_deterministic() {
    let root = SceneObject::new("Robot")
        .with_component("UnityEngine.Transform")
        .with_component("UnityEngine.Animator")
        .with_child(SceneObject::new("left_Arm 01").with_component("UnityEngine.Transform"))
        .with_child(SceneObject::new("Head").with_child(SceneObject::new("Eye \"L\"")));

    let generator = HierarchyNodeGenerator::default();
    let first = generator.generate(&root);
    let second = generator.generate(&root.clone());

    assert_eq!(first.file_name, "RobotNode");
    assert_eq!(first.script, second.script);
    assert_eq!(first.component_script, second.component_script);
    assert_eq!(first.script_file_name(), "RobotNode.cs");
    assert_eq!(first.component_script_file_name(), "RobotNodeComponent.cs");
}

#[test]
fn test_file_name_uses_sanitized_root_name() {
    let generated = HierarchyNodeGenerator::default().generate(&SceneObject::new("3d Model!"));
    assert_eq!(generated.file_name, "_3dModelNode");
    assert_eq!(generated.root.class_name, "_3dModel");
}

#[test]
fn test_default_config_is_valid() {
    let config = GeneratorConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.namespace, "HierarchyNode.Generated");
    assert_eq!(config.hierarchy_component, "Transform");
}

#[test]
fn test_config_from_partial_toml() {
    let config = GeneratorConfig::from_str(
        r#"
namespace = "MyGame.Nodes"
output_directory = "Assets/Generated"
"#,
    )
    .unwrap();

    assert_eq!(config.namespace, "MyGame.Nodes");
    assert_eq!(config.base_namespace, "HierarchyNode.Base");
    assert_eq!(config.output_directory, std::path::PathBuf::from("Assets/Generated"));
}

#[test]
fn test_config_rejects_invalid_namespace() {
    let result = GeneratorConfig::from_str(r#"namespace = "My Game.Nodes""#);
    assert!(matches!(result, Err(ConfigError::InvalidValue(_))));

    let result = GeneratorConfig::from_str(r#"base_namespace = "HierarchyNode..Base""#);
    assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
}

#[test]
fn test_config_rejects_bad_component_and_directory() {
    let mut config = GeneratorConfig::default();
    config.hierarchy_component = "1Transform".to_string();
    assert!(config.validate().is_err());

    let mut config = GeneratorConfig::default();
    config.output_directory = std::path::PathBuf::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_parse_error() {
    let result = GeneratorConfig::from_str("namespace = ");
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn test_identifier_helpers() {
    assert!(is_valid_csharp_identifier("_private"));
    assert!(is_valid_csharp_identifier("Node2"));
    assert!(!is_valid_csharp_identifier("2Node"));
    assert!(!is_valid_csharp_identifier(""));
    assert!(!is_valid_csharp_identifier("Transform²"));
    assert!(is_valid_csharp_identifier("Ⅻ_Legion"));
    assert!(is_valid_csharp_namespace("UnityEngine"));
    assert!(is_valid_csharp_namespace("A.B.C"));
    assert!(!is_valid_csharp_namespace("A..B"));
}
