//! C# templates for generated node scripts
//!
//! Placeholders are `{name}` tokens. Rendering is a single left-to-right pass,
//! so substituted text (which may carry arbitrary scene names) is never
//! rescanned for placeholders, and braces that do not form a known
//! placeholder are copied through as C# syntax.

use std::collections::HashMap;

/// Width of one nesting level in generated code
pub const INDENT: &str = "    ";

/// File wrapper around the node class tree
pub const SCRIPT_TEMPLATE: &str = r#"using {engine_namespace};
using {base_namespace};

namespace {namespace}
{
{body}
}
"#;

/// Behaviour exposing the root node wrapper from any attachment point
pub const COMPONENT_SCRIPT_TEMPLATE: &str = r#"using {engine_namespace};
using {base_namespace};

namespace {namespace}
{
    public class {file_name}Component : MonoBehaviour
    {
        private {file_name} _{class_name};
        public {file_name} @{class_name}
        {
            get
            {
                return _{class_name} ?? (_{class_name} = new {file_name}(transform));
            }
        }
    }
}
"#;

/// Node without children
pub const EMPTY_CHILDREN_NODE_TEMPLATE: &str = r#"public class {class_name}Node : EmptyChildrenNodeBase
{
    public {class_name}Node(GameObject gameObject) : base(gameObject.transform)
    {
    }

    public {class_name}Node(Transform transform) : base(transform)
    {
    }

    public {class_name}Node(MonoBehaviour mono) : base(mono.transform)
    {
    }{properties}
}"#;

/// Node with children; the children holder follows the class as a sibling
pub const NODE_TEMPLATE: &str = r#"public class {class_name}Node : NodeBase<{class_name}NodeChildren>
{
    public {class_name}Node(GameObject gameObject) : base(gameObject.transform)
    {
    }

    public {class_name}Node(Transform transform) : base(transform)
    {
    }

    public {class_name}Node(MonoBehaviour mono) : base(mono.transform)
    {
    }

{child_classes}{properties}
}

{children_holder}"#;

/// Cached component accessor
pub const NODE_PROPERTY_TEMPLATE: &str = r#"private {component_type} _{property_name};
public {component_type} {property_name}
{
    get
    {
        return _{property_name} ?? (_{property_name} = GetComponent<{component_type}>());
    }
}"#;

/// Children holder class
pub const NODE_CHILDREN_TEMPLATE: &str = r#"public class {class_name}NodeChildren : NodeChildrenBase
{
{properties}
}"#;

/// Cached child accessor resolved by name against the live hierarchy
pub const NODE_CHILD_PROPERTY_TEMPLATE: &str = r#"private {parent_class_name}Node.{child_class_name}Node _{child_name};
public {parent_class_name}Node.{child_class_name}Node @{child_name}
{
    get
    {
        return _{child_name} ?? (_{child_name} = new {parent_class_name}Node.{child_class_name}Node(transform.Find("{child_path}")));
    }
}"#;

/// Substitute `{key}` placeholders in one pass; unknown keys are left as-is
pub fn render_template(template: &str, variables: &HashMap<&str, String>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let value = after
            .find('}')
            .and_then(|end| variables.get(&after[..end]).map(|value| (end, value)));

        match value {
            Some((end, value)) => {
                rendered.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                rendered.push('{');
                rest = after;
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

/// Indent every non-empty line by one level. Blank lines stay empty.
pub fn add_indent(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.is_empty() || line == "\r" {
                line.to_string()
            } else {
                format!("{}{}", INDENT, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
