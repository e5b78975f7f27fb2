//! Runtime support library the generated scripts derive from
//!
//! Generated node classes assume `EmptyChildrenNodeBase`, `NodeBase<T>` and
//! `NodeChildrenBase` exist in the base namespace. A node binds one transform
//! and exposes its components; its children holder is a separate type created
//! through `NodeChildrenBase.Create<T>` with the parent's transform.

use crate::config::GeneratorConfig;
use crate::templates::render_template;
use std::collections::HashMap;

const NODE_BASE_TEMPLATE: &str = r#"using {engine_namespace};

namespace {base_namespace}
{
    public class EmptyChildrenNodeBase
    {
        protected Transform transform;
        public EmptyChildrenNodeBase(Transform transform)
        {
            this.transform = transform;
        }

        public Transform Transform { get { return transform; } }
        public GameObject GameObject { get { return transform.gameObject; } }

        public U AddComponent<U>()
            where U : Component
        {
            return this.GameObject.AddComponent<U>();
        }

        public U GetComponent<U>()
            where U : Component
        {
            return this.GameObject.GetComponent<U>();
        }

        public U[] GetComponents<U>()
            where U : Component
        {
            return this.GameObject.GetComponents<U>();
        }
    }

    public class NodeBase<T> : EmptyChildrenNodeBase
        where T : NodeChildrenBase, new()
    {
        public NodeBase(Transform transform) : base(transform)
        {
        }

        private T _Children;
        public T Children
        {
            get
            {
                return _Children ?? (_Children = NodeChildrenBase.Create<T>(transform));
            }
        }

        public T c { get { return Children; } }
    }
}
"#;

const NODE_CHILDREN_BASE_TEMPLATE: &str = r#"using {engine_namespace};

namespace {base_namespace}
{
    public class NodeChildrenBase
    {
        protected Transform transform;
        public static T Create<T>(Transform transform)
            where T : NodeChildrenBase, new()
        {
            return new T() { transform = transform };
        }
    }
}
"#;

/// One file of the support library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportScript {
    pub file_name: &'static str,
    pub content: String,
}

/// Render the support library for the configured namespaces
pub fn support_scripts(config: &GeneratorConfig) -> Vec<SupportScript> {
    let mut vars = HashMap::new();
    vars.insert("engine_namespace", config.engine_namespace.clone());
    vars.insert("base_namespace", config.base_namespace.clone());

    vec![
        SupportScript {
            file_name: "NodeBase.cs",
            content: render_template(NODE_BASE_TEMPLATE, &vars),
        },
        SupportScript {
            file_name: "NodeChildrenBase.cs",
            content: render_template(NODE_CHILDREN_BASE_TEMPLATE, &vars),
        },
    ]
}
