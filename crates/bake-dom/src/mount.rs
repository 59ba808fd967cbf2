//! Expanding node descriptors into element trees.
//!
//! Component kinds are rendered with the node's props and ref until an
//! intrinsic tag is reached. The intrinsic element takes the ref, and its
//! `children` prop is mounted recursively.

use bake_core::{ElementKind, Node, PropValue, RenderError, CHILDREN};

use crate::element::{Child, Element};
use crate::names::is_valid_tag_name;

/// Maximum nesting depth for component expansion (prevent infinite recursion).
pub const MAX_EXPANSION_DEPTH: u32 = 100;

/// Mount a node into an element tree.
pub fn mount(node: &Node) -> Result<Element, RenderError> {
    let mut mounter = Mounter { depth: 0 };
    mounter.mount_node(node.clone())
}

struct Mounter {
    /// Current component expansion depth.
    depth: u32,
}

impl Mounter {
    fn mount_node(&mut self, node: Node) -> Result<Element, RenderError> {
        let Node {
            kind,
            mut props,
            node_ref,
        } = node;

        match kind {
            ElementKind::Intrinsic(tag) => {
                if !is_valid_tag_name(&tag) {
                    return Err(RenderError::InvalidTagName { tag });
                }
                if let Some(node_ref) = &node_ref {
                    node_ref.attach(tag.as_str());
                }
                let mut children = Vec::new();
                if let Some(content) = props.remove(CHILDREN) {
                    self.mount_children(content, &mut children)?;
                }
                // Nullish props never become attributes.
                props.retain(|_, value| !value.is_nullish());
                Ok(Element {
                    tag,
                    attributes: props,
                    children,
                })
            }
            ElementKind::Component(component) => {
                if self.depth >= MAX_EXPANSION_DEPTH {
                    return Err(RenderError::MaxDepthExceeded {
                        depth: MAX_EXPANSION_DEPTH,
                    });
                }
                tracing::debug!(
                    component = component.display_name(),
                    depth = self.depth,
                    "mounting component"
                );

                let rendered = component.render(props, node_ref);

                self.depth += 1;
                let element = self.mount_node(rendered);
                self.depth -= 1;
                element
            }
        }
    }

    fn mount_children(
        &mut self,
        content: PropValue,
        out: &mut Vec<Child>,
    ) -> Result<(), RenderError> {
        match content {
            PropValue::String(text) => out.push(Child::Text(text)),
            PropValue::Number(n) => out.push(Child::Text(n.to_string())),
            PropValue::Node(node) => out.push(Child::Element(self.mount_node(*node)?)),
            PropValue::List(items) => {
                for item in items {
                    self.mount_children(item, out)?;
                }
            }
            // Booleans and nullish children render nothing.
            _ => {}
        }
        Ok(())
    }
}
